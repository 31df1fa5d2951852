use mockall::predicate::{always, eq};
use sheetchart_core::contracts::{SheetRow, SpreadsheetInfo, WorksheetInfo};
use sheetchart_core::{MockSpreadsheetClient, SpreadsheetClient};

#[tokio::test]
async fn test_mock_client_through_trait_object() {
    let mut mock = MockSpreadsheetClient::new();
    mock.expect_load_info().times(1).returning(|id| {
        Ok(SpreadsheetInfo {
            spreadsheet_id: id.to_string(),
            title: "Doc".to_string(),
            sheets: vec![WorksheetInfo { sheet_id: 7, title: "Data".to_string(), ..Default::default() }],
        })
    });
    mock.expect_sheet_by_id()
        .with(always(), eq(7))
        .times(1)
        .returning(|info, id| info.find_sheet(id).cloned().ok_or_else(|| "missing".into()));
    mock.expect_get_rows().times(1).returning(|_, sheet| {
        let row: SheetRow = vec![("sheet", sheet.title.clone())].into_iter().collect();
        Ok(vec![row])
    });

    let client: Box<dyn SpreadsheetClient> = Box::new(mock);
    let info = client.load_info("doc-1").await.unwrap();
    assert_eq!(info.spreadsheet_id, "doc-1");

    let sheet = client.sheet_by_id(&info, 7).unwrap();
    let rows = client.get_rows("doc-1", &sheet).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("sheet").and_then(|v| v.as_str()), Some("Data"));
}
