use sheetchart_api::ChartConfig;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> ChartConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ChartConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_from_lookup_reads_all_four_variables() {
    let config = config_from(&[
        ("GOOGLE_SERVICE_ACCOUNT_EMAIL", "svc@example.iam.gserviceaccount.com"),
        ("GOOGLE_PRIVATE_KEY", "key"),
        ("GOOGLE_SHEET_ID", "doc-1"),
        ("GOOGLE_CSID", "99"),
    ]);

    assert_eq!(config.sheet_id().unwrap(), "doc-1");
    assert_eq!(config.worksheet_id().unwrap(), 99);
    let sa = config.service_account().unwrap();
    assert_eq!(sa.client_email, "svc@example.iam.gserviceaccount.com");
    assert_eq!(sa.private_key, "key");
}

#[test]
fn test_private_key_escaped_newlines() {
    let config = config_from(&[("GOOGLE_PRIVATE_KEY", r"line1\nline2\n")]);
    assert_eq!(config.private_key().as_deref(), Some("line1\nline2\n"));
}

#[test]
fn test_empty_sheet_id_counts_as_missing() {
    let config = config_from(&[("GOOGLE_SHEET_ID", "")]);
    assert_eq!(config.sheet_id().unwrap_err().to_string(), "GOOGLE_SHEET_ID is not defined");
}

#[test]
fn test_worksheet_id_fallback_and_rejection() {
    assert_eq!(config_from(&[]).worksheet_id().unwrap(), 1234613033);
    assert_eq!(config_from(&[("GOOGLE_CSID", "")]).worksheet_id().unwrap(), 1234613033);
    assert_eq!(config_from(&[("GOOGLE_CSID", "0")]).worksheet_id().unwrap(), 1234613033);
    assert_eq!(config_from(&[("GOOGLE_CSID", " 17 ")]).worksheet_id().unwrap(), 17);

    let err = config_from(&[("GOOGLE_CSID", "-5")]).worksheet_id().unwrap_err();
    assert_eq!(err.to_string(), "GOOGLE_CSID is not defined");
}

#[test]
fn test_worksheet_id_accepts_numeric_spellings_of_whole_numbers() {
    assert_eq!(config_from(&[("GOOGLE_CSID", "17.0")]).worksheet_id().unwrap(), 17);
    assert_eq!(config_from(&[("GOOGLE_CSID", "1e3")]).worksheet_id().unwrap(), 1000);
    assert_eq!(config_from(&[("GOOGLE_CSID", "+17")]).worksheet_id().unwrap(), 17);
    assert_eq!(config_from(&[("GOOGLE_CSID", "0.0")]).worksheet_id().unwrap(), 1234613033);

    for rejected in ["1.5", "inf", "NaN", "-1e3", "chart"] {
        let err = config_from(&[("GOOGLE_CSID", rejected)]).worksheet_id().unwrap_err();
        assert_eq!(err.to_string(), "GOOGLE_CSID is not defined", "value {rejected:?}");
    }
}

#[test]
fn test_missing_private_key() {
    let config = config_from(&[("GOOGLE_SERVICE_ACCOUNT_EMAIL", "svc@example.iam.gserviceaccount.com")]);
    assert_eq!(
        config.service_account().unwrap_err().to_string(),
        "GOOGLE_PRIVATE_KEY is not defined"
    );
}
