use std::collections::HashSet;

use serde::{Serialize, Deserialize};
use serde_json::Value;
use sheetchart_core::contracts::{SheetRow, SpreadsheetInfo, WorksheetInfo};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleAccessToken {
    pub access_token:String,
    pub token_type:String,
    pub expires_in:usize
}

/// Body returned by the OAuth token endpoint when a grant is refused.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleTokenError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleSpreadsheet {
    #[serde(rename="spreadsheetId", default)]
    pub spreadsheet_id: String,

    #[serde(default)]
    pub properties: GoogleSpreadsheetProperties,

    #[serde(default)]
    pub sheets: Vec<GoogleSheet>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleSpreadsheetProperties {
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleSheet {
    pub properties: GoogleSheetProperties,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleSheetProperties {
    #[serde(rename="sheetId", default)]
    pub sheet_id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub index: u32,

    #[serde(rename="gridProperties", skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GoogleGridProperties>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleGridProperties {
    #[serde(rename="rowCount", skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,

    #[serde(rename="columnCount", skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u64>,
}

impl GoogleSpreadsheet {
    pub fn to_view(&self) -> SpreadsheetInfo {
        SpreadsheetInfo {
            spreadsheet_id: self.spreadsheet_id.clone(),
            title: self.properties.title.clone(),
            sheets: self.sheets.iter().map(|s| {
                let grid = s.properties.grid_properties.as_ref();
                WorksheetInfo {
                    sheet_id: s.properties.sheet_id,
                    title: s.properties.title.clone(),
                    index: s.properties.index,
                    row_count: grid.and_then(|g| g.row_count),
                    column_count: grid.and_then(|g| g.column_count),
                }
            }).collect(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct GoogleValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(rename="majorDimension", skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Vec<Value>>>,
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl GoogleValueRange {
    /// Maps the grid onto header keyed rows.
    ///
    /// The first row is the header row. Blank headers are skipped and cells
    /// missing from the end of a short row are left out of that row.
    pub fn to_rows(&self) -> Result<Vec<SheetRow>, Box<dyn std::error::Error + Send + Sync>> {
        let values = self.values.as_deref().unwrap_or_default();
        let Some((header_row, data_rows)) = values.split_first() else {
            return Err(NO_HEADER_VALUES.into());
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell_text(cell).trim().to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(NO_HEADER_VALUES.into());
        }

        let mut seen = HashSet::new();
        for header in headers.iter().filter(|h| !h.is_empty()) {
            if !seen.insert(header.as_str()) {
                return Err(format!("Duplicate header detected: \"{}\". Please make sure all non-empty headers are unique", header).into());
            }
        }

        Ok(data_rows
            .iter()
            .map(|raw| {
                headers
                    .iter()
                    .zip(raw.iter())
                    .filter(|(header, _)| !header.is_empty())
                    .map(|(header, cell)| (header.clone(), cell.clone()))
                    .collect()
            })
            .collect())
    }
}

const NO_HEADER_VALUES: &str = "No values in the header row - fill the first row with header values before trying to interact with rows";

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleErrorResponse {
    pub error: GoogleErrorDetail,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
