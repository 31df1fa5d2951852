use serde::{Deserialize, Serialize};

use super::WorksheetInfo;

/// Document level metadata: the title plus every worksheet it contains.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SpreadsheetInfo {
    pub spreadsheet_id: String,
    pub title: String,
    pub sheets: Vec<WorksheetInfo>,
}

impl SpreadsheetInfo {
    pub fn find_sheet(&self, sheet_id: u64) -> Option<&WorksheetInfo> {
        self.sheets.iter().find(|s| s.sheet_id == sheet_id)
    }
}
