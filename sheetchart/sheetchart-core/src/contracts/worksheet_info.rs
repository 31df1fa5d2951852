use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WorksheetInfo {
    pub sheet_id: u64,
    pub title: String,
    pub index: u32,
    pub row_count: Option<u64>,
    pub column_count: Option<u64>,
}
