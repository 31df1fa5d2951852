use serde::{Deserialize, Serialize};

use super::SheetRow;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ChartResponse {
    pub data: Vec<SheetRow>,
}
