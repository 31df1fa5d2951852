use async_trait::async_trait;
use mockall::automock;

use crate::contracts::{SheetRow, SpreadsheetInfo, WorksheetInfo};
pub mod contracts;

/// Fallback worksheet used when no chart worksheet id is configured.
pub const DEFAULT_WORKSHEET_ID: u64 = 1234613033;

/// Read access to a remote spreadsheet document.
///
/// The chart endpoint only needs three things from a provider: the document
/// metadata, a worksheet picked out of that metadata by its numeric id, and the
/// rows of that worksheet keyed by the header row.
#[automock]
#[async_trait]
pub trait SpreadsheetClient : Send + Sync {

    async fn load_info(&self, document_id: &str) -> Result<SpreadsheetInfo, Box<dyn std::error::Error + Send + Sync>>;

    fn sheet_by_id(&self, info: &SpreadsheetInfo, sheet_id: u64) -> Result<WorksheetInfo, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_rows(&self, document_id: &str, sheet: &WorksheetInfo) -> Result<Vec<SheetRow>, Box<dyn std::error::Error + Send + Sync>>;
}
