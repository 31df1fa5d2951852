pub mod sheet_row;
pub use sheet_row::SheetRow;

pub mod worksheet_info;
pub use worksheet_info::WorksheetInfo;

pub mod spreadsheet_info;
pub use spreadsheet_info::SpreadsheetInfo;

pub mod chart_response;
pub use chart_response::ChartResponse;

pub mod error_response;
pub use error_response::ErrorResponse;
