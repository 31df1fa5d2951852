pub mod service_account;
pub use service_account::ServiceAccount;

pub mod google_claims;
pub use google_claims::GoogleClaims;

pub mod models;
pub use models::{
    GoogleAccessToken,
    GoogleTokenError,
    GoogleSpreadsheet,
    GoogleSpreadsheetProperties,
    GoogleSheet,
    GoogleSheetProperties,
    GoogleGridProperties,
    GoogleValueRange,
    GoogleErrorResponse,
    GoogleErrorDetail
};
