use serde::{Deserialize, Serialize};

/// Claims of the self-signed assertion exchanged for a Sheets access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleClaims {
    /// Service account email.
    pub iss: String,
    pub scope: String,
    /// Token endpoint the assertion is posted to.
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}
