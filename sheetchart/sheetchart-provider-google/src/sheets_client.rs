use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sheetchart_core::{
    SpreadsheetClient,
    contracts::{SheetRow, SpreadsheetInfo, WorksheetInfo},
};
use tracing::debug;
use super::contracts::google_claims::GoogleClaims;
use crate::contracts::{GoogleAccessToken, GoogleErrorResponse, GoogleSpreadsheet, GoogleTokenError, GoogleValueRange};
use super::contracts::ServiceAccount;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_API_URL: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const METADATA_FIELDS: &str = "spreadsheetId,properties.title,sheets.properties";

#[derive(Clone)]
pub struct GoogleSheetsClient {
    pub account: ServiceAccount,
    pub api_url: String,
    pub token_url: String,
    client: reqwest::Client,
    token_state: Arc<tokio::sync::Mutex<TokenState>>,
}

struct TokenState {
    access_token: String,
    token_type: String,
    expires_at: Option<DateTime<Utc>>,
}

/// Quotes a worksheet title for use as an A1 range covering the whole sheet.
pub fn sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

impl GoogleSheetsClient {
    pub fn new(sa: &ServiceAccount) -> Self {
        Self::with_endpoints(sa, DEFAULT_API_URL.to_string(), DEFAULT_TOKEN_URL.to_string())
    }

    pub fn with_endpoints(sa: &ServiceAccount, api_url: String, token_url: String) -> Self {
        Self {
            account: sa.clone(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url,
            client: reqwest::Client::new(),
            token_state: Arc::new(tokio::sync::Mutex::new(TokenState {
                access_token: String::new(),
                token_type: "Bearer".to_string(),
                expires_at: None,
            })),
        }
    }

    /// Returns `(token_type, access_token)`, fetching a new token when the
    /// cached one is missing or close to expiry.
    pub async fn get_token(
        &self,
    ) -> Result<(String, String), Box<dyn std::error::Error + Send + Sync>> {
        let refresh_skew = Duration::from_secs(5 * 60);
        let now = Utc::now();

        let mut state = self.token_state.lock().await;
        let needs_refresh = match state.expires_at {
            None => state.access_token.is_empty(),
            Some(exp) => state.access_token.is_empty() || (now + refresh_skew) >= exp,
        };
        if needs_refresh {
            debug!("Google: refreshing access token for {}", self.account.client_email);

            let response = self.fetch_new_token().await?;
            let expires_at = now + Duration::from_secs(response.expires_in as u64);

            state.access_token = response.access_token;
            state.token_type = response.token_type;
            state.expires_at = Some(expires_at);

            debug!("Google: new access token expires at {}", expires_at);
        }
        Ok((state.token_type.clone(), state.access_token.clone()))
    }

    pub fn build_claims(&self, now: DateTime<Utc>) -> GoogleClaims {
        GoogleClaims {
            iss: self.account.client_email.to_string(),
            scope: SHEETS_SCOPE.to_owned(),
            aud: self.token_url.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::from_secs(60 * 60)).timestamp(),
        }
    }

    pub async fn fetch_new_token(
        &self,
    ) -> Result<GoogleAccessToken, Box<dyn std::error::Error + Send + Sync>> {
        let claims = self.build_claims(Utc::now());
        let jwt = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())?,
        )?;
        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", jwt.as_str()),
        ];
        let res = self.client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            let message = match serde_json::from_str::<GoogleTokenError>(&body) {
                Ok(err) => err.error_description.unwrap_or(err.error),
                Err(_) => body,
            };
            return Err(format!("Google token error: {}", message).into());
        }

        let response: GoogleAccessToken = serde_json::from_str(&body)?;
        Ok(response)
    }

    pub async fn get_auth_header_value(
        &self,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let (token_type, token) = self.get_token().await?;
        Ok(format!("{} {}", token_type, token))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
        let auth = self
            .get_auth_header_value()
            .await
            .map_err(|e| format!("no google access token: {e}"))?;

        let res = request
            .header("Authorization", auth)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(match serde_json::from_str::<GoogleErrorResponse>(&body) {
                Ok(err) if !err.error.message.is_empty() => err.error.message.into(),
                _ => format!("Google Sheets error ({}): {}", status, body).into(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SpreadsheetClient for GoogleSheetsClient {
    async fn load_info(&self, document_id: &str) -> Result<SpreadsheetInfo, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/spreadsheets/{}", self.api_url, urlencoding::encode(document_id));
        debug!("Google: loading spreadsheet metadata from {}", url);

        let request = self.client.get(&url).query(&[("fields", METADATA_FIELDS)]);
        let response: GoogleSpreadsheet = self.get_json(request).await?;
        Ok(response.to_view())
    }

    fn sheet_by_id(&self, info: &SpreadsheetInfo, sheet_id: u64) -> Result<WorksheetInfo, Box<dyn std::error::Error + Send + Sync>> {
        info.find_sheet(sheet_id)
            .cloned()
            .ok_or_else(|| format!("Worksheet with id {} not found in document \"{}\"", sheet_id, info.title).into())
    }

    async fn get_rows(&self, document_id: &str, sheet: &WorksheetInfo) -> Result<Vec<SheetRow>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.api_url,
            urlencoding::encode(document_id),
            urlencoding::encode(&sheet_range(&sheet.title))
        );
        debug!("Google: fetching rows from {}", url);

        let response: GoogleValueRange = self.get_json(self.client.get(&url)).await?;
        response.to_rows()
    }
}
