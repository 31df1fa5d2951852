use sheetchart_core::DEFAULT_WORKSHEET_ID;
use sheetchart_provider_google::contracts::ServiceAccount;
use tracing::warn;

pub const ENV_SERVICE_ACCOUNT_EMAIL: &str = "GOOGLE_SERVICE_ACCOUNT_EMAIL";
pub const ENV_PRIVATE_KEY: &str = "GOOGLE_PRIVATE_KEY";
pub const ENV_SHEET_ID: &str = "GOOGLE_SHEET_ID";
pub const ENV_CHART_SHEET_ID: &str = "GOOGLE_CSID";

/// Settings for the chart endpoint.
///
/// Values are kept as raw strings and only checked when a request needs them,
/// so a missing value surfaces as a 500 on that request rather than at startup.
#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    pub service_account_email: Option<String>,
    pub private_key: Option<String>,
    pub sheet_id: Option<String>,
    pub chart_sheet_id: Option<String>,
}

impl ChartConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service_account_email: lookup(ENV_SERVICE_ACCOUNT_EMAIL),
            private_key: lookup(ENV_PRIVATE_KEY),
            sheet_id: lookup(ENV_SHEET_ID),
            chart_sheet_id: lookup(ENV_CHART_SHEET_ID),
        }
    }

    pub fn sheet_id(&self) -> Result<&str, Box<dyn std::error::Error + Send + Sync>> {
        present(&self.sheet_id).ok_or_else(|| not_defined(ENV_SHEET_ID))
    }

    /// Resolves the worksheet to chart.
    ///
    /// Unset, empty and zero fall back to [`DEFAULT_WORKSHEET_ID`]. Any numeric
    /// spelling of a whole number is accepted (`17`, `17.0`, `1e3`); anything
    /// else is rejected.
    pub fn worksheet_id(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let raw = self.chart_sheet_id.as_deref().map(str::trim).unwrap_or_default();
        let id = if raw.is_empty() {
            0
        } else {
            parse_whole_number(raw).ok_or_else(|| not_defined(ENV_CHART_SHEET_ID))?
        };

        if id == 0 {
            warn!("{} not set, using default worksheet {}", ENV_CHART_SHEET_ID, DEFAULT_WORKSHEET_ID);
            return Ok(DEFAULT_WORKSHEET_ID);
        }
        Ok(id)
    }

    /// Private key with escaped `\n` sequences turned into real newlines.
    pub fn private_key(&self) -> Option<String> {
        present(&self.private_key).map(|key| key.replace("\\n", "\n"))
    }

    pub fn service_account(&self) -> Result<ServiceAccount, Box<dyn std::error::Error + Send + Sync>> {
        let email = present(&self.service_account_email).ok_or_else(|| not_defined(ENV_SERVICE_ACCOUNT_EMAIL))?;
        let key = self.private_key().ok_or_else(|| not_defined(ENV_PRIVATE_KEY))?;
        Ok(ServiceAccount::new(email, key))
    }
}

fn parse_whole_number(raw: &str) -> Option<u64> {
    if let Ok(id) = raw.parse::<u64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok()?;
    // u64::MAX as f64 rounds up to 2^64, which does not fit.
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn not_defined(name: &str) -> Box<dyn std::error::Error + Send + Sync> {
    format!("{} is not defined", name).into()
}
