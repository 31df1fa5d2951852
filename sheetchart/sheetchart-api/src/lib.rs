use std::sync::Arc;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sheetchart_core::{
    contracts::{ChartResponse, ErrorResponse, SheetRow},
    SpreadsheetClient,
};
use sheetchart_provider_google::contracts::ServiceAccount;
use sheetchart_provider_google::sheets_client::GoogleSheetsClient;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod config;
pub mod cors;

pub use config::ChartConfig;

pub const CHART_PATH: &str = "/api/chart";

/// Lets shared caches serve a copy for a minute and revalidate in the background after that.
pub const CHART_CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate";

pub type ClientFactory = Box<dyn Fn(&ServiceAccount) -> Arc<dyn SpreadsheetClient> + Send + Sync>;

pub struct AppState {
    pub config: ChartConfig,
    pub connect: ClientFactory,
}

impl AppState {
    /// State backed by the Google Sheets API.
    pub fn new(config: ChartConfig) -> Self {
        Self::with_connector(config, |sa| Arc::new(GoogleSheetsClient::new(sa)) as Arc<dyn SpreadsheetClient>)
    }

    pub fn with_connector<F>(config: ChartConfig, connect: F) -> Self
    where
        F: Fn(&ServiceAccount) -> Arc<dyn SpreadsheetClient> + Send + Sync + 'static,
    {
        Self {
            config,
            connect: Box::new(connect),
        }
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(CHART_PATH, get(handle_chart).options(cors::handle_options))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads every row of the configured worksheet.
///
/// A new client is built for each call, so credentials and document metadata
/// never outlive the request.
pub async fn load_chart_rows(
    state: &AppState,
) -> Result<Vec<SheetRow>, Box<dyn std::error::Error + Send + Sync>> {
    let sheet_id = state.config.sheet_id()?;
    let worksheet_id = state.config.worksheet_id()?;
    let account = state.config.service_account()?;

    let client = (state.connect)(&account);
    let doc = client.load_info(sheet_id).await?;
    info!("{}", doc.title);

    let sheet = client.sheet_by_id(&doc, worksheet_id)?;
    client.get_rows(sheet_id, &sheet).await
}

async fn handle_chart(State(state): State<Arc<AppState>>) -> Response {
    match load_chart_rows(&state).await {
        Ok(data) => {
            let mut headers = cors::cors_headers();
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CHART_CACHE_CONTROL));
            (StatusCode::OK, headers, Json(ChartResponse { data })).into_response()
        }
        Err(e) => {
            error!("Chart data error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors::cors_headers(),
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}
