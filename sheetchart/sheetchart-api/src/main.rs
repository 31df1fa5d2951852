use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use sheetchart_api::{create_app, AppState, ChartConfig, CHART_PATH};

const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bind = std::env::var("SHEETCHART_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let state = Arc::new(AppState::new(ChartConfig::from_env()));

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Listening on {}{}", listener.local_addr()?, CHART_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
