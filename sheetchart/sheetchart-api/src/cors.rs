use axum::{
    http::{HeaderMap, HeaderName, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde_json::json;

/// Headers attached to every response of the chart endpoint.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, OPTIONS"),
    ("access-control-allow-headers", "Content-Type, Authorization"),
];

pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(CORS_HEADERS.len());
    for (name, value) in CORS_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    headers
}

/// Preflight answer: an empty JSON object carrying the CORS headers.
pub async fn handle_options() -> impl IntoResponse {
    (cors_headers(), Json(json!({})))
}
