use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /ready - readiness probe, no auth
pub async fn ready() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
