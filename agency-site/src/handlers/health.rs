use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Liveness only; the store is an optional sink and is not probed.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
