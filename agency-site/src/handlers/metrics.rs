use axum::{http::header, response::IntoResponse};

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        crate::services::get_metrics(),
    )
}
