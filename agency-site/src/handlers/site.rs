use askama::Template;
use axum::response::IntoResponse;
use chrono::{Datelike, Utc};

use crate::models::ServiceInterest;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub services: &'static [ServiceInterest],
    pub year: i32,
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        services: &ServiceInterest::ALL,
        year: Utc::now().year(),
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
