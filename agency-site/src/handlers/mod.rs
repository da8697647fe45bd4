//! HTTP handlers for agency-site.

pub mod consent;
pub mod contact;
pub mod health;
pub mod metrics;
pub mod newsletter;
pub mod site;

pub use consent::record_cookie_consent;
pub use contact::submit_contact;
pub use health::health_check;
pub use newsletter::subscribe_newsletter;
pub use site::{index, not_found};

use axum::{extract::rejection::JsonRejection, Json};
use service_core::error::AppError;

/// Unwrap a JSON body, turning decode failures into a 400 with the failure
/// body instead of axum's plain-text rejection.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(AppError::BadRequest(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))
        }
    }
}
