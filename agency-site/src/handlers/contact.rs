use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;

use super::json_body;
use crate::models::{ContactRequest, SubmissionResponse};
use crate::services::persist_or_log;
use crate::startup::AppState;
use crate::utils::ClientContext;
use service_core::error::AppError;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thanks for reaching out! We'll get back to you within one business day.";

#[tracing::instrument(skip(state, client, payload), fields(ip = %client.ip))]
pub async fn submit_contact(
    State(state): State<AppState>,
    client: ClientContext,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let submission = json_body(payload)?.into_submission(&client, Utc::now())?;

    let storage = persist_or_log(
        state.store.as_ref(),
        "contact",
        &state.config.store.contact_table,
        &submission,
    )
    .await;

    tracing::info!(
        storage = storage.as_str(),
        service = submission.service.map(|s| s.as_str()).unwrap_or("unspecified"),
        "Contact submission accepted"
    );

    Ok(Json(SubmissionResponse::ok(CONTACT_SUCCESS_MESSAGE, storage)))
}
