use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;

use super::json_body;
use crate::models::{CookieConsentRequest, SubmissionResponse};
use crate::services::{persist_or_log, StorageOutcome};
use crate::startup::AppState;
use crate::utils::ClientContext;
use service_core::error::AppError;

#[tracing::instrument(skip(state, client, payload), fields(ip = %client.ip))]
pub async fn record_cookie_consent(
    State(state): State<AppState>,
    client: ClientContext,
    payload: Result<Json<CookieConsentRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let record = json_body(payload)?.into_record(&client, Utc::now())?;

    let storage = persist_or_log(
        state.store.as_ref(),
        "cookie_consent",
        &state.config.store.consent_table,
        &record,
    )
    .await;

    let message = match storage {
        StorageOutcome::Supabase => "Cookie preferences saved",
        StorageOutcome::LocalLogs => "Cookie preferences recorded",
    };

    Ok(Json(SubmissionResponse::ok(message, storage)))
}
