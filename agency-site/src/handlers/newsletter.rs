use axum::{extract::rejection::JsonRejection, Json};
use chrono::Utc;

use super::json_body;
use crate::models::{NewsletterRequest, SubmissionResponse};
use crate::services::{record_submission, StorageOutcome};
use crate::utils::ClientContext;
use service_core::error::AppError;

pub const NEWSLETTER_SUCCESS_MESSAGE: &str = "You're subscribed! Watch your inbox for our next issue.";

/// Subscriptions are only logged; there is no newsletter table to forward to.
#[tracing::instrument(skip(client, payload), fields(ip = %client.ip))]
pub async fn subscribe_newsletter(
    client: ClientContext,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let subscription = json_body(payload)?.into_subscription(&client, Utc::now())?;

    tracing::info!(
        email = %subscription.email,
        ip_address = %subscription.ip_address,
        subscribed_at = %subscription.subscribed_at,
        "Newsletter subscription received"
    );
    record_submission("newsletter", StorageOutcome::LocalLogs.as_str());

    Ok(Json(SubmissionResponse::ok(
        NEWSLETTER_SUCCESS_MESSAGE,
        StorageOutcome::LocalLogs,
    )))
}
