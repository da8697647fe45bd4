use serde::Serialize;

use crate::services::StorageOutcome;

/// Success body for every form route.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub storage: StorageOutcome,
}

impl SubmissionResponse {
    pub fn ok(message: impl Into<String>, storage: StorageOutcome) -> Self {
        Self {
            success: true,
            message: message.into(),
            storage,
        }
    }
}
