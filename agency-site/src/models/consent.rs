use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::clean_optional;
use crate::utils::ClientContext;
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    AcceptAll,
    RejectAll,
    Custom,
}

impl DecisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionType::AcceptAll => "accept_all",
            DecisionType::RejectAll => "reject_all",
            DecisionType::Custom => "custom",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept_all" => Ok(DecisionType::AcceptAll),
            "reject_all" => Ok(DecisionType::RejectAll),
            "custom" => Ok(DecisionType::Custom),
            other => Err(format!(
                "decision_type must be one of accept_all, reject_all, custom (got '{}')",
                other
            )),
        }
    }
}

/// Banner decision as posted by the page. Metadata fields are optional; the
/// server fills them from the request when absent.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CookieConsentRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "user_id is required"))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "decision_type is required"))]
    pub decision_type: String,
    #[validate(required(message = "cookie_settings is required"))]
    pub cookie_settings: Option<BTreeMap<String, bool>>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub page_url: Option<String>,
}

impl CookieConsentRequest {
    pub fn into_record(
        self,
        client: &ClientContext,
        now: DateTime<Utc>,
    ) -> Result<CookieConsentRecord, AppError> {
        let request = CookieConsentRequest {
            user_id: self.user_id.trim().to_string(),
            decision_type: self.decision_type.trim().to_string(),
            ..self
        };
        request.validate()?;

        let decision_type =
            DecisionType::from_str(&request.decision_type).map_err(AppError::BadRequest)?;

        Ok(CookieConsentRecord {
            user_id: request.user_id,
            decision_type,
            cookie_settings: request.cookie_settings.unwrap_or_default(),
            ip_address: clean_optional(request.ip_address).unwrap_or_else(|| client.ip.clone()),
            user_agent: clean_optional(request.user_agent).or_else(|| client.user_agent.clone()),
            page_url: clean_optional(request.page_url).or_else(|| client.referer.clone()),
            consent_timestamp: now,
        })
    }
}

/// Record forwarded to the `cookie_consents` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CookieConsentRecord {
    pub user_id: String,
    pub decision_type: DecisionType,
    pub cookie_settings: BTreeMap<String, bool>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub page_url: Option<String>,
    pub consent_timestamp: DateTime<Utc>,
}
