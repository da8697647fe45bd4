use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::{clean_optional, normalize_email, EMAIL_REGEX};
use crate::utils::ClientContext;
use service_core::error::AppError;

/// Services a prospect can pick on the contact form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceInterest {
    AiStrategy,
    AiAutomation,
    CustomAiDevelopment,
    DataAnalytics,
    AiTraining,
    Other,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 6] = [
        ServiceInterest::AiStrategy,
        ServiceInterest::AiAutomation,
        ServiceInterest::CustomAiDevelopment,
        ServiceInterest::DataAnalytics,
        ServiceInterest::AiTraining,
        ServiceInterest::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceInterest::AiStrategy => "ai-strategy",
            ServiceInterest::AiAutomation => "ai-automation",
            ServiceInterest::CustomAiDevelopment => "custom-ai-development",
            ServiceInterest::DataAnalytics => "data-analytics",
            ServiceInterest::AiTraining => "ai-training",
            ServiceInterest::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceInterest::AiStrategy => "AI Strategy & Roadmapping",
            ServiceInterest::AiAutomation => "Workflow Automation",
            ServiceInterest::CustomAiDevelopment => "Custom AI Development",
            ServiceInterest::DataAnalytics => "Data & Analytics",
            ServiceInterest::AiTraining => "Team Training & Enablement",
            ServiceInterest::Other => "Something else",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceInterest::AiStrategy => {
                "Find the use cases worth funding, size them honestly and sequence a roadmap your team can own."
            }
            ServiceInterest::AiAutomation => {
                "Replace brittle manual workflows with reliable, observable automation backed by language models."
            }
            ServiceInterest::CustomAiDevelopment => {
                "Retrieval, agents and fine-tuned models built to production standards and handed over with docs."
            }
            ServiceInterest::DataAnalytics => {
                "Clean pipelines and dashboards so the numbers behind every AI decision can be trusted."
            }
            ServiceInterest::AiTraining => {
                "Hands-on workshops that leave your people confident using and evaluating AI tools."
            }
            ServiceInterest::Other => {
                "Something that does not fit a box? Tell us about it and we will be straight about whether we can help."
            }
        }
    }
}

impl fmt::Display for ServiceInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceInterest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceInterest::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| format!("Unknown service: {}", s))
    }
}

/// Inbound contact form. Required fields default to empty so that a missing
/// field is reported by validation rather than by JSON decoding.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Name is required (200 characters max)"))]
    pub name: String,
    #[serde(default)]
    #[validate(regex(path = *EMAIL_REGEX, message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(max = 200, message = "Company must be at most 200 characters"))]
    pub company: Option<String>,
    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Message is required (5000 characters max)"))]
    pub message: String,
    pub service: Option<String>,
}

impl ContactRequest {
    /// Trim every field, lower-case the email and drop empty optionals.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            company: clean_optional(self.company),
            phone: clean_optional(self.phone),
            message: self.message.trim().to_string(),
            service: clean_optional(self.service),
        }
    }

    /// Normalize, validate and stamp with the server-observed client details.
    pub fn into_submission(
        self,
        client: &ClientContext,
        now: DateTime<Utc>,
    ) -> Result<ContactSubmission, AppError> {
        let request = self.normalized();
        request.validate()?;

        let service = request
            .service
            .as_deref()
            .map(ServiceInterest::from_str)
            .transpose()
            .map_err(AppError::BadRequest)?;

        Ok(ContactSubmission {
            name: request.name,
            email: request.email,
            company: request.company,
            phone: request.phone,
            message: request.message,
            service,
            ip_address: client.ip.clone(),
            user_agent: client.user_agent.clone(),
            created_at: now,
        })
    }
}

/// Record forwarded to the `contact_submissions` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub service: Option<ServiceInterest>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn client() -> ClientContext {
        ClientContext {
            ip: "203.0.113.7".to_string(),
            user_agent: Some("test-agent".to_string()),
            referer: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn request(value: serde_json::Value) -> ContactRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalizes_submission() {
        let submission = request(serde_json::json!({
            "name": "  Ada Lovelace ",
            "email": "  Ada@Example.COM ",
            "company": "   ",
            "phone": " +44 20 7946 0000 ",
            "message": "\n Let's talk.\n",
            "service": "ai-strategy"
        }))
        .into_submission(&client(), now())
        .unwrap();

        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.company, None);
        assert_eq!(submission.phone.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(submission.message, "Let's talk.");
        assert_eq!(submission.service, Some(ServiceInterest::AiStrategy));
        assert_eq!(submission.ip_address, "203.0.113.7");
        assert_eq!(submission.created_at, now());
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        for body in [
            serde_json::json!({"email": "a@b.co", "message": "hi"}),
            serde_json::json!({"name": "A", "message": "hi"}),
            serde_json::json!({"name": "A", "email": "a@b.co"}),
            serde_json::json!({"name": "   ", "email": "a@b.co", "message": "hi"}),
        ] {
            let result = request(body.clone()).into_submission(&client(), now());
            assert!(
                matches!(result, Err(AppError::ValidationError(_))),
                "{body} should fail validation"
            );
        }
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let result = request(serde_json::json!({
            "name": "A",
            "email": "not-an-email",
            "message": "hi"
        }))
        .into_submission(&client(), now());

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let result = request(serde_json::json!({
            "name": "A",
            "email": "a@b.co",
            "message": "hi",
            "service": "time-travel"
        }))
        .into_submission(&client(), now());

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_empty_service_means_not_given() {
        let submission = request(serde_json::json!({
            "name": "A",
            "email": "a@b.co",
            "message": "hi",
            "service": ""
        }))
        .into_submission(&client(), now())
        .unwrap();

        assert_eq!(submission.service, None);
    }

    #[test]
    fn test_submission_wire_shape() {
        let submission = request(serde_json::json!({
            "name": "A",
            "email": "a@b.co",
            "message": "hi",
            "service": "data-analytics"
        }))
        .into_submission(&client(), now())
        .unwrap();

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["service"], "data-analytics");
        assert_eq!(json["company"], serde_json::Value::Null);
        assert_eq!(json["created_at"], "2026-03-01T12:00:00Z");
    }
}
