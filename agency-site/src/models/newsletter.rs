use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{normalize_email, EMAIL_REGEX};
use crate::utils::ClientContext;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[serde(default)]
    #[validate(regex(path = *EMAIL_REGEX, message = "Please provide a valid email address"))]
    pub email: String,
}

impl NewsletterRequest {
    pub fn into_subscription(
        self,
        client: &ClientContext,
        now: DateTime<Utc>,
    ) -> Result<NewsletterSubscription, AppError> {
        let request = NewsletterRequest {
            email: normalize_email(&self.email),
        };
        request.validate()?;

        Ok(NewsletterSubscription {
            email: request.email,
            ip_address: client.ip.clone(),
            user_agent: client.user_agent.clone(),
            subscribed_at: now,
        })
    }
}

/// Logged, never forwarded to the store.
#[derive(Debug, Clone, Serialize)]
pub struct NewsletterSubscription {
    pub email: String,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClientContext {
        ClientContext {
            ip: "198.51.100.4".to_string(),
            user_agent: None,
            referer: None,
        }
    }

    #[test]
    fn test_email_is_normalized() {
        let subscription = NewsletterRequest {
            email: " News@Example.org ".to_string(),
        }
        .into_subscription(&client(), Utc::now())
        .unwrap();

        assert_eq!(subscription.email, "news@example.org");
        assert_eq!(subscription.ip_address, "198.51.100.4");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        for email in ["", "news", "news@example", "news @example.org"] {
            let result = NewsletterRequest {
                email: email.to_string(),
            }
            .into_subscription(&client(), Utc::now());
            assert!(
                matches!(result, Err(AppError::ValidationError(_))),
                "{email:?} should be rejected"
            );
        }
    }
}
