pub mod consent;
pub mod contact;
pub mod newsletter;
pub mod response;

pub use consent::{CookieConsentRecord, CookieConsentRequest, DecisionType};
pub use contact::{ContactRequest, ContactSubmission, ServiceInterest};
pub use newsletter::{NewsletterRequest, NewsletterSubscription};
pub use response::SubmissionResponse;

use once_cell::sync::Lazy;
use regex::Regex;

/// Deliberately loose `local@domain.tld` shape.
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Trim, and collapse empty strings to `None`.
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        for ok in ["a@b.co", "first.last+tag@sub.example.org", "x@y.z"] {
            assert!(EMAIL_REGEX.is_match(ok), "{ok} should match");
        }
        for bad in ["", "plain", "a@b", "@b.co", "a@.co.", "a b@c.de", "a@b@c.de", "a@b.c "] {
            assert!(!EMAIL_REGEX.is_match(bad), "{bad:?} should not match");
        }
    }

    #[test]
    fn test_clean_optional() {
        assert_eq!(clean_optional(Some("  Acme  ".into())), Some("Acme".into()));
        assert_eq!(clean_optional(Some("   ".into())), None);
        assert_eq!(clean_optional(None), None);
    }
}
