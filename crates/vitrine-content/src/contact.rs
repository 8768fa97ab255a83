//! Wire types for contact form submission.

use serde::{Deserialize, Serialize};

/// A contact form submission as sent to the server.
///
/// Constructed by the client after validation, sent once per submit action,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Logical outcome envelope returned by the contact endpoint.
///
/// `ok` is the application-level outcome flag, distinct from the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_optional_on_the_wire() {
        let json = serde_json::json!({
            "name": "A",
            "email": "a@b.com",
            "subject": "S",
            "message": "hello there"
        });
        let submission: ContactSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(submission.phone, None);

        let back = serde_json::to_value(&submission).unwrap();
        assert!(back.get("phone").is_none());
    }

    #[test]
    fn response_helpers_set_the_outcome_flag() {
        let ok = ContactResponse::success("thanks");
        assert!(ok.ok);
        assert_eq!(ok.message.as_deref(), Some("thanks"));
        assert_eq!(ok.error, None);

        let err = ContactResponse::failure("nope");
        assert!(!err.ok);
        assert_eq!(err.error.as_deref(), Some("nope"));
    }
}
