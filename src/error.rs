//! Client Error Types
//!
//! Failures of a single call to the trip API, shared by the browser and
//! terminal clients, plus extraction of the server's error message.

use serde::Deserialize;
use thiserror::Error;

use crate::forms::FormError;

/// Shown when signup is blocked by the password policy
pub const WEAK_PASSWORD_MESSAGE: &str =
    "Please create a stronger password following the suggestions.";

/// Errors that can occur while talking to the trip API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API error {status}: {}", api_text(.detail, .message))]
    Api {
        status: u16,
        /// Non-empty `detail` of the error body
        detail: Option<String>,
        /// Non-empty `message` of the error body
        message: Option<String>,
    },

    /// Success status but not the one the operation expects
    #[error("Unexpected status {0}")]
    UnexpectedStatus(u16),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Session storage could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),

    /// The operation needs a logged-in user
    #[error("Not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Form(#[from] FormError),
}

fn api_text<'a>(detail: &'a Option<String>, message: &'a Option<String>) -> &'a str {
    detail
        .as_deref()
        .or(message.as_deref())
        .unwrap_or("no details")
}

/// Which field of an error body a page shows first
///
/// Login reports `message`; signup and trip creation report `detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageOrder {
    #[default]
    DetailFirst,
    MessageFirst,
}

impl ClientError {
    /// Build an `Api` error from a status code and a raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = ApiErrorBody::parse(body);
        ClientError::Api {
            status,
            detail: parsed.detail_text(),
            message: parsed.message_text(),
        }
    }

    /// The server-provided message, `detail` before `message`
    pub fn server_message(&self) -> Option<&str> {
        self.server_message_in(MessageOrder::DetailFirst)
    }

    pub fn server_message_in(&self, order: MessageOrder) -> Option<&str> {
        match self {
            ClientError::Api { detail, message, .. } => {
                let (first, second) = match order {
                    MessageOrder::DetailFirst => (detail, message),
                    MessageOrder::MessageFirst => (message, detail),
                };
                first.as_deref().or(second.as_deref())
            }
            _ => None,
        }
    }

    /// Message to show a user: the server's own words, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.user_message_in(MessageOrder::DetailFirst, fallback)
    }

    /// Like [`ClientError::user_message`], reading the body fields in `order`
    pub fn user_message_in(&self, order: MessageOrder, fallback: &str) -> String {
        match self {
            ClientError::Form(FormError::WeakPassword(_)) => WEAK_PASSWORD_MESSAGE.to_string(),
            ClientError::Form(e) => e.to_string(),
            _ => self
                .server_message_in(order)
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// True when the request never reached the server
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

/// Result type for API operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body returned by the trip API
///
/// Validation failures put a string or a list of objects in `detail`;
/// authentication failures use `message`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Parse a raw error body; anything that isn't JSON reads as empty
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Pull a displayable message out of a raw error body
    pub fn extract(body: &str) -> Option<String> {
        Self::parse(body).message()
    }

    /// `detail` when it has text, else `message`
    pub fn message(&self) -> Option<String> {
        self.detail_text().or_else(|| self.message_text())
    }

    pub fn detail_text(&self) -> Option<String> {
        self.detail.as_ref().and_then(detail_text).and_then(non_blank)
    }

    pub fn message_text(&self) -> Option<String> {
        self.message.clone().and_then(non_blank)
    }
}

fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(s) => Some(s.clone()),
        // [{"loc": [...], "msg": "field required"}, ...]
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        let msg = ApiErrorBody::extract(r#"{"detail": "Email already registered"}"#);
        assert_eq!(msg.as_deref(), Some("Email already registered"));
    }

    #[test]
    fn test_extract_detail_list() {
        let body = r#"{"detail": [{"loc": ["body", "budget"], "msg": "value is not a valid integer"},
                                  {"loc": ["body", "duration"], "msg": "field required"}]}"#;
        assert_eq!(
            ApiErrorBody::extract(body).as_deref(),
            Some("value is not a valid integer; field required")
        );
    }

    #[test]
    fn test_extract_message_field() {
        let msg = ApiErrorBody::extract(r#"{"message": "Invalid credentials"}"#);
        assert_eq!(msg.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_extract_garbage() {
        assert_eq!(ApiErrorBody::extract("<html>502</html>"), None);
        assert_eq!(ApiErrorBody::extract(r#"{"detail": ""}"#), None);
    }

    #[test]
    fn test_empty_detail_falls_back_to_message() {
        let body = r#"{"detail": "", "message": "Invalid credentials"}"#;
        assert_eq!(ApiErrorBody::extract(body).as_deref(), Some("Invalid credentials"));

        let err = ClientError::from_response(401, body);
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.to_string(), "API error 401: Invalid credentials");
    }

    #[test]
    fn test_message_order() {
        let err = ClientError::from_response(
            401,
            r#"{"detail": "Unauthorized", "message": "Invalid credentials"}"#,
        );
        assert_eq!(err.user_message("fallback"), "Unauthorized");
        assert_eq!(
            err.user_message_in(MessageOrder::MessageFirst, "fallback"),
            "Invalid credentials"
        );

        // The other field fills in when the preferred one is absent
        let err = ClientError::from_response(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(
            err.user_message_in(MessageOrder::MessageFirst, "fallback"),
            "Email already registered"
        );
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ClientError::from_response(500, "");
        assert_eq!(err.user_message("Error creating trip. Please try again."),
                   "Error creating trip. Please try again.");

        let err = ClientError::from_response(400, r#"{"detail": "Budget too low"}"#);
        assert_eq!(err.user_message("fallback"), "Budget too low");

        let err = ClientError::Network("connection refused".into());
        assert!(err.is_network());
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_user_message_form_errors() {
        let err = ClientError::from(FormError::WeakPassword(vec!["a number"]));
        assert_eq!(err.user_message("fallback"), WEAK_PASSWORD_MESSAGE);

        let err = ClientError::from(FormError::Missing("Budget"));
        assert_eq!(err.user_message("fallback"), "Budget is required");
    }
}
