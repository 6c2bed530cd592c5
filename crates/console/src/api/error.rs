//! Error types for the Shopcart API client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Shopcart API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, if there was one.
        message: Option<String>,
    },

    /// A success response whose body is not the expected entity.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request URL could not be built from the base URL.
    #[error("invalid URL: {0}")]
    Url(String),
}

impl ApiError {
    /// The server-supplied message, when the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// The HTTP status, for failures that got as far as a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err.to_string())
    }
}

/// Error body returned by the Shopcart API.
///
/// Only `message` is read; any other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the message from a raw response body.
    ///
    /// Bodies that are not JSON objects, and objects whose `message` is not a
    /// string, yield `None`.
    #[must_use]
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status {
            status: 404,
            message: Some("Shopcart not found".to_string()),
        };
        assert_eq!(err.to_string(), "API error (404): Shopcart not found");

        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "API error (500): no message");
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Item already in cart".to_string()),
        };
        assert_eq!(err.server_message(), Some("Item already in cart"));
        assert_eq!(err.status(), Some(409));

        let err = ApiError::Parse("truncated".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ErrorBody::message_from(r#"{"status": 404, "error": "Not Found", "message": "Shopcart not found"}"#),
            Some("Shopcart not found".to_string())
        );
        assert_eq!(ErrorBody::message_from(r#"{"error": "boom"}"#), None);
        assert_eq!(ErrorBody::message_from("<html>Bad Gateway</html>"), None);
        assert_eq!(ErrorBody::message_from(r#"{"message": 12}"#), None);
    }
}
