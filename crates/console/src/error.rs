//! Route error handling with Sentry integration.
//!
//! Command failures are not route errors: they end up in the flash region and
//! the page still renders with `200 OK`. `AppError` covers requests the console
//! cannot serve at all.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::commands::UnknownCommand;

/// Application-level error type for the console server.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted `action` names no command.
    #[error("Bad request: {0}")]
    UnknownCommand(#[from] UnknownCommand),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownCommand(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose template internals to clients
        let message = match &self {
            Self::UnknownCommand(_) => self.to_string(),
            Self::Render(_) => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for a console command.
///
/// Breadcrumbs appear in Sentry error reports to show the commands leading up
/// to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(UnknownCommand("explode-btn".to_string()));
        assert_eq!(err.to_string(), r#"Bad request: unknown command: "explode-btn""#);
    }

    #[test]
    fn test_app_error_status_codes() {
        let response = AppError::from(UnknownCommand(String::new())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
