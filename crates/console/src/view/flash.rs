//! Flash message slot.

use serde::{Deserialize, Serialize};
use shopcart_core::Severity;

/// Flash text shown after a successful command.
pub const SUCCESS: &str = "Success";

/// Flash text shown when a failure carries no server message.
pub const GENERIC_ERROR: &str = "Server error!";

/// A single status message classified by severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Text shown verbatim.
    pub message: String,
    /// Alert style.
    pub severity: Severity,
}

impl FlashMessage {
    /// Create a flash message.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// CSS class of the alert block.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        self.severity.css_class()
    }
}
