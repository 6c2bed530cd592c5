//! Status enums for console feedback.

use serde::{Deserialize, Serialize};

/// Severity of a flash message.
///
/// Maps one-to-one onto the alert styles of the console page. The set is
/// closed, so every flash renders with a known style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// CSS class of the alert block.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
            Self::Danger => "alert-danger",
        }
    }
}
