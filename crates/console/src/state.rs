//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiError, ShopcartClient};
use crate::config::ConsoleConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds no view: each request brings its own
/// form values.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ConsoleConfig,
    client: ShopcartClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: ConsoleConfig) -> Result<Self, ApiError> {
        let client = ShopcartClient::new(config.api_url.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, client }),
        })
    }

    /// Get a reference to the console configuration.
    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopcart API client.
    #[must_use]
    pub fn client(&self) -> &ShopcartClient {
        &self.inner.client
    }
}
