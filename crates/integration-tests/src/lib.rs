//! Integration tests for the Shopcart console.
//!
//! Each test gets a [`TestContext`]: a mockito server standing in for the
//! Shopcart API and the console router served on an ephemeral port in front
//! of it. Tests drive the console the way the page does, with form posts.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopcart-integration-tests
//! ```

use std::collections::HashMap;

use mockito::{Server, ServerGuard};
use reqwest::Client;
use shopcart_console::AppState;
use shopcart_console::config::ConsoleConfig;

/// A running console in front of a mock Shopcart API.
pub struct TestContext {
    pub client: Client,
    pub console_url: String,
    pub api: ServerGuard,
}

impl TestContext {
    /// Start a mock API and a console pointed at it.
    ///
    /// # Panics
    ///
    /// Panics if the console cannot bind or its configuration is invalid.
    pub async fn new() -> Self {
        let api = Server::new_async().await;

        let env = HashMap::from([("SHOPCART_API_URL", api.url())]);
        let config = ConsoleConfig::from_lookup(|key| env.get(key).cloned())
            .expect("Failed to build console configuration");
        let state = AppState::new(config).expect("Failed to create application state");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind console listener");
        let addr = listener.local_addr().expect("Failed to read console address");

        let app = shopcart_console::app(state);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Console server stopped");
        });

        Self {
            client: Client::new(),
            console_url: format!("http://{addr}"),
            api,
        }
    }

    /// Press a console button with the given form fields.
    ///
    /// # Panics
    ///
    /// Panics if the console does not answer.
    pub async fn press(&self, path: &str, action: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        let mut form = vec![("action", action)];
        form.extend_from_slice(fields);

        self.client
            .post(format!("{}{path}", self.console_url))
            .form(&form)
            .send()
            .await
            .expect("Console request failed")
    }
}
