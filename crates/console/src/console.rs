//! The console controller.
//!
//! Owns one [`ViewState`] and runs commands against it. Commands may overlap:
//! the state lock is taken to build a request and again to apply its result,
//! never across the network call, so the last response to arrive wins.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::api::ShopcartClient;
use crate::commands::{self, Action, Command, Outcome};
use crate::view::ViewState;

/// Command dispatcher over a shared view.
///
/// Cheap to clone; clones share the view.
#[derive(Debug, Clone)]
pub struct Console {
    client: ShopcartClient,
    state: Arc<Mutex<ViewState>>,
}

impl Console {
    /// Create a console with an empty view.
    #[must_use]
    pub fn new(client: ShopcartClient) -> Self {
        Self::with_state(client, ViewState::default())
    }

    /// Create a console over an existing view.
    #[must_use]
    pub fn with_state(client: ShopcartClient, state: ViewState) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// The API client commands are sent through.
    #[must_use]
    pub const fn client(&self) -> &ShopcartClient {
        &self.client
    }

    /// A copy of the current view.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Mutate the view, e.g. to type into a form field.
    pub async fn update_state<F>(&self, f: F)
    where
        F: FnOnce(&mut ViewState),
    {
        f(&mut *self.state.lock().await);
    }

    /// Run a command.
    ///
    /// The request is built from the view as it is when the command starts.
    /// The result is applied to the view as it is when the response arrives.
    #[instrument(skip_all, fields(command = %command))]
    pub async fn dispatch(&self, command: Command) -> Outcome {
        let request = {
            let mut state = self.state.lock().await;
            match command.spec().action {
                Action::Local(reset) => {
                    reset(&mut state);
                    return Outcome::Local;
                }
                Action::Remote { prepare, .. } => {
                    state.clear_flash();
                    prepare(&state)
                }
            }
        };

        debug!(%request, "Sending command request");
        let result = self.client.send(&request).await;

        let mut state = self.state.lock().await;
        commands::apply(command, &mut state, result)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;
    use shopcart_core::Severity;
    use url::Url;

    use super::*;
    use crate::view::{SUCCESS, ShopcartForm};

    async fn console_for(server: &mockito::ServerGuard) -> Console {
        let client = ShopcartClient::new(Url::parse(&server.url()).expect("url")).expect("client");
        Console::new(client)
    }

    #[tokio::test]
    async fn test_dispatch_applies_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/shopcarts")
            .with_status(201)
            .with_body(r#"{"id": 9, "customer_id": 1001}"#)
            .create_async()
            .await;

        let console = console_for(&server).await;
        console
            .update_state(|state| state.shopcart_form.customer_id = "1001".to_string())
            .await;

        let outcome = console.dispatch(Command::Create).await;
        assert!(matches!(outcome, Outcome::Applied));

        let state = console.snapshot().await;
        assert_eq!(state.shopcart_form, ShopcartForm::new("9", "1001"));
        assert_eq!(state.flash.map(|f| f.message), Some(SUCCESS.to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_overlapping_commands_last_completion_wins() {
        let mut server = Server::new_async().await;
        let retrieve = server
            .mock("GET", "/api/shopcarts/3")
            .with_status(200)
            .with_body(r#"{"id": 3, "customer_id": 1001}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/shopcarts/3")
            .with_status(204)
            .create_async()
            .await;

        let console = console_for(&server).await;
        console
            .update_state(|state| state.shopcart_form.shopcart_id = "3".to_string())
            .await;

        let (first, second) = tokio::join!(
            console.dispatch(Command::Retrieve),
            console.dispatch(Command::Delete),
        );
        assert!(first.is_success());
        assert!(second.is_success());

        // Whichever finished last owns the flash; both outcomes are whole.
        let state = console.snapshot().await;
        let flash = state.flash.expect("flash set");
        assert_eq!(flash.severity, Severity::Success);
        match flash.message.as_str() {
            SUCCESS => assert_eq!(state.shopcart_form, ShopcartForm::new("3", "1001")),
            "Shopcart has been Deleted!" => assert!(state.shopcart_form.is_empty()),
            other => panic!("unexpected flash {other:?}"),
        }

        retrieve.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_local_dispatch_skips_network() {
        let server = Server::new_async().await;
        let console = console_for(&server).await;
        console
            .update_state(|state| {
                state.shopcart_form = ShopcartForm::new("3", "1001");
                state.show_flash("old", Severity::Warning);
            })
            .await;

        let outcome = console.dispatch(Command::ClearForm).await;
        assert!(matches!(outcome, Outcome::Local));

        let state = console.snapshot().await;
        assert!(state.shopcart_form.is_empty());
        assert!(state.flash.is_none());
    }
}
