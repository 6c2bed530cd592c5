//! Run one console command and render the resulting view.
//!
//! # Environment Variables
//!
//! - `SHOPCART_API_URL` - Base URL of the Shopcart API (overridden by `--api-url`)

use shopcart_console::Console;
use shopcart_console::api::{ApiError, ShopcartClient};
use shopcart_console::commands::{Command, Outcome};
use shopcart_console::components::{render_flash, render_results};
use shopcart_console::view::{CartItemForm, ShopcartForm, ViewState};
use shopcart_core::Severity;
use thiserror::Error;
use url::Url;

/// Errors that can occur while running a console command.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The API client could not be created.
    #[error("Client error: {0}")]
    Client(#[from] ApiError),

    /// The view could not be rendered as HTML.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// The view could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the resulting view is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Flash block followed by the results table.
    Html,
    /// The view state as pretty JSON.
    Json,
}

/// Field values supplied on the command line.
///
/// `shopcart_id` fills both the shopcart form and the item form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub shopcart_id: String,
    pub customer_id: String,
    pub product_id: String,
    pub price: String,
    pub quantity: String,
}

impl Fields {
    /// The view these fields describe.
    #[must_use]
    pub fn view_state(self) -> ViewState {
        ViewState::with_forms(
            ShopcartForm::new(self.shopcart_id.clone(), self.customer_id),
            CartItemForm {
                product_id: self.product_id,
                shopcart_id: self.shopcart_id,
                price: self.price,
                quantity: self.quantity,
            },
        )
    }
}

/// Run a command against the API at `api_url`.
///
/// Command failures do not make this fail; they end up in the view's flash.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built.
pub async fn run(api_url: Url, command: Command, fields: Fields) -> Result<ViewState, ConsoleError> {
    let client = ShopcartClient::new(api_url)?;
    let console = Console::with_state(client, fields.view_state());

    tracing::debug!(%command, "Running command");
    let outcome = console.dispatch(command).await;
    if let Outcome::Failed(err) = &outcome {
        tracing::warn!(error = %err, "Shopcart API request failed");
    }

    Ok(console.snapshot().await)
}

/// Render a view for the terminal.
///
/// # Errors
///
/// Returns error if rendering or serialization fails.
pub fn render(view: &ViewState, format: OutputFormat) -> Result<String, ConsoleError> {
    match format {
        OutputFormat::Html => {
            let flash = render_flash(view.flash.as_ref())?;
            let results = render_results(view.results.as_ref())?;
            Ok([flash, results]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// True when the view's flash is a danger message.
#[must_use]
pub fn is_danger(view: &ViewState) -> bool {
    view.flash
        .as_ref()
        .is_some_and(|flash| flash.severity == Severity::Danger)
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;

    fn fields(shopcart_id: &str) -> Fields {
        Fields {
            shopcart_id: shopcart_id.to_string(),
            ..Fields::default()
        }
    }

    #[test]
    fn test_fields_fill_both_forms() {
        let view = Fields {
            shopcart_id: "3".to_string(),
            customer_id: "1001".to_string(),
            product_id: "11".to_string(),
            price: "1.50".to_string(),
            quantity: "2".to_string(),
        }
        .view_state();

        assert_eq!(view.shopcart_form, ShopcartForm::new("3", "1001"));
        assert_eq!(view.item_form.shopcart_id, "3");
        assert_eq!(view.item_form.product_id, "11");
    }

    #[tokio::test]
    async fn test_retrieve_renders_html() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/shopcarts/3")
            .with_status(200)
            .with_body(r#"{"id": 3, "customer_id": 1001, "items": [{"product_id": 1, "price": 3, "quantity": 1}]}"#)
            .create_async()
            .await;

        let url = Url::parse(&server.url()).expect("url");
        let view = run(url, Command::Retrieve, fields("3")).await.expect("runs");

        assert!(!is_danger(&view));
        let html = render(&view, OutputFormat::Html).expect("renders");
        assert!(html.contains("alert-success"));
        assert!(html.contains("$3.00"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failure_is_danger_and_json_renders() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/shopcarts/99")
            .with_status(404)
            .with_body(r#"{"message": "Shopcart not found"}"#)
            .create_async()
            .await;

        let url = Url::parse(&server.url()).expect("url");
        let view = run(url, Command::Retrieve, fields("99")).await.expect("runs");

        assert!(is_danger(&view));
        let json: serde_json::Value =
            serde_json::from_str(&render(&view, OutputFormat::Json).expect("renders")).expect("json");
        assert_eq!(json["flash"]["message"], "Shopcart not found");
        assert_eq!(json["flash"]["severity"], "danger");
        mock.assert_async().await;
    }
}
