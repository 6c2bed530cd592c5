//! Console page handlers.
//!
//! The page is a plain form. Every button submits the whole form with its own
//! id as `action`; the handler rebuilds the view from the fields, runs that
//! command and renders the result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::commands::Command;
use crate::components::{render_flash, render_results};
use crate::console::Console;
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;
use crate::view::{CartItemForm, ShopcartForm, ViewState};

/// Fields posted by the console page.
#[derive(Debug, Default, Deserialize)]
pub struct ConsoleForm {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub shopcart_id: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub cartitem_shopcart_id: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
}

impl ConsoleForm {
    /// The view these fields describe, with empty output regions.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState::with_forms(
            ShopcartForm::new(&*self.shopcart_id, &*self.customer_id),
            CartItemForm {
                product_id: self.product_id.clone(),
                shopcart_id: self.cartitem_shopcart_id.clone(),
                price: self.price.clone(),
                quantity: self.quantity.clone(),
            },
        )
    }
}

/// Console page template.
#[derive(Template, WebTemplate)]
#[template(path = "console.html")]
pub struct ConsoleTemplate {
    pub api_url: String,
    pub state: ViewState,
    pub flash_html: String,
    pub results_html: String,
}

/// Flash and results regions only.
#[derive(Template, WebTemplate)]
#[template(path = "partials/regions.html")]
pub struct RegionsTemplate {
    pub flash_html: String,
    pub results_html: String,
}

impl ConsoleTemplate {
    fn new(state: &AppState, view: ViewState) -> Result<Self> {
        Ok(Self {
            api_url: state.client().base_url().to_string(),
            flash_html: render_flash(view.flash.as_ref())?,
            results_html: render_results(view.results.as_ref())?,
            state: view,
        })
    }
}

/// Show the console with empty forms.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>) -> Result<ConsoleTemplate> {
    ConsoleTemplate::new(&state, ViewState::default())
}

/// Run a command and return the whole page.
#[instrument(skip_all, fields(action = %form.action))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ConsoleForm>,
) -> Result<ConsoleTemplate> {
    let view = run(&state, &form).await?;
    ConsoleTemplate::new(&state, view)
}

/// Run a command and return the flash and results regions.
#[instrument(skip_all, fields(action = %form.action))]
pub async fn fragment(
    State(state): State<AppState>,
    Form(form): Form<ConsoleForm>,
) -> Result<RegionsTemplate> {
    let view = run(&state, &form).await?;
    Ok(RegionsTemplate {
        flash_html: render_flash(view.flash.as_ref())?,
        results_html: render_results(view.results.as_ref())?,
    })
}

async fn run(state: &AppState, form: &ConsoleForm) -> Result<ViewState> {
    let command: Command = form.action.parse()?;
    add_breadcrumb("console", "Command triggered", &[("trigger", command.trigger())]);

    let console = Console::with_state(state.client().clone(), form.view_state());
    console.dispatch(command).await;
    Ok(console.snapshot().await)
}
