//! Fragment rendering.
//!
//! Each display region has its own partial so the full page and the
//! fragment endpoint share markup. Askama escapes every interpolated value.

use askama::Template;

use super::results_table::ResultsTable;
use crate::view::FlashMessage;

/// The `flash_message` region contents.
#[derive(Template)]
#[template(path = "partials/flash.html")]
pub struct FlashTemplate<'a> {
    pub flash: &'a FlashMessage,
}

/// The `search_results` region contents.
#[derive(Template)]
#[template(path = "partials/results_table.html")]
pub struct ResultsTableTemplate<'a> {
    pub table: &'a ResultsTable,
}

/// Render the flash region. An empty flash renders as nothing.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_flash(flash: Option<&FlashMessage>) -> askama::Result<String> {
    flash.map_or_else(|| Ok(String::new()), |flash| FlashTemplate { flash }.render())
}

/// Render the results region. No table renders as nothing.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_results(table: Option<&ResultsTable>) -> askama::Result<String> {
    table.map_or_else(
        || Ok(String::new()),
        |table| ResultsTableTemplate { table }.render(),
    )
}
