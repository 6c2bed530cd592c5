//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health             - Health check
//! GET  /                   - Console page with empty forms
//! POST /                   - Run the command named by `action`, return the page
//! POST /fragments/results  - Run the command, return the flash and results regions
//! ```

pub mod console;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the console.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(console::index).post(console::submit))
        .route("/fragments/results", post(console::fragment))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the Shopcart API.
async fn health() -> &'static str {
    "ok"
}
