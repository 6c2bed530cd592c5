//! Shopcart console library.
//!
//! A controller for the Shopcart REST API: an explicit command table over a
//! view state, a typed results table, and the axum server that puts both on
//! a page.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod commands;
pub mod components;
pub mod config;
pub mod console;
pub mod error;
pub mod routes;
pub mod state;
pub mod view;

use axum::Router;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

pub use console::Console;
pub use state::AppState;

/// Build the console application with request tracing.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
