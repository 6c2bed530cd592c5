//! Shopcart API client.
//!
//! This module provides:
//! - [`ShopcartClient`] for sending requests to the Shopcart REST API
//! - [`ApiRequest`] and [`Route`], a typed description of one request
//! - [`ApiError`], which separates failures that carry a server message from
//!   those that do not
//!
//! # Endpoints
//!
//! ```text
//! GET    /api/shopcarts                          - List (optionally ?customer_id=)
//! POST   /api/shopcarts                          - Create
//! GET    /api/shopcarts/{id}                     - Retrieve
//! PUT    /api/shopcarts/{id}                     - Update
//! DELETE /api/shopcarts/{id}                     - Delete
//! PUT    /api/shopcarts/{id}/clear               - Remove every item
//! POST   /api/shopcarts/{id}/items               - Add an item
//! PUT    /api/shopcarts/{id}/items/{product_id}  - Change price and quantity
//! DELETE /api/shopcarts/{id}/items/{product_id}  - Remove an item
//! ```

mod client;
mod error;
mod request;

pub use client::{ApiResponse, ShopcartClient};
pub use error::{ApiError, ErrorBody};
pub use request::{ApiRequest, Route};
