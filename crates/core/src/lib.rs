//! Shopcart Core - Shared types library.
//!
//! This crate provides the entity types used across the Shopcart console
//! components:
//! - `console` - Controller, HTML console server and Shopcart API client
//! - `cli` - Command-line front end for the same controller
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! rendering. The remote Shopcart API owns all entity state; these types are
//! the client's transient view of it.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, shopcart entities and flash severities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
