//! Core types for the Shopcart console.
//!
//! This module provides type-safe wrappers for the shopcart domain.

pub mod id;
pub mod price;
pub mod shopcart;
pub mod status;

pub use id::*;
pub use price::Price;
pub use shopcart::{CartItem, Shopcart};
pub use status::*;
