//! Shopcart and cart item entities as returned by the Shopcart API.
//!
//! The API owns these records. The console only ever holds the copy from the
//! most recent response, so nothing here is mutable beyond plain field access.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::{CustomerId, ProductId, ShopcartId};
use super::price::Price;

/// A customer's collection of cart items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shopcart {
    /// Server-assigned identifier.
    pub id: ShopcartId,
    /// Owner of the shopcart.
    pub customer_id: CustomerId,
    /// Items in the order the server returned them.
    ///
    /// A missing or `null` field is read as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CartItem>,
}

impl Shopcart {
    /// Create an empty shopcart.
    #[must_use]
    pub const fn new(id: ShopcartId, customer_id: CustomerId) -> Self {
        Self {
            id,
            customer_id,
            items: Vec::new(),
        }
    }

    /// Builder-style helper to attach items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<CartItem>) -> Self {
        self.items = items;
        self
    }

    /// Number of items in the shopcart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A (product, price, quantity) line within a shopcart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier, unique within its shopcart.
    pub product_id: ProductId,
    /// Owning shopcart, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopcart_id: Option<ShopcartId>,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    /// Create a new cart item.
    #[must_use]
    pub const fn new(product_id: ProductId, price: Decimal, quantity: u32) -> Self {
        Self {
            product_id,
            shopcart_id: None,
            price,
            quantity,
        }
    }

    /// The unit price with currency information.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
