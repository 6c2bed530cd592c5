//! Form field values.
//!
//! Fields hold raw text exactly as typed. A field counts as present when it
//! has non-whitespace content.

use serde::{Deserialize, Serialize};

/// The shopcart form: shopcart id and customer id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopcartForm {
    /// `shopcart_id` input.
    #[serde(default)]
    pub shopcart_id: String,
    /// `customer_id` input.
    #[serde(default)]
    pub customer_id: String,
}

impl ShopcartForm {
    /// Create a form with both fields set.
    #[must_use]
    pub fn new(shopcart_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            shopcart_id: shopcart_id.into(),
            customer_id: customer_id.into(),
        }
    }

    /// Trimmed shopcart id, if present.
    #[must_use]
    pub fn shopcart_id(&self) -> Option<&str> {
        present(&self.shopcart_id)
    }

    /// Trimmed customer id, if present.
    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        present(&self.customer_id)
    }

    /// Reset both fields.
    pub fn clear(&mut self) {
        self.shopcart_id.clear();
        self.customer_id.clear();
    }

    /// True when both fields are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shopcart_id.is_empty() && self.customer_id.is_empty()
    }
}

/// The cart item form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemForm {
    /// `product_id` input.
    #[serde(default)]
    pub product_id: String,
    /// `cartitem_shopcart_id` input.
    #[serde(default)]
    pub shopcart_id: String,
    /// `price` input.
    #[serde(default)]
    pub price: String,
    /// `quantity` input.
    #[serde(default)]
    pub quantity: String,
}

impl CartItemForm {
    /// Reset every field.
    pub fn clear(&mut self) {
        self.product_id.clear();
        self.shopcart_id.clear();
        self.price.clear();
        self.quantity.clear();
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_id.is_empty()
            && self.shopcart_id.is_empty()
            && self.price.is_empty()
            && self.quantity.is_empty()
    }
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
