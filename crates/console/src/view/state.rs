//! The console's single piece of mutable state.

use serde::{Deserialize, Serialize};
use shopcart_core::{CartItem, Severity, Shopcart};

use super::flash::FlashMessage;
use super::forms::{CartItemForm, ShopcartForm};
use crate::components::ResultsTable;

/// Form values, flash slot and last results table.
///
/// Holds no entity cache: after a command completes, the only trace of the
/// response is what it wrote into these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Shopcart id / customer id inputs.
    pub shopcart_form: ShopcartForm,
    /// Cart item inputs.
    pub item_form: CartItemForm,
    /// The flash region; `None` when empty.
    pub flash: Option<FlashMessage>,
    /// The search results region; `None` when nothing has been rendered.
    pub results: Option<ResultsTable>,
}

impl ViewState {
    /// Create a view with the given form values and empty output regions.
    #[must_use]
    pub const fn with_forms(shopcart_form: ShopcartForm, item_form: CartItemForm) -> Self {
        Self {
            shopcart_form,
            item_form,
            flash: None,
            results: None,
        }
    }

    /// Copy a shopcart's id and customer id into the shopcart form.
    pub fn update_form_from_shopcart(&mut self, shopcart: &Shopcart) {
        self.shopcart_form.shopcart_id = shopcart.id.to_string();
        self.shopcart_form.customer_id = shopcart.customer_id.to_string();
    }

    /// Copy a cart item into the item form.
    ///
    /// The item's shopcart id is only written when the item carries one.
    pub fn populate_item_form(&mut self, item: &CartItem) {
        self.item_form.product_id = item.product_id.to_string();
        if let Some(shopcart_id) = item.shopcart_id {
            self.item_form.shopcart_id = shopcart_id.to_string();
        }
        self.item_form.price = format!("{:.2}", item.unit_price().rounded());
        self.item_form.quantity = item.quantity.to_string();
    }

    /// Reset the shopcart id and customer id fields.
    pub fn clear_shopcart_form(&mut self) {
        self.shopcart_form.clear();
    }

    /// Reset the product id, item shopcart id, price and quantity fields.
    pub fn clear_cart_item_form(&mut self) {
        self.item_form.clear();
    }

    /// Replace the flash region with one message.
    pub fn show_flash(&mut self, message: impl Into<String>, severity: Severity) {
        self.flash = Some(FlashMessage::new(message, severity));
    }

    /// Empty the flash region.
    pub fn clear_flash(&mut self) {
        self.flash = None;
    }

    /// Replace the results region.
    pub fn show_results(&mut self, table: ResultsTable) {
        self.results = Some(table);
    }
}
