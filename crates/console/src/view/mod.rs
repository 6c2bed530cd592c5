//! Console view state.
//!
//! Everything the page shows between commands lives in [`ViewState`]: the two
//! forms, the flash slot and the last rendered results table. Commands mutate
//! it; templates read it.

mod flash;
mod forms;
mod state;

pub use flash::{FlashMessage, GENERIC_ERROR, SUCCESS};
pub use forms::{CartItemForm, ShopcartForm};
pub use state::ViewState;
