//! Cart item commands. Items are addressed by `(shopcart_id, product_id)`.

use serde_json::json;
use shopcart_core::{CartItem, Severity};

use super::json_scalar;
use crate::api::{ApiError, ApiRequest, ApiResponse, Route};
use crate::view::{SUCCESS, ViewState};

fn item_route(state: &ViewState) -> Route {
    Route::Item {
        shopcart_id: state.item_form.shopcart_id.trim().to_string(),
        product_id: state.item_form.product_id.trim().to_string(),
    }
}

pub fn create_request(state: &ViewState) -> ApiRequest {
    let form = &state.item_form;
    ApiRequest::post(
        Route::Items(form.shopcart_id.trim().to_string()),
        json!({
            "price": json_scalar(&form.price),
            "product_id": json_scalar(&form.product_id),
            "quantity": json_scalar(&form.quantity),
            "shopcart_id": json_scalar(&form.shopcart_id),
        }),
    )
}

pub fn update_request(state: &ViewState) -> ApiRequest {
    let form = &state.item_form;
    ApiRequest::put(
        item_route(state),
        json!({
            "product_id": json_scalar(&form.product_id),
            "shopcart_id": json_scalar(&form.shopcart_id),
            "new_quantity": json_scalar(&form.quantity),
            "new_price": json_scalar(&form.price),
        }),
    )
}

pub fn delete_request(state: &ViewState) -> ApiRequest {
    let form = &state.item_form;
    ApiRequest::delete(item_route(state)).with_body(json!({
        "product_id": json_scalar(&form.product_id),
        "shopcart_id": json_scalar(&form.shopcart_id),
    }))
}

pub fn show_created(state: &mut ViewState, response: &ApiResponse) -> Result<(), ApiError> {
    let item: CartItem = response.json()?;
    state.populate_item_form(&item);
    state.show_flash(SUCCESS, Severity::Success);
    Ok(())
}

/// Update and delete both reset the item form; the response body is unused.
pub fn changed(state: &mut ViewState, _response: &ApiResponse) -> Result<(), ApiError> {
    state.clear_cart_item_form();
    state.show_flash(SUCCESS, Severity::Success);
    Ok(())
}

pub fn clear_form(state: &mut ViewState) {
    state.clear_cart_item_form();
    state.clear_flash();
}
