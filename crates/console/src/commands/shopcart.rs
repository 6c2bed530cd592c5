//! Shopcart commands: create, update, retrieve, delete, clear, search and the
//! form reset.

use serde_json::{Value, json};
use shopcart_core::{Severity, Shopcart};

use crate::api::{ApiError, ApiRequest, ApiResponse, Route};
use crate::components::ResultsTable;
use crate::view::{SUCCESS, ViewState};

pub const DELETED: &str = "Shopcart has been Deleted!";
pub const CLEARED: &str = "Shopcart has been cleared!";

fn shopcart_id(state: &ViewState) -> String {
    state.shopcart_form.shopcart_id.trim().to_string()
}

/// Customer ids are opaque, so the typed text goes out as a string.
fn customer_body(state: &ViewState) -> Value {
    json!({ "customer_id": state.shopcart_form.customer_id.trim() })
}

pub fn create_request(state: &ViewState) -> ApiRequest {
    ApiRequest::post(Route::Shopcarts, customer_body(state))
}

pub fn update_request(state: &ViewState) -> ApiRequest {
    ApiRequest::put(Route::Shopcart(shopcart_id(state)), customer_body(state))
}

pub fn retrieve_request(state: &ViewState) -> ApiRequest {
    ApiRequest::get(Route::Shopcart(shopcart_id(state)))
}

pub fn delete_request(state: &ViewState) -> ApiRequest {
    ApiRequest::delete(Route::Shopcart(shopcart_id(state)))
}

pub fn clear_cart_request(state: &ViewState) -> ApiRequest {
    ApiRequest::new(reqwest::Method::PUT, Route::ClearShopcart(shopcart_id(state)))
}

/// Single lookup when a shopcart id is present, otherwise the collection,
/// filtered by customer when a customer id is present.
pub fn search_request(state: &ViewState) -> ApiRequest {
    if let Some(id) = state.shopcart_form.shopcart_id() {
        return ApiRequest::get(Route::Shopcart(id.to_string()));
    }

    let request = ApiRequest::get(Route::Shopcarts);
    match state.shopcart_form.customer_id() {
        Some(customer_id) => request.with_query("customer_id", customer_id),
        None => request,
    }
}

pub fn show_shopcart_in_form(state: &mut ViewState, response: &ApiResponse) -> Result<(), ApiError> {
    let shopcart: Shopcart = response.json()?;
    state.update_form_from_shopcart(&shopcart);
    state.show_flash(SUCCESS, Severity::Success);
    Ok(())
}

pub fn show_retrieved(state: &mut ViewState, response: &ApiResponse) -> Result<(), ApiError> {
    let shopcart: Shopcart = response.json()?;
    show_single(state, &shopcart);
    Ok(())
}

pub fn retrieve_failed(state: &mut ViewState, err: &ApiError) {
    state.clear_shopcart_form();
    super::flash_server_message(state, err);
}

pub fn deleted(state: &mut ViewState, _response: &ApiResponse) -> Result<(), ApiError> {
    state.clear_shopcart_form();
    state.show_flash(DELETED, Severity::Success);
    Ok(())
}

pub fn cleared(state: &mut ViewState, _response: &ApiResponse) -> Result<(), ApiError> {
    state.clear_shopcart_form();
    state.show_flash(CLEARED, Severity::Success);
    Ok(())
}

/// An array body is a collection result; anything else is one shopcart.
pub fn show_search_results(state: &mut ViewState, response: &ApiResponse) -> Result<(), ApiError> {
    if !matches!(response.body, Some(Value::Array(_))) {
        return show_retrieved(state, response);
    }

    let shopcarts: Vec<Shopcart> = response.json()?;
    state.show_results(ResultsTable::list(&shopcarts));
    if let Some(first) = shopcarts.first() {
        state.update_form_from_shopcart(first);
    }
    state.show_flash(SUCCESS, Severity::Success);
    Ok(())
}

pub fn clear_form(state: &mut ViewState) {
    state.clear_shopcart_form();
    state.clear_flash();
}

fn show_single(state: &mut ViewState, shopcart: &Shopcart) {
    state.update_form_from_shopcart(shopcart);
    state.show_results(ResultsTable::single(shopcart));
    state.show_flash(SUCCESS, Severity::Success);
}
