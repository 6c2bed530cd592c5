//! Typed description of a single Shopcart API request.
//!
//! Commands build an [`ApiRequest`] from the form values without touching the
//! network, which keeps request construction testable on its own.

use std::fmt;

use reqwest::Method;
use serde_json::Value;

/// Collection path shared by every shopcart endpoint.
const SHOPCARTS: [&str; 2] = ["api", "shopcarts"];

/// A Shopcart API resource.
///
/// Identifiers are kept as the raw form text. An empty identifier still
/// produces a path, and the API's answer decides the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/api/shopcarts`
    Shopcarts,
    /// `/api/shopcarts/{id}`
    Shopcart(String),
    /// `/api/shopcarts/{id}/clear`
    ClearShopcart(String),
    /// `/api/shopcarts/{id}/items`
    Items(String),
    /// `/api/shopcarts/{id}/items/{product_id}`
    Item {
        shopcart_id: String,
        product_id: String,
    },
}

impl Route {
    /// Path segments below the API base URL.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = SHOPCARTS.to_vec();
        match self {
            Self::Shopcarts => {}
            Self::Shopcart(id) => segments.push(id.as_str()),
            Self::ClearShopcart(id) => segments.extend([id.as_str(), "clear"]),
            Self::Items(id) => segments.extend([id.as_str(), "items"]),
            Self::Item {
                shopcart_id,
                product_id,
            } => segments.extend([shopcart_id.as_str(), "items", product_id.as_str()]),
        }
        segments
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// One request against the Shopcart API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Target resource.
    pub route: Route,
    /// Query string pairs, in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without query or body.
    #[must_use]
    pub const fn new(method: Method, route: Route) -> Self {
        Self {
            method,
            route,
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET` request.
    #[must_use]
    pub const fn get(route: Route) -> Self {
        Self::new(Method::GET, route)
    }

    /// `POST` request with a JSON body.
    #[must_use]
    pub fn post(route: Route, body: Value) -> Self {
        Self::new(Method::POST, route).with_body(body)
    }

    /// `PUT` request with a JSON body.
    #[must_use]
    pub fn put(route: Route, body: Value) -> Self {
        Self::new(Method::PUT, route).with_body(body)
    }

    /// `DELETE` request.
    #[must_use]
    pub const fn delete(route: Route) -> Self {
        Self::new(Method::DELETE, route)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query pair.
    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.route)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Shopcarts.to_string(), "/api/shopcarts");
        assert_eq!(Route::Shopcart("7".into()).to_string(), "/api/shopcarts/7");
        assert_eq!(
            Route::ClearShopcart("7".into()).to_string(),
            "/api/shopcarts/7/clear"
        );
        assert_eq!(Route::Items("7".into()).to_string(), "/api/shopcarts/7/items");
        assert_eq!(
            Route::Item {
                shopcart_id: "7".into(),
                product_id: "42".into(),
            }
            .to_string(),
            "/api/shopcarts/7/items/42"
        );
    }

    #[test]
    fn test_empty_id_keeps_segment() {
        assert_eq!(
            Route::Shopcart(String::new()).segments(),
            vec!["api", "shopcarts", ""]
        );
    }

    #[test]
    fn test_request_display() {
        let request = ApiRequest::get(Route::Shopcarts).with_query("customer_id", "1001");
        assert_eq!(request.to_string(), "GET /api/shopcarts?customer_id=1001");

        let request = ApiRequest::post(Route::Shopcarts, json!({"customer_id": "1001"}));
        assert_eq!(request.to_string(), "POST /api/shopcarts");
        assert_eq!(request.body, Some(json!({"customer_id": "1001"})));
    }
}
