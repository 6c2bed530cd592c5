//! Shopcart REST API client.
//!
//! Sends one [`ApiRequest`] at a time. There is no timeout, no retry and no
//! cancellation: a failed request surfaces its error once.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{ApiError, ErrorBody};
use super::request::ApiRequest;

/// Shopcart API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ShopcartClient {
    inner: Arc<ShopcartClientInner>,
}

struct ShopcartClientInner {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for ShopcartClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopcartClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// A successful API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Decoded JSON body; `None` for an empty body.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Decode the body into a typed entity.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if the body is empty or has the wrong shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| ApiError::Parse("empty response body".to_string()))?;
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl ShopcartClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self {
            inner: Arc::new(ShopcartClientInner { client, base_url }),
        }
    }

    /// Base URL all routes are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve the full URL of a request.
    ///
    /// Path segments are percent-encoded, so form text can never escape its
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the base URL cannot carry a path.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Url(format!("{} cannot be a base", self.inner.base_url)))?
            .pop_if_empty()
            .extend(request.route.segments());

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Send a request.
    ///
    /// Any 2xx status is success. Everything else, including transport
    /// failures, is an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success responses (with the body's
    /// `message` when present), `ApiError::Http` for transport failures and
    /// `ApiError::Parse` for a success body that is not JSON.
    #[instrument(skip(self, request), fields(method = %request.method, route = %request.route))]
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(request)?;

        let mut builder = self.inner.client.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Shopcart API request failed");
            ApiError::Http(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = ErrorBody::message_from(&text);
            warn!(status = status.as_u16(), message = ?message, "Shopcart API error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, "Shopcart API returned a non-JSON body");
                ApiError::Parse(e.to_string())
            })?)
        };

        debug!(status = status.as_u16(), "Shopcart API request succeeded");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::api::Route;

    async fn create_server_and_client() -> (mockito::ServerGuard, ShopcartClient) {
        let server = Server::new_async().await;
        let base_url = Url::parse(&server.url()).expect("mock server url");
        let client = ShopcartClient::new(base_url).expect("client builds");
        (server, client)
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let base = Url::parse("http://carts.internal/v2/").expect("url");
        let client = ShopcartClient::new(base).expect("client builds");

        let request = ApiRequest::get(Route::Item {
            shopcart_id: "3".into(),
            product_id: "12".into(),
        });
        assert_eq!(
            client.url_for(&request).expect("url").as_str(),
            "http://carts.internal/v2/api/shopcarts/3/items/12"
        );
    }

    #[test]
    fn test_url_for_encodes_segments_and_query() {
        let base = Url::parse("http://carts.internal").expect("url");
        let client = ShopcartClient::new(base).expect("client builds");

        let request = ApiRequest::get(Route::Shopcart("1/../2".into()));
        assert_eq!(
            client.url_for(&request).expect("url").as_str(),
            "http://carts.internal/api/shopcarts/1%2F..%2F2"
        );

        let request = ApiRequest::get(Route::Shopcarts).with_query("customer_id", "a b");
        assert_eq!(
            client.url_for(&request).expect("url").as_str(),
            "http://carts.internal/api/shopcarts?customer_id=a+b"
        );
    }

    #[tokio::test]
    async fn test_send_success_with_body() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("POST", "/api/shopcarts")
            .match_body(Matcher::Json(json!({"customer_id": "1001"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 1, "customer_id": 1001, "items": []}"#)
            .create_async()
            .await;

        let request = ApiRequest::post(Route::Shopcarts, json!({"customer_id": "1001"}));
        let response = client.send(&request).await.expect("request succeeds");

        assert_eq!(response.status, StatusCode::CREATED);
        let shopcart: shopcart_core::Shopcart = response.json().expect("decodes");
        assert_eq!(shopcart.id.as_i64(), 1);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_no_content() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("DELETE", "/api/shopcarts/4")
            .with_status(204)
            .create_async()
            .await;

        let response = client
            .send(&ApiRequest::delete(Route::Shopcart("4".into())))
            .await
            .expect("request succeeds");

        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert_eq!(response.body, None);
        assert!(response.json::<Value>().is_err());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_error_with_message() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/api/shopcarts/99")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": 404, "error": "Not Found", "message": "Shopcart not found"}"#)
            .create_async()
            .await;

        let err = client
            .send(&ApiRequest::get(Route::Shopcart("99".into())))
            .await
            .expect_err("request fails");

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Shopcart not found"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_error_without_message() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("PUT", "/api/shopcarts/5/clear")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let err = client
            .send(&ApiRequest::new(
                reqwest::Method::PUT,
                Route::ClearShopcart("5".into()),
            ))
            .await
            .expect_err("request fails");

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.server_message(), None);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_success_with_invalid_json() {
        let (mut server, client) = create_server_and_client().await;

        let mock = server
            .mock("GET", "/api/shopcarts")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = client
            .send(&ApiRequest::get(Route::Shopcarts))
            .await
            .expect_err("body is not JSON");

        assert!(matches!(err, ApiError::Parse(_)));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let base = Url::parse(&format!("http://{addr}")).expect("url");
        let client = ShopcartClient::new(base).expect("client builds");

        let err = client
            .send(&ApiRequest::get(Route::Shopcarts))
            .await
            .expect_err("nothing listens");

        assert!(matches!(err, ApiError::Http(_)));
        assert_eq!(err.server_message(), None);
    }
}
