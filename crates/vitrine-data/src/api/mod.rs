//! The storefront API client.
//!
//! [`ApiClient`] wraps the transport layer with the conventions every
//! endpoint shares: base URL, a default JSON content type, bearer-token
//! injection from the credential store (with a per-request opt-out for
//! public endpoints), 204/non-JSON handling, and error-body
//! normalization. Endpoint groups mirror the API sections.

pub mod auth;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod upload;
pub mod wishlist;

pub use auth::AuthApi;
pub use coupons::CouponsApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use reviews::ReviewsApi;
pub use upload::UploadApi;
pub use wishlist::WishlistApi;

use crate::credentials::CredentialStore;
use crate::error::normalize_error_body;
use crate::{ApiError, FetchClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// API client configuration: one fixed origin for all calls.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the storefront API.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// The storefront API client.
#[derive(Clone)]
pub struct ApiClient {
    fetch: FetchClient,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Create a client over the given configuration and credential store.
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let fetch = FetchClient::new()
            .with_base_url(config.base_url)
            .with_default_header("Content-Type", "application/json");
        Self { fetch, credentials }
    }

    /// The credential store behind this client.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// The transport client (distinct code paths like login and upload
    /// build their requests on it directly).
    pub(crate) fn transport(&self) -> &FetchClient {
        &self.fetch
    }

    /// Begin a request against an API endpoint.
    pub fn request(&self, method: Method, endpoint: &str) -> ApiRequest<'_> {
        ApiRequest {
            client: self,
            inner: self.fetch.request(method, endpoint),
            endpoint: endpoint.to_string(),
            skip_auth: false,
        }
    }

    /// Begin a GET request.
    pub fn get(&self, endpoint: &str) -> ApiRequest<'_> {
        self.request(Method::Get, endpoint)
    }

    /// Begin a POST request.
    pub fn post(&self, endpoint: &str) -> ApiRequest<'_> {
        self.request(Method::Post, endpoint)
    }

    /// Begin a PATCH request.
    pub fn patch(&self, endpoint: &str) -> ApiRequest<'_> {
        self.request(Method::Patch, endpoint)
    }

    /// Begin a DELETE request.
    pub fn delete(&self, endpoint: &str) -> ApiRequest<'_> {
        self.request(Method::Delete, endpoint)
    }

    /// Authentication and profile endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    /// Catalog endpoints.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }

    /// Order endpoints.
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { client: self }
    }

    /// Image upload endpoint.
    pub fn upload(&self) -> UploadApi<'_> {
        UploadApi { client: self }
    }

    /// Coupon endpoints.
    pub fn coupons(&self) -> CouponsApi<'_> {
        CouponsApi { client: self }
    }

    /// Review endpoints.
    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi { client: self }
    }

    /// Wishlist endpoints.
    pub fn wishlist(&self) -> WishlistApi<'_> {
        WishlistApi { client: self }
    }
}

/// A request in flight against the API.
pub struct ApiRequest<'a> {
    client: &'a ApiClient,
    inner: crate::ClientRequestBuilder,
    endpoint: String,
    skip_auth: bool,
}

impl ApiRequest<'_> {
    /// Skip bearer-token injection (public endpoints).
    pub fn public(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    /// Add a header, overriding any default.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner = self.inner.header(key, value);
        self
    }

    /// Set a JSON body.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        self.inner = self.inner.json(value)?;
        Ok(self)
    }

    /// Send the request.
    ///
    /// Resolves to `Ok(None)` for a 204 or non-JSON success, `Ok(Some)`
    /// for a parsed JSON body, and `Err` for transport faults and
    /// non-success statuses (with the body normalized into one message).
    pub async fn send<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        let mut inner = self.inner;
        if !self.skip_auth {
            if let Some(token) = self.client.credentials.load() {
                inner = inner.bearer_auth(token);
            }
        }

        let response = inner.send().await.map_err(|e| {
            log::error!("request to {} failed: {}", self.endpoint, e);
            ApiError::from(e)
        })?;

        if !response.is_success() {
            let error = error_from_response(&response);
            log::error!("API error on {}: {}", self.endpoint, error);
            return Err(error);
        }

        decode_body(&response)
    }

    /// Send the request and require a body.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.send().await?.ok_or(ApiError::NoContent)
    }

    /// Send the request and discard any body.
    pub async fn execute(self) -> Result<(), ApiError> {
        self.send::<serde_json::Value>().await?;
        Ok(())
    }
}

/// Turn a non-success response into an [`ApiError`].
fn error_from_response(response: &Response) -> ApiError {
    ApiError::Api {
        status: response.status,
        message: normalize_error_body(response.bytes()),
    }
}

/// Decode a successful response body per the client contract.
fn decode_body<T: DeserializeOwned>(response: &Response) -> Result<Option<T>, ApiError> {
    if response.status == 204 {
        return Ok(None);
    }
    if !response.is_json() {
        return Ok(None);
    }
    let parsed = response.json()?;
    Ok(Some(parsed))
}

/// Builder for endpoint query strings.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Render as `?k=v&...`, or an empty string when there are no pairs.
    pub fn render(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", crate::request::urlencode(k), crate::request::urlencode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{encoded}")
    }
}
