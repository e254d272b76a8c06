//! HTTP client utilities for Vitrine.
//!
//! Provides the transport layer (request builder, response, browser fetch
//! on wasm32) and the application layer ([`api::ApiClient`]) that talks to
//! the storefront REST API: bearer-token injection, error-body
//! normalization, and one endpoint group per API section.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_data::api::{ApiClient, ApiConfig};
//! use vitrine_data::credentials::MemoryCredentialStore;
//! use std::sync::Arc;
//!
//! let client = ApiClient::new(ApiConfig::default(), Arc::new(MemoryCredentialStore::new()));
//!
//! // Public catalog read
//! let products = client.products().featured(8).await?;
//!
//! // Authenticated call; the bearer token comes from the credential store
//! let orders = client.orders().my_orders(&Default::default()).await?;
//! ```

pub mod api;
pub mod credentials;
mod error;
mod request;
mod response;

pub use error::{ApiError, FetchError};
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;

/// Low-level HTTP client: a base URL plus default headers.
///
/// On wasm32 requests go through the browser fetch API; on native targets
/// `send` returns an inert empty response (testing/development).
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PATCH request.
    pub fn patch(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Patch, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
#[derive(Debug, Clone)]
pub struct ClientRequestBuilder {
    pub(crate) builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the request body as an urlencoded form.
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.builder = self.builder.form(fields);
        self
    }

    /// Set the request body as a single-file multipart form.
    pub fn multipart_file(
        mut self,
        field: impl AsRef<str>,
        filename: impl AsRef<str>,
        content_type: impl AsRef<str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.builder = self
            .builder
            .multipart_file(field, filename, content_type, bytes);
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, FetchError> {
        use gloo_net::http::Method as GlooMethod;

        let method = match self.builder.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Patch => GlooMethod::PATCH,
            Method::Delete => GlooMethod::DELETE,
        };

        let mut request = gloo_net::http::RequestBuilder::new(&self.builder.url).method(method);
        for (key, value) in &self.builder.headers {
            request = request.header(key, value);
        }

        let request = match self.builder.body {
            Some(body) => request
                .body(js_sys::Uint8Array::from(body.as_slice()))
                .map_err(|e| FetchError::RequestError(e.to_string()))?,
            None => request
                .build()
                .map_err(|e| FetchError::RequestError(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> =
            response.headers().entries().collect();
        let body = response
            .binary()
            .await
            .map_err(|e| FetchError::ParseError(e.to_string()))?;

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        // Empty response for non-WASM builds (testing/development)
        Ok(Response::new(200, HashMap::new(), Vec::new()))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{ApiClient, ApiConfig};
    pub use crate::credentials::{CredentialStore, MemoryCredentialStore};
    pub use crate::{ApiError, FetchClient, FetchError, Method, Response};
}
