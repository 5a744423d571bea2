//! HTTP client utilities for the storefront browser.
//!
//! Provides a small, ergonomic API for read-only JSON requests against the
//! product repository. The wire work is delegated to a [`Transport`] so the
//! same client runs over `reqwest` in the binary and over [`MockTransport`] in
//! tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_data::{FetchClient, ReqwestTransport, DEFAULT_TIMEOUT};
//!
//! let transport = Arc::new(ReqwestTransport::new(DEFAULT_TIMEOUT)?);
//! let client = FetchClient::new(transport).with_base_url("https://fakestoreapi.com");
//!
//! let products: Vec<serde_json::Value> = client
//!     .get("/products")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
pub mod mock;
mod request;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;

pub use error::FetchError;
pub use http::StatusCode;
pub use mock::MockTransport;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};

/// HTTP client for outbound requests.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a new HTTP client over `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport,
        }
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

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
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

        let builder = RequestBuilder::new(full_url).headers(self.default_headers.clone());

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let request = self.builder.build();
        if !(request.url.starts_with("http://") || request.url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(request.url));
        }

        tracing::debug!(url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(
            status = %response.status,
            bytes = response.body.len(),
            "received response"
        );
        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response, StatusCode, Transport};
}
