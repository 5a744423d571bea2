//! Outbound GET requests.

use std::collections::HashMap;

/// A fully built request, ready to hand to a [`Transport`](crate::Transport).
///
/// The storefront API is read-only, so every request is a body-less GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// A builder for constructing requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add multiple headers to the request.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Finish the builder.
    pub fn build(self) -> Request {
        Request {
            url: self.url,
            headers: self.headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_headers() {
        let request = RequestBuilder::new("https://example.test/products")
            .accept("application/json")
            .header("X-Trace", "abc")
            .build();

        assert_eq!(request.url, "https://example.test/products");
        assert_eq!(request.headers.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(request.headers.get("X-Trace").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_later_header_wins() {
        let request = RequestBuilder::new("https://example.test")
            .accept("text/plain")
            .headers(vec![("Accept".to_string(), "application/json".to_string())])
            .build();

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers["Accept"], "application/json");
    }
}
