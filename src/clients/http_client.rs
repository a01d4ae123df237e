//! The request dispatcher.
//!
//! This module provides the [`HttpClient`] type: it holds the API root
//! configuration, builds the canonical request URL from endpoint path
//! segments, and performs exactly one HTTP call per request. No retries,
//! no timeout, no cancellation — a dispatched call either resolves with
//! the raw response or fails at the transport level, exactly once.

use std::collections::HashMap;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::path::{encode_segments, url_path_join, with_end_slash};
use crate::config::ApiConfig;

/// Client library version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The request dispatcher.
///
/// Builds well-formed absolute URLs from the API root and endpoint path
/// segments, then executes one HTTP call. Content negotiation is fixed:
/// every request is sent as `application/json`, and response bodies are
/// returned as raw text for the caller to parse defensively.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone (the underlying
/// connection pool is shared), making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use webapi_client::clients::{HttpClient, HttpRequest};
/// use webapi_client::{ApiConfig, ApiVersion, BaseUrl};
///
/// let config = ApiConfig::new(
///     BaseUrl::new("http://localhost:8888")?,
///     ApiVersion::new("v1")?,
/// );
/// let client = HttpClient::new(config);
///
/// let response = client.request(HttpRequest::get(["things"])).await?;
/// println!("status {}", response.code);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The immutable API root configuration.
    config: ApiConfig,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new dispatcher for the given API root.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("WebAPI Client Library v{CLIENT_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Returns the API root configuration this dispatcher was built with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Builds the canonical URL for the given endpoint path segments.
    ///
    /// Components are joined in order — base root, literal `api`, version,
    /// percent-encoded endpoint — with single separators, collapsed
    /// duplicate slashes, and exactly one trailing `/`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use webapi_client::clients::HttpClient;
    /// use webapi_client::{ApiConfig, ApiVersion, BaseUrl};
    ///
    /// let client = HttpClient::new(ApiConfig::new(
    ///     BaseUrl::new("http://h/").unwrap(),
    ///     ApiVersion::new("v1").unwrap(),
    /// ));
    ///
    /// assert_eq!(
    ///     client.endpoint_url(&["things".to_string(), "abc".to_string()]),
    ///     "http://h/api/v1/things/abc/"
    /// );
    /// ```
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &[String]) -> String {
        let url = url_path_join(&[
            self.config.base_url().as_ref(),
            "api",
            self.config.api_version().as_ref(),
            &encode_segments(endpoint),
        ]);
        with_end_slash(&url)
    }

    /// Dispatches one HTTP call and returns the raw response.
    ///
    /// The response body is returned untouched; parsing is the caller's
    /// responsibility. Any HTTP status counts as transport success here —
    /// whether a 404 or a 500 means failure is a per-operation decision
    /// made by the resource layer.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the call failed before a complete
    /// response was obtained (connection failure, invalid URL, interrupted
    /// body read).
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.endpoint_url(&request.endpoint);

        tracing::debug!("requesting {url}");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        builder = builder
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let code = response.status().as_u16();
        let headers = Self::parse_response_headers(response.headers());
        let text = response.text().await?;

        Ok(HttpResponse::new(code, headers, text))
    }

    /// Parses response headers into a `HashMap` keyed by lowercased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, BaseUrl};

    fn create_test_client(base: &str, version: &str) -> HttpClient {
        HttpClient::new(ApiConfig::new(
            BaseUrl::new(base).unwrap(),
            ApiVersion::new(version).unwrap(),
        ))
    }

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_endpoint_url_joins_root_api_version_and_collection() {
        let client = create_test_client("http://localhost:8888", "v1");
        assert_eq!(
            client.endpoint_url(&segments(&["things"])),
            "http://localhost:8888/api/v1/things/"
        );
    }

    #[test]
    fn test_endpoint_url_appends_identifier_segment() {
        let client = create_test_client("http://localhost:8888", "v1");
        assert_eq!(
            client.endpoint_url(&segments(&["things", "abc123"])),
            "http://localhost:8888/api/v1/things/abc123/"
        );
    }

    #[test]
    fn test_endpoint_url_tolerates_slash_happy_configuration() {
        let client = create_test_client("http://h/", "v1");
        assert_eq!(
            client.endpoint_url(&segments(&["things"])),
            "http://h/api/v1/things/"
        );
    }

    #[test]
    fn test_endpoint_url_escapes_identifier_reserved_characters() {
        let client = create_test_client("http://h", "v1");
        assert_eq!(
            client.endpoint_url(&segments(&["things", "a/b"])),
            "http://h/api/v1/things/a%2Fb/"
        );
    }

    #[test]
    fn test_endpoint_url_includes_base_mount_path() {
        let client = create_test_client("http://h/myapp", "v2");
        assert_eq!(
            client.endpoint_url(&segments(&["things"])),
            "http://h/myapp/api/v2/things/"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
