//! The per-collection resource client.
//!
//! This module provides [`ResourceClient`], one instance of which is bound
//! to one named REST collection for its lifetime. Each of the four
//! operations follows the same normalization pattern: dispatch, branch on
//! transport outcome, validate the HTTP status, defensively parse the
//! body, and produce exactly one `Ok` or one [`Rejection`].
//!
//! Transport-level success does not imply business-level success: a call
//! that comes back with an unexpected status — even a 2xx one — is logged
//! and rejected with that status and whatever payload was parseable.

use serde_json::Value;
use url::Url;

use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::rest::errors::Rejection;

/// The result of a successful create operation.
///
/// The server answers a create with `201 Created` and a `Location` header
/// pointing at the new item; the identifier is the last path segment of
/// that location. No payload is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Created {
    /// The identifier of the newly created item.
    pub id: String,
    /// The raw `Location` header value the identifier was extracted from.
    pub location: String,
}

/// An async CRUD client bound to one named resource collection.
///
/// Exposes four operations — [`create`](Self::create),
/// [`retrieve`](Self::retrieve), [`delete`](Self::delete),
/// [`items`](Self::items) — each returning `Result<_, Rejection>`. All
/// failing paths share the single rejection shape; see
/// [`crate::rest::errors`].
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`; concurrent operations never contend
/// because each invocation owns its locals and the configuration is
/// immutable.
///
/// # Example
///
/// ```rust,ignore
/// use webapi_client::{ApiConfig, ApiVersion, BaseUrl, ResourceClient};
/// use webapi_client::clients::HttpClient;
/// use serde_json::json;
///
/// let dispatcher = HttpClient::new(ApiConfig::new(
///     BaseUrl::new("http://localhost:8888")?,
///     ApiVersion::new("v1")?,
/// ));
/// let things = ResourceClient::new(dispatcher, "things");
///
/// let created = things.create(json!({"name": "x"})).await?;
/// let item = things.retrieve(&created.id).await?;
/// things.delete(&created.id).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ResourceClient {
    /// The request dispatcher, shared with any sibling clients.
    http_client: HttpClient,
    /// The collection name this client is bound to.
    collection: String,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a client bound to the given collection name.
    pub fn new(http_client: HttpClient, collection: impl Into<String>) -> Self {
        Self {
            http_client,
            collection: collection.into(),
        }
    }

    /// Returns the collection name this client is bound to.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Creates a new item from its JSON representation.
    ///
    /// Issues `POST` against the bare collection endpoint with the
    /// serialized representation as body. Success requires exactly status
    /// 201 and a usable `Location` header; the identifier is the last
    /// path segment of the location after stripping a single trailing
    /// `/`. Relative locations resolve against the request URL.
    ///
    /// # Errors
    ///
    /// Rejects with the response status and best-effort payload when the
    /// status is not 201, when the `Location` header is missing or does
    /// not parse, or when the transport failed.
    pub async fn create(&self, representation: Value) -> Result<Created, Rejection> {
        let endpoint = vec![self.collection.clone()];
        let request_url = self.http_client.endpoint_url(&endpoint);
        let request = HttpRequest::post(endpoint, representation.to_string());

        let response = self.dispatch(request).await?;
        let payload = response.parse_json();

        if response.code != 201 {
            tracing::warn!(
                "create succeeded but response with status {} instead of 201",
                response.code
            );
            return Err(Rejection::http(response.code, payload));
        }

        let created = response.header("Location").and_then(|location| {
            identifier_from_location(&request_url, location).map(|id| Created {
                id,
                location: location.to_string(),
            })
        });

        created.map_or_else(
            || {
                tracing::warn!("response had invalid or absent Location header");
                Err(Rejection::http(response.code, payload))
            },
            Ok,
        )
    }

    /// Retrieves one item by identifier.
    ///
    /// Issues `GET` against the item endpoint. Success requires status
    /// 200 and a non-null parsed payload; the payload object is resolved
    /// as-is.
    ///
    /// # Errors
    ///
    /// Rejects with the response status and best-effort payload when the
    /// status is not 200, when the body is empty or unparsable, or when
    /// the transport failed.
    pub async fn retrieve(&self, id: &str) -> Result<Value, Rejection> {
        let request = HttpRequest::get([self.collection.as_str(), id]);
        let response = self.dispatch(request).await?;
        let payload = response.parse_json();

        if response.code != 200 {
            tracing::warn!(
                "retrieve succeeded but response with status {} instead of 200",
                response.code
            );
            return Err(Rejection::http(response.code, payload));
        }

        payload.map_or_else(
            || {
                tracing::warn!("retrieve succeeded but empty or invalid payload");
                Err(Rejection::http(response.code, None))
            },
            Ok,
        )
    }

    /// Deletes one item by identifier.
    ///
    /// Issues `DELETE` against the item endpoint. Success requires exactly
    /// status 204 and resolves with no value.
    ///
    /// # Errors
    ///
    /// Rejects with the response status and best-effort payload when the
    /// status is not 204, or when the transport failed.
    pub async fn delete(&self, id: &str) -> Result<(), Rejection> {
        let request = HttpRequest::delete([self.collection.as_str(), id]);
        let response = self.dispatch(request).await?;

        if response.code != 204 {
            tracing::warn!(
                "delete succeeded but response with status {} instead of 204",
                response.code
            );
            return Err(Rejection::http(response.code, response.parse_json()));
        }

        Ok(())
    }

    /// Lists the collection's items.
    ///
    /// Issues `GET` against the bare collection endpoint. Success requires
    /// status 200 and a payload carrying an `items` array; the inner array
    /// is resolved, not the wrapping object.
    ///
    /// # Errors
    ///
    /// Rejects with the response status and best-effort payload when the
    /// status is not 200, when the body is empty or unparsable, when the
    /// payload has no `items` array, or when the transport failed.
    pub async fn items(&self) -> Result<Vec<Value>, Rejection> {
        let request = HttpRequest::get([self.collection.as_str()]);
        let response = self.dispatch(request).await?;
        let payload = response.parse_json();

        if response.code != 200 {
            tracing::warn!(
                "items retrieve succeeded but response with status {} instead of 200",
                response.code
            );
            return Err(Rejection::http(response.code, payload));
        }

        let Some(payload) = payload else {
            tracing::warn!("items retrieve succeeded but empty or invalid payload");
            return Err(Rejection::http(response.code, None));
        };

        if let Some(items) = payload.get("items").and_then(Value::as_array) {
            Ok(items.clone())
        } else {
            tracing::warn!("items retrieve succeeded but payload has no items array");
            Err(Rejection::http(response.code, Some(payload)))
        }
    }

    /// Dispatches one request, mapping transport failure to the unified
    /// rejection shape.
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, Rejection> {
        self.http_client.request(request).await.map_err(|error| {
            tracing::warn!("transport failure: {error}");
            Rejection::transport()
        })
    }
}

/// Extracts the identifier from a `Location` header value.
///
/// The location is parsed as a URL (relative values resolve against the
/// request URL, the way a browser resolves them against the document); a
/// single trailing `/` is stripped from its path, and the last
/// `/`-delimited segment is the identifier.
fn identifier_from_location(request_url: &str, location: &str) -> Option<String> {
    let base = Url::parse(request_url).ok()?;
    let resolved = base.join(location).ok()?;
    let path = resolved.path();
    let path = path.strip_suffix('/').unwrap_or(path);
    path.rsplit('/').next().map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST_URL: &str = "http://host/api/v1/things/";

    #[test]
    fn test_identifier_from_absolute_location() {
        let id = identifier_from_location(REQUEST_URL, "http://host/api/v1/things/abc123/");
        assert_eq!(id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_identifier_from_location_without_trailing_slash() {
        let id = identifier_from_location(REQUEST_URL, "http://host/api/v1/things/abc123");
        assert_eq!(id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_identifier_from_relative_location() {
        // Resolved against the request URL, like a browser would.
        let id = identifier_from_location(REQUEST_URL, "/api/v1/things/xyz/");
        assert_eq!(id.as_deref(), Some("xyz"));

        let id = identifier_from_location(REQUEST_URL, "xyz/");
        assert_eq!(id.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_identifier_strips_only_one_trailing_slash() {
        let id = identifier_from_location(REQUEST_URL, "http://host/things/abc//");
        assert_eq!(id.as_deref(), Some(""));
    }

    #[test]
    fn test_identifier_ignores_query_and_fragment() {
        let id = identifier_from_location(REQUEST_URL, "http://host/things/abc/?q=1#frag");
        assert_eq!(id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_resource_client_is_bound_to_collection() {
        let client = ResourceClient::new(
            HttpClient::new(crate::ApiConfig::new(
                crate::BaseUrl::new("http://host").unwrap(),
                crate::ApiVersion::new("v1").unwrap(),
            )),
            "things",
        );
        assert_eq!(client.collection(), "things");
    }

    #[test]
    fn test_resource_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceClient>();
    }
}
