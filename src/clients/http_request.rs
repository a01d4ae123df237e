//! HTTP request types for the dispatcher.
//!
//! This module provides the [`HttpRequest`] type, the ephemeral value a
//! resource operation hands to the dispatcher. A request is constructed
//! fresh per call and never reused or mutated after dispatch.

use std::fmt;

/// HTTP methods used by the resource operations.
///
/// The client only ever issues the three verbs the collection protocol
/// needs: `GET` for retrieval and listing, `POST` for creation, `DELETE`
/// for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving and listing resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be dispatched against the API root.
///
/// The endpoint path is carried as individual segments rather than a
/// pre-joined string, so an identifier containing a literal `/` remains a
/// single segment and is percent-encoded by the dispatcher instead of
/// being mistaken for a hierarchy separator.
///
/// The body, when present, is a pre-serialized JSON string; the dispatcher
/// forwards it verbatim under the fixed `application/json` content type.
/// Only the non-idempotent constructor accepts one.
///
/// # Example
///
/// ```rust
/// use webapi_client::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::get(["things", "abc123"]);
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.endpoint, vec!["things", "abc123"]);
/// assert!(request.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint path segments (relative to the versioned API root).
    pub endpoint: Vec<String>,
    /// The pre-serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a `GET` request for the given endpoint segments.
    pub fn get<I, S>(endpoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: HttpMethod::Get,
            endpoint: endpoint.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    /// Creates a `POST` request carrying a pre-serialized JSON body.
    pub fn post<I, S>(endpoint: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: HttpMethod::Post,
            endpoint: endpoint.into_iter().map(Into::into).collect(),
            body: Some(body.into()),
        }
    }

    /// Creates a `DELETE` request for the given endpoint segments.
    pub fn delete<I, S>(endpoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: HttpMethod::Delete,
            endpoint: endpoint.into_iter().map(Into::into).collect(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_get_request_has_no_body() {
        let request = HttpRequest::get(["things"]);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.endpoint, vec!["things"]);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_request_carries_serialized_body() {
        let request = HttpRequest::post(["things"], r#"{"name":"x"}"#);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"x"}"#));
    }

    #[test]
    fn test_delete_request_targets_item_segments() {
        let request = HttpRequest::delete(["things", "abc123"]);
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.endpoint, vec!["things", "abc123"]);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_identifier_with_slash_stays_one_segment() {
        let request = HttpRequest::get(["things", "a/b"]);
        assert_eq!(request.endpoint, vec!["things", "a/b"]);
    }
}
