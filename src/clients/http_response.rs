//! HTTP response types for the dispatcher.
//!
//! This module provides the [`HttpResponse`] type: the raw transport-level
//! result of one dispatched call. The dispatcher deliberately does not
//! pre-parse the body — the transport layer may populate it differently
//! depending on outcome, so callers re-parse defensively from the rawest
//! available text via [`HttpResponse::parse_json`].

use std::collections::HashMap;

/// A raw HTTP response from one dispatched call.
///
/// Contains the status code, the response headers, and the body exactly as
/// the transport delivered it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text.
    pub text: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        Self {
            code,
            headers,
            text,
        }
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Lookup is case-insensitive; header names are stored lowercased.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Best-effort parse of the body as a JSON payload.
    ///
    /// Malformed JSON, an empty body, and a body consisting of JSON `null`
    /// all degrade to `None` — "no payload". A parse failure is never
    /// surfaced as an error in its own right; the caller's status-code
    /// check decides what the absence of a payload means.
    #[must_use]
    pub fn parse_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str::<serde_json::Value>(&self.text)
            .ok()
            .filter(|value| !value.is_null())
    }
}
