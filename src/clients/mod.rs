//! Transport layer: request dispatch and URL construction.
//!
//! This module contains the leaf of the dependency graph — everything the
//! resource layer needs to put one request on the wire and get the raw
//! response back:
//!
//! - [`HttpClient`]: the request dispatcher (URL building + one HTTP call)
//! - [`HttpRequest`] / [`HttpMethod`]: the ephemeral request value
//! - [`HttpResponse`]: the raw response (status, headers, body text)
//! - [`TransportError`]: failure before any HTTP status was available
//! - [`path`]: the URL path-assembly rules

pub mod errors;
pub mod http_client;
pub mod http_request;
pub mod http_response;
pub mod path;

pub use errors::TransportError;
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;
