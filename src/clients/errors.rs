//! Transport-level error types for the dispatcher.
//!
//! A dispatched call either yields a raw [`crate::clients::HttpResponse`]
//! (whatever its status code — a 404 is data here, not an error) or fails
//! at the transport level before any HTTP status was available. This module
//! contains the error type for the latter case.

use thiserror::Error;

/// Error returned when a dispatched call fails at the transport level.
///
/// This covers connection failures, DNS errors, malformed request URLs,
/// and bodies that could not be read — every outcome in which no HTTP
/// status code was obtained. Responses that did arrive are never errors at
/// this layer; their status codes are judged by the resource operations.
#[derive(Debug, Error)]
#[error("transport error: {source}")]
pub struct TransportError {
    /// The underlying transport failure.
    #[from]
    source: reqwest::Error,
}
