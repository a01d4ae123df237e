//! The unified failure shape for resource operations.
//!
//! Every failing path of every operation — transport failure, unexpected
//! status code, missing response metadata, invalid payload — funnels into
//! the single [`Rejection`] shape: the best available status plus the
//! best-effort parsed payload. There is deliberately no richer taxonomy;
//! diagnostic detail goes to the `tracing` side channel for operators, not
//! into the rejection value.
//!
//! # Example
//!
//! ```rust,ignore
//! use webapi_client::{Rejection, RejectionStatus};
//!
//! match client.retrieve("abc123").await {
//!     Ok(item) => println!("got {item}"),
//!     Err(Rejection { status: RejectionStatus::Http(code), payload }) => {
//!         println!("server said {code}, payload: {payload:?}");
//!     }
//!     Err(Rejection { status: RejectionStatus::Transport, .. }) => {
//!         println!("never reached the server");
//!     }
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The status a rejection carries.
///
/// Either the numeric HTTP status of the response that was judged a
/// failure, or the transport-failure marker for calls that produced no
/// HTTP response at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionStatus {
    /// The server responded with this HTTP status code.
    Http(u16),
    /// The call failed before any HTTP status was available.
    Transport,
}

impl RejectionStatus {
    /// Returns the HTTP status code, if the server responded at all.
    #[must_use]
    pub const fn http(self) -> Option<u16> {
        match self {
            Self::Http(code) => Some(code),
            Self::Transport => None,
        }
    }
}

impl fmt::Display for RejectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(code) => write!(f, "status {code}"),
            Self::Transport => write!(f, "transport failure"),
        }
    }
}

/// The unified failure result of a resource operation.
///
/// Carries the best available status and the best-effort parsed JSON
/// payload (`None` when the body was absent, malformed, or JSON `null`).
/// An operation produces exactly one of success or rejection, never both.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("operation rejected ({status})")]
pub struct Rejection {
    /// The best available status for the failure.
    pub status: RejectionStatus,
    /// The best-effort parsed JSON payload, if any.
    pub payload: Option<serde_json::Value>,
}

impl Rejection {
    /// Creates a rejection carrying an HTTP status and optional payload.
    #[must_use]
    pub const fn http(code: u16, payload: Option<serde_json::Value>) -> Self {
        Self {
            status: RejectionStatus::Http(code),
            payload,
        }
    }

    /// Creates the transport-failure rejection.
    #[must_use]
    pub const fn transport() -> Self {
        Self {
            status: RejectionStatus::Transport,
            payload: None,
        }
    }
}
