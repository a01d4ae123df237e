//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration
//! constructors. All configuration values validate on construction, so a
//! successfully built [`crate::ApiConfig`] can be shared freely without
//! further checking.
//!
//! # Example
//!
//! ```rust
//! use webapi_client::{ApiVersion, ConfigError};
//!
//! let result = ApiVersion::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiVersion)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
///
/// Each variant provides a clear, actionable error message. These errors
/// happen strictly before any request is dispatched; operation failures are
/// reported through [`crate::Rejection`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not a valid absolute URL.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'http://example.com/myapp').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The API version string is empty.
    #[error("API version cannot be empty. Please provide the version segment served by the API (e.g., 'v1').")]
    EmptyApiVersion,
}
