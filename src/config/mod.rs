//! Configuration types for the API client.
//!
//! This module provides the immutable API root configuration shared by
//! every resource client. The base path and version live in an explicit
//! [`ApiConfig`] value passed to each client at construction rather than
//! in process-wide state, so there is no hidden cross-module coupling.
//!
//! # Overview
//!
//! - [`ApiConfig`]: the API root — base URL plus version segment
//! - [`BaseUrl`]: a validated absolute base URL newtype
//! - [`ApiVersion`]: a validated version segment newtype
//!
//! # Example
//!
//! ```rust
//! use webapi_client::{ApiConfig, ApiVersion, BaseUrl};
//!
//! let config = ApiConfig::new(
//!     BaseUrl::new("http://localhost:8888").unwrap(),
//!     ApiVersion::new("v1").unwrap(),
//! );
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8888");
//! assert_eq!(config.api_version().as_ref(), "v1");
//! ```

mod newtypes;

pub use newtypes::{ApiVersion, BaseUrl};

/// The API root configuration.
///
/// Holds the base URL at which the Web API is mounted and the version
/// segment it serves. Both are immutable after construction; every URL the
/// dispatcher builds starts from these two values.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: BaseUrl,
    api_version: ApiVersion,
}

impl ApiConfig {
    /// Creates a new API root configuration.
    #[must_use]
    pub const fn new(base_url: BaseUrl, api_version: ApiVersion) -> Self {
        Self {
            base_url,
            api_version,
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version segment.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> ApiConfig {
        ApiConfig::new(
            BaseUrl::new("http://localhost:8888").unwrap(),
            ApiVersion::new("v1").unwrap(),
        )
    }

    #[test]
    fn test_config_exposes_constituents() {
        let config = create_test_config();
        assert_eq!(config.base_url().as_ref(), "http://localhost:8888");
        assert_eq!(config.api_version().as_ref(), "v1");
    }

    #[test]
    fn test_config_is_clonable_and_comparable() {
        let config = create_test_config();
        assert_eq!(config.clone(), config);
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConfig>();
    }
}
