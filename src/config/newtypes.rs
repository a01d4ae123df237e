//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated absolute base URL for the API root.
///
/// The dispatcher prepends this value to every constructed path, so it must
/// be an absolute URL the HTTP client can actually resolve (scheme + host,
/// optionally followed by a mount path such as `/myapp`).
///
/// # Example
///
/// ```rust
/// use webapi_client::BaseUrl;
///
/// let base = BaseUrl::new("http://example.com/myapp").unwrap();
/// assert_eq!(base.as_ref(), "http://example.com/myapp");
///
/// assert!(BaseUrl::new("myapp/").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value does not parse
    /// as an absolute URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if Url::parse(&url).is_err() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API version path segment.
///
/// The version is an opaque string chosen by the server (`v1`, `2`,
/// `beta`, ...); it appears verbatim between the literal `api` segment and
/// the collection name in every constructed URL.
///
/// # Example
///
/// ```rust
/// use webapi_client::ApiVersion;
///
/// let version = ApiVersion::new("v1").unwrap();
/// assert_eq!(version.as_ref(), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiVersion`] if the version is empty.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.is_empty() {
            return Err(ConfigError::EmptyApiVersion);
        }
        Ok(Self(version))
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_absolute_url() {
        let base = BaseUrl::new("http://localhost:8888").unwrap();
        assert_eq!(base.as_ref(), "http://localhost:8888");
    }

    #[test]
    fn test_base_url_accepts_mount_path() {
        let base = BaseUrl::new("https://example.com/myapp/").unwrap();
        assert_eq!(base.as_ref(), "https://example.com/myapp/");
    }

    #[test]
    fn test_base_url_rejects_relative_path() {
        let result = BaseUrl::new("/myapp");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBaseUrl { url }) if url == "/myapp"
        ));
    }

    #[test]
    fn test_base_url_rejects_empty() {
        assert!(BaseUrl::new("").is_err());
    }

    #[test]
    fn test_base_url_display_roundtrips() {
        let base = BaseUrl::new("http://example.com").unwrap();
        assert_eq!(base.to_string(), "http://example.com");
    }

    #[test]
    fn test_api_version_accepts_non_empty() {
        let version = ApiVersion::new("v1").unwrap();
        assert_eq!(version.as_ref(), "v1");
    }

    #[test]
    fn test_api_version_rejects_empty() {
        assert!(matches!(
            ApiVersion::new(""),
            Err(ConfigError::EmptyApiVersion)
        ));
    }

    #[test]
    fn test_api_version_display_roundtrips() {
        let version = ApiVersion::new("unstable").unwrap();
        assert_eq!(version.to_string(), "unstable");
    }
}
