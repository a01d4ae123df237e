//! Registry mapping resource names to collection clients.
//!
//! The server exposes each registered resource under a collection URL
//! derived from its name; this registry is the client-side mirror of that
//! list. It owns one dispatcher and hands out [`ResourceClient`] instances
//! bound to their collection names, so every registered resource shares
//! the same API root and connection pool.
//!
//! # Example
//!
//! ```rust
//! use webapi_client::{ApiConfig, ApiVersion, BaseUrl, ResourceRegistry};
//!
//! let mut registry = ResourceRegistry::new(ApiConfig::new(
//!     BaseUrl::new("http://localhost:8888").unwrap(),
//!     ApiVersion::new("v1").unwrap(),
//! ));
//!
//! registry.register("Image", "images").unwrap();
//!
//! let images = registry.resource("Image").unwrap();
//! assert_eq!(images.collection(), "images");
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::clients::HttpClient;
use crate::config::ApiConfig;
use crate::rest::resource::ResourceClient;

/// Errors that can occur while registering resources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The resource name is already registered.
    #[error("Name '{name}' is already in use by collection '{existing}', so it cannot be used by collection '{requested}'.")]
    DuplicateName {
        /// The name that was registered twice.
        name: String,
        /// The collection the name is already bound to.
        existing: String,
        /// The collection the second registration asked for.
        requested: String,
    },
}

/// A registry of named resources sharing one API root.
///
/// Maps human-readable resource names to [`ResourceClient`] instances
/// bound to their collection names. Registration is expected to happen
/// once at startup; lookups afterwards are read-only.
#[derive(Clone, Debug)]
pub struct ResourceRegistry {
    /// The dispatcher shared by every registered client.
    http_client: HttpClient,
    /// Registered clients, keyed by resource name.
    clients: HashMap<String, ResourceClient>,
}

impl ResourceRegistry {
    /// Creates an empty registry for the given API root.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            clients: HashMap::new(),
        }
    }

    /// Registers a resource name bound to a collection name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is already
    /// registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        collection: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let collection = collection.into();

        if let Some(existing) = self.clients.get(&name) {
            return Err(RegistryError::DuplicateName {
                name,
                existing: existing.collection().to_string(),
                requested: collection,
            });
        }

        let client = ResourceClient::new(self.http_client.clone(), collection);
        self.clients.insert(name, client);
        Ok(())
    }

    /// Returns the client registered under the given resource name.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&ResourceClient> {
        self.clients.get(name)
    }

    /// Returns the registered resource names, in no particular order.
    pub fn registered_names(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, BaseUrl};

    fn create_test_registry() -> ResourceRegistry {
        ResourceRegistry::new(ApiConfig::new(
            BaseUrl::new("http://localhost:8888").unwrap(),
            ApiVersion::new("v1").unwrap(),
        ))
    }

    #[test]
    fn test_register_and_look_up_resource() {
        let mut registry = create_test_registry();
        registry.register("Image", "images").unwrap();

        let client = registry.resource("Image").unwrap();
        assert_eq!(client.collection(), "images");
    }

    #[test]
    fn test_lookup_of_unregistered_name_is_none() {
        let registry = create_test_registry();
        assert!(registry.resource("Missing").is_none());
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = create_test_registry();
        registry.register("Image", "images").unwrap();

        let result = registry.register("Image", "pictures");
        assert_eq!(
            result,
            Err(RegistryError::DuplicateName {
                name: "Image".to_string(),
                existing: "images".to_string(),
                requested: "pictures".to_string(),
            })
        );

        // The original binding survives.
        assert_eq!(registry.resource("Image").unwrap().collection(), "images");
    }

    #[test]
    fn test_duplicate_error_message_names_both_collections() {
        let error = RegistryError::DuplicateName {
            name: "Image".to_string(),
            existing: "images".to_string(),
            requested: "pictures".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Image"));
        assert!(message.contains("images"));
        assert!(message.contains("pictures"));
    }

    #[test]
    fn test_registered_names_lists_every_registration() {
        let mut registry = create_test_registry();
        registry.register("Image", "images").unwrap();
        registry.register("Video", "videos").unwrap();

        let mut names: Vec<&str> = registry.registered_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Image", "Video"]);
    }
}
