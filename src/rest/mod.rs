//! Resource layer: per-collection CRUD clients and their registry.
//!
//! This module turns raw transport responses into typed results. It
//! contains:
//!
//! - [`ResourceClient`]: four async operations (create/retrieve/delete/
//!   items) bound to one collection name
//! - [`Created`]: the (identifier, location) pair a create resolves with
//! - [`Rejection`] / [`RejectionStatus`]: the single unified failure shape
//! - [`ResourceRegistry`]: named registration of collections sharing one
//!   API root

pub mod errors;
pub mod registry;
pub mod resource;

pub use errors::{Rejection, RejectionStatus};
pub use registry::{RegistryError, ResourceRegistry};
pub use resource::{Created, ResourceClient};
