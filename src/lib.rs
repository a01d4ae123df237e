//! # Web API Client
//!
//! An async Rust client for REST resource collections served under a
//! versioned API root, providing a typed CRUD interface per named
//! collection.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe API root configuration via [`ApiConfig`], [`BaseUrl`], and
//!   [`ApiVersion`]
//! - A request dispatcher ([`clients::HttpClient`]) that builds canonical
//!   URLs from path segments and performs one HTTP call per request
//! - Per-collection clients ([`ResourceClient`]) exposing four async
//!   operations: create, retrieve, delete, items
//! - A single unified failure shape ([`Rejection`]) for every failing
//!   path — transport failure, unexpected status, missing metadata,
//!   invalid payload
//! - A [`ResourceRegistry`] mapping resource names to collection clients
//!   sharing one API root
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use webapi_client::{ApiConfig, ApiVersion, BaseUrl, ResourceRegistry};
//!
//! // Configure the API root once; it is immutable afterwards.
//! let config = ApiConfig::new(
//!     BaseUrl::new("http://localhost:8888")?,
//!     ApiVersion::new("v1")?,
//! );
//!
//! // Register the collections the server serves.
//! let mut registry = ResourceRegistry::new(config);
//! registry.register("Image", "images")?;
//!
//! // Operate on a collection.
//! let images = registry.resource("Image").unwrap();
//! let created = images.create(json!({"name": "cat.png"})).await?;
//! let image = images.retrieve(&created.id).await?;
//! let all = images.items().await?;
//! images.delete(&created.id).await?;
//! ```
//!
//! ## URL Construction
//!
//! Every operation targets `{base}/api/{version}/{collection}/` or
//! `{base}/api/{version}/{collection}/{id}/`. Endpoint segments are
//! percent-encoded independently, so an identifier containing a literal
//! `/` is escaped rather than splitting the path; accidental duplicate
//! slashes from slash-happy configuration collapse to one; the finished
//! URL always carries a single trailing `/`. See [`clients::path`].
//!
//! ## Failure Model
//!
//! Operations return `Result<_, Rejection>`. A [`Rejection`] carries the
//! best available status — the numeric HTTP status, or a transport-failure
//! marker when no response arrived — plus the best-effort parsed JSON
//! payload. Malformed response bodies are never errors in their own
//! right: they degrade to "no payload" and the status check decides the
//! outcome. Transport-level success does not imply operation success; an
//! unexpected status is logged via `tracing` and rejected.
//!
//! ## Design Principles
//!
//! - **No global state**: the API root is an explicit immutable value
//!   passed at construction
//! - **Fail-fast validation**: configuration newtypes validate on
//!   construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **Exactly-once results**: each invocation resolves or rejects once,
//!   never both

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiConfig, ApiVersion, BaseUrl};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{HttpMethod, HttpRequest, HttpResponse, TransportError};

// Re-export resource layer types
pub use rest::{Created, Rejection, RejectionStatus, RegistryError, ResourceClient, ResourceRegistry};
