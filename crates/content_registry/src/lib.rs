//! # content_registry
//!
//! Registers custom content with the host server.
//!
//! This crate provides:
//!
//! - [`HostFactory`]: the registration calls the host's factories expose,
//!   with [`MemoryHost`] as an in-memory implementation.
//! - [`ContentRegistry`]: the gateway enforcing per-kind identifier
//!   uniqueness in front of a host.
//! - [`BlockModel`]: block geometry and material descriptors.
//! - [`EntityIdentifierCache`]: records entity type ids and patches them into
//!   the host's [`StaticPacketCache`].
//! - [`RegistryConfig`]: defaults for the convenience helpers.

pub mod block;
pub mod config;
pub mod entity_cache;
pub mod error;
pub mod gateway;
pub mod host;
pub mod packet_cache;

pub use block::{BlockModel, Material, RenderMethod};
pub use config::RegistryConfig;
pub use entity_cache::{CacheState, EntityIdentifierCache};
pub use error::{CachePreconditionError, HostError, RegistryError};
pub use gateway::ContentRegistry;
pub use host::{Constructor, ContentKind, HostFactory, MemoryHost, Registered};
pub use packet_cache::StaticPacketCache;
