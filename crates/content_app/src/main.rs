//! # content_app: Startup registration
//!
//! Runs the content registration phase against an in-memory host, the way a
//! server plugin does during load.
//!
//! ## Startup Sequence
//!
//! 1. Build the host's static packet cache with the built-in entity ids.
//! 2. Register sample blocks, items, and entity types.
//! 3. Patch the registered entity ids into the packet cache.

mod content;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use content_registry::{ContentRegistry, MemoryHost, RegistryConfig, StaticPacketCache};

/// Namespace used when `CONTENT_NAMESPACE` is not set.
pub const DEFAULT_NAMESPACE: &str = "example";

/// The environment variable used to override the content namespace.
pub const NAMESPACE_ENV: &str = "CONTENT_NAMESPACE";

/// Entity ids the host ships with.
const BUILTIN_ENTITIES: [&str; 3] = ["minecraft:pig", "minecraft:zombie", "minecraft:arrow"];

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("content_app=info".parse()?),
        )
        .init();

    let namespace =
        std::env::var(NAMESPACE_ENV).unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());
    info!(%namespace, "content registration starting");

    let mut cache = StaticPacketCache::new();
    cache.build(BUILTIN_ENTITIES);

    let mut registry = ContentRegistry::new(MemoryHost::new(), RegistryConfig::default());
    content::register_all(&mut registry, &namespace)?;

    let appended = registry.patch_packet_cache(&mut cache)?;
    let payload_len = cache.actor_identifiers_payload()?.map_or(0, <[u8]>::len);
    info!(
        appended,
        entities = cache.identifiers().len(),
        payload_len,
        "actor identifier packet ready"
    );

    info!(host = ?registry.host(), "content registration finished");
    Ok(())
}
