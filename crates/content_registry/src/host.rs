//! The host factory seam.
//!
//! The host server owns the real block, item, and entity factories. This
//! crate only needs to hand it an identifier, a constructor, and a descriptor
//! tree; [`HostFactory`] is that contract. [`MemoryHost`] is an in-memory
//! implementation used at startup by tools and in tests.

use std::collections::HashMap;
use std::fmt;

use content_component::{CreativeInfo, DescriptorTree};
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// The content namespaces the host keeps separate registries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Block,
    Item,
    Entity,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Item => "item",
            Self::Entity => "entity",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A zero-argument factory producing a fresh instance of registered content.
///
/// Stored at registration time and only invoked by the host.
pub type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;

/// The registration calls the host's content factories expose.
///
/// Implementations must reject an identifier that is already registered for
/// the same kind with [`HostError::AlreadyRegistered`] and leave the earlier
/// registration untouched.
pub trait HostFactory {
    /// The host's block instance type.
    type Block;
    /// The host's item instance type.
    type Item;
    /// The host's entity instance type.
    type Entity;

    /// Register a block.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AlreadyRegistered`] if `identifier` is taken, or
    /// [`HostError::Rejected`] if the host refuses it otherwise.
    fn register_block(
        &mut self,
        identifier: &str,
        constructor: Constructor<Self::Block>,
        descriptor: DescriptorTree,
        creative: CreativeInfo,
    ) -> Result<(), HostError>;

    /// Register an item.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AlreadyRegistered`] if `identifier` is taken, or
    /// [`HostError::Rejected`] if the host refuses it otherwise.
    fn register_item(
        &mut self,
        identifier: &str,
        constructor: Constructor<Self::Item>,
        descriptor: DescriptorTree,
        creative: CreativeInfo,
    ) -> Result<(), HostError>;

    /// Register an entity type.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AlreadyRegistered`] if `identifier` is taken, or
    /// [`HostError::Rejected`] if the host refuses it otherwise.
    fn register_entity(
        &mut self,
        identifier: &str,
        constructor: Constructor<Self::Entity>,
        descriptor: DescriptorTree,
    ) -> Result<(), HostError>;
}

/// One entry in a [`MemoryHost`] table.
pub struct Registered<T> {
    constructor: Constructor<T>,
    /// The descriptor handed over at registration.
    pub descriptor: DescriptorTree,
    /// Creative placement, absent for entities.
    pub creative: Option<CreativeInfo>,
}

impl<T> Registered<T> {
    /// Build a new instance with the stored constructor.
    #[must_use]
    pub fn construct(&self) -> T {
        (self.constructor)()
    }
}

impl<T> fmt::Debug for Registered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registered")
            .field("descriptor", &self.descriptor)
            .field("creative", &self.creative)
            .finish_non_exhaustive()
    }
}

/// An in-memory [`HostFactory`].
pub struct MemoryHost<B, I, E> {
    blocks: HashMap<String, Registered<B>>,
    items: HashMap<String, Registered<I>>,
    entities: HashMap<String, Registered<E>>,
}

impl<B, I, E> MemoryHost<B, I, E> {
    /// Create a host with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
            items: HashMap::new(),
            entities: HashMap::new(),
        }
    }

    #[must_use]
    pub fn block(&self, identifier: &str) -> Option<&Registered<B>> {
        self.blocks.get(identifier)
    }

    #[must_use]
    pub fn item(&self, identifier: &str) -> Option<&Registered<I>> {
        self.items.get(identifier)
    }

    #[must_use]
    pub fn entity(&self, identifier: &str) -> Option<&Registered<E>> {
        self.entities.get(identifier)
    }

    /// Returns the number of registrations of `kind`.
    #[must_use]
    pub fn count(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Block => self.blocks.len(),
            ContentKind::Item => self.items.len(),
            ContentKind::Entity => self.entities.len(),
        }
    }
}

impl<B, I, E> Default for MemoryHost<B, I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, I, E> fmt::Debug for MemoryHost<B, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("blocks", &self.blocks.len())
            .field("items", &self.items.len())
            .field("entities", &self.entities.len())
            .finish()
    }
}

fn insert_new<T>(
    table: &mut HashMap<String, Registered<T>>,
    kind: ContentKind,
    identifier: &str,
    entry: Registered<T>,
) -> Result<(), HostError> {
    if identifier.is_empty() {
        return Err(HostError::Rejected {
            kind,
            identifier: String::new(),
            reason: "identifier is empty".to_string(),
        });
    }
    if table.contains_key(identifier) {
        return Err(HostError::AlreadyRegistered {
            kind,
            identifier: identifier.to_string(),
        });
    }
    table.insert(identifier.to_string(), entry);
    Ok(())
}

impl<B, I, E> HostFactory for MemoryHost<B, I, E> {
    type Block = B;
    type Item = I;
    type Entity = E;

    fn register_block(
        &mut self,
        identifier: &str,
        constructor: Constructor<B>,
        descriptor: DescriptorTree,
        creative: CreativeInfo,
    ) -> Result<(), HostError> {
        insert_new(
            &mut self.blocks,
            ContentKind::Block,
            identifier,
            Registered {
                constructor,
                descriptor,
                creative: Some(creative),
            },
        )
    }

    fn register_item(
        &mut self,
        identifier: &str,
        constructor: Constructor<I>,
        descriptor: DescriptorTree,
        creative: CreativeInfo,
    ) -> Result<(), HostError> {
        insert_new(
            &mut self.items,
            ContentKind::Item,
            identifier,
            Registered {
                constructor,
                descriptor,
                creative: Some(creative),
            },
        )
    }

    fn register_entity(
        &mut self,
        identifier: &str,
        constructor: Constructor<E>,
        descriptor: DescriptorTree,
    ) -> Result<(), HostError> {
        insert_new(
            &mut self.entities,
            ContentKind::Entity,
            identifier,
            Registered {
                constructor,
                descriptor,
                creative: None,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use content_component::TagValue;

    use super::*;

    type Host = MemoryHost<&'static str, u32, String>;

    #[test]
    fn test_constructor_is_stored_not_invoked() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut host = Host::new();
        host.register_item(
            "example:ruby",
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                7
            }),
            DescriptorTree::new(),
            CreativeInfo::default(),
        )
        .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(host.item("example:ruby").unwrap().construct(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_host_rejects_duplicates() {
        let mut host = Host::new();
        let first = DescriptorTree::new().with("tag", TagValue::Int(1));
        host.register_block(
            "example:ore",
            Box::new(|| "first"),
            first.clone(),
            CreativeInfo::default(),
        )
        .unwrap();
        let err = host
            .register_block(
                "example:ore",
                Box::new(|| "second"),
                DescriptorTree::new(),
                CreativeInfo::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            HostError::AlreadyRegistered { kind: ContentKind::Block, .. }
        ));
        let entry = host.block("example:ore").unwrap();
        assert_eq!(entry.construct(), "first");
        assert_eq!(entry.descriptor, first);
    }

    #[test]
    fn test_host_rejects_empty_identifier() {
        let mut host = Host::new();
        let err = host
            .register_entity("", Box::new(String::new), DescriptorTree::new())
            .unwrap_err();
        assert!(matches!(
            err,
            HostError::Rejected { kind: ContentKind::Entity, .. }
        ));
        assert_eq!(host.count(ContentKind::Entity), 0);
    }

    #[test]
    fn test_kinds_are_separate_namespaces() {
        let mut host = Host::new();
        host.register_item(
            "example:thing",
            Box::new(|| 1),
            DescriptorTree::new(),
            CreativeInfo::default(),
        )
        .unwrap();
        host.register_entity(
            "example:thing",
            Box::new(|| "mob".to_string()),
            DescriptorTree::new(),
        )
        .unwrap();
        assert_eq!(host.count(ContentKind::Item), 1);
        assert_eq!(host.count(ContentKind::Entity), 1);
        assert_eq!(host.count(ContentKind::Block), 0);
        assert!(host.entity("example:thing").unwrap().creative.is_none());
    }
}
