//! The content registry gateway.
//!
//! [`ContentRegistry`] sits in front of a [`HostFactory`]. It enforces
//! per-kind identifier uniqueness, forwards registrations to the host, and
//! records entity identifiers for the packet cache patch. Identifier checks
//! and the entity identifier cache live behind the same `&mut self`, so a
//! registry shared between loaders only needs one lock around it.

use std::collections::{HashMap, HashSet};

use content_component::{CreativeInfo, DescriptorTree};
use content_item::CustomItem;
use tracing::{info, warn};

use crate::block::{BlockModel, Material, TARGET_ALL};
use crate::config::RegistryConfig;
use crate::entity_cache::EntityIdentifierCache;
use crate::error::{CachePreconditionError, RegistryError};
use crate::host::{Constructor, ContentKind, HostFactory};
use crate::packet_cache::StaticPacketCache;

/// Registration front-end for one host.
pub struct ContentRegistry<H: HostFactory> {
    host: H,
    config: RegistryConfig,
    registered: HashMap<ContentKind, HashSet<String>>,
    entity_identifiers: EntityIdentifierCache,
}

impl<H: HostFactory> ContentRegistry<H> {
    #[must_use]
    pub fn new(host: H, config: RegistryConfig) -> Self {
        Self {
            host,
            config,
            registered: HashMap::new(),
            entity_identifiers: EntityIdentifierCache::new(),
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    #[must_use]
    pub fn entity_identifiers(&self) -> &EntityIdentifierCache {
        &self.entity_identifiers
    }

    /// Returns `true` if `identifier` is registered for `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: ContentKind, identifier: &str) -> bool {
        self.registered
            .get(&kind)
            .is_some_and(|ids| ids.contains(identifier))
    }

    /// Consume the registry and return the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    fn ensure_unique(&self, kind: ContentKind, identifier: &str) -> Result<(), RegistryError> {
        if self.is_registered(kind, identifier) {
            warn!(%kind, identifier, "rejected duplicate registration");
            return Err(RegistryError::DuplicateIdentifier {
                kind,
                identifier: identifier.to_string(),
            });
        }
        Ok(())
    }

    fn reserve(&mut self, kind: ContentKind, identifier: &str) {
        self.registered
            .entry(kind)
            .or_default()
            .insert(identifier.to_string());
        info!(%kind, identifier, "registered content");
    }

    /// Register a block.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if a block with this
    /// identifier exists here or on the host, or [`RegistryError::Host`] if
    /// the host refuses it for another reason.
    pub fn register_block(
        &mut self,
        identifier: &str,
        constructor: Constructor<H::Block>,
        descriptor: DescriptorTree,
        creative: Option<CreativeInfo>,
    ) -> Result<(), RegistryError> {
        self.ensure_unique(ContentKind::Block, identifier)?;
        let creative = creative.unwrap_or_else(|| self.config.default_creative.clone());
        self.host
            .register_block(identifier, constructor, descriptor, creative)?;
        self.reserve(ContentKind::Block, identifier);
        Ok(())
    }

    /// Register a single-texture cube using the configured geometry and
    /// render method.
    ///
    /// # Errors
    ///
    /// See [`register_block`](Self::register_block).
    pub fn register_simple_block(
        &mut self,
        identifier: &str,
        constructor: Constructor<H::Block>,
        texture: &str,
        solid: bool,
        creative: Option<CreativeInfo>,
    ) -> Result<(), RegistryError> {
        let model = BlockModel::new(vec![Material::new(
            TARGET_ALL,
            texture,
            self.config.block_render_method,
        )])
        .with_geometry(self.config.block_geometry.clone())
        .with_solid(solid);
        self.register_block(identifier, constructor, model.descriptor(), creative)
    }

    /// Register an item with a pre-assembled descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if an item with this
    /// identifier exists here or on the host, or [`RegistryError::Host`] if
    /// the host refuses it for another reason.
    pub fn register_item(
        &mut self,
        identifier: &str,
        constructor: Constructor<H::Item>,
        descriptor: DescriptorTree,
        creative: Option<CreativeInfo>,
    ) -> Result<(), RegistryError> {
        self.ensure_unique(ContentKind::Item, identifier)?;
        let creative = creative.unwrap_or_else(|| self.config.default_creative.clone());
        self.host
            .register_item(identifier, constructor, descriptor, creative)?;
        self.reserve(ContentKind::Item, identifier);
        Ok(())
    }

    /// Assemble a [`CustomItem`]'s descriptor and register it.
    ///
    /// Without an explicit `creative`, the host receives the placement the
    /// item was built with. A failed assembly rejects only this item; the
    /// identifier stays free.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Serialization`] if a component has no tag
    /// representation, otherwise as [`register_item`](Self::register_item).
    pub fn register_custom_item(
        &mut self,
        identifier: &str,
        constructor: Constructor<H::Item>,
        item: CustomItem,
        creative: Option<CreativeInfo>,
    ) -> Result<(), RegistryError> {
        self.ensure_unique(ContentKind::Item, identifier)?;
        let descriptor = item.descriptor().inspect_err(|err| {
            warn!(identifier, component = %err.component, "item descriptor assembly failed");
        })?;
        let creative = creative.unwrap_or_else(|| item.creative().clone());
        self.register_item(identifier, constructor, descriptor, Some(creative))
    }

    /// Register an entity type and record its identifier for the packet
    /// cache patch.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if an entity with this
    /// identifier exists here or on the host, or [`RegistryError::Host`] if
    /// the host refuses it for another reason.
    pub fn register_entity(
        &mut self,
        identifier: &str,
        constructor: Constructor<H::Entity>,
        descriptor: DescriptorTree,
    ) -> Result<(), RegistryError> {
        self.ensure_unique(ContentKind::Entity, identifier)?;
        self.host
            .register_entity(identifier, constructor, descriptor)?;
        self.reserve(ContentKind::Entity, identifier);
        self.entity_identifiers.register_identifier(identifier);
        Ok(())
    }

    /// Register an entity type built with its `Default` implementation.
    ///
    /// # Errors
    ///
    /// See [`register_entity`](Self::register_entity).
    pub fn register_default_entity(&mut self, identifier: &str) -> Result<(), RegistryError>
    where
        H::Entity: Default + 'static,
    {
        self.register_entity(
            identifier,
            Box::new(<H::Entity as Default>::default),
            DescriptorTree::new(),
        )
    }

    /// Merge every registered entity identifier into the host's actor
    /// identifier packet.
    ///
    /// Call once all entities are registered; calling again after further
    /// registrations merges only the new identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`CachePreconditionError`] if the packet is not built or is
    /// malformed.
    pub fn patch_packet_cache(
        &mut self,
        cache: &mut StaticPacketCache,
    ) -> Result<usize, CachePreconditionError> {
        self.entity_identifiers.patch(cache)
    }
}

impl<H: HostFactory + std::fmt::Debug> std::fmt::Debug for ContentRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRegistry")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("registered", &self.registered)
            .field("entity_identifiers", &self.entity_identifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use content_component::{Component, CreativeCategory, TagNode, TagValue};
    use content_item::ItemProfile;
    use serde_json::json;

    use super::*;
    use crate::error::HostError;
    use crate::host::MemoryHost;

    type Host = MemoryHost<&'static str, &'static str, String>;

    fn registry() -> ContentRegistry<Host> {
        ContentRegistry::new(Host::new(), RegistryConfig::default())
    }

    #[test]
    fn test_duplicate_item_keeps_first() {
        let mut registry = registry();
        let first = DescriptorTree::new().with("first", TagValue::Bool(true));
        registry
            .register_item("example:ruby", Box::new(|| "first"), first.clone(), None)
            .unwrap();

        let err = registry
            .register_item(
                "example:ruby",
                Box::new(|| "second"),
                DescriptorTree::new(),
                None,
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateIdentifier {
                kind: ContentKind::Item,
                identifier: "example:ruby".to_string(),
            }
        );

        let entry = registry.host().item("example:ruby").unwrap();
        assert_eq!(entry.construct(), "first");
        assert_eq!(entry.descriptor, first);
    }

    #[test]
    fn test_same_identifier_across_kinds() {
        let mut registry = registry();
        registry
            .register_item("example:wisp", Box::new(|| "item"), DescriptorTree::new(), None)
            .unwrap();
        registry
            .register_entity(
                "example:wisp",
                Box::new(|| "entity".to_string()),
                DescriptorTree::new(),
            )
            .unwrap();
        assert!(registry.is_registered(ContentKind::Item, "example:wisp"));
        assert!(registry.is_registered(ContentKind::Entity, "example:wisp"));
        assert!(!registry.is_registered(ContentKind::Block, "example:wisp"));
    }

    #[test]
    fn test_default_creative_from_config() {
        let gems = CreativeInfo::new(CreativeCategory::Items, "itemGroup.name.gems");
        let config = RegistryConfig::new().with_default_creative(gems.clone());
        let mut registry = ContentRegistry::new(Host::new(), config);
        registry
            .register_item("example:ruby", Box::new(|| "ruby"), DescriptorTree::new(), None)
            .unwrap();
        let creative = registry.host().item("example:ruby").unwrap().creative.clone();
        assert_eq!(creative, Some(gems));
    }

    #[test]
    fn test_host_rejection_does_not_reserve() {
        let mut host = Host::new();
        host.register_block(
            "example:ore",
            Box::new(|| "host"),
            DescriptorTree::new(),
            CreativeInfo::default(),
        )
        .unwrap();
        let mut registry = ContentRegistry::new(host, RegistryConfig::default());

        let err = registry
            .register_simple_block("example:ore", Box::new(|| "mine"), "ore", true, None)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateIdentifier {
                kind: ContentKind::Block,
                identifier: "example:ore".to_string(),
            }
        );
        assert!(!registry.is_registered(ContentKind::Block, "example:ore"));
        assert_eq!(registry.host().block("example:ore").unwrap().construct(), "host");
    }

    #[test]
    fn test_item_taken_on_host_is_duplicate() {
        let mut host = Host::new();
        host.register_item(
            "example:ruby",
            Box::new(|| "host"),
            DescriptorTree::new(),
            CreativeInfo::default(),
        )
        .unwrap();
        let mut registry = ContentRegistry::new(host, RegistryConfig::default());

        let err = registry
            .register_item("example:ruby", Box::new(|| "mine"), DescriptorTree::new(), None)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateIdentifier {
                kind: ContentKind::Item,
                identifier: "example:ruby".to_string(),
            }
        );
    }

    #[test]
    fn test_other_host_refusal_is_host_error() {
        let mut registry = registry();
        let err = registry.register_default_entity("").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Host(HostError::Rejected { kind: ContentKind::Entity, .. })
        ));
        assert!(registry.entity_identifiers().identifiers().is_empty());
    }

    #[test]
    fn test_custom_item_serialization_failure_is_isolated() {
        let mut registry = registry();
        let mut broken = CustomItem::new(ItemProfile::new("Broken"), "broken", None);
        broken.add_component(Component::new("example:nothing", json!(null)));

        let err = registry
            .register_custom_item("example:broken", Box::new(|| "broken"), broken, None)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Serialization(_)));
        assert!(!registry.is_registered(ContentKind::Item, "example:broken"));

        let fine = CustomItem::new(ItemProfile::new("Fine"), "fine", None);
        registry
            .register_custom_item("example:fine", Box::new(|| "fine"), fine, None)
            .unwrap();
        assert_eq!(registry.host().count(ContentKind::Item), 1);
    }

    #[test]
    fn test_custom_item_keeps_its_creative_placement() {
        let gear = CreativeInfo::new(CreativeCategory::Equipment, "itemGroup.name.helmet");
        let helmet = CustomItem::new(
            ItemProfile::new("Helmet").wearable(content_item::EquipmentSlot::Head, 2),
            "helmet",
            Some(&gear),
        );
        let mut registry = registry();
        registry
            .register_custom_item("example:helmet", Box::new(|| "helmet"), helmet, None)
            .unwrap();

        let entry = registry.host().item("example:helmet").unwrap();
        assert_eq!(entry.creative, Some(gear));
        assert_eq!(
            entry
                .descriptor
                .lookup("components.item_properties.creative_category")
                .and_then(TagNode::as_value),
            Some(&TagValue::Int(CreativeCategory::Equipment.numeric_id()))
        );
    }

    #[test]
    fn test_explicit_creative_overrides_item_placement() {
        let nature = CreativeInfo::new(CreativeCategory::Nature, "itemGroup.name.seed");
        let seed = CustomItem::new(ItemProfile::new("Seed"), "seed", None);
        let mut registry = registry();
        registry
            .register_custom_item("example:seed", Box::new(|| "seed"), seed, Some(nature.clone()))
            .unwrap();
        let creative = registry.host().item("example:seed").unwrap().creative.clone();
        assert_eq!(creative, Some(nature));
    }

    #[test]
    fn test_entity_registration_records_identifier() {
        let mut registry = registry();
        registry.register_default_entity("example:wisp").unwrap();
        assert!(registry.register_default_entity("example:wisp").is_err());
        assert_eq!(
            registry.entity_identifiers().identifiers(),
            &["example:wisp".to_string()]
        );
        assert_eq!(
            registry.host().entity("example:wisp").unwrap().construct(),
            String::new()
        );
    }

    #[test]
    fn test_items_do_not_touch_entity_cache() {
        let mut registry = registry();
        registry
            .register_item("example:ruby", Box::new(|| "ruby"), DescriptorTree::new(), None)
            .unwrap();
        assert!(registry.entity_identifiers().identifiers().is_empty());
    }
}
