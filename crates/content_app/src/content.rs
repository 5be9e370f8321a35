//! Sample content registered at startup.

// Instance fields are read by the host once the server is running, not here.
#![allow(dead_code)]

use content_component::{CreativeCategory, CreativeInfo};
use content_item::{CustomItem, EquipmentSlot, ItemProfile};
use content_registry::{ContentRegistry, MemoryHost, RegistryError};
use tracing::debug;

/// A placed block instance.
#[derive(Debug, Clone)]
pub struct Block {
    pub identifier: String,
}

/// An item stack instance.
#[derive(Debug, Clone)]
pub struct Item {
    pub identifier: String,
    pub count: u32,
}

/// A spawned entity instance.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub health: f32,
}

pub type Host = MemoryHost<Block, Item, Entity>;

fn item_constructor(identifier: &str) -> content_registry::Constructor<Item> {
    let identifier = identifier.to_string();
    Box::new(move || Item {
        identifier: identifier.clone(),
        count: 1,
    })
}

/// Register every sample block, item, and entity under `namespace`.
///
/// # Errors
///
/// Returns the first [`RegistryError`] encountered.
pub fn register_all(
    registry: &mut ContentRegistry<Host>,
    namespace: &str,
) -> Result<(), RegistryError> {
    let construction = CreativeInfo::new(CreativeCategory::Construction, "itemGroup.name.ore");
    let ore = format!("{namespace}:ruby_ore");
    let block_id = ore.clone();
    registry.register_simple_block(
        &ore,
        Box::new(move || Block {
            identifier: block_id.clone(),
        }),
        "ruby_ore",
        true,
        Some(construction),
    )?;

    let equipment = CreativeInfo::new(CreativeCategory::Equipment, "itemGroup.name.chestplate");
    let chest = CustomItem::new(
        ItemProfile::new("Ruby Chestplate")
            .with_max_stack_size(1)
            .durable(300)
            .wearable(EquipmentSlot::Chest, 4),
        "ruby_chestplate",
        Some(&equipment),
    );
    let id = format!("{namespace}:ruby_chestplate");
    registry.register_custom_item(&id, item_constructor(&id), chest, Some(equipment))?;

    let mut berry = CustomItem::new(
        ItemProfile::new("Glow Berry").food(false),
        "glow_berry",
        None,
    );
    berry.set_use_duration(16);
    let id = format!("{namespace}:glow_berry");
    registry.register_custom_item(&id, item_constructor(&id), berry, None)?;

    let tonic = CustomItem::new(ItemProfile::new("Tonic").drink(), "tonic", None);
    let id = format!("{namespace}:tonic");
    registry.register_custom_item(&id, item_constructor(&id), tonic, None)?;

    let mut spear = CustomItem::new(
        ItemProfile::new("Ruby Spear")
            .with_max_stack_size(1)
            .durable(250)
            .projectile(),
        "ruby_spear",
        None,
    );
    spear.setup_render_offsets(32, 32, true);
    spear.allow_off_hand(true);
    spear.set_use_cooldown(1.5, Some("spears"));
    spear.set_damage(6);
    let id = format!("{namespace}:ruby_spear");
    registry.register_custom_item(&id, item_constructor(&id), spear, None)?;

    let coal = CustomItem::new(ItemProfile::new("Ember").fuel(1600), "ember", None);
    let id = format!("{namespace}:ember");
    registry.register_custom_item(&id, item_constructor(&id), coal, None)?;

    let wisp = format!("{namespace}:wisp");
    registry.register_entity(
        &wisp,
        Box::new(|| Entity { health: 10.0 }),
        content_component::DescriptorTree::new(),
    )?;
    registry.register_default_entity(&format!("{namespace}:golem"))?;

    debug!(
        entities = registry.entity_identifiers().identifiers().len(),
        "sample content registered"
    );
    Ok(())
}
