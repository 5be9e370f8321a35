//! The capability detector and the [`CustomItem`] builder.
//!
//! [`CustomItem::new`] runs the detector: it seeds the item's
//! [`ComponentSet`] with the components every item needs, then adds the ones
//! implied by its declared [`Capabilities`](crate::capability::Capabilities).
//! Explicit calls made afterwards (`set_use_duration`, `allow_off_hand`, ...)
//! overwrite detector defaults of the same name.

use content_component::{
    Component, ComponentSerializationError, ComponentSet, CreativeInfo, DescriptorTree, assemble,
};
use tracing::debug;

use crate::capability::ItemProfile;
use crate::components::{self, UseAnimation};

/// Use duration applied to consumables until overridden.
pub const DEFAULT_USE_DURATION_TICKS: i32 = 20;

/// Logical entity name used by projectile items.
pub const PROJECTILE_ENTITY: &str = "projectile";

/// Populate the default components for an item.
///
/// `creative` falls back to [`CreativeInfo::default`] when absent.
#[must_use]
pub fn default_components(
    profile: &ItemProfile,
    texture: &str,
    creative: Option<&CreativeInfo>,
) -> ComponentSet {
    let fallback = CreativeInfo::default();
    let creative = creative.unwrap_or(&fallback);
    let caps = &profile.capabilities;

    let mut set = ComponentSet::new();
    set.add(components::creative_category(creative));
    set.add(components::creative_group(creative));
    set.add(components::can_destroy_in_creative());
    set.add(components::icon(texture));
    set.add(components::max_stack_size(profile.max_stack_size));

    if let Some(armor) = caps.armor {
        set.add(components::armor(armor.defense_points));
        set.add(components::wearable(armor.slot));
    }

    if let Some(consumable) = caps.consumable {
        let animation = match consumable.food {
            Some(food) => {
                set.add(components::food(!food.requires_hunger));
                UseAnimation::Eat
            }
            None => UseAnimation::Drink,
        };
        set.add(components::use_animation(animation));
        set.add(components::use_duration(DEFAULT_USE_DURATION_TICKS));
    }

    if let Some(max_durability) = caps.max_durability {
        set.add(components::durability(max_durability));
    }

    if caps.projectile {
        set.add(components::projectile(PROJECTILE_ENTITY));
        set.add(components::throwable(true));
    }

    if profile.has_display_name() {
        set.add(components::display_name(&profile.name));
    }

    if caps.fuel_time > 0 {
        set.add(components::fuel(caps.fuel_time));
    }

    debug!(item = %profile.name, components = set.len(), "initialised default components");
    set
}

/// A custom item: its declared profile, its creative placement, and its
/// component set.
///
/// Registration consumes the item, so the set cannot change once its
/// descriptor has been assembled.
#[derive(Debug, Clone)]
pub struct CustomItem {
    profile: ItemProfile,
    creative: CreativeInfo,
    components: ComponentSet,
}

impl CustomItem {
    /// Create an item and populate its default components.
    #[must_use]
    pub fn new(profile: ItemProfile, texture: &str, creative: Option<&CreativeInfo>) -> Self {
        let creative = creative.cloned().unwrap_or_default();
        let components = default_components(&profile, texture, Some(&creative));
        Self {
            profile,
            creative,
            components,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    /// The creative placement the creative components were built from.
    #[must_use]
    pub fn creative(&self) -> &CreativeInfo {
        &self.creative
    }

    #[must_use]
    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    /// Add a component, replacing any component with the same name.
    pub fn add_component(&mut self, component: Component) {
        self.components.add(component);
    }

    #[must_use]
    pub fn has_component(&self, name: &str) -> bool {
        self.components.has(name)
    }

    /// Scale a non-16×16 texture back to the size of a regular item when held.
    /// Tools and weapons should pass `hand_equipped = true`.
    pub fn setup_render_offsets(&mut self, width: u32, height: u32, hand_equipped: bool) {
        self.add_component(components::hand_equipped(hand_equipped));
        self.add_component(components::render_offsets(width, height, hand_equipped));
    }

    /// Allow the item in the off-hand slot. Items are main-hand only until
    /// this is called.
    pub fn allow_off_hand(&mut self, allow: bool) {
        self.add_component(components::allow_off_hand(allow));
    }

    /// Put the item on cooldown for `duration` seconds after use.
    ///
    /// Items sharing a `category` share the cooldown; without one the item's
    /// display name is used.
    pub fn set_use_cooldown(&mut self, duration: f32, category: Option<&str>) {
        let category = match category {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => self.profile.name.clone(),
        };
        self.add_component(components::cooldown(&category, duration));
    }

    /// Ticks the use animation plays before the item is consumed.
    pub fn set_use_duration(&mut self, ticks: i32) {
        self.add_component(components::use_duration(ticks));
    }

    /// Attack damage dealt when hitting with the item.
    pub fn set_damage(&mut self, points: i32) {
        self.add_component(components::damage(points));
    }

    /// Assemble the item's descriptor tree.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentSerializationError`] if a component payload has no
    /// tag representation.
    pub fn descriptor(&self) -> Result<DescriptorTree, ComponentSerializationError> {
        assemble(&self.components)
    }
}

#[cfg(test)]
mod tests {
    use content_component::{
        COMPONENTS_KEY, CreativeCategory, ITEM_PROPERTIES_KEY, TagNode, TagValue,
    };
    use serde_json::json;

    use super::*;
    use crate::capability::EquipmentSlot;
    use crate::components::{
        ARMOR, CAN_DESTROY_IN_CREATIVE, COOLDOWN, CREATIVE_CATEGORY, CREATIVE_GROUP,
        DISPLAY_NAME, DURABILITY, FOOD, FUEL, HAND_EQUIPPED, ICON, MAX_STACK_SIZE, PROJECTILE,
        RENDER_OFFSETS, THROWABLE, USE_ANIMATION, USE_DURATION, WEARABLE,
    };

    fn value_of<'a>(item: &'a CustomItem, name: &str) -> &'a serde_json::Value {
        item.components().get(name).unwrap().value()
    }

    #[test]
    fn test_creative_placement_is_kept() {
        let info = CreativeInfo::new(CreativeCategory::Items, "itemGroup.name.gems");
        let item = CustomItem::new(ItemProfile::default(), "ruby", Some(&info));
        assert_eq!(item.creative(), &info);
        assert_eq!(value_of(&item, CREATIVE_CATEGORY), &json!(4));

        let plain = CustomItem::new(ItemProfile::default(), "ruby", None);
        assert_eq!(plain.creative(), &CreativeInfo::default());
    }

    #[test]
    fn test_always_present_defaults() {
        let item = CustomItem::new(ItemProfile::default(), "ruby", None);
        assert!(item.has_component(CREATIVE_CATEGORY));
        assert!(item.has_component(CREATIVE_GROUP));
        assert!(item.has_component(CAN_DESTROY_IN_CREATIVE));
        assert_eq!(value_of(&item, ICON), &json!({ "texture": "ruby" }));
        assert_eq!(value_of(&item, MAX_STACK_SIZE), &json!(64));
        assert_eq!(value_of(&item, CREATIVE_CATEGORY), &json!(0));
        assert_eq!(value_of(&item, CREATIVE_GROUP), &json!(""));
        // Unknown name, no capabilities: nothing else.
        assert_eq!(item.components().len(), 5);
    }

    #[test]
    fn test_creative_info_is_used() {
        let info = CreativeInfo::new(CreativeCategory::Nature, "itemGroup.name.sapling");
        let item = CustomItem::new(ItemProfile::new("Sapling"), "sapling", Some(&info));
        assert_eq!(value_of(&item, CREATIVE_CATEGORY), &json!(2));
        assert_eq!(
            value_of(&item, CREATIVE_GROUP),
            &json!("itemGroup.name.sapling")
        );
    }

    #[test]
    fn test_armor_chest() {
        let profile = ItemProfile::new("Plate").wearable(EquipmentSlot::Chest, 6);
        let item = CustomItem::new(profile, "plate", None);
        assert_eq!(value_of(&item, ARMOR), &json!({ "defense_points": 6 }));
        assert_eq!(
            value_of(&item, WEARABLE),
            &json!({ "slot": "slot.armor.chest" })
        );
    }

    #[test]
    fn test_armor_unknown_slot_falls_back() {
        let profile = ItemProfile::new("Charm").wearable(EquipmentSlot::from_index(9), 1);
        let item = CustomItem::new(profile, "charm", None);
        assert_eq!(value_of(&item, WEARABLE), &json!({ "slot": "slot.armor" }));
    }

    #[test]
    fn test_consumable_drink() {
        let item = CustomItem::new(ItemProfile::new("Tonic").drink(), "tonic", None);
        assert_eq!(value_of(&item, USE_ANIMATION), &json!("drink"));
        assert!(!item.has_component(FOOD));
        assert_eq!(value_of(&item, USE_DURATION), &json!(20));
    }

    #[test]
    fn test_consumable_food() {
        let item = CustomItem::new(ItemProfile::new("Berry").food(false), "berry", None);
        assert_eq!(value_of(&item, USE_ANIMATION), &json!("eat"));
        assert_eq!(value_of(&item, FOOD), &json!({ "can_always_eat": true }));

        let item = CustomItem::new(ItemProfile::new("Steak").food(true), "steak", None);
        assert_eq!(value_of(&item, FOOD), &json!({ "can_always_eat": false }));
    }

    #[test]
    fn test_use_duration_override_wins() {
        let mut item = CustomItem::new(ItemProfile::new("Berry").food(true), "berry", None);
        item.set_use_duration(32);
        assert_eq!(value_of(&item, USE_DURATION), &json!(32));
    }

    #[test]
    fn test_durable_projectile_fuel() {
        let profile = ItemProfile::new("Spear")
            .durable(250)
            .projectile()
            .fuel(300);
        let item = CustomItem::new(profile, "spear", None);
        assert_eq!(value_of(&item, DURABILITY), &json!(250));
        assert_eq!(
            value_of(&item, PROJECTILE),
            &json!({ "projectile_entity": "projectile" })
        );
        assert_eq!(
            value_of(&item, THROWABLE),
            &json!({ "do_swing_animation": true })
        );
        assert_eq!(value_of(&item, FUEL), &json!({ "duration": 300.0 }));
    }

    #[test]
    fn test_display_name_only_when_known() {
        let named = CustomItem::new(ItemProfile::new("Ruby"), "ruby", None);
        assert_eq!(value_of(&named, DISPLAY_NAME), &json!({ "value": "Ruby" }));

        let unnamed = CustomItem::new(ItemProfile::default(), "ruby", None);
        assert!(!unnamed.has_component(DISPLAY_NAME));
    }

    #[test]
    fn test_zero_fuel_time_adds_nothing() {
        let item = CustomItem::new(ItemProfile::new("Ruby").fuel(0), "ruby", None);
        assert!(!item.has_component(FUEL));
    }

    #[test]
    fn test_cooldown_category_defaults_to_name() {
        let mut item = CustomItem::new(ItemProfile::new("Wand"), "wand", None);
        item.set_use_cooldown(2.0, None);
        assert_eq!(value_of(&item, COOLDOWN)["category"], json!("Wand"));

        item.set_use_cooldown(2.0, Some(""));
        assert_eq!(value_of(&item, COOLDOWN)["category"], json!("Wand"));

        item.set_use_cooldown(0.5, Some("magic"));
        assert_eq!(
            value_of(&item, COOLDOWN),
            &json!({ "category": "magic", "duration": 0.5 })
        );
    }

    #[test]
    fn test_render_offsets_adds_hand_equipped() {
        let mut item = CustomItem::new(ItemProfile::new("Hammer"), "hammer", None);
        item.setup_render_offsets(64, 64, true);
        assert_eq!(value_of(&item, HAND_EQUIPPED), &json!(true));
        assert!(item.has_component(RENDER_OFFSETS));
    }

    #[test]
    fn test_descriptor_routes_defaults() {
        let mut item = CustomItem::new(ItemProfile::new("Ruby"), "ruby", None);
        item.allow_off_hand(true);
        item.set_damage(7);
        let tree = item.descriptor().unwrap();

        let properties = format!("{COMPONENTS_KEY}.{ITEM_PROPERTIES_KEY}");
        assert_eq!(
            tree.lookup(&format!("{properties}.allow_off_hand"))
                .and_then(TagNode::as_value),
            Some(&TagValue::Bool(true))
        );
        assert_eq!(
            tree.lookup(&format!("{properties}.damage"))
                .and_then(TagNode::as_value),
            Some(&TagValue::Int(7))
        );
        assert_eq!(
            tree.lookup("components.minecraft:display_name.value")
                .and_then(TagNode::as_value),
            Some(&TagValue::from("Ruby"))
        );
    }

    #[test]
    fn test_descriptor_fails_on_bad_custom_component() {
        let mut item = CustomItem::new(ItemProfile::new("Ruby"), "ruby", None);
        item.add_component(Component::new("example:mixed", json!([1, "a"])));
        let err = item.descriptor().unwrap_err();
        assert_eq!(err.component, "example:mixed");
    }
}
