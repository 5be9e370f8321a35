//! Constructors for the well-known item components.
//!
//! Each function returns a [`Component`] with the name, payload shape, and
//! routing the client expects. Names prefixed with `minecraft:` are generic
//! components; the rest are item properties.

use content_component::{Component, CreativeInfo};
use serde_json::json;

use crate::capability::EquipmentSlot;

pub const CREATIVE_CATEGORY: &str = "creative_category";
pub const CREATIVE_GROUP: &str = "creative_group";
pub const CAN_DESTROY_IN_CREATIVE: &str = "can_destroy_in_creative";
pub const ICON: &str = "minecraft:icon";
pub const MAX_STACK_SIZE: &str = "max_stack_size";
pub const ARMOR: &str = "minecraft:armor";
pub const WEARABLE: &str = "minecraft:wearable";
pub const FOOD: &str = "minecraft:food";
pub const USE_ANIMATION: &str = "use_animation";
pub const USE_DURATION: &str = "use_duration";
pub const DURABILITY: &str = "minecraft:durability";
pub const PROJECTILE: &str = "minecraft:projectile";
pub const THROWABLE: &str = "minecraft:throwable";
pub const DISPLAY_NAME: &str = "minecraft:display_name";
pub const FUEL: &str = "minecraft:fuel";
pub const HAND_EQUIPPED: &str = "hand_equipped";
pub const RENDER_OFFSETS: &str = "minecraft:render_offsets";
pub const ALLOW_OFF_HAND: &str = "allow_off_hand";
pub const COOLDOWN: &str = "minecraft:cooldown";
pub const DAMAGE: &str = "damage";

/// Protocol wearable slot names.
pub mod slot {
    pub const ARMOR: &str = "slot.armor";
    pub const ARMOR_HEAD: &str = "slot.armor.head";
    pub const ARMOR_CHEST: &str = "slot.armor.chest";
    pub const ARMOR_LEGS: &str = "slot.armor.legs";
    pub const ARMOR_FEET: &str = "slot.armor.feet";
}

/// Use animations understood by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseAnimation {
    Eat,
    Drink,
}

impl UseAnimation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eat => "eat",
            Self::Drink => "drink",
        }
    }
}

/// Protocol wearable slot for a declared equipment slot.
#[must_use]
pub const fn wearable_slot(equipment: EquipmentSlot) -> &'static str {
    match equipment {
        EquipmentSlot::Head => slot::ARMOR_HEAD,
        EquipmentSlot::Chest => slot::ARMOR_CHEST,
        EquipmentSlot::Legs => slot::ARMOR_LEGS,
        EquipmentSlot::Feet => slot::ARMOR_FEET,
        EquipmentSlot::Other => slot::ARMOR,
    }
}

#[must_use]
pub fn creative_category(info: &CreativeInfo) -> Component {
    Component::property(CREATIVE_CATEGORY, info.category.numeric_id())
}

#[must_use]
pub fn creative_group(info: &CreativeInfo) -> Component {
    Component::property(CREATIVE_GROUP, info.group.as_str())
}

#[must_use]
pub fn can_destroy_in_creative() -> Component {
    Component::property(CAN_DESTROY_IN_CREATIVE, true)
}

#[must_use]
pub fn icon(texture: &str) -> Component {
    Component::new(ICON, json!({ "texture": texture }))
}

#[must_use]
pub fn max_stack_size(size: i32) -> Component {
    Component::property(MAX_STACK_SIZE, size)
}

#[must_use]
pub fn armor(defense_points: i32) -> Component {
    Component::new(ARMOR, json!({ "defense_points": defense_points }))
}

#[must_use]
pub fn wearable(equipment: EquipmentSlot) -> Component {
    Component::new(WEARABLE, json!({ "slot": wearable_slot(equipment) }))
}

#[must_use]
pub fn food(can_always_eat: bool) -> Component {
    Component::new(FOOD, json!({ "can_always_eat": can_always_eat }))
}

#[must_use]
pub fn use_animation(animation: UseAnimation) -> Component {
    Component::property(USE_ANIMATION, animation.as_str())
}

/// Use duration in ticks (20 ticks per second).
#[must_use]
pub fn use_duration(ticks: i32) -> Component {
    Component::property(USE_DURATION, ticks)
}

#[must_use]
pub fn durability(max_durability: i32) -> Component {
    Component::new(DURABILITY, max_durability)
}

#[must_use]
pub fn projectile(projectile_entity: &str) -> Component {
    Component::new(PROJECTILE, json!({ "projectile_entity": projectile_entity }))
}

#[must_use]
pub fn throwable(do_swing_animation: bool) -> Component {
    Component::new(THROWABLE, json!({ "do_swing_animation": do_swing_animation }))
}

#[must_use]
pub fn display_name(name: &str) -> Component {
    Component::new(DISPLAY_NAME, json!({ "value": name }))
}

/// Fuel burn duration, in ticks.
#[must_use]
pub fn fuel(duration: i32) -> Component {
    Component::new(FUEL, json!({ "duration": f64::from(duration) }))
}

#[must_use]
pub fn hand_equipped(hand_equipped: bool) -> Component {
    Component::property(HAND_EQUIPPED, hand_equipped)
}

/// Render offsets that keep a `width`×`height` texture at the size of a
/// 16×16 one when held.
#[must_use]
pub fn render_offsets(width: u32, height: u32, hand_equipped: bool) -> Component {
    let (h_base, v_base) = if hand_equipped {
        (0.075, 0.125)
    } else {
        (0.1, 0.1)
    };
    let horizontal = h_base / (f64::from(width.max(1)) / 16.0);
    let vertical = v_base / (f64::from(height.max(1)) / 16.0);
    let perspectives = json!({
        "first_person": { "scale": [horizontal, vertical, horizontal] },
        "third_person": { "scale": [horizontal, vertical, horizontal] },
    });
    Component::new(
        RENDER_OFFSETS,
        json!({ "main_hand": perspectives.clone(), "off_hand": perspectives }),
    )
}

#[must_use]
pub fn allow_off_hand(allow: bool) -> Component {
    Component::property(ALLOW_OFF_HAND, allow)
}

/// Cooldown shared by every item in `category`, in seconds.
#[must_use]
pub fn cooldown(category: &str, duration: f32) -> Component {
    Component::new(
        COOLDOWN,
        json!({ "category": category, "duration": f64::from(duration) }),
    )
}

#[must_use]
pub fn damage(points: i32) -> Component {
    Component::property(DAMAGE, points)
}
