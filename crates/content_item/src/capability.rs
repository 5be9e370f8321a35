//! Declared item capabilities.
//!
//! Instead of inferring behaviour from what type an item happens to be, every
//! custom item declares an explicit [`Capabilities`] set. The detector in
//! [`crate::item`] branches on these facts to decide which default components
//! the item needs.

use serde::{Deserialize, Serialize};

/// The host's armor inventory slot an item is worn in.
///
/// Host slot indices outside the four armor slots map to [`EquipmentSlot::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Head,
    Chest,
    Legs,
    Feet,
    Other,
}

impl EquipmentSlot {
    /// Map a host armor inventory index (`0..=3`) to a slot.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Head,
            1 => Self::Chest,
            2 => Self::Legs,
            3 => Self::Feet,
            _ => Self::Other,
        }
    }

    /// Map a slot name such as `"chest"` to a slot. Unknown names map to
    /// [`EquipmentSlot::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "head" | "helmet" => Self::Head,
            "chest" | "chestplate" => Self::Chest,
            "legs" | "leggings" => Self::Legs,
            "feet" | "boots" => Self::Feet,
            _ => Self::Other,
        }
    }
}

/// Wearable armor facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub slot: EquipmentSlot,
    pub defense_points: i32,
}

/// Consumable facts.
///
/// `food` is `Some` only when the item is eaten; a consumable without it is
/// drunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Consumable {
    pub food: Option<Food>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Food {
    /// Whether the player must be hungry to eat the item.
    pub requires_hunger: bool,
}

/// The capability set an item declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub armor: Option<Armor>,
    pub consumable: Option<Consumable>,
    /// Maximum durability, for items that wear out.
    pub max_durability: Option<i32>,
    pub projectile: bool,
    /// Burn time in ticks; `0` means the item is not a fuel.
    pub fuel_time: i32,
}

/// Everything the detector reads from an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProfile {
    /// Display name, or [`UNKNOWN_NAME`] when the item has none.
    pub name: String,
    pub max_stack_size: i32,
    pub capabilities: Capabilities,
}

/// Host sentinel for an item without a display name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Stack size used when an item does not declare one.
pub const DEFAULT_MAX_STACK_SIZE: i32 = 64;

impl ItemProfile {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            capabilities: Capabilities::default(),
        }
    }

    #[must_use]
    pub fn with_max_stack_size(mut self, size: i32) -> Self {
        self.max_stack_size = size;
        self
    }

    #[must_use]
    pub fn wearable(mut self, slot: EquipmentSlot, defense_points: i32) -> Self {
        self.capabilities.armor = Some(Armor {
            slot,
            defense_points,
        });
        self
    }

    /// Declare the item edible.
    #[must_use]
    pub fn food(mut self, requires_hunger: bool) -> Self {
        self.capabilities.consumable = Some(Consumable {
            food: Some(Food { requires_hunger }),
        });
        self
    }

    /// Declare the item drinkable.
    #[must_use]
    pub fn drink(mut self) -> Self {
        self.capabilities.consumable = Some(Consumable { food: None });
        self
    }

    #[must_use]
    pub fn durable(mut self, max_durability: i32) -> Self {
        self.capabilities.max_durability = Some(max_durability);
        self
    }

    #[must_use]
    pub fn projectile(mut self) -> Self {
        self.capabilities.projectile = true;
        self
    }

    #[must_use]
    pub fn fuel(mut self, burn_ticks: i32) -> Self {
        self.capabilities.fuel_time = burn_ticks;
        self
    }

    /// Returns `true` unless the name is the host's [`UNKNOWN_NAME`] sentinel.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        self.name != UNKNOWN_NAME
    }
}

impl Default for ItemProfile {
    fn default() -> Self {
        Self::new(UNKNOWN_NAME)
    }
}
