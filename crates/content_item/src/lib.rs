//! # content_item
//!
//! Custom item definitions.
//!
//! This crate provides:
//!
//! - [`ItemProfile`] and [`Capabilities`]: the explicit facts an item
//!   declares (wearable, consumable, durable, projectile, fuel).
//! - [`components`]: constructors for the well-known item components.
//! - [`CustomItem`]: runs the capability detector and exposes the caller
//!   overrides applied on top of the defaults.

pub mod capability;
pub mod components;
pub mod item;

pub use capability::{
    Armor, Capabilities, Consumable, EquipmentSlot, Food, ItemProfile, UNKNOWN_NAME,
};
pub use item::{CustomItem, DEFAULT_USE_DURATION_TICKS, default_components};
