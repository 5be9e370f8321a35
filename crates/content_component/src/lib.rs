//! # content_component
//!
//! The data model behind custom content descriptors.
//!
//! This crate provides:
//!
//! - [`TagValue`], [`TagNode`], [`DescriptorTree`]: the nested tree shape the
//!   host serialises for the client.
//! - [`Component`] and [`ComponentSet`]: named facts about an object, unique
//!   by name with last-write-wins semantics.
//! - [`assemble`]: the descriptor assembler that partitions a set into
//!   `components` and `components.item_properties`.
//! - [`CreativeInfo`]: creative inventory placement.
//! - [`codec`]: MessagePack hand-off of descriptor trees to host collaborators.

pub mod codec;
pub mod component;
pub mod creative;
pub mod descriptor;
pub mod error;
pub mod tag;

pub use component::{Component, ComponentSet};
pub use creative::{CreativeCategory, CreativeInfo};
pub use descriptor::{COMPONENTS_KEY, ITEM_PROPERTIES_KEY, assemble};
pub use error::{CodecError, ComponentSerializationError};
pub use tag::{DescriptorTree, NodeKind, TagNode, TagValue};
