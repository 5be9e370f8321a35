//! The descriptor assembler.
//!
//! [`assemble`] turns a [`ComponentSet`] into the two-level tree the client
//! protocol expects:
//!
//! ```text
//! {
//!   components: {
//!     <component name>: <payload>,
//!     ...
//!     item_properties: {
//!       <property name>: <payload>,
//!       ...
//!     }
//!   }
//! }
//! ```
//!
//! `item_properties` is always present, even when no component is a property.

use tracing::debug;

use crate::component::ComponentSet;
use crate::error::ComponentSerializationError;
use crate::tag::{DescriptorTree, TagNode};

/// Root key holding every generic component.
pub const COMPONENTS_KEY: &str = "components";

/// Key under [`COMPONENTS_KEY`] holding the property subset.
pub const ITEM_PROPERTIES_KEY: &str = "item_properties";

/// Assemble the descriptor tree for a component set.
///
/// # Errors
///
/// Returns [`ComponentSerializationError`] naming the first component whose
/// payload has no tag representation. No partial tree is produced.
pub fn assemble(set: &ComponentSet) -> Result<DescriptorTree, ComponentSerializationError> {
    let mut components = DescriptorTree::new();
    let mut properties = DescriptorTree::new();

    for component in set.iter() {
        let node =
            TagNode::from_json(component.value()).ok_or_else(|| ComponentSerializationError {
                component: component.name().to_string(),
            })?;
        if component.is_property() {
            properties.insert(component.name(), node);
        } else {
            components.insert(component.name(), node);
        }
    }

    debug!(
        components = components.len(),
        properties = properties.len(),
        "assembled descriptor"
    );

    components.insert(ITEM_PROPERTIES_KEY, properties);
    Ok(DescriptorTree::new().with(COMPONENTS_KEY, components))
}
