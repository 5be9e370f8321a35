//! The [`Component`] data unit and the per-object [`ComponentSet`].
//!
//! A component is a single named fact about a piece of custom content, for
//! example `max_stack_size = 64`. Components flagged as *properties* are
//! routed into the `item_properties` sub-tree when the set is assembled; all
//! others land directly under `components`.
//!
//! Payloads are authored as loosely typed [`serde_json::Value`]s. Whether a
//! payload actually has a tag representation is only decided at assembly
//! time, see [`crate::descriptor::assemble`].

use std::collections::HashMap;

use serde_json::Value;

/// A named, single-valued fact about a content object.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    value: Value,
    is_property: bool,
}

impl Component {
    /// Create a component that is emitted directly under `components`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_property: false,
        }
    }

    /// Create a component that is emitted under `components.item_properties`.
    #[must_use]
    pub fn property(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_property: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns `true` if this component belongs in the properties sub-tree.
    #[must_use]
    pub fn is_property(&self) -> bool {
        self.is_property
    }
}

/// The components owned by one content object, unique by name.
///
/// Adding a component whose name is already present replaces the previous
/// entry, so explicit overrides applied after the defaults always win.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    components: HashMap<String, Component>,
}

impl ComponentSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Add a component, replacing any existing component with the same name.
    ///
    /// Returns the replaced component, if any.
    pub fn add(&mut self, component: Component) -> Option<Component> {
        self.components
            .insert(component.name.clone(), component)
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// Iterate over the components in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Extend<Component> for ComponentSet {
    fn extend<I: IntoIterator<Item = Component>>(&mut self, iter: I) {
        for component in iter {
            self.add(component);
        }
    }
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
