//! Tagged values and descriptor trees.
//!
//! A [`DescriptorTree`] is the nested, string-keyed structure handed to the
//! host for protocol serialisation. Leaves are [`TagValue`]s; interior nodes
//! are nested trees or homogeneous lists. Byte-level tag encoding is the host's
//! job, this module only fixes the shape.
//!
//! Trees are keyed by a `BTreeMap` so that two trees with the same content
//! iterate (and encode) identically regardless of insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A scalar tag payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Boolean, encoded by the host as a byte tag.
    Bool(bool),
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit float.
    Float(f32),
    /// UTF-8 string.
    String(String),
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for TagValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A node in a [`DescriptorTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagNode {
    /// A scalar leaf.
    Value(TagValue),
    /// An ordered list whose elements all share the same [`NodeKind`].
    List(Vec<TagNode>),
    /// A nested tree.
    Tree(DescriptorTree),
}

/// The shape of a [`TagNode`], used to keep lists homogeneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Bool,
    Int,
    Float,
    String,
    List,
    Tree,
}

impl TagNode {
    /// Returns the shape of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Value(TagValue::Bool(_)) => NodeKind::Bool,
            Self::Value(TagValue::Int(_)) => NodeKind::Int,
            Self::Value(TagValue::Float(_)) => NodeKind::Float,
            Self::Value(TagValue::String(_)) => NodeKind::String,
            Self::List(_) => NodeKind::List,
            Self::Tree(_) => NodeKind::Tree,
        }
    }

    /// Returns the scalar payload, if this node is a leaf.
    #[must_use]
    pub fn as_value(&self) -> Option<&TagValue> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the nested tree, if this node is one.
    #[must_use]
    pub fn as_tree(&self) -> Option<&DescriptorTree> {
        match self {
            Self::Tree(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the list elements, if this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[TagNode]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a loosely typed JSON payload into a node.
    ///
    /// Returns `None` when the payload has no tag representation: `null`,
    /// numbers outside the `i32` or `f32` range, or lists whose elements
    /// differ in shape.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Value(TagValue::Bool(*b))),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    let int = n.as_i64().and_then(|i| i32::try_from(i).ok())?;
                    Some(Self::Value(TagValue::Int(int)))
                } else {
                    let float = n.as_f64()?;
                    let narrowed = float as f32;
                    if float.is_finite() && narrowed.is_infinite() {
                        return None;
                    }
                    Some(Self::Value(TagValue::Float(narrowed)))
                }
            }
            Value::String(s) => Some(Self::Value(TagValue::String(s.clone()))),
            Value::Array(items) => {
                let nodes = items
                    .iter()
                    .map(Self::from_json)
                    .collect::<Option<Vec<_>>>()?;
                if let Some(first) = nodes.first()
                    && nodes.iter().any(|n| n.kind() != first.kind())
                {
                    return None;
                }
                Some(Self::List(nodes))
            }
            Value::Object(map) => {
                let mut tree = DescriptorTree::new();
                for (key, value) in map {
                    tree.insert(key.clone(), Self::from_json(value)?);
                }
                Some(Self::Tree(tree))
            }
        }
    }
}

impl From<TagValue> for TagNode {
    fn from(value: TagValue) -> Self {
        Self::Value(value)
    }
}

impl From<DescriptorTree> for TagNode {
    fn from(tree: DescriptorTree) -> Self {
        Self::Tree(tree)
    }
}

/// A string-keyed tree of [`TagNode`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorTree {
    entries: BTreeMap<String, TagNode>,
}

impl DescriptorTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace a node, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<TagNode>) -> Option<TagNode> {
        self.entries.insert(key.into(), node.into())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: impl Into<TagNode>) -> Self {
        self.insert(key, node);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TagNode> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TagNode> {
        self.entries.get_mut(key)
    }

    /// Returns the nested tree stored under `key`.
    #[must_use]
    pub fn get_tree(&self, key: &str) -> Option<&DescriptorTree> {
        self.get(key).and_then(TagNode::as_tree)
    }

    /// Returns the scalar stored under `key`.
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<&TagValue> {
        self.get(key).and_then(TagNode::as_value)
    }

    /// Follow a dotted path of keys, e.g. `"components.item_properties"`.
    ///
    /// Keys themselves may contain `:` (as in `minecraft:wearable`) but not
    /// `.`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&TagNode> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            node = node.as_tree()?.get(segment)?;
        }
        Some(node)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TagNode)> {
        self.entries.iter()
    }
}
