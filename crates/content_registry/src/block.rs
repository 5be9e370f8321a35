//! Block model descriptors.
//!
//! Geometry, material, and collision values are plain data; [`BlockModel`]
//! only arranges them into the component tree the client reads.

use content_component::{COMPONENTS_KEY, DescriptorTree, TagNode, TagValue};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geometry identifier for a full cube.
pub const DEFAULT_GEOMETRY: &str = "geometry.block";

/// Material target applying to every face.
pub const TARGET_ALL: &str = "*";

/// How the client blends a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMethod {
    Opaque,
    #[default]
    AlphaTest,
    Blend,
    DoubleSided,
}

impl RenderMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opaque => "opaque",
            Self::AlphaTest => "alpha_test",
            Self::Blend => "blend",
            Self::DoubleSided => "double_sided",
        }
    }
}

/// A texture bound to one face target of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub target: String,
    pub texture: String,
    pub render_method: RenderMethod,
}

impl Material {
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        texture: impl Into<String>,
        render_method: RenderMethod,
    ) -> Self {
        Self {
            target: target.into(),
            texture: texture.into(),
            render_method,
        }
    }
}

/// The visual and collision model of a custom block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockModel {
    pub materials: Vec<Material>,
    pub geometry: String,
    pub origin: Vec3,
    pub size: Vec3,
    /// Solid blocks collide; others can be walked through.
    pub solid: bool,
}

impl BlockModel {
    /// A solid full cube with `materials`.
    #[must_use]
    pub fn new(materials: Vec<Material>) -> Self {
        Self {
            materials,
            geometry: DEFAULT_GEOMETRY.to_string(),
            origin: Vec3::new(-8.0, 0.0, -8.0),
            size: Vec3::splat(16.0),
            solid: true,
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = geometry.into();
        self
    }

    #[must_use]
    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    /// Render the model as a block descriptor rooted at `components`.
    #[must_use]
    pub fn descriptor(&self) -> DescriptorTree {
        let mut materials = DescriptorTree::new();
        for material in &self.materials {
            materials.insert(
                material.target.clone(),
                DescriptorTree::new()
                    .with("texture", TagValue::from(material.texture.as_str()))
                    .with("render_method", TagValue::from(material.render_method.as_str())),
            );
        }

        let components = DescriptorTree::new()
            .with(
                "minecraft:material_instances",
                DescriptorTree::new()
                    .with("mappings", DescriptorTree::new())
                    .with("materials", materials),
            )
            .with(
                "minecraft:geometry",
                DescriptorTree::new().with("identifier", TagValue::from(self.geometry.as_str())),
            )
            .with("minecraft:collision_box", self.bounding_box(self.solid))
            .with("minecraft:selection_box", self.bounding_box(true));

        DescriptorTree::new().with(COMPONENTS_KEY, components)
    }

    fn bounding_box(&self, enabled: bool) -> DescriptorTree {
        DescriptorTree::new()
            .with("enabled", TagValue::Bool(enabled))
            .with("origin", vec3_node(self.origin))
            .with("size", vec3_node(self.size))
    }
}

fn vec3_node(v: Vec3) -> TagNode {
    TagNode::List(
        v.to_array()
            .into_iter()
            .map(|c| TagNode::Value(TagValue::Float(c)))
            .collect(),
    )
}
