//! Registry configuration.

use content_component::CreativeInfo;

use crate::block::{DEFAULT_GEOMETRY, RenderMethod};

/// Defaults applied by the convenience registration helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// Creative placement used when a registration does not specify one.
    pub default_creative: CreativeInfo,
    /// Geometry identifier for simple blocks.
    pub block_geometry: String,
    /// Render method for simple block materials.
    pub block_render_method: RenderMethod,
}

impl RegistryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_creative: CreativeInfo::default(),
            block_geometry: DEFAULT_GEOMETRY.to_string(),
            block_render_method: RenderMethod::AlphaTest,
        }
    }

    #[must_use]
    pub fn with_default_creative(mut self, creative: CreativeInfo) -> Self {
        self.default_creative = creative;
        self
    }

    #[must_use]
    pub fn with_block_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.block_geometry = geometry.into();
        self
    }

    #[must_use]
    pub fn with_block_render_method(mut self, method: RenderMethod) -> Self {
        self.block_render_method = method;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
