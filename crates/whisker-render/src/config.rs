//! Generator configuration
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! changes:
//!
//! ```json
//! { "width": 256, "height": 256, "background": true,
//!   "traits": { "colors": ["#FFB6C1", "#87CEEB"] } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use whisker_core::TraitOverrides;

use crate::error::GeneratorError;

/// When the accessory layer is painted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessoryLayering {
    /// Neck accessories behind the body, head accessories over the face
    #[default]
    NeckAware,
    /// Every accessory painted last, over the legs
    AlwaysLast,
}

/// Settings shared by every cat a generator produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Emit a scalable root without width/height
    pub responsive: bool,
    /// Paint a backdrop with paw prints
    pub background: bool,
    pub accessory_layering: AccessoryLayering,
    /// Replacement fallback lists
    pub traits: TraitOverrides,
    /// Extra SVG assets layered over the embedded set
    pub asset_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            responsive: false,
            background: false,
            accessory_layering: AccessoryLayering::NeckAware,
            traits: TraitOverrides::default(),
            asset_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON config
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set canvas dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    pub fn with_accessory_layering(mut self, layering: AccessoryLayering) -> Self {
        self.accessory_layering = layering;
        self
    }

    pub fn with_traits(mut self, traits: TraitOverrides) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }
}
