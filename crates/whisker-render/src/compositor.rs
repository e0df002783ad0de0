//! Cat compositor
//!
//! Layers one cat onto an [`SvgBuilder`] in a fixed paint order:
//!
//! ```text
//! [background] → tail → (neck accessory) → body → fur → head → eyes → mouth
//!   → [blush] → (head accessory) → mutations → whiskers → legs
//! ```
//!
//! With [`AccessoryLayering::AlwaysLast`] the accessory slots stay empty and
//! the accessory is painted once more at the very end, whatever its kind.

use whisker_core::{CatAttributes, SeededRandom};
use whisker_svg::{AssetLibrary, CanvasMode, SvgBuilder};

use crate::accessory::{Accessory, is_neck_accessory};
use crate::anatomy::{self, Side};
use crate::config::{AccessoryLayering, GeneratorConfig};
use crate::face::{EyeShape, MouthShape};
use crate::fur::FurPattern;
use crate::mutation::Mutation;

/// Probability that a cat gets pink cheeks
pub const BLUSH_CHANCE: f64 = 0.7;

/// Anchor points shared by every drawable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatLayout {
    pub center_x: f64,
    pub center_y: f64,
    /// Base size, 30% of the shorter canvas side
    pub size: f64,
}

impl CatLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            center_x: f64::from(width) / 2.0,
            center_y: f64::from(height) / 2.0,
            size: f64::from(width.min(height)) * 0.3,
        }
    }

    /// Vertical center of the head
    pub fn head_y(&self) -> f64 {
        self.center_y - self.size * 0.5
    }
}

/// Paints cats for one generator configuration
pub struct CatCompositor<'a> {
    config: &'a GeneratorConfig,
    assets: &'a AssetLibrary,
}

impl<'a> CatCompositor<'a> {
    pub fn new(config: &'a GeneratorConfig, assets: &'a AssetLibrary) -> Self {
        Self { config, assets }
    }

    /// Render a cat, continuing the generator stream that chose its attributes
    pub fn compose(
        &self,
        attributes: &CatAttributes,
        rng: &mut SeededRandom,
        mode: CanvasMode,
    ) -> String {
        let config = self.config;
        let mut svg = SvgBuilder::new(config.width, config.height, self.assets).with_mode(mode);
        let layout = CatLayout::new(config.width, config.height);
        let color = attributes.color.as_str();

        let accessory = Accessory::from_id(&attributes.accessory);
        let neck_aware = config.accessory_layering == AccessoryLayering::NeckAware;
        let worn_on_neck = is_neck_accessory(&attributes.accessory);

        if config.background {
            anatomy::draw_background(&mut svg, rng);
        }

        anatomy::draw_tail(&mut svg, &layout, color, Side::Left);
        if neck_aware && worn_on_neck {
            accessory.draw(&mut svg, &layout);
        }

        anatomy::draw_body(&mut svg, &layout, color);
        FurPattern::from_id(&attributes.fur_pattern).draw(&mut svg, rng, &layout, color);
        anatomy::draw_head(&mut svg, &layout, color);
        EyeShape::from_id(&attributes.eye_shape).draw(&mut svg, &layout);
        MouthShape::from_id(&attributes.mouth).draw(&mut svg, &layout);

        if rng.chance(BLUSH_CHANCE) {
            anatomy::draw_blush(&mut svg, &layout);
        }

        if neck_aware && !worn_on_neck {
            accessory.draw(&mut svg, &layout);
        }

        for flag in &attributes.mutation_flags {
            Mutation::from_id(flag).draw(&mut svg, rng, &layout);
        }

        anatomy::draw_whiskers(&mut svg, &layout);
        anatomy::draw_legs(&mut svg, &layout, color);

        if !neck_aware {
            accessory.draw(&mut svg, &layout);
        }

        svg.build()
    }
}
