//! Accessories
//!
//! Most accessories are embedded SVG assets placed relative to the head.
//! A few are drawn from primitives. Identifiers without artwork draw nothing.

use std::f64::consts::TAU;

use whisker_core::color::colors;
use whisker_svg::{PathData, SvgBuilder};

use crate::compositor::CatLayout;

/// Accessories painted behind the body, around the neck
pub const NECK_ACCESSORIES: &[&str] = &[
    "bow-tie",
    "bowtie",
    "bandana",
    "scarf",
    "necklace",
    "bell",
    "ribbon",
    "1st-place-medal",
];

/// Accessories that count as wearing something on the head or neck
pub const HEAD_OR_NECK_ACCESSORIES: &[&str] = &[
    "hat",
    "crown",
    "bow-tie",
    "bowtie",
    "1st-place-medal",
    "scarf",
    "glasses",
    "adhesive-bandage",
];

/// Whether an accessory identifier is worn around the neck
pub fn is_neck_accessory(id: &str) -> bool {
    NECK_ACCESSORIES.contains(&id)
}

/// Where an asset lands, in multiples of the base size from the head center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Target extent before `scale`
    pub size: f64,
    pub scale: f64,
}

impl Placement {
    const fn new(offset_x: f64, offset_y: f64, size: f64, scale: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            size,
            scale,
        }
    }
}

/// Drawable accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessory {
    Hat,
    Crown,
    Glasses,
    Mask,
    Scarf,
    Necklace,
    Ribbon,
    BowTie,
    Medal,
    Bandage,
    Flower,
    Bandana,
    Bell,
    None,
}

impl Accessory {
    pub const ALL: [Accessory; 14] = [
        Self::Hat,
        Self::Crown,
        Self::Glasses,
        Self::Mask,
        Self::Scarf,
        Self::Necklace,
        Self::Ribbon,
        Self::BowTie,
        Self::Medal,
        Self::Bandage,
        Self::Flower,
        Self::Bandana,
        Self::Bell,
        Self::None,
    ];

    pub fn from_id(id: &str) -> Self {
        match id {
            "hat" | "party-hat" => Self::Hat,
            "crown" | "tiara" => Self::Crown,
            "glasses" | "sunglasses" => Self::Glasses,
            "mask" => Self::Mask,
            "scarf" => Self::Scarf,
            "necklace" => Self::Necklace,
            "ribbon" => Self::Ribbon,
            "bow-tie" | "bowtie" => Self::BowTie,
            "1st-place-medal" => Self::Medal,
            "adhesive-bandage" => Self::Bandage,
            "flower" => Self::Flower,
            "bandana" => Self::Bandana,
            "bell" => Self::Bell,
            _ => Self::None,
        }
    }

    /// Embedded asset name and placement, for asset-backed accessories
    pub fn asset(self) -> Option<(&'static str, Placement)> {
        let entry = match self {
            Self::Hat => ("hat", Placement::new(0.0, -0.95, 0.8, 1.5)),
            Self::Crown => ("crown", Placement::new(0.0, -1.0, 0.7, 1.2)),
            Self::Glasses => ("glasses", Placement::new(0.0, -0.1, 1.0, 1.35)),
            Self::Mask => ("mask", Placement::new(0.0, -0.1, 1.0, 1.4)),
            Self::Scarf => ("scarf", Placement::new(0.0, 0.85, 0.6, 1.6)),
            Self::Necklace => ("necklace", Placement::new(0.0, 0.9, 0.5, 1.2)),
            Self::Ribbon => ("ribbon", Placement::new(0.0, 0.8, 0.35, 1.4)),
            Self::BowTie => ("bow-tie", Placement::new(0.0, 0.8, 0.4, 2.0)),
            Self::Medal => ("1st-place-medal", Placement::new(0.0, 1.0, 0.35, 1.4)),
            Self::Bandage => ("adhesive-bandage", Placement::new(0.45, 0.2, 0.3, 1.0)),
            Self::Flower | Self::Bandana | Self::Bell | Self::None => return None,
        };
        Some(entry)
    }

    /// Draw the accessory; returns false when nothing was drawn
    pub fn draw(self, svg: &mut SvgBuilder<'_>, layout: &CatLayout) -> bool {
        let (x, y, s) = (layout.center_x, layout.head_y(), layout.size);

        if let Some((name, at)) = self.asset() {
            return svg.embed_asset(
                name,
                x + s * at.offset_x,
                y + s * at.offset_y,
                s * at.size,
                at.scale,
            );
        }

        match self {
            Self::Flower => {
                let (fx, fy) = (x + s * 0.3, y + s * 0.8);
                let petal = s * 0.08;
                for i in 0..6u32 {
                    let angle = f64::from(i) * TAU / 6.0;
                    svg.circle(
                        fx + angle.cos() * petal,
                        fy + angle.sin() * petal,
                        petal * 0.7,
                        colors::HOT_PINK,
                        None,
                    );
                }
                svg.circle(fx, fy, petal * 0.4, colors::GOLD, None);
            }
            Self::Bandana => {
                let band_y = y + s * 0.8;
                let half = s * 0.3;
                let cloth = PathData::new()
                    .move_to(x - half, band_y)
                    .line_to(x + half, band_y)
                    .line_to(x, band_y + s * 0.3)
                    .close();
                svg.path(cloth, colors::CRIMSON, None);

                let dot = s * 0.02;
                svg.circle(x - s * 0.1, band_y + s * 0.1, dot, colors::WHITE, None);
                svg.circle(x + s * 0.1, band_y + s * 0.1, dot, colors::WHITE, None);
                svg.circle(x, band_y + s * 0.2, dot, colors::WHITE, None);
            }
            Self::Bell => {
                let collar_y = y + s * 0.8;
                svg.ellipse(x, collar_y, s * 0.3, s * 0.05, colors::LEATHER, None);
                svg.ellipse(x, collar_y + s * 0.1, s * 0.08, s * 0.08, colors::GOLD, None);
                svg.ellipse(x, collar_y + s * 0.1, s * 0.06, s * 0.06, colors::WHITE, None);
                svg.circle(x - s * 0.02, collar_y + s * 0.08, s * 0.02, colors::WHITE, None);
            }
            _ => return false,
        }
        true
    }
}
