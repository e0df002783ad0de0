//! Fur pattern overlays painted over the body

use whisker_core::SeededRandom;
use whisker_core::color::{colors, darken};
use whisker_svg::{Paint, PathData, Stroke, SvgBuilder};

use crate::compositor::CatLayout;

/// Number of body stripes
const STRIPE_COUNT: usize = 4;

/// Overlay drawn on top of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurPattern {
    Stripes,
    /// Random dark spots, the only pattern that uses the generator
    Spots,
    Calico,
    Tuxedo,
    /// No overlay
    Plain,
}

impl FurPattern {
    pub fn from_id(id: &str) -> Self {
        match id {
            "stripes" => Self::Stripes,
            "spots" => Self::Spots,
            "calico" => Self::Calico,
            "tuxedo" => Self::Tuxedo,
            _ => Self::Plain,
        }
    }

    pub fn draw(
        self,
        svg: &mut SvgBuilder<'_>,
        rng: &mut SeededRandom,
        layout: &CatLayout,
        color: &str,
    ) {
        let (x, y, s) = (layout.center_x, layout.center_y, layout.size);

        match self {
            Self::Stripes => {
                let stripe = Stroke::new(darken(color, 30), s * 0.08);
                for i in 0..STRIPE_COUNT {
                    let i = i as f64;
                    let stripe_y = y - s * 0.6 + i * s * 0.3;
                    let half = (s * 0.6 + i * s * 0.1) * 0.5;
                    let d = PathData::new().move_to(x - half, stripe_y).quad_to(
                        x,
                        stripe_y - s * 0.05,
                        x + half,
                        stripe_y,
                    );
                    svg.path(d, Paint::None, Some(stripe.clone()));
                }
            }
            Self::Spots => {
                let spot_color = darken(color, 30);
                let count = rng.range(3, 8);
                for _ in 0..count {
                    let spot_x = x + rng.float(-s * 0.6, s * 0.6);
                    let spot_y = y + rng.float(-s * 0.6, s * 0.6);
                    let r = rng.float(s * 0.1, s * 0.2);
                    svg.circle(spot_x, spot_y, r, &spot_color, None);
                }
            }
            Self::Calico => {
                svg.circle(x - s * 0.3, y - s * 0.2, s * 0.3, colors::CALICO_ORANGE, None);
                svg.circle(x + s * 0.4, y + s * 0.1, s * 0.25, colors::CALICO_DARK, None);
                svg.circle(x - s * 0.1, y + s * 0.3, s * 0.2, colors::CALICO_ORANGE, None);
            }
            Self::Tuxedo => {
                svg.ellipse(x, y + s * 0.2, s * 0.4, s * 0.6, colors::WHITE, None);
                svg.circle(x - s * 0.6, y + s * 0.8, s * 0.15, colors::WHITE, None);
                svg.circle(x + s * 0.6, y + s * 0.8, s * 0.15, colors::WHITE, None);
            }
            Self::Plain => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whisker_svg::AssetLibrary;

    fn draw(pattern: FurPattern, seed: &str) -> (usize, SeededRandom) {
        let assets = AssetLibrary::new();
        let mut svg = SvgBuilder::new(400, 400, &assets);
        let mut rng = SeededRandom::new(seed);
        pattern.draw(&mut svg, &mut rng, &CatLayout::new(400, 400), "#D2691E");
        (svg.elements().len(), rng)
    }

    #[test]
    fn test_pattern_ids() {
        assert_eq!(FurPattern::from_id("calico"), FurPattern::Calico);
        assert_eq!(FurPattern::from_id("harlequin"), FurPattern::Plain);
    }

    #[test]
    fn test_fixed_patterns_skip_generator() {
        for (pattern, elements) in [
            (FurPattern::Stripes, 4),
            (FurPattern::Calico, 3),
            (FurPattern::Tuxedo, 3),
            (FurPattern::Plain, 0),
        ] {
            let (count, rng) = draw(pattern, "fur");
            assert_eq!(count, elements);
            assert_eq!(rng, SeededRandom::new("fur"));
        }
    }

    #[test]
    fn test_spots_draw_count_and_consumption() {
        let mut reference = SeededRandom::new("spotty");
        let spots = reference.range(3, 8);
        for _ in 0..spots * 3 {
            reference.next_f64();
        }

        let (count, rng) = draw(FurPattern::Spots, "spotty");
        assert_eq!(count as i64, spots);
        assert!((3..8).contains(&spots));
        assert_eq!(rng, reference);
    }
}
