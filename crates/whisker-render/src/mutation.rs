//! Rare mutation effects
//!
//! Effects are anchored on the body center, so halos and sparkles sit a little
//! lower than the face they decorate.

use whisker_core::SeededRandom;
use whisker_core::color::colors;
use whisker_svg::{Paint, SvgBuilder};

use crate::anatomy::{Side, draw_tail};
use crate::compositor::CatLayout;

/// Sparkle glyphs per cat
pub const SPARKLE_COUNT: usize = 5;

const SPARKLE: &str = "✨";
const GLOW: &str = "rgba(255, 255, 0, 0.3)";
const FLUFF: &str = "rgba(255, 255, 255, 0.3)";

/// Drawable mutation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    GlowingEyes,
    /// Glyphs scattered with two draws each
    Sparkles,
    DoubleTail,
    ExtraFluffy,
    RainbowFur,
    /// Flags with no visual effect
    Inert,
}

impl Mutation {
    pub fn from_id(id: &str) -> Self {
        match id {
            "glowing-eyes" => Self::GlowingEyes,
            "sparkles" => Self::Sparkles,
            "double-tail" => Self::DoubleTail,
            "extra-fluffy" => Self::ExtraFluffy,
            "rainbow-fur" => Self::RainbowFur,
            _ => Self::Inert,
        }
    }

    pub fn draw(self, svg: &mut SvgBuilder<'_>, rng: &mut SeededRandom, layout: &CatLayout) {
        let (x, y, s) = (layout.center_x, layout.center_y, layout.size);

        match self {
            Self::GlowingEyes => {
                for side in [Side::Left, Side::Right] {
                    svg.circle(x + side.sign() * s * 0.32, y - s * 0.1, s * 0.3, GLOW, None);
                }
            }
            Self::Sparkles => {
                for _ in 0..SPARKLE_COUNT {
                    let sparkle_x = x + rng.float(-s, s);
                    let sparkle_y = y + rng.float(-s, s);
                    svg.text(sparkle_x, sparkle_y, SPARKLE, s * 0.12, colors::GOLD);
                }
            }
            Self::DoubleTail => draw_tail(svg, layout, colors::PINK, Side::Right),
            Self::ExtraFluffy => svg.circle(x, y, s * 1.1, FLUFF, None),
            Self::RainbowFur => {
                let gradient = svg.linear_gradient(colors::RED, colors::GREEN);
                svg.circle(x, y, s * 0.8, Paint::url(gradient), None);
            }
            Self::Inert => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whisker_svg::AssetLibrary;

    fn render(mutation: Mutation, rng: &mut SeededRandom) -> String {
        let assets = AssetLibrary::new();
        let mut svg = SvgBuilder::new(400, 400, &assets);
        mutation.draw(&mut svg, rng, &CatLayout::new(400, 400));
        svg.build()
    }

    #[test]
    fn test_mutation_ids() {
        assert_eq!(Mutation::from_id("double-tail"), Mutation::DoubleTail);
        assert_eq!(Mutation::from_id("crystal-fur"), Mutation::Inert);
        assert_eq!(Mutation::from_id("size-variant"), Mutation::Inert);
    }

    #[test]
    fn test_sparkles_consume_two_draws_each() {
        let mut rng = SeededRandom::new("sparkle");
        let mut reference = SeededRandom::new("sparkle");
        let out = render(Mutation::Sparkles, &mut rng);

        for _ in 0..SPARKLE_COUNT * 2 {
            reference.next_f64();
        }
        assert_eq!(rng, reference);
        assert_eq!(out.matches(SPARKLE).count(), SPARKLE_COUNT);
    }

    #[test]
    fn test_sparkles_are_seeded() {
        let a = render(Mutation::Sparkles, &mut SeededRandom::new("glitter"));
        let b = render(Mutation::Sparkles, &mut SeededRandom::new("glitter"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_glowing_eyes() {
        let out = render(Mutation::GlowingEyes, &mut SeededRandom::new(1u32));
        assert!(out.contains(
            r#"<circle cx="161.6" cy="188" r="36" fill="rgba(255, 255, 0, 0.3)"/>"#
        ));
        assert!(out.contains(r#"<circle cx="238.4" cy="188" r="36""#));
    }

    #[test]
    fn test_rainbow_registers_gradient() {
        let out = render(Mutation::RainbowFur, &mut SeededRandom::new(1u32));
        assert!(out.contains("<defs><linearGradient id=\"gradient0\""));
        assert!(out.contains(r##"<circle cx="200" cy="200" r="96" fill="url(#gradient0)"/>"##));
    }

    #[test]
    fn test_inert_draws_nothing() {
        let mut rng = SeededRandom::new("inert");
        let out = render(Mutation::Inert, &mut rng);
        assert_eq!(rng, SeededRandom::new("inert"));
        assert!(!out.contains("<circle"));
    }
}
