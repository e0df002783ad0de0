//! Eyes and mouth
//!
//! Trait identifiers map onto a handful of drawable shapes. Identifiers
//! without a dedicated shape fall back to a generic one.

use whisker_core::color::{colors, darken};
use whisker_svg::{Paint, PathData, Stroke, SvgBuilder};

use crate::anatomy::Side;
use crate::compositor::CatLayout;

/// Pupil style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeShape {
    Round,
    Almond,
    Wide,
    /// Closed arcs, no highlights
    Sleepy,
    /// Upright oval used for every other identifier
    Oval,
}

impl EyeShape {
    pub fn from_id(id: &str) -> Self {
        match id {
            "round" => Self::Round,
            "almond" => Self::Almond,
            "wide" => Self::Wide,
            "sleepy" => Self::Sleepy,
            _ => Self::Oval,
        }
    }

    /// Draw sclera, pupils and highlights
    pub fn draw(self, svg: &mut SvgBuilder<'_>, layout: &CatLayout) {
        let s = layout.size;
        let eye_y = layout.head_y() - s * 0.1;
        let distance = s * 0.32;
        let e = s * 0.22;
        let centers =
            [Side::Left, Side::Right].map(|side| layout.center_x + side.sign() * distance);

        let sclera_outline = darken(colors::WHITE, 10);
        for cx in centers {
            svg.ellipse(
                cx,
                eye_y,
                e * 1.4,
                e * 1.6,
                colors::WHITE,
                Some(Stroke::new(&sclera_outline, 1.0)),
            );
        }

        for cx in centers {
            match self {
                Self::Round => svg.circle(cx, eye_y, e * 0.8, colors::BLACK, None),
                Self::Almond => svg.ellipse(cx, eye_y, e * 0.9, e * 0.7, colors::BLACK, None),
                Self::Wide => svg.ellipse(cx, eye_y, e * 1.1, e * 0.9, colors::BLACK, None),
                Self::Sleepy => {
                    let lid = PathData::new().move_to(cx - e, eye_y).quad_to(
                        cx,
                        eye_y - e * 0.3,
                        cx + e,
                        eye_y,
                    );
                    svg.path(lid, Paint::None, Some(Stroke::new(colors::BLACK, 3.0)));
                }
                Self::Oval => svg.ellipse(cx, eye_y, e * 0.7, e * 0.9, colors::BLACK, None),
            }
        }

        if self == Self::Sleepy {
            return;
        }
        for cx in centers {
            svg.circle(cx + e * 0.2, eye_y - e * 0.3, e * 0.3, colors::WHITE, None);
        }
        for cx in centers {
            svg.circle(cx + e * 0.4, eye_y - e * 0.1, e * 0.12, colors::WHITE, None);
        }
    }
}

/// Mouth style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouthShape {
    Smile,
    Frown,
    /// Open with two teeth
    Open,
    Tongue,
    /// Small "w"
    Cute,
    /// Tiny ellipse used for every other identifier
    Small,
}

impl MouthShape {
    pub fn from_id(id: &str) -> Self {
        match id {
            "smile" => Self::Smile,
            "frown" => Self::Frown,
            "open" => Self::Open,
            "tongue" => Self::Tongue,
            "cute" => Self::Cute,
            _ => Self::Small,
        }
    }

    /// Draw the nose, its centerline and the mouth
    pub fn draw(self, svg: &mut SvgBuilder<'_>, layout: &CatLayout) {
        let (x, y, s) = (layout.center_x, layout.head_y(), layout.size);
        let mouth_y = y + s * 0.5;
        let m = s * 0.25;

        svg.ellipse(x, y + s * 0.35, s * 0.06, s * 0.05, colors::PINK, None);
        let bridge = PathData::new()
            .move_to(x, y + s * 0.4)
            .line_to(x, y + s * 0.48);
        svg.path(
            bridge,
            Paint::None,
            Some(Stroke::new(darken(colors::PINK, 40), 2.0)),
        );

        let line = |width| Some(Stroke::new(colors::BLACK, width));
        match self {
            Self::Smile => {
                let d = PathData::new()
                    .move_to(x - m, mouth_y)
                    .quad_to(x, mouth_y + m * 0.6, x + m, mouth_y);
                svg.path(d, Paint::None, line(3.0));
            }
            Self::Frown => {
                let d = PathData::new()
                    .move_to(x - m, mouth_y + m * 0.4)
                    .quad_to(x, mouth_y - m * 0.2, x + m, mouth_y + m * 0.4);
                svg.path(d, Paint::None, line(3.0));
            }
            Self::Open => {
                svg.ellipse(x, mouth_y + m * 0.3, m * 0.4, m * 0.3, colors::BLACK, None);
                svg.rect(
                    x - m * 0.1,
                    mouth_y + m * 0.15,
                    m * 0.05,
                    m * 0.1,
                    colors::WHITE,
                    None,
                );
                svg.rect(
                    x + m * 0.05,
                    mouth_y + m * 0.15,
                    m * 0.05,
                    m * 0.1,
                    colors::WHITE,
                    None,
                );
            }
            Self::Tongue => {
                svg.ellipse(x, mouth_y + m * 0.1, m * 0.3, m * 0.15, colors::BLACK, None);
                svg.ellipse(x, mouth_y + m * 0.4, m * 0.25, m * 0.45, colors::HOT_PINK, None);
            }
            Self::Cute => {
                let d = PathData::new()
                    .move_to(x - m * 0.3, mouth_y)
                    .quad_to(x - m * 0.1, mouth_y + m * 0.2, x, mouth_y)
                    .quad_to(x + m * 0.1, mouth_y + m * 0.2, x + m * 0.3, mouth_y);
                svg.path(d, Paint::None, line(2.0));
            }
            Self::Small => svg.ellipse(x, mouth_y, m * 0.15, m * 0.08, colors::BLACK, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whisker_svg::AssetLibrary;

    fn draw_eyes(shape: EyeShape) -> String {
        let assets = AssetLibrary::new();
        let mut svg = SvgBuilder::new(400, 400, &assets);
        shape.draw(&mut svg, &CatLayout::new(400, 400));
        svg.build()
    }

    #[test]
    fn test_eye_ids() {
        assert_eq!(EyeShape::from_id("round"), EyeShape::Round);
        assert_eq!(EyeShape::from_id("sleepy"), EyeShape::Sleepy);
        assert_eq!(EyeShape::from_id("mysterious"), EyeShape::Oval);
        assert_eq!(EyeShape::from_id(""), EyeShape::Oval);
    }

    #[test]
    fn test_sleepy_eyes_have_no_highlights() {
        let sleepy = draw_eyes(EyeShape::Sleepy);
        assert_eq!(sleepy.matches("<ellipse").count(), 2);
        assert_eq!(sleepy.matches("<path").count(), 2);
        assert!(!sleepy.contains("<circle"));

        let round = draw_eyes(EyeShape::Round);
        // Two pupils plus four highlights
        assert_eq!(round.matches("<circle").count(), 6);
    }

    #[test]
    fn test_sclera_always_drawn() {
        for shape in [EyeShape::Almond, EyeShape::Wide, EyeShape::Oval] {
            let out = draw_eyes(shape);
            // Sclera at x = 200 -/+ 38.4, head y 140 - 12
            assert!(out.contains(
                r##"<ellipse cx="161.6" cy="128" rx="36.96" ry="42.24" fill="#FFFFFF" stroke="#f5f5f5""##
            ));
        }
    }

    #[test]
    fn test_mouth_ids() {
        assert_eq!(MouthShape::from_id("cute"), MouthShape::Cute);
        assert_eq!(MouthShape::from_id("tongue"), MouthShape::Tongue);
        assert_eq!(MouthShape::from_id("grumpy"), MouthShape::Small);
    }

    #[test]
    fn test_mouth_always_has_nose() {
        for shape in [
            MouthShape::Smile,
            MouthShape::Frown,
            MouthShape::Open,
            MouthShape::Tongue,
            MouthShape::Cute,
            MouthShape::Small,
        ] {
            let assets = AssetLibrary::new();
            let mut svg = SvgBuilder::new(400, 400, &assets);
            shape.draw(&mut svg, &CatLayout::new(400, 400));
            let out = svg.build();
            assert!(out.contains(
                r##"<ellipse cx="200" cy="182" rx="7.2" ry="6" fill="#FFB6C1"/>"##
            ));
            assert!(out.contains("M 200 188 L 200 197.6"));
        }
    }

    #[test]
    fn test_open_mouth_teeth() {
        let assets = AssetLibrary::new();
        let mut svg = SvgBuilder::new(400, 400, &assets);
        MouthShape::Open.draw(&mut svg, &CatLayout::new(400, 400));
        assert_eq!(svg.build().matches("<rect").count(), 2);
    }
}
