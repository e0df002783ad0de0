//! Body parts shared by every cat
//!
//! All geometry is relative to the [`CatLayout`] base size, so cats scale
//! with the canvas.

use whisker_core::SeededRandom;
use whisker_core::color::{colors, darken, lighten};
use whisker_svg::{Element, Group, Paint, PathData, Stroke, SvgBuilder};

use crate::compositor::CatLayout;

/// Which side of the body a mirrored part sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for left, 1 for right
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Number of paw prints scattered over the backdrop
pub const FOOTPRINT_COUNT: usize = 3;

/// Backdrop fill
const BACKDROP: &str = colors::ALICE_BLUE;

/// Backdrop gradient plus faint paw prints
///
/// Uses four draws per paw print: x, y, size and opacity.
pub fn draw_background(svg: &mut SvgBuilder<'_>, rng: &mut SeededRandom) {
    let width = f64::from(svg.width());
    let height = f64::from(svg.height());

    let gradient = svg.radial_gradient(BACKDROP, &darken(BACKDROP, 10));
    svg.rect(0.0, 0.0, width, height, Paint::url(gradient), None);

    let print_color = darken(BACKDROP, 20);
    for _ in 0..FOOTPRINT_COUNT {
        let x = rng.float(50.0, width - 50.0);
        let y = rng.float(50.0, height - 50.0);
        let size = rng.float(8.0, 15.0);
        let opacity = rng.float(0.1, 0.3);

        let stroke = PathData::new().move_to(x, y + size * 0.8).cubic_to(
            x - size * 0.6,
            y + size * 0.4,
            x - size * 0.8,
            y,
            x - size * 0.2,
            y - size * 0.4,
        );

        let mut print = Group::new().with_opacity(opacity);
        print.push(Element::Path {
            d: stroke,
            fill: Paint::None,
            stroke: Some(Stroke::new(&print_color, size * 2.2)),
        });
        print.push(Element::Circle {
            cx: x,
            cy: y - size * 0.4,
            r: size * 0.11,
            fill: Paint::from(&print_color),
            stroke: None,
        });
        svg.group(print);
    }
}

/// S-curved tail with a rounded tip
pub fn draw_tail(svg: &mut SvgBuilder<'_>, layout: &CatLayout, color: &str, side: Side) {
    let (x, y, s) = (layout.center_x, layout.center_y, layout.size);
    let dir = side.sign();
    let tip = (x + dir * s * 1.5, y + s * 0.3);

    let curve = PathData::new()
        .move_to(x + dir * s * 0.5, y + s * 0.6)
        .cubic_to(
            x + dir * s * 0.7,
            y + s * 0.8,
            x + dir * s * 1.0,
            y + s * 0.4,
            x + dir * s * 1.2,
            y + s * 0.5,
        )
        .smooth_cubic_to(x + dir * s * 1.4, y + s * 0.6, tip.0, tip.1);

    let gradient = svg.linear_gradient(color, &darken(color, 20));
    let outline = darken(color, 30);

    svg.path(
        curve.clone(),
        Paint::None,
        Some(Stroke::new(Paint::url(&gradient), s * 0.22)),
    );
    svg.path(curve, Paint::None, Some(Stroke::new(&outline, 2.0)));
    svg.circle(
        tip.0,
        tip.1,
        s * 0.11,
        Paint::url(gradient),
        Some(Stroke::new(outline, 2.0)),
    );
}

/// Body ellipse with a lighter chest
pub fn draw_body(svg: &mut SvgBuilder<'_>, layout: &CatLayout, color: &str) {
    let (x, y, s) = (layout.center_x, layout.center_y, layout.size);
    let gradient = svg.radial_gradient(color, &darken(color, 20));

    svg.ellipse(
        x,
        y + s * 0.8,
        s * 0.7,
        s * 0.9,
        Paint::url(gradient),
        Some(Stroke::new(darken(color, 30), 2.0)),
    );
    svg.ellipse(x, y + s * 0.6, s * 0.5, s * 0.4, lighten(color, 10), None);
}

/// Round head with two pointed ears
pub fn draw_head(svg: &mut SvgBuilder<'_>, layout: &CatLayout, color: &str) {
    let (x, y, s) = (layout.center_x, layout.head_y(), layout.size);
    let gradient = svg.linear_gradient(color, &darken(color, 15));
    let outline = darken(color, 30);

    svg.ellipse(
        x,
        y,
        s * 0.95,
        s * 0.95,
        Paint::url(&gradient),
        Some(Stroke::new(&outline, 2.0)),
    );

    let ear_width = s * 0.35;
    let ear_height = s * 0.45;
    let base_y = y - s * 0.65;
    let inner_width = ear_width * 0.5;
    let inner_height = ear_height * 0.6;

    for side in [Side::Left, Side::Right] {
        let dir = side.sign();
        let base_x = x + dir * s * 0.55;

        let ear = PathData::new()
            .move_to(base_x - ear_width / 2.0, base_y)
            .line_to(base_x + dir * ear_width * 0.1, base_y - ear_height)
            .line_to(base_x + ear_width / 2.0, base_y)
            .close();
        svg.path(
            ear,
            Paint::url(&gradient),
            Some(Stroke::new(&outline, 2.0)),
        );
    }

    for side in [Side::Left, Side::Right] {
        let dir = side.sign();
        let base_x = x + dir * s * 0.55;
        let inner_base = base_y - inner_height * 0.2;

        let inner = PathData::new()
            .move_to(base_x - inner_width / 2.0, inner_base)
            .line_to(base_x + dir * inner_width * 0.1, base_y - inner_height)
            .line_to(base_x + inner_width / 2.0, inner_base)
            .close();
        svg.path(inner, colors::PINK, None);
    }
}

/// Three curved whiskers on each cheek
pub fn draw_whiskers(svg: &mut SvgBuilder<'_>, layout: &CatLayout) {
    let (x, s) = (layout.center_x, layout.size);
    let whisker_y = layout.head_y() + s * 0.5;

    // (start, control, end) vertical offsets
    const STRANDS: [(f64, f64, f64); 3] = [
        (-0.05, -0.1, -0.08),
        (0.0, -0.02, 0.0),
        (0.05, 0.1, 0.08),
    ];

    for side in [Side::Left, Side::Right] {
        let dir = side.sign();
        for (start, control, end) in STRANDS {
            let strand = PathData::new()
                .move_to(x + dir * s * 0.5, whisker_y + s * start)
                .quad_to(
                    x + dir * s * 0.8,
                    whisker_y + s * control,
                    x + dir * s * 1.0,
                    whisker_y + s * end,
                );
            svg.path(strand, Paint::None, Some(Stroke::new(colors::BLACK, 2.0)));
        }
    }
}

/// Pink cheeks
pub fn draw_blush(svg: &mut SvgBuilder<'_>, layout: &CatLayout) {
    let s = layout.size;
    let cheek = s * 0.16;
    let cheek_y = layout.head_y() + s * 0.5;

    for side in [Side::Left, Side::Right] {
        svg.ellipse(
            layout.center_x + side.sign() * s * 0.45,
            cheek_y,
            cheek,
            cheek * 0.7,
            colors::PINK,
            None,
        );
    }
}

/// Front and hind paws with pink pads
pub fn draw_legs(svg: &mut SvgBuilder<'_>, layout: &CatLayout, color: &str) {
    let (x, y, s) = (layout.center_x, layout.center_y, layout.size);
    let leg = s * 0.15;
    let outline = darken(color, 20);

    let paws = [
        (x - s * 0.4, y + s * 0.8),
        (x + s * 0.4, y + s * 0.8),
        (x - s * 0.25, y + s * 1.5),
        (x + s * 0.25, y + s * 1.5),
    ];

    for (px, py) in paws {
        svg.circle(px, py, leg, color, Some(Stroke::new(&outline, 2.0)));
    }
    for (px, py) in paws {
        draw_paw_print(svg, px, py, leg * 0.4);
    }
}

fn draw_paw_print(svg: &mut SvgBuilder<'_>, x: f64, y: f64, p: f64) {
    svg.ellipse(x, y + p * 0.1, p * 1.8, p * 1.4, colors::PINK, None);
    svg.ellipse(x - p * 0.7, y - p * 0.4, p * 0.8, p * 1.0, colors::PINK, None);
    svg.ellipse(x, y - p * 0.7, p * 0.8, p * 1.0, colors::PINK, None);
    svg.ellipse(x + p * 0.7, y - p * 0.4, p * 0.8, p * 1.0, colors::PINK, None);
}
