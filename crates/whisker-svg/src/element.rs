//! SVG scene primitives
//!
//! Elements are plain data that serialize themselves through `Display`.
//! Coordinates are written with at most three decimals.

use std::fmt;

/// Format a coordinate with at most three decimals, trailing zeros trimmed
pub fn num(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape text for use inside an XML element or attribute
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fill or stroke paint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    None,
    /// Any CSS color value
    Color(String),
    /// Reference to a paint resource in `<defs>`
    Url(String),
}

impl Paint {
    /// Paint referencing a gradient id
    pub fn url(id: impl Into<String>) -> Self {
        Self::Url(id.into())
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Color(color) => f.write_str(color),
            Self::Url(id) => write!(f, "url(#{id})"),
        }
    }
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Self::Color(color.to_string())
    }
}

impl From<String> for Paint {
    fn from(color: String) -> Self {
        Self::Color(color)
    }
}

impl From<&String> for Paint {
    fn from(color: &String) -> Self {
        Self::Color(color.clone())
    }
}

/// Outline paint and width
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

impl Stroke {
    pub fn new(paint: impl Into<Paint>, width: f64) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#" stroke="{}" stroke-width="{}""#,
            self.paint,
            num(self.width)
        )
    }
}

/// Translate-then-scale transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    /// Pure translation
    pub fn translate(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {})",
            num(self.translate_x),
            num(self.translate_y)
        )?;
        if self.scale != 1.0 {
            write!(f, " scale({})", num(self.scale))?;
        }
        Ok(())
    }
}

/// Builder for path `d` attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
    commands: Vec<String>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(format!("M {} {}", num(x), num(y)));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(format!("L {} {}", num(x), num(y)));
        self
    }

    /// Quadratic Bezier through one control point
    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.commands
            .push(format!("Q {} {} {} {}", num(cx), num(cy), num(x), num(y)));
        self
    }

    /// Cubic Bezier through two control points
    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.commands.push(format!(
            "C {} {} {} {} {} {}",
            num(c1x),
            num(c1y),
            num(c2x),
            num(c2y),
            num(x),
            num(y)
        ));
        self
    }

    /// Cubic Bezier reflecting the previous control point
    pub fn smooth_cubic_to(mut self, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.commands
            .push(format!("S {} {} {} {}", num(c2x), num(c2y), num(x), num(y)));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push("Z".to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commands.join(" "))
    }
}

/// Transformed container of child elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub transform: Option<Transform>,
    pub opacity: Option<f64>,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }

    pub fn with_child(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }
}

/// One drawable scene entry
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Path {
        d: PathData,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        fill: Paint,
    },
    Group(Group),
    /// Pre-sanitized markup inserted verbatim
    Markup(String),
}

/// Font used by text elements
pub const FONT_FAMILY: &str = "Arial";

fn stroke_attr(stroke: &Option<Stroke>) -> String {
    stroke.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
                num(*cx),
                num(*cy),
                num(*r),
                fill,
                stroke_attr(stroke)
            ),
            Self::Ellipse {
                cx,
                cy,
                rx,
                ry,
                fill,
                stroke,
            } => write!(
                f,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"{}/>"#,
                num(*cx),
                num(*cy),
                num(*rx),
                num(*ry),
                fill,
                stroke_attr(stroke)
            ),
            Self::Path { d, fill, stroke } => write!(
                f,
                r#"<path d="{}" fill="{}"{}/>"#,
                d,
                fill,
                stroke_attr(stroke)
            ),
            Self::Polygon {
                points,
                fill,
                stroke,
            } => {
                let points = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(
                    f,
                    r#"<polygon points="{}" fill="{}"{}/>"#,
                    points,
                    fill,
                    stroke_attr(stroke)
                )
            }
            Self::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                fill,
                stroke_attr(stroke)
            ),
            Self::Text {
                x,
                y,
                content,
                font_size,
                fill,
            } => write!(
                f,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                num(*x),
                num(*y),
                FONT_FAMILY,
                num(*font_size),
                fill,
                escape_xml(content)
            ),
            Self::Group(group) => {
                f.write_str("<g")?;
                if let Some(transform) = &group.transform {
                    write!(f, r#" transform="{transform}""#)?;
                }
                if let Some(opacity) = group.opacity {
                    write!(f, r#" opacity="{}""#, num(opacity))?;
                }
                f.write_str(">")?;
                for child in &group.children {
                    write!(f, "{child}")?;
                }
                f.write_str("</g>")
            }
            Self::Markup(markup) => f.write_str(markup),
        }
    }
}
