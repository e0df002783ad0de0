//! SVG document builder
//!
//! Collects primitives in paint order plus gradient resources, then
//! serializes everything into one document. Elements added later paint on
//! top of earlier ones.

use crate::assets::AssetLibrary;
use crate::element::{Element, Group, Paint, PathData, Stroke, Transform};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// How the root element is sized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CanvasMode {
    /// Explicit width and height attributes
    #[default]
    Fixed,
    /// View box only, scaling to fill its container
    Responsive,
}

/// Accumulates a scene and renders it as SVG markup
pub struct SvgBuilder<'a> {
    width: u32,
    height: u32,
    mode: CanvasMode,
    elements: Vec<Element>,
    defs: Vec<String>,
    /// Shared by linear and radial gradients
    gradient_counter: usize,
    assets: &'a AssetLibrary,
}

impl<'a> SvgBuilder<'a> {
    /// Create a builder for a fixed-size canvas
    pub fn new(width: u32, height: u32, assets: &'a AssetLibrary) -> Self {
        Self {
            width,
            height,
            mode: CanvasMode::Fixed,
            elements: Vec::new(),
            defs: Vec::new(),
            gradient_counter: 0,
            assets,
        }
    }

    /// Set the canvas mode
    pub fn with_mode(mut self, mode: CanvasMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Elements added so far
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Append an element
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        fill: impl Into<Paint>,
        stroke: Option<Stroke>,
    ) {
        self.push(Element::Circle {
            cx,
            cy,
            r,
            fill: fill.into(),
            stroke,
        });
    }

    pub fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: impl Into<Paint>,
        stroke: Option<Stroke>,
    ) {
        self.push(Element::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill: fill.into(),
            stroke,
        });
    }

    pub fn path(&mut self, d: PathData, fill: impl Into<Paint>, stroke: Option<Stroke>) {
        self.push(Element::Path {
            d,
            fill: fill.into(),
            stroke,
        });
    }

    pub fn polygon(
        &mut self,
        points: &[(f64, f64)],
        fill: impl Into<Paint>,
        stroke: Option<Stroke>,
    ) {
        self.push(Element::Polygon {
            points: points.to_vec(),
            fill: fill.into(),
            stroke,
        });
    }

    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: impl Into<Paint>,
        stroke: Option<Stroke>,
    ) {
        self.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill: fill.into(),
            stroke,
        });
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: impl Into<String>,
        font_size: f64,
        fill: impl Into<Paint>,
    ) {
        self.push(Element::Text {
            x,
            y,
            content: content.into(),
            font_size,
            fill: fill.into(),
        });
    }

    pub fn group(&mut self, group: Group) {
        self.push(Element::Group(group));
    }

    /// Register a diagonal two-stop gradient and return its id
    pub fn linear_gradient(&mut self, from: &str, to: &str) -> String {
        let id = format!("gradient{}", self.next_gradient());
        self.defs.push(format!(
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">{}</linearGradient>"#,
            stops(from, to)
        ));
        id
    }

    /// Register a two-stop radial gradient focused up and left; returns its id
    pub fn radial_gradient(&mut self, from: &str, to: &str) -> String {
        let id = format!("radialGradient{}", self.next_gradient());
        self.defs.push(format!(
            r#"<radialGradient id="{id}" cx="30%" cy="30%" r="70%">{}</radialGradient>"#,
            stops(from, to)
        ));
        id
    }

    fn next_gradient(&mut self) -> usize {
        let n = self.gradient_counter;
        self.gradient_counter += 1;
        n
    }

    /// Place a library asset centered on (cx, cy)
    ///
    /// The asset's longer view box side is scaled to `size * scale`. Unknown
    /// assets are logged and skipped; the return value tells whether anything
    /// was drawn.
    pub fn embed_asset(&mut self, name: &str, cx: f64, cy: f64, size: f64, scale: f64) -> bool {
        let Some(asset) = self.assets.get(name) else {
            tracing::warn!("Asset '{}' not found, skipping layer", name);
            return false;
        };

        let factor = size * scale / asset.view_box.max_extent();
        let (center_x, center_y) = asset.view_box.center();
        let transform = Transform::new(cx - center_x * factor, cy - center_y * factor, factor);

        let group = Group::new()
            .with_transform(transform)
            .with_child(Element::Markup(asset.content.clone()));
        self.group(group);
        true
    }

    /// Serialize the document
    pub fn build(self) -> String {
        let mut out = match self.mode {
            CanvasMode::Fixed => format!(
                r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NAMESPACE}">"#,
                w = self.width,
                h = self.height,
            ),
            CanvasMode::Responsive => format!(
                r#"<svg viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet" xmlns="{SVG_NAMESPACE}">"#,
                self.width, self.height,
            ),
        };
        out.push('\n');

        if !self.defs.is_empty() {
            out.push_str("<defs>");
            for def in &self.defs {
                out.push_str(def);
            }
            out.push_str("</defs>\n");
        }

        for element in &self.elements {
            out.push_str(&element.to_string());
            out.push('\n');
        }

        out.push_str("</svg>");
        out
    }
}

fn stops(from: &str, to: &str) -> String {
    format!(
        r#"<stop offset="0%" style="stop-color:{from};stop-opacity:1"/><stop offset="100%" style="stop-color:{to};stop-opacity:1"/>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::VectorAsset;

    fn library() -> AssetLibrary {
        let mut assets = AssetLibrary::new();
        assets.add(VectorAsset::new("dot", "<circle r=\"1\"/>", "0 0 100 50"));
        assets
    }

    #[test]
    fn test_fixed_root() {
        let assets = AssetLibrary::new();
        let svg = SvgBuilder::new(300, 300, &assets).build();
        assert!(svg.starts_with(
            r#"<svg width="300" height="300" viewBox="0 0 300 300" xmlns="http://www.w3.org/2000/svg">"#
        ));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_responsive_root() {
        let assets = AssetLibrary::new();
        let svg = SvgBuilder::new(400, 200, &assets)
            .with_mode(CanvasMode::Responsive)
            .build();
        assert!(svg.starts_with(
            r#"<svg viewBox="0 0 400 200" preserveAspectRatio="xMidYMid meet" xmlns="http://www.w3.org/2000/svg">"#
        ));
        assert!(!svg.contains("width="));
    }

    #[test]
    fn test_gradient_ids_share_counter() {
        let assets = AssetLibrary::new();
        let mut builder = SvgBuilder::new(10, 10, &assets);
        assert_eq!(builder.linear_gradient("#000000", "#ffffff"), "gradient0");
        assert_eq!(builder.radial_gradient("#000000", "#ffffff"), "radialGradient1");
        assert_eq!(builder.linear_gradient("#111111", "#222222"), "gradient2");

        let svg = builder.build();
        assert_eq!(svg.matches("<defs>").count(), 1);
        assert!(svg.contains(
            r#"<linearGradient id="gradient0" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" style="stop-color:#000000;stop-opacity:1"/>"#
        ));
        assert!(svg.contains(r#"<radialGradient id="radialGradient1" cx="30%" cy="30%" r="70%">"#));
    }

    #[test]
    fn test_paint_order_is_insertion_order() {
        let assets = AssetLibrary::new();
        let mut builder = SvgBuilder::new(10, 10, &assets);
        builder.rect(0.0, 0.0, 10.0, 10.0, "#ffffff", None);
        builder.circle(5.0, 5.0, 2.0, "#000000", None);
        builder.text(1.0, 1.0, "a&b", 3.0, "#FFD700");
        assert_eq!(builder.elements().len(), 3);

        let svg = builder.build();
        let rect = svg.find("<rect").unwrap();
        let circle = svg.find("<circle").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(rect < circle && circle < text);
        assert!(svg.contains(">a&amp;b</text>"));
    }

    #[test]
    fn test_embed_asset_centers_view_box() {
        let assets = library();
        let mut builder = SvgBuilder::new(200, 200, &assets);
        // Longer side 100 scaled to 40 * 1.5 = 60, center (50, 25) lands on (100, 80)
        assert!(builder.embed_asset("dot", 100.0, 80.0, 40.0, 1.5));
        assert_eq!(
            builder.elements()[0].to_string(),
            r#"<g transform="translate(70, 65) scale(0.6)"><circle r="1"/></g>"#
        );
    }

    #[test]
    fn test_missing_asset_is_skipped() {
        let assets = library();
        let mut builder = SvgBuilder::new(200, 200, &assets);
        assert!(!builder.embed_asset("jetpack", 0.0, 0.0, 10.0, 1.0));
        assert!(builder.elements().is_empty());
    }
}
