//! SVG asset sanitizing
//!
//! Shared by the build script, which bakes `assets/*.svg` into the binary,
//! and by [`crate::assets::AssetLibrary::load_dir`] for runtime directories.
//! Only regex is used here so the build script can compile this file as is.

use regex::Regex;

/// View box assumed when a root element has none
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Inner markup and view box of one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedAsset {
    pub content: String,
    pub view_box: String,
}

/// Strips editor noise from SVG documents
pub struct Sanitizer {
    root: Regex,
    view_box: Regex,
    /// Applied in order, each match removed
    strip: Vec<Regex>,
    whitespace: Regex,
}

impl Sanitizer {
    /// Compile the sanitizer patterns
    pub fn new() -> Result<Self, regex::Error> {
        let strip = [
            r"(?s)<sodipodi:namedview[^>]*>.*?</sodipodi:namedview>",
            r"(?s)<sodipodi:namedview[^>]*/>",
            r"(?s)<metadata[^>]*>.*?</metadata>",
            r#"\s+xmlns:sodipodi="[^"]*""#,
            r#"\s+xmlns:inkscape="[^"]*""#,
            r#"\s+sodipodi:[^=]*="[^"]*""#,
            r#"\s+inkscape:[^=]*="[^"]*""#,
        ]
        .into_iter()
        .map(Regex::new)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: Regex::new(r"(?s)<svg[^>]*>(.*?)</svg>")?,
            view_box: Regex::new(r#"viewBox="([^"]+)""#)?,
            strip,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Extract and clean the inner markup of an SVG document
    ///
    /// Returns `None` when no `<svg>` root can be found or nothing is left
    /// inside it after cleaning.
    pub fn sanitize(&self, source: &str) -> Option<SanitizedAsset> {
        let inner = self.root.captures(source)?.get(1)?.as_str();

        let view_box = self
            .view_box
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map_or(DEFAULT_VIEW_BOX, |m| m.as_str())
            .to_string();

        let mut content = inner.to_string();
        for pattern in &self.strip {
            content = pattern.replace_all(&content, "").into_owned();
        }
        let content = self.whitespace.replace_all(&content, " ").trim().to_string();

        if content.is_empty() {
            return None;
        }
        Some(SanitizedAsset { content, view_box })
    }
}
