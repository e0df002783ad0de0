//! Vector asset library
//!
//! Accessory artwork ships as sanitized SVG fragments baked in at build time.
//! Extra directories can be loaded at run time and layered on top.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

use crate::sanitize::Sanitizer;

include!(concat!(env!("OUT_DIR"), "/embedded_assets.rs"));

static EMBEDDED: LazyLock<AssetLibrary> = LazyLock::new(|| {
    let mut library = AssetLibrary::new();
    for (name, content, view_box) in EMBEDDED_ASSETS {
        library.add(VectorAsset::new(*name, *content, view_box));
    }
    library
});

/// Asset errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Could not parse SVG content from {0}")]
    Unparseable(String),

    #[error("Invalid sanitizer pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Natural coordinate system of an asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Create a view box
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Parse a `viewBox` attribute value
    ///
    /// Accepts four numbers separated by whitespace and/or commas.
    pub fn parse(value: &str) -> Option<Self> {
        let numbers: Vec<f64> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse().ok())
            .collect::<Option<_>>()?;

        match numbers[..] {
            [min_x, min_y, width, height] if width > 0.0 && height > 0.0 => {
                Some(Self::new(min_x, min_y, width, height))
            }
            _ => None,
        }
    }

    /// Larger of width and height
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Center point
    pub fn center(&self) -> (f64, f64) {
        (
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 24.0, 24.0)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// One sanitized SVG fragment
#[derive(Debug, Clone, PartialEq)]
pub struct VectorAsset {
    pub name: String,
    /// Inner markup of the source root element
    pub content: String,
    pub view_box: ViewBox,
}

impl VectorAsset {
    /// Create an asset from already sanitized markup
    ///
    /// An unparsable view box falls back to `0 0 24 24`.
    pub fn new(name: impl Into<String>, content: impl Into<String>, view_box: &str) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            view_box: ViewBox::parse(view_box).unwrap_or_default(),
        }
    }

    /// Sanitize a full SVG document into an asset
    pub fn from_svg(
        sanitizer: &Sanitizer,
        name: impl Into<String>,
        source: &str,
    ) -> Result<Self, AssetError> {
        let name = name.into();
        match sanitizer.sanitize(source) {
            Some(asset) => Ok(Self::new(name, asset.content, &asset.view_box)),
            None => Err(AssetError::Unparseable(name)),
        }
    }
}

/// Named collection of vector assets
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    assets: BTreeMap<String, VectorAsset>,
}

impl AssetLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the assets compiled into the binary, built on first use
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Embedded library, with a directory layered on top when one is given
    ///
    /// Without a directory the shared catalog is borrowed, not copied.
    pub fn embedded_with_dir(dir: Option<&Path>) -> Result<Cow<'static, Self>, AssetError> {
        match dir {
            Some(dir) => {
                let overlay = Self::load_dir(dir)?;
                Ok(Cow::Owned(Self::embedded().clone().merge(overlay)))
            }
            None => Ok(Cow::Borrowed(Self::embedded())),
        }
    }

    /// Load every `*.svg` file in a directory
    ///
    /// Files that cannot be parsed are skipped with a warning.
    pub fn load_dir(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let sanitizer = Sanitizer::new()?;
        let mut library = Self::new();

        let mut files: Vec<_> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("svg"))
            .collect();
        files.sort();

        for file in files {
            let Some(name) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&file)?;
            match VectorAsset::from_svg(&sanitizer, name, &source) {
                Ok(asset) => library.add(asset),
                Err(e) => tracing::warn!("Skipping {}: {}", file.display(), e),
            }
        }

        tracing::debug!("Loaded {} assets from {}", library.len(), path.display());
        Ok(library)
    }

    /// Add or replace an asset
    pub fn add(&mut self, asset: VectorAsset) {
        self.assets.insert(asset.name.clone(), asset);
    }

    /// Look up an asset
    pub fn get(&self, name: &str) -> Option<&VectorAsset> {
        self.assets.get(name)
    }

    /// Look up an asset, failing if absent
    pub fn require(&self, name: &str) -> Result<&VectorAsset, AssetError> {
        self.get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// Whether an asset exists
    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    /// Asset names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }

    /// Overlay another library; its assets win on name clashes
    pub fn merge(mut self, other: AssetLibrary) -> Self {
        self.assets.extend(other.assets);
        self
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
