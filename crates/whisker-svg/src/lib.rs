//! Whisker SVG - Scene building and embedded vector assets
//!
//! A small append-only scene model that serializes to a standalone SVG
//! document, plus the accessory artwork compiled into the binary.
//!
//! Assets under `assets/` are sanitized by the build script, which strips
//! editor metadata and keeps only the inner markup and view box of each file.
//! [`SvgBuilder::embed_asset`] scales and centers them onto the canvas.

pub mod assets;
pub mod builder;
pub mod element;
pub mod sanitize;

pub use assets::{AssetError, AssetLibrary, VectorAsset, ViewBox};
pub use builder::{CanvasMode, SvgBuilder};
pub use element::{Element, Group, Paint, PathData, Stroke, Transform};
pub use sanitize::{SanitizedAsset, Sanitizer};
