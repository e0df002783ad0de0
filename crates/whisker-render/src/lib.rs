//! Whisker Render - Cat compositing and the generator facade
//!
//! Turns resolved attributes into an SVG document and wraps the whole
//! seed-to-document flow behind [`CatGenerator`].
//!
//! # Rendering Flow
//!
//! ```text
//! Seed → SeededRandom → AttributeSelector → CatAttributes
//!             │                                   │
//!             └──────────► CatCompositor ◄────────┘
//!                               │
//!                          SvgBuilder → SVG string
//! ```
//!
//! The compositor keeps drawing from the same generator stream the selector
//! used, so layout jitter depends on how many draws selection consumed.

pub mod accessory;
pub mod anatomy;
pub mod compositor;
pub mod config;
pub mod error;
pub mod face;
pub mod fur;
pub mod generator;
pub mod mutation;

// Re-export commonly used types
pub use accessory::{Accessory, HEAD_OR_NECK_ACCESSORIES, NECK_ACCESSORIES, is_neck_accessory};
pub use compositor::{BLUSH_CHANCE, CatCompositor, CatLayout};
pub use config::{AccessoryLayering, GeneratorConfig};
pub use error::GeneratorError;
pub use generator::{CatGenerator, Constrained, DEFAULT_MAX_ATTEMPTS, GeneratedCat, random_seed};
pub use mutation::Mutation;
