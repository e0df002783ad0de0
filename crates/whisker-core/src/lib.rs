//! Whisker Core - Seeded randomness and cat attribute selection
//!
//! Whisker turns any seed into a reproducible cartoon cat. This crate holds
//! the parts that decide *what* the cat looks like; drawing lives in
//! `whisker-render`.
//!
//! ```text
//! Seed → SeededRandom → AttributeSelector → CatAttributes
//!                              ↑
//!                 TraitCatalog (rarity tiers + flat lists)
//! ```
//!
//! Everything here is deterministic. The same seed always walks the same
//! generator stream and resolves to the same attributes, on every platform.

pub mod attributes;
pub mod color;
pub mod error;
pub mod random;
pub mod traits;

pub use attributes::{AttributeSelector, CatAttributes, MUTATION_CHANCE, TraitRarities};
pub use error::CatalogError;
pub use random::{Seed, SeededRandom, hash_str};
pub use traits::{Rarity, TierTable, TraitCatalog, TraitCategory, TraitOverrides};
