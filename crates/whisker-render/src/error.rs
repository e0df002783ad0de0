//! Error types for cat generation

use thiserror::Error;
use whisker_core::CatalogError;
use whisker_svg::AssetError;

/// Generator construction errors
///
/// Generation itself never fails once a generator exists.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Trait overrides were rejected
    #[error("Invalid trait catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Extra assets could not be loaded
    #[error("Asset loading failed: {0}")]
    Assets(#[from] AssetError),

    /// Config could not be parsed
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
