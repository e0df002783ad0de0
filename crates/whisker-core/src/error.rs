//! Error types for the trait catalog

use thiserror::Error;

use crate::traits::TraitCategory;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An override replaced a category's list with nothing
    #[error("Trait list for '{0}' must not be empty")]
    EmptyTraitList(TraitCategory),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
