//! Error handling for the registry model.
//!
//! Each layer defines its own error enum next to its code; this module
//! aggregates them into a single crate-level error for callers that cross
//! layers.

use crate::catalog::CatalogError;
use crate::schema::{AliasError, PropertyError};
use crate::store::StoreError;

/// Top-level error type for registry model operations
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Property reflection error
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// Alias declaration error
    #[error(transparent)]
    Alias(#[from] AliasError),

    /// Code catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Storage error
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for registry model operations
pub type Result<T> = std::result::Result<T, ModelError>;
