//! Inventory error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// SKU already taken.
    #[error("product with this SKU already exists")]
    SkuTaken,

    /// Product not found.
    #[error("product not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
