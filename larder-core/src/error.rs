//! Inventory error types.

use thiserror::Error;

/// Errors surfaced by validated writes and lookups.
///
/// Derived computations (stock, expiry, search, reports) never fail; an empty
/// result set is a valid outcome, not an error.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint: {0}")]
    Constraint(String),
}

/// Result type for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;
