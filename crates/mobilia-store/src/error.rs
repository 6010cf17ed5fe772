//! Store-level error types.
//!
//! Catalog errors cross into the store through `#[from]`; everything the
//! store itself can reject (unpriceable stock, unknown items, bad discount
//! input) gets its own variant so callers can match on the outcome.

use thiserror::Error;

use mobilia_catalog::{CatalogError, Money, ValidationError};

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The item's price computation failed, so it cannot be stocked or sold.
    #[error("cannot price '{item}': {reason}")]
    PriceUnavailable { item: String, reason: String },

    /// The item priced successfully but the result is zero or negative.
    #[error("'{item}' computed a non-positive price ({price})")]
    NonPositivePrice { item: String, price: Money },

    /// No inventory entry matches the requested name or label.
    #[error("no item named '{name}' in inventory")]
    UnknownItem { name: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
