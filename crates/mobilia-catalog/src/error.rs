//! # Error Types
//!
//! Domain-specific error types for mobilia-catalog.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mobilia-catalog errors (this file)                                     │
//! │  ├── ValidationError  - Construction/mutation failures (tier 1)         │
//! │  └── CatalogError     - Operational outcomes (tier 2)                   │
//! │                                                                         │
//! │  mobilia-store errors (separate crate)                                  │
//! │  └── StoreError       - Store operation outcomes                        │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → StoreError → Caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two Tiers
//! 1. `ValidationError` is raised eagerly by constructors and setters on
//!    invalid values (empty strings, non-positive dimensions, unrecognized
//!    enumerated values). Values are never silently clamped.
//! 2. `CatalogError` is a *returned outcome* for expected business failures
//!    (assembly capacity exceeded, kind mismatch, missing price). Callers
//!    branch on the variant instead of catching panics.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, limit, index)
//! 3. Errors are enum variants, never plain String

use thiserror::Error;

use crate::item::ItemKind;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when an attribute value doesn't meet its constraints.
/// Raised immediately at construction/assignment time, never at
/// price-calculation time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is missing or empty after trimming.
    #[error("{field} must not be empty")]
    Required { field: String },

    /// Numeric value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Monetary amount must not be negative (zero is allowed).
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },

    /// Numeric value is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set (e.g., table shape, bed size).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        allowed: Vec<&'static str>,
    },
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Operational outcomes of the composition/pricing engine.
///
/// These represent expected business failures. They are returned, not
/// panicked, so callers can branch on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A dining set is already holding as many chairs as its table seats.
    #[error("cannot add more chairs, the set is at its capacity of {max}")]
    CapacityExceeded { max: u32 },

    /// A chair of a different concrete kind was offered to a dining set.
    #[error("only {expected} items can join this set, got {found}")]
    ChairKindMismatch { expected: ItemKind, found: ItemKind },

    /// Chair removal was requested on a set with no chairs.
    #[error("the set has no chairs to remove")]
    EmptyAssembly,

    /// Chair removal index is outside the current chair sequence.
    #[error("chair index {index} is out of range (set has {count} chairs)")]
    ChairIndexOutOfRange { index: usize, count: usize },

    /// An item-specific operation was requested on an item that does not
    /// support it (e.g., height adjustment on a fixed-height chair).
    #[error("unsupported operation: {reason}")]
    Unsupported { reason: String },

    /// An item's price could not be computed.
    ///
    /// Produced by malformed or stubbed items; aggregation operations skip
    /// such members instead of aborting (see the store crate).
    #[error("price unavailable for {item}: {reason}")]
    PriceUnavailable { item: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name must not be empty");

        let err = ValidationError::MustBePositive {
            field: "person capacity".to_string(),
        };
        assert_eq!(err.to_string(), "person capacity must be greater than zero");
    }

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::CapacityExceeded { max: 6 };
        assert_eq!(
            err.to_string(),
            "cannot add more chairs, the set is at its capacity of 6"
        );

        let err = CatalogError::ChairIndexOutOfRange { index: 4, count: 2 };
        assert_eq!(
            err.to_string(),
            "chair index 4 is out of range (set has 2 chairs)"
        );
    }

    #[test]
    fn test_validation_converts_to_catalog_error() {
        let validation_err = ValidationError::Required {
            field: "material".to_string(),
        };
        let catalog_err: CatalogError = validation_err.into();
        assert!(matches!(catalog_err, CatalogError::Validation(_)));
    }
}
