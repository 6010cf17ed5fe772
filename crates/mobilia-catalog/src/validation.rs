//! # Validation Module
//!
//! Attribute validation utilities for the furniture catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Constructors                                                  │
//! │  ├── Every concrete item validates ALL attributes at build time         │
//! │  └── Invalid values never produce a live item                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Setters                                                       │
//! │  ├── Mutation goes through the same validators                          │
//! │  └── A failed set leaves the previous value untouched                   │
//! │                                                                         │
//! │  Prices are therefore always computed from valid state; price           │
//! │  calculation itself never validates.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mobilia_catalog::validation::{validate_label, validate_dimension};
//!
//! // Labels are trimmed and must be non-empty
//! assert_eq!(validate_label("name", "  Oak Chair ").unwrap(), "Oak Chair");
//!
//! // Dimensions must be strictly positive
//! assert!(validate_dimension("width", 80.0).is_ok());
//! assert!(validate_dimension("width", 0.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a textual label (name, material, color).
///
/// ## Rules
/// - Leading/trailing whitespace is stripped
/// - Must not be empty after stripping
///
/// ## Returns
/// The trimmed label.
pub fn validate_label(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
///
/// ## Example
/// ```rust
/// use mobilia_catalog::money::Money;
/// use mobilia_catalog::validation::validate_base_price;
///
/// assert!(validate_base_price(Money::from_cents(10_000)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_ok());
/// assert!(validate_base_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: "base price".to_string(),
        });
    }

    Ok(price)
}

/// Validates a count that must be strictly positive.
///
/// Used for person capacity, compartment count, and similar integer
/// attributes where zero makes the item meaningless.
pub fn validate_positive_count(field: &str, count: u32) -> ValidationResult<u32> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(count)
}

/// Validates a physical dimension or capacity.
///
/// ## Rules
/// - Must be finite (NaN and infinities are rejected)
/// - Must be strictly positive
pub fn validate_dimension(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 1 and 100 inclusive
/// - Zero and negative discounts are rejected rather than stored as no-ops
pub fn validate_discount_percent(percent: u32) -> ValidationResult<u32> {
    if percent == 0 || percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 1,
            max: 100,
        });
    }

    Ok(percent)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        // Valid labels are trimmed
        assert_eq!(validate_label("name", "Oak Chair").unwrap(), "Oak Chair");
        assert_eq!(validate_label("color", "  brown  ").unwrap(), "brown");

        // Empty and whitespace-only labels are rejected
        assert!(validate_label("name", "").is_err());
        assert!(validate_label("name", "   ").is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::from_cents(0)).is_ok());
        assert!(validate_base_price(Money::from_cents(10_000)).is_ok());
        assert!(validate_base_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_positive_count() {
        assert!(validate_positive_count("person capacity", 1).is_ok());
        assert!(validate_positive_count("person capacity", 12).is_ok());
        assert!(validate_positive_count("person capacity", 0).is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("length", 120.0).is_ok());
        assert!(validate_dimension("length", 0.0).is_err());
        assert!(validate_dimension("length", -5.0).is_err());
        assert!(validate_dimension("length", f64::NAN).is_err());
        assert!(validate_dimension("length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(1).is_ok());
        assert!(validate_discount_percent(10).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(0).is_err());
        assert!(validate_discount_percent(101).is_err());
    }
}
