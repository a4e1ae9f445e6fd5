//! # Error Types
//!
//! Domain-specific error types for farmlink-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  farmlink-core errors (this file)                                      │
//! │  ├── CoreError        - Cart rule violations (strict mode)             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  farmlink-market errors                                                │
//! │  └── ApiError         - What the screens see (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The permissive cart operations never produce these. They only come out of
//! the `try_*` operations and the validation functions.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No cart line carries this product id.
    #[error("Product {0} is not in the cart")]
    LineNotFound(ProductId),

    /// The change would take a line above the quantity ceiling.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The change would take a line below one unit.
    ///
    /// Lines are removed explicitly, never by stepping down to zero.
    #[error("Quantity of product {id} cannot go below 1 (requested {requested})")]
    QuantityBelowMinimum { id: ProductId, requested: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value must be non-zero.
    #[error("{field} must not be zero")]
    MustBeNonZero { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::LineNotFound(42).to_string(),
            "Product 42 is not in the cart"
        );

        let err = CoreError::QuantityBelowMinimum { id: 3, requested: 0 };
        assert_eq!(
            err.to_string(),
            "Quantity of product 3 cannot go below 1 (requested 0)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonZero {
            field: "delta".to_string(),
        };
        assert_eq!(err.to_string(), "delta must not be zero");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "unit".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
