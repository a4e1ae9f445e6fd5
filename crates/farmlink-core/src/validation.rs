//! # Validation Module
//!
//! Input checks applied by the app shell when strict cart mode is on.
//!
//! ## Where Validation Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (TypeScript)                                          │
//! │  └── Buttons only offer +1 / -1 / remove                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart commands (Rust)                                         │
//! │  ├── permissive (default): no checks, unknown ids are no-ops           │
//! │  └── strict: THIS MODULE + Cart::try_* operations                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farmlink_core::validation::{validate_listing, validate_quantity_delta};
//! use farmlink_core::{Money, ProductListing};
//!
//! let eggs = ProductListing::new(1, "Free-range Eggs", Money::from_cents(600), "dozen", "🥚");
//! validate_listing(&eggs).unwrap();
//! validate_quantity_delta(-1).unwrap();
//! assert!(validate_quantity_delta(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ProductListing;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_UNIT_LEN: usize = 32;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name: non-empty after trimming, at most 200 bytes.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_label("name", name, MAX_NAME_LEN)
}

/// Validates a unit label ("1kg", "bunch"): non-empty, at most 32 bytes.
pub fn validate_unit_label(unit: &str) -> ValidationResult<()> {
    validate_label("unit", unit, MAX_UNIT_LEN)
}

fn validate_label(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents. Zero is allowed (free samples).
///
/// ```rust
/// use farmlink_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1280).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity change coming from a stepper.
///
/// ## Rules
/// - Must not be zero
/// - Magnitude must not exceed `MAX_ITEM_QUANTITY`
pub fn validate_quantity_delta(delta: i64) -> ValidationResult<()> {
    if delta == 0 {
        return Err(ValidationError::MustBeNonZero {
            field: "delta".to_string(),
        });
    }

    if delta.unsigned_abs() > MAX_ITEM_QUANTITY.unsigned_abs() {
        return Err(ValidationError::OutOfRange {
            field: "delta".to_string(),
            min: -MAX_ITEM_QUANTITY,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates everything the cart copies out of a listing.
pub fn validate_listing(listing: &ProductListing) -> ValidationResult<()> {
    validate_product_name(&listing.name)?;
    validate_unit_label(&listing.unit)?;
    validate_price_cents(listing.unit_price.cents())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
