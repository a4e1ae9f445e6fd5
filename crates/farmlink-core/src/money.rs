//! # Money Module
//!
//! Provides the `Money` type for prices, line totals and the delivery fee.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices:                                                  │
//! │    12.80 * 3 = 38.400000000000006                                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1280 * 3 = 3840 → displayed as $38.40                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farmlink_core::money::Money;
//!
//! let price = Money::from_cents(1280); // $12.80
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.cents(), 2560);
//!
//! let fee = Money::parse_major("5.00").unwrap();
//! assert_eq!((line_total + fee).cents(), 3060);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// ProductListing.unit_price ──► CartLine.unit_price ──► CartLine.line_total
///                                                              │
///                          Cart.subtotal ◄─────────────────────┘
///                               │
///                               ▼
///                  Cart.total = subtotal + delivery_fee
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use farmlink_core::money::Money;
    ///
    /// let price = Money::from_cents(850); // $8.50
    /// assert_eq!(price.cents(), 850);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a non-negative decimal amount in major units ("5", "5.5", "5.00").
    ///
    /// Returns `None` for anything else, including more than two fraction
    /// digits. Used for configuration values, never for arithmetic.
    ///
    /// ```rust
    /// use farmlink_core::money::Money;
    ///
    /// assert_eq!(Money::parse_major("12.8"), Some(Money::from_cents(1280)));
    /// assert_eq!(Money::parse_major("abc"), None);
    /// ```
    pub fn parse_major(input: &str) -> Option<Self> {
        let input = input.trim();
        let (whole, frac) = match input.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (input, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let major: i64 = whole.parse().ok()?;
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };

        major.checked_mul(100)?.checked_add(minor).map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ```rust
    /// use farmlink_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering with a dollar sign.
///
/// Screens should use `ConfigState::format_currency` so the symbol follows
/// configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Lets cart reductions use `.sum()` directly.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1280);
        assert_eq!(money.cents(), 1280);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 80);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(8, 50).cents(), 850);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1280)), "$12.80");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(500), Money::from_cents(850), Money::from_cents(1)];
        let total: Money = prices.iter().copied().sum();
        assert_eq!(total.cents(), 1351);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_parse_major() {
        assert_eq!(Money::parse_major("5"), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_major("5.00"), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_major(" 12.8 "), Some(Money::from_cents(1280)));
        assert_eq!(Money::parse_major("0.05"), Some(Money::from_cents(5)));
    }

    #[test]
    fn test_parse_major_rejects_garbage() {
        assert_eq!(Money::parse_major(""), None);
        assert_eq!(Money::parse_major(".50"), None);
        assert_eq!(Money::parse_major("-5.00"), None);
        assert_eq!(Money::parse_major("5.005"), None);
        assert_eq!(Money::parse_major("5,00"), None);
        assert_eq!(Money::parse_major("five"), None);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }
}
