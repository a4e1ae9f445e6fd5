//! # farmlink-core: Pure Client Logic for FarmLink
//!
//! This crate holds the logic behind the FarmLink marketplace screens as
//! plain functions and data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FarmLink Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Screens (React Native, out of tree)             │   │
//! │  │    Explore ──► Product Detail ──► Cart ──► Checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    farmlink-market                              │   │
//! │  │    Session, CartState, ToastState, commands                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ farmlink-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Listing  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Toast*   │  │           │  │ CartLine  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductListing, ToastCategory, ToastPhase)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart container and its derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Rules applied when the app runs in strict cart mode
//!
//! ## Example Usage
//!
//! ```rust
//! use farmlink_core::{Cart, Money, ProductListing};
//!
//! let mut cart = Cart::new(Money::from_cents(500));
//! let tomatoes = ProductListing::new(1, "Heirloom Tomatoes", Money::from_cents(1280), "1kg", "🍅");
//!
//! cart.add_item(&tomatoes);
//! cart.add_item(&tomatoes);
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.subtotal().cents(), 2560);
//! assert_eq!(cart.total().cents(), 3060);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat delivery fee charged on any non-empty cart ($5.00).
pub const DEFAULT_DELIVERY_FEE: Money = Money::from_cents(500);

/// Maximum quantity of a single line in strict cart mode.
///
/// Permissive mode has no ceiling; strict mode uses this to catch
/// runaway stepper taps.
pub const MAX_ITEM_QUANTITY: i64 = 999;
