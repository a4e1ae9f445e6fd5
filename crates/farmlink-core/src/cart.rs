//! # Cart
//!
//! The buyer's in-progress order: one line per product, with totals derived
//! on every read.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Operation                 Effect              │
//! │  ─────────────            ─────────                 ──────              │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item(listing) ──────► new line, qty 1     │
//! │                                                     or existing qty + 1 │
//! │                                                                         │
//! │  Stepper +/- ───────────► change_quantity(id, ±1) ► qty + delta if > 0  │
//! │                                                                         │
//! │  Trash icon ────────────► remove_item(id) ────────► line dropped        │
//! │                                                                         │
//! │  Order placed ──────────► clear() ────────────────► no lines            │
//! │                                                                         │
//! │  Cart / Checkout ───────► totals() ───────────────► recomputed sums     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive vs Strict
//! `add_item`, `remove_item` and `change_quantity` never fail: unknown ids and
//! changes that would drop a line below one unit are ignored. The `try_*`
//! variants apply the same changes but report those cases as `CoreError`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ProductId, ProductListing};
use crate::validation::{validate_listing, validate_quantity_delta};
use crate::{DEFAULT_DELIVERY_FEE, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart with its quantity.
///
/// Listing fields are copied when the line is created. Adding the same id
/// again only bumps the quantity; a changed name or price on the second
/// listing is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub unit: String,
    pub image_glyph: String,

    /// Always >= 1 while the line exists.
    pub quantity: i64,

    pub farmer_name: Option<String>,

    /// When the line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line with quantity 1 from a listing.
    pub fn from_listing(listing: &ProductListing) -> Self {
        CartLine {
            id: listing.id,
            name: listing.name.clone(),
            unit_price: listing.unit_price,
            unit: listing.unit.clone(),
            image_glyph: listing.image_glyph.clone(),
            quantity: 1,
            farmer_name: listing.farmer_name.clone(),
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per `id`
/// - Every line has `quantity >= 1`
/// - Lines keep insertion order
/// - Totals are never stored, only computed from `lines`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// Charged once whenever the cart has at least one line.
    delivery_fee: Money,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart with the given flat delivery fee.
    pub fn new(delivery_fee: Money) -> Self {
        Cart {
            lines: Vec::new(),
            delivery_fee,
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Permissive operations
    // -------------------------------------------------------------------------

    /// Adds one unit of a listing.
    ///
    /// Existing id: quantity + 1, other fields untouched. A line already at
    /// `MAX_ITEM_QUANTITY` is left as is.
    /// New id: appended with quantity 1.
    pub fn add_item(&mut self, listing: &ProductListing) {
        match self.line_mut(listing.id) {
            Some(line) if line.quantity < MAX_ITEM_QUANTITY => line.quantity += 1,
            Some(_) => {}
            None => self.lines.push(CartLine::from_listing(listing)),
        }
    }

    /// Removes the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != initial_len
    }

    /// Applies `delta` to the quantity of `id`.
    ///
    /// The change is applied only when the line exists and the new quantity
    /// stays within `1..=MAX_ITEM_QUANTITY`. A line is never removed by
    /// stepping down. Returns whether the quantity changed.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> bool {
        let Some(line) = self.line_mut(id) else {
            return false;
        };

        match line.quantity.checked_add(delta) {
            Some(new_quantity)
                if (1..=MAX_ITEM_QUANTITY).contains(&new_quantity)
                    && new_quantity != line.quantity =>
            {
                line.quantity = new_quantity;
                true
            }
            _ => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    // -------------------------------------------------------------------------
    // Strict operations
    // -------------------------------------------------------------------------

    /// Validates the listing, then adds one unit.
    ///
    /// Returns the line's new quantity.
    pub fn try_add_item(&mut self, listing: &ProductListing) -> CoreResult<i64> {
        validate_listing(listing)?;

        if let Some(line) = self.line_mut(listing.id) {
            let requested = line.quantity + 1;
            if requested > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = requested;
            return Ok(requested);
        }

        self.lines.push(CartLine::from_listing(listing));
        Ok(1)
    }

    /// Removes the line for `id`, failing if there is none.
    pub fn try_remove_item(&mut self, id: ProductId) -> CoreResult<()> {
        if self.remove_item(id) {
            Ok(())
        } else {
            Err(CoreError::LineNotFound(id))
        }
    }

    /// Applies `delta` to the quantity of `id`, reporting every case the
    /// permissive version ignores.
    ///
    /// Returns the line's new quantity.
    pub fn try_change_quantity(&mut self, id: ProductId, delta: i64) -> CoreResult<i64> {
        validate_quantity_delta(delta)?;

        let line = self.line_mut(id).ok_or(CoreError::LineNotFound(id))?;
        let requested = line.quantity + delta;

        if requested < 1 {
            return Err(CoreError::QuantityBelowMinimum { id, requested });
        }
        if requested > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested,
                max: MAX_ITEM_QUANTITY,
            });
        }

        line.quantity = requested;
        Ok(requested)
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for `id`.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities (the badge on the cart tab).
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The flat fee when the cart has lines, zero otherwise.
    pub fn delivery_fee(&self) -> Money {
        if self.is_empty() {
            Money::zero()
        } else {
            self.delivery_fee
        }
    }

    /// Subtotal plus delivery fee.
    pub fn total(&self) -> Money {
        self.subtotal() + self.delivery_fee()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Snapshot of every aggregate.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new(DEFAULT_DELIVERY_FEE)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregates computed from the cart at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: u32,
    pub unit_count: i64,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: u32::try_from(cart.line_count()).unwrap_or(u32::MAX),
            unit_count: cart.unit_count(),
            subtotal: cart.subtotal(),
            delivery_fee: cart.delivery_fee(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
