//! # Cart State
//!
//! Shared handle to the session's cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several screens hold the same store (cart tab, checkout, badges)
//! 2. Only one mutation should run at a time
//! 3. Toast tasks run on tokio worker threads next to screen callbacks
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Command                 Cart Change           │
//! │  ─────────────            ───────                 ───────────           │
//! │                                                                         │
//! │  Add to cart ────────────► add_to_cart() ───────► add_item(listing)    │
//! │                                                                         │
//! │  Stepper +/- ────────────► update_cart_item() ──► change_quantity()    │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_from_cart() ──► remove_item(id)      │
//! │                                                                         │
//! │  Order confirmed ────────► clear_cart() ────────► clear()              │
//! │                                                                         │
//! │  Cart / Checkout ────────► get_cart() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use farmlink_core::{Cart, Money};

/// Session-scoped cart store.
///
/// Cloning shares the same cart.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    strict: bool,
}

impl CartState {
    /// Creates an empty cart store.
    pub fn new(delivery_fee: Money, strict: bool) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new(delivery_fee))),
            strict,
        }
    }

    /// Whether commands should use the strict `try_*` cart operations.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Executes a function with read access to the cart.
    ///
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Cart operations never leave a partial update, so poisoning is ignored.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&listing));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        CartState::new(farmlink_core::DEFAULT_DELIVERY_FEE, false)
    }
}
