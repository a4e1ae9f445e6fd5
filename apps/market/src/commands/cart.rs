//! # Cart Commands
//!
//! Cart manipulation as called by the marketplace screens.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Screen  │     │ Confirmed│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                   add_to_cart      checkout_summary   clear_cart        │
//! │                   update_cart_item                        │             │
//! │                   remove_from_cart                        ▼             │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In permissive mode (the default) no command fails. Strict mode turns the
//! ignored inputs into `ApiError`s.

use farmlink_core::{CartLine, CartTotals, ProductId, ProductListing};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

/// Cart contents with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&farmlink_core::Cart> for CartResponse {
    fn from(cart: &farmlink_core::Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: cart.totals(),
        }
    }
}

/// Figures for the checkout screen, raw and formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    pub totals: CartTotals,
    pub subtotal_display: String,
    pub delivery_fee_display: String,
    pub total_display: String,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a listing.
///
/// ## Behavior
/// - Already in cart: quantity + 1, stored name/price kept
/// - Not in cart: appended with quantity 1
/// - Strict mode: listing is validated first
pub fn add_to_cart(cart: &CartState, listing: &ProductListing) -> Result<CartResponse, ApiError> {
    debug!(product_id = listing.id, strict = cart.is_strict(), "add_to_cart command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        if cart.is_strict() {
            c.try_add_item(listing)?;
        } else {
            c.add_item(listing);
        }
        Ok(CartResponse::from(&*c))
    })
}

/// Applies a stepper change (`delta`, usually +1 or -1) to a line.
///
/// ## Behavior
/// - Result above zero: applied
/// - Result zero or below: ignored (the line stays at its quantity)
/// - Unknown id: ignored
/// - Strict mode: the ignored cases become errors
pub fn update_cart_item(
    cart: &CartState,
    product_id: ProductId,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, delta, strict = cart.is_strict(), "update_cart_item command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        if cart.is_strict() {
            c.try_change_quantity(product_id, delta)?;
        } else if !c.change_quantity(product_id, delta) {
            debug!(product_id, delta, "Quantity change ignored");
        }
        Ok(CartResponse::from(&*c))
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> Result<CartResponse, ApiError> {
    debug!(product_id, strict = cart.is_strict(), "remove_from_cart command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        if cart.is_strict() {
            c.try_remove_item(product_id)?;
        } else if !c.remove_item(product_id) {
            debug!(product_id, "Remove ignored, product not in cart");
        }
        Ok(CartResponse::from(&*c))
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - Order confirmation screen, after the order is placed
/// - "Clear cart" action on the cart screen
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// Totals for the checkout screen, formatted with the session currency.
pub fn checkout_summary(cart: &CartState, config: &ConfigState) -> CheckoutSummary {
    debug!("checkout_summary command");

    let totals = cart.with_cart(|c| c.totals());
    CheckoutSummary {
        totals,
        subtotal_display: config.format_currency(totals.subtotal),
        delivery_fee_display: config.format_currency(totals.delivery_fee),
        total_display: config.format_currency(totals.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use farmlink_core::Money;

    fn listing(id: ProductId, price_cents: i64) -> ProductListing {
        ProductListing::new(id, format!("Product {}", id), Money::from_cents(price_cents), "1kg", "🥔")
            .with_farmer("Sunny Fields")
    }

    #[test]
    fn test_add_twice_then_get() {
        let cart = CartState::default();
        add_to_cart(&cart, &listing(1, 1280)).unwrap();
        let response = add_to_cart(&cart, &listing(1, 1280)).unwrap();

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 2);
        assert_eq!(response.lines[0].farmer_name.as_deref(), Some("Sunny Fields"));
        assert_eq!(response.totals.subtotal.cents(), 2560);
        assert_eq!(get_cart(&cart), response);
    }

    #[test]
    fn test_remove_leaves_other_line() {
        let cart = CartState::default();
        add_to_cart(&cart, &listing(1, 500)).unwrap();
        add_to_cart(&cart, &listing(2, 850)).unwrap();

        let response = remove_from_cart(&cart, 1).unwrap();

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].id, 2);
        assert_eq!(response.totals.subtotal.cents(), 850);
        assert_eq!(response.totals.total.cents(), 1350);
    }

    #[test]
    fn test_permissive_ignores_bad_input() {
        let cart = CartState::default();
        add_to_cart(&cart, &listing(1, 500)).unwrap();

        let response = update_cart_item(&cart, 1, -1).unwrap();
        assert_eq!(response.lines[0].quantity, 1);

        let response = update_cart_item(&cart, 99, 1).unwrap();
        assert_eq!(response.totals.unit_count, 1);

        let response = remove_from_cart(&cart, 99).unwrap();
        assert_eq!(response.totals.line_count, 1);

        let response = update_cart_item(&cart, 1, i64::MAX).unwrap();
        assert_eq!(response.lines[0].quantity, 1);
        assert_eq!(response.totals.total.cents(), 1000);
    }

    #[test]
    fn test_strict_reports_bad_input() {
        let cart = CartState::new(Money::from_cents(500), true);
        add_to_cart(&cart, &listing(1, 500)).unwrap();

        let err = update_cart_item(&cart, 1, -1).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let err = update_cart_item(&cart, 99, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = update_cart_item(&cart, 1, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = remove_from_cart(&cart, 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let mut nameless = listing(2, 100);
        nameless.name.clear();
        let err = add_to_cart(&cart, &nameless).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Failed commands leave the cart untouched.
        let response = get_cart(&cart);
        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.totals.unit_count, 1);
    }

    #[test]
    fn test_clear_cart() {
        let cart = CartState::default();
        add_to_cart(&cart, &listing(1, 500)).unwrap();

        let response = clear_cart(&cart);

        assert!(response.lines.is_empty());
        assert!(response.totals.total.is_zero());
        assert!(response.totals.delivery_fee.is_zero());
    }

    #[test]
    fn test_checkout_summary() {
        let cart = CartState::default();
        let config = ConfigState::default();
        add_to_cart(&cart, &listing(1, 500)).unwrap();
        add_to_cart(&cart, &listing(2, 850)).unwrap();
        update_cart_item(&cart, 2, 1).unwrap();

        let summary = checkout_summary(&cart, &config);

        assert_eq!(summary.subtotal_display, "$22.00");
        assert_eq!(summary.delivery_fee_display, "$5.00");
        assert_eq!(summary.total_display, "$27.00");
    }

    #[test]
    fn test_response_json_shape() {
        let cart = CartState::default();
        let response = add_to_cart(&cart, &listing(1, 1280)).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["lines"][0]["unitPrice"], 1280);
        assert_eq!(json["totals"]["deliveryFee"], 500);
        assert_eq!(json["totals"]["lineCount"], 1);
    }
}
