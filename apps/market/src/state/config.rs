//! # Configuration State
//!
//! Session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FARMLINK_*`)
//! 2. Defaults (this file)
//!
//! Read-only after the session starts, so no mutex.

use std::time::Duration;

use farmlink_core::{Money, DEFAULT_DELIVERY_FEE};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::toast::ToastTimings;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Flat fee charged on a non-empty cart. Always positive.
    pub delivery_fee: Money,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Toast fade-in and fade-out duration in milliseconds
    pub toast_fade_ms: u64,

    /// Toast hold duration in milliseconds
    pub toast_hold_ms: u64,

    /// Surface unknown ids and invalid quantity changes as errors
    /// instead of ignoring them.
    pub strict_cart: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Delivery fee: $5.00
    /// - Toast: 300 ms fade, 2000 ms hold
    /// - Cart: permissive
    fn default() -> Self {
        ConfigState {
            delivery_fee: DEFAULT_DELIVERY_FEE,
            currency_symbol: "$".to_string(),
            toast_fade_ms: 300,
            toast_hold_ms: 2000,
            strict_cart: false,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FARMLINK_DELIVERY_FEE`: decimal amount, e.g. "5.00"
    /// - `FARMLINK_CURRENCY_SYMBOL`: e.g. "€"
    /// - `FARMLINK_TOAST_FADE_MS` / `FARMLINK_TOAST_HOLD_MS`
    /// - `FARMLINK_STRICT_CART`: "1" / "true" to enable
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// Values that fail to parse are logged and the default is kept.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("FARMLINK_DELIVERY_FEE") {
            match Money::parse_major(&raw) {
                Some(fee) if fee.is_positive() => config.delivery_fee = fee,
                _ => warn!(value = %raw, "Ignoring FARMLINK_DELIVERY_FEE, expected a positive amount"),
            }
        }

        if let Some(symbol) = lookup("FARMLINK_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                warn!("Ignoring empty FARMLINK_CURRENCY_SYMBOL");
            } else {
                config.currency_symbol = symbol.trim().to_string();
            }
        }

        if let Some(raw) = lookup("FARMLINK_TOAST_FADE_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.toast_fade_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring FARMLINK_TOAST_FADE_MS"),
            }
        }

        if let Some(raw) = lookup("FARMLINK_TOAST_HOLD_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.toast_hold_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring FARMLINK_TOAST_HOLD_MS"),
            }
        }

        if let Some(raw) = lookup("FARMLINK_STRICT_CART") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.strict_cart = true,
                "0" | "false" | "no" => config.strict_cart = false,
                _ => warn!(value = %raw, "Ignoring FARMLINK_STRICT_CART"),
            }
        }

        config
    }

    /// Toast timeline durations.
    pub fn toast_timings(&self) -> ToastTimings {
        ToastTimings {
            fade_in: Duration::from_millis(self.toast_fade_ms),
            hold: Duration::from_millis(self.toast_hold_ms),
            fade_out: Duration::from_millis(self.toast_fade_ms),
        }
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use farmlink_core::Money;
    /// use farmlink_market::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1350)), "$13.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.delivery_fee.cents(), 500);
        assert!(!config.strict_cart);

        let timings = config.toast_timings();
        assert_eq!(timings.total(), Duration::from_millis(2600));
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("FARMLINK_DELIVERY_FEE", "7.5"),
            ("FARMLINK_CURRENCY_SYMBOL", "€"),
            ("FARMLINK_TOAST_HOLD_MS", "1000"),
            ("FARMLINK_STRICT_CART", "true"),
        ]);

        assert_eq!(config.delivery_fee.cents(), 750);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.toast_timings().hold, Duration::from_millis(1000));
        assert!(config.strict_cart);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_with(&[
            ("FARMLINK_DELIVERY_FEE", "0"),
            ("FARMLINK_TOAST_FADE_MS", "-3"),
            ("FARMLINK_STRICT_CART", "maybe"),
        ]);

        assert_eq!(config.delivery_fee.cents(), 500);
        assert_eq!(config.toast_fade_ms, 300);
        assert!(!config.strict_cart);
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(2560)), "$25.60");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }
}
