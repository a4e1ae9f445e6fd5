//! # FarmLink Market Library
//!
//! Client-side state for the FarmLink marketplace: the cart store and the
//! toast notifier, owned by an explicitly started [`Session`].
//!
//! ## Module Organization
//! ```text
//! farmlink_market/
//! ├── lib.rs          ◄─── You are here (tracing setup & smoke run)
//! ├── session.rs      ◄─── Session start / shutdown
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart store
//! │   ├── toast.rs    ◄─── Toast slot and timeline task
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── toast.rs    ◄─── Toast commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Independent Stores
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Screens                                         │
//! │                  │                          │                           │
//! │         add / remove / step          show("Added to cart!")             │
//! │                  ▼                          ▼                           │
//! │          ┌──────────────┐           ┌──────────────┐                    │
//! │          │  CartState   │           │  ToastState  │                    │
//! │          └──────────────┘           └──────────────┘                    │
//! │                                                                         │
//! │  Neither store calls the other. Screens sequence them.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod session;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use session::Session;

use farmlink_core::{Money, ProductListing, ToastCategory, ToastPhase};
use tracing::{info, info_span, Instrument, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::cart::{add_to_cart, checkout_summary, clear_cart, update_cart_item};
use commands::toast::show_toast;
use state::ConfigState;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=farmlink=trace` - Trace for farmlink crates only
/// - Default: INFO, DEBUG for farmlink crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,farmlink=debug"));

    build_subscriber(filter).init();
}

/// Formatting subscriber gated only by `filter`.
fn build_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt().with_env_filter(filter).finish()
}

/// Runs one headless session through the buyer flow and logs each step.
///
/// ## Sequence
/// 1. Start a session from `config`
/// 2. Add produce, step a quantity, toast after each change
/// 3. Log the checkout summary
/// 4. Wait for the last toast to hide
/// 5. Clear the cart as order confirmation does, shut down
pub async fn run(config: ConfigState) -> Result<(), ApiError> {
    let session = Session::start(config)?;
    let span = info_span!("session", id = %session.id());
    walk_buyer_flow(session).instrument(span).await
}

async fn walk_buyer_flow(mut session: Session) -> Result<(), ApiError> {
    let tomatoes = ProductListing::new(1, "Heirloom Tomatoes", Money::from_cents(1280), "1kg", "🍅")
        .with_farmer("Green Valley Farm");
    let eggs = ProductListing::new(2, "Free-range Eggs", Money::from_cents(600), "dozen", "🥚")
        .with_farmer("Sunrise Poultry");

    for listing in [&tomatoes, &tomatoes, &eggs] {
        let response = add_to_cart(session.cart()?, listing)?;
        show_toast(
            session.toast()?,
            format!("{} added to cart!", listing.name),
            Some(ToastCategory::Success),
        );
        info!(
            product_id = listing.id,
            lines = response.totals.line_count,
            units = response.totals.unit_count,
            "Cart updated"
        );
    }

    update_cart_item(session.cart()?, eggs.id, 1)?;

    let summary = checkout_summary(session.cart()?, session.config());
    info!(
        subtotal = %summary.subtotal_display,
        delivery_fee = %summary.delivery_fee_display,
        total = %summary.total_display,
        "Checkout summary"
    );

    let mut toast_rx = session.toast()?.subscribe();
    // A closed channel means the session is gone, nothing left to wait for.
    let _ = toast_rx.wait_for(|t| t.phase == ToastPhase::Hidden).await;

    clear_cart(session.cart()?);
    show_toast(session.toast()?, "Order placed", Some(ToastCategory::Success));

    session.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_honours_env_filter() {
        let subscriber = build_subscriber(EnvFilter::new("warn"));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(tracing::Level::WARN));
            assert!(!tracing::enabled!(tracing::Level::INFO));
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
        });
    }

    #[test]
    fn test_subscriber_default_filter_levels() {
        let subscriber = build_subscriber(EnvFilter::new("info,farmlink=debug"));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "farmlink_market", tracing::Level::DEBUG));
            assert!(!tracing::enabled!(target: "other_crate", tracing::Level::DEBUG));
            assert!(!tracing::enabled!(tracing::Level::TRACE));
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_completes() {
        run(ConfigState::default()).await.unwrap();
    }
}
