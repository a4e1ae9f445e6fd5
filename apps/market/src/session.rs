//! # Session
//!
//! Owns the stores for one run of the app.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │  Session::start(config)                                                 │
//! │     • capture tokio runtime handle (fails outside a runtime)            │
//! │     • CartState: empty cart with configured delivery fee                │
//! │     • ToastState: hidden, configured timings                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  session.cart()? / session.toast()?  ◄── screens                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  session.shutdown()  (also on drop)                                     │
//! │     • pending toast timeline aborted                                    │
//! │     • stores dropped; later access → StoreUnavailable                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::runtime::Handle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, ToastState};

#[derive(Debug)]
struct Stores {
    cart: CartState,
    toast: ToastState,
}

/// The stores for one app session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    config: ConfigState,
    stores: Option<Stores>,
}

impl Session {
    /// Starts a session on the current tokio runtime.
    ///
    /// ## Errors
    /// `StoreUnavailable` when called outside a tokio runtime, since the
    /// toast store has nowhere to run its timeline.
    pub fn start(config: ConfigState) -> Result<Self, ApiError> {
        let runtime = Handle::try_current().map_err(|e| {
            warn!(error = %e, "Session started outside a tokio runtime");
            ApiError::no_runtime()
        })?;

        let id = Uuid::new_v4();
        let stores = Stores {
            cart: CartState::new(config.delivery_fee, config.strict_cart),
            toast: ToastState::new(config.toast_timings(), runtime),
        };

        info!(
            session_id = %id,
            delivery_fee = %config.delivery_fee,
            strict_cart = config.strict_cart,
            "Session started"
        );

        Ok(Session {
            id,
            config,
            stores: Some(stores),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Whether `shutdown` has not run yet.
    pub fn is_active(&self) -> bool {
        self.stores.is_some()
    }

    /// The cart store, or `StoreUnavailable` after shutdown.
    pub fn cart(&self) -> Result<&CartState, ApiError> {
        self.stores
            .as_ref()
            .map(|s| &s.cart)
            .ok_or_else(|| ApiError::store_unavailable("Cart"))
    }

    /// The toast store, or `StoreUnavailable` after shutdown.
    pub fn toast(&self) -> Result<&ToastState, ApiError> {
        self.stores
            .as_ref()
            .map(|s| &s.toast)
            .ok_or_else(|| ApiError::store_unavailable("Toast"))
    }

    /// Tears the session down. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(stores) = self.stores.take() {
            stores.toast.dismiss_for_shutdown();
            let lines = stores.cart.with_cart(|c| c.line_count());
            info!(session_id = %self.id, abandoned_lines = lines, "Session shut down");
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
