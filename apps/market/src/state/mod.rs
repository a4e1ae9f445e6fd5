//! # State Module
//!
//! The stores a session owns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session                                    │   │
//! │  │  Session::start(config) ... session.shutdown()                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │  ToastState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  watch +     │  │  delivery_fee    │              │
//! │  │    Cart      │  │  timeline    │  │  toast timings   │              │
//! │  │  >>          │  │  task        │  │  strict_cart     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart and toast stores never call each other.

mod cart;
mod config;
mod toast;

pub use cart::CartState;
pub use config::ConfigState;
pub use toast::{ToastSnapshot, ToastState, ToastTimings};
