//! # Commands Module
//!
//! The functions the marketplace screens call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation and checkout totals
//! └── toast.rs    ◄─── Transient status messages
//! ```
//!
//! ## Store Injection
//! Each command takes only the store it needs, handed out by the session:
//! ```rust,ignore
//! // Only needs the cart
//! get_cart(session.cart()?)
//!
//! // Cart plus display config
//! checkout_summary(session.cart()?, session.config())
//!
//! // Only needs the toast
//! show_toast(session.toast()?, "Added to cart!", Some(ToastCategory::Success))
//! ```

pub mod cart;
pub mod toast;
