//! # API Error Type
//!
//! Unified error type for the commands the screens call.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in FarmLink                               │
//! │                                                                         │
//! │  Screen                      Rust                                       │
//! │  ──────                      ────                                       │
//! │                                                                         │
//! │  updateCartItem(id, -1)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  session.cart()? ── not started / shut down ── StoreUnavailable ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  strict mode? ── CoreError::LineNotFound ──────────── NotFound ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────── CartResponse ─►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error carries a machine-readable `code` and a human-readable
//! `message`, serialized for the screen.

use farmlink_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Error returned from commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product 42 is not in the cart"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, TS)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Cart line not found (strict mode only)
    NotFound,

    /// Input validation failed (strict mode only)
    ValidationError,

    /// Cart rule violated (strict mode only)
    CartError,

    /// A store was used before the session started or after it shut down.
    ///
    /// This is a wiring bug in the shell, not something a user can cause.
    StoreUnavailable,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates the error for a store reached outside its session.
    pub fn store_unavailable(store: &str) -> Self {
        ApiError::new(
            ErrorCode::StoreUnavailable,
            format!("{} store used outside of an active session", store),
        )
    }

    /// Creates the error for a session started with no tokio runtime current.
    pub fn no_runtime() -> Self {
        ApiError::new(
            ErrorCode::StoreUnavailable,
            "no tokio runtime available to start the session",
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = match &err {
            CoreError::Validation(e) => e.to_string(),
            other => other.to_string(),
        };

        let code = match err {
            CoreError::LineNotFound(_) => ErrorCode::NotFound,
            CoreError::QuantityBelowMinimum { .. } => ErrorCode::CartError,
            CoreError::QuantityTooLarge { .. } | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
        };

        ApiError::new(code, message)
    }
}
