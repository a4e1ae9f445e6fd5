//! # Domain Types
//!
//! Types shared between the stores and the screens.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductListing  │   │  ToastCategory  │   │   ToastPhase    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Success        │   │  Hidden         │       │
//! │  │  name           │   │  Error          │   │  FadingIn       │       │
//! │  │  unit_price     │   │  Info (default) │   │  Visible        │       │
//! │  │  unit, glyph    │   └─────────────────┘   │  FadingOut      │       │
//! │  │  farmer_name?   │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Identifier of a product listing. Unique within a cart.
pub type ProductId = u32;

// =============================================================================
// Product Listing
// =============================================================================

/// A product as shown on a listing or detail screen.
///
/// This is the input to `Cart::add_item`. Only the fields the cart keeps are
/// modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductListing {
    pub id: ProductId,

    /// Display name ("Heirloom Tomatoes").
    pub name: String,

    /// Price for one `unit`.
    pub unit_price: Money,

    /// Unit label ("1kg", "bunch", "dozen").
    pub unit: String,

    /// Emoji or image key shown next to the name.
    pub image_glyph: String,

    /// Farm the product comes from, when the listing names one.
    pub farmer_name: Option<String>,
}

impl ProductListing {
    /// Creates a listing without a farmer attribution.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        unit: impl Into<String>,
        image_glyph: impl Into<String>,
    ) -> Self {
        ProductListing {
            id,
            name: name.into(),
            unit_price,
            unit: unit.into(),
            image_glyph: image_glyph.into(),
            farmer_name: None,
        }
    }

    /// Attributes the listing to a farm.
    pub fn with_farmer(mut self, farmer_name: impl Into<String>) -> Self {
        self.farmer_name = Some(farmer_name.into());
        self
    }
}

// =============================================================================
// Toast Category
// =============================================================================

/// Severity of a toast message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToastCategory {
    /// Confirmation ("Added to cart!").
    Success,
    /// Something the user tried did not work.
    Error,
    /// Neutral notice.
    #[default]
    Info,
}

impl ToastCategory {
    /// Background colour the toast banner is drawn with.
    pub const fn accent_color(&self) -> &'static str {
        match self {
            ToastCategory::Success => "#16A34A",
            ToastCategory::Error => "#DC2626",
            ToastCategory::Info => "#2563EB",
        }
    }
}

// =============================================================================
// Toast Phase
// =============================================================================

/// Where a toast is in its fade-in / hold / fade-out timeline.
///
/// ```text
/// Hidden ──show()──► FadingIn ──fade──► Visible ──hold──► FadingOut ──fade──► Hidden
///                       ▲                                                    │
///                       └──────────── show() again restarts here ◄───────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToastPhase {
    #[default]
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

impl ToastPhase {
    /// Whether the banner is on screen (at any opacity).
    #[inline]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, ToastPhase::Hidden)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
