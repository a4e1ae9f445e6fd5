//! # Toast Commands
//!
//! Screens call `show_toast` right after a cart command succeeds:
//!
//! ```rust,ignore
//! let response = add_to_cart(session.cart()?, &listing)?;
//! show_toast(session.toast()?, "Added to cart!", Some(ToastCategory::Success));
//! ```

use farmlink_core::ToastCategory;
use tracing::debug;

use crate::state::{ToastSnapshot, ToastState};

/// Shows a transient message. Category defaults to `Info`.
pub fn show_toast(
    toast: &ToastState,
    message: impl Into<String>,
    category: Option<ToastCategory>,
) -> ToastSnapshot {
    let category = category.unwrap_or_default();
    debug!(?category, "show_toast command");
    toast.show(message, category)
}

/// Gets what the toast banner currently shows.
pub fn get_toast(toast: &ToastState) -> ToastSnapshot {
    toast.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastTimings;
    use farmlink_core::ToastPhase;
    use tokio::runtime::Handle;

    #[tokio::test(start_paused = true)]
    async fn test_show_toast_defaults_to_info() {
        let toast = ToastState::new(ToastTimings::default(), Handle::current());

        let snapshot = show_toast(&toast, "Welcome back", None);

        assert_eq!(snapshot.category, ToastCategory::Info);
        assert_eq!(snapshot.accent_color(), "#2563EB");
        assert_eq!(get_toast(&toast).phase, ToastPhase::FadingIn);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_json_shape() {
        let toast = ToastState::new(ToastTimings::default(), Handle::current());
        let snapshot = show_toast(&toast, "Added to cart!", Some(ToastCategory::Success));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["category"], "success");
        assert_eq!(json["phase"], "fading_in");
        assert_eq!(json["visible"], true);
        assert!(json.get("generation").is_none());
    }
}
