//! # Toast State
//!
//! Single-slot transient status message with an auto-dismiss timeline.
//!
//! ## Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Toast Timeline (defaults)                            │
//! │                                                                         │
//! │  show()                                                                 │
//! │    │                                                                    │
//! │    ▼   300 ms            2000 ms                 300 ms                 │
//! │  FadingIn ──────► Visible ─────────────► FadingOut ──────► Hidden      │
//! │                                                                         │
//! │  show() again at any point:                                             │
//! │    • pending timeline task is aborted                                   │
//! │    • generation is bumped (stale wake-ups are ignored)                  │
//! │    • a fresh timeline starts from FadingIn                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The timeline runs as a tokio task on the runtime captured at
//! construction. Observers follow it through a `watch` channel.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use farmlink_core::{ToastCategory, ToastPhase};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Timings
// =============================================================================

/// Durations of the three timed phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub fade_in: Duration,
    pub hold: Duration,
    pub fade_out: Duration,
}

impl ToastTimings {
    /// Time from `show` until the toast is hidden again.
    pub fn total(&self) -> Duration {
        self.fade_in + self.hold + self.fade_out
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        ToastTimings {
            fade_in: Duration::from_millis(300),
            hold: Duration::from_millis(2000),
            fade_out: Duration::from_millis(300),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// What the toast banner shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToastSnapshot {
    pub message: String,
    pub category: ToastCategory,
    pub phase: ToastPhase,

    /// `true` from `show` until the fade-out completes.
    pub visible: bool,

    /// When the current message was shown.
    #[ts(as = "Option<String>")]
    pub shown_at: Option<DateTime<Utc>>,

    /// Bumped by every `show`; timeline steps for older values are dropped.
    #[serde(skip)]
    #[ts(skip)]
    generation: u64,
}

impl ToastSnapshot {
    /// Banner colour for the current category.
    pub fn accent_color(&self) -> &'static str {
        self.category.accent_color()
    }
}

// =============================================================================
// Toast State
// =============================================================================

/// Session-scoped toast notifier.
///
/// Cloning shares the same slot.
#[derive(Debug, Clone)]
pub struct ToastState {
    inner: Arc<ToastInner>,
}

#[derive(Debug)]
struct ToastInner {
    sender: Arc<watch::Sender<ToastSnapshot>>,
    timeline: Mutex<Option<JoinHandle<()>>>,
    timings: ToastTimings,
    runtime: Handle,
}

impl ToastState {
    /// Creates a hidden toast whose timelines run on `runtime`.
    pub fn new(timings: ToastTimings, runtime: Handle) -> Self {
        let (sender, _) = watch::channel(ToastSnapshot::default());
        ToastState {
            inner: Arc::new(ToastInner {
                sender: Arc::new(sender),
                timeline: Mutex::new(None),
                timings,
                runtime,
            }),
        }
    }

    /// Shows `message`, replacing whatever is on screen, and restarts the
    /// timeline.
    ///
    /// Returns the snapshot as of the call (phase `FadingIn`).
    pub fn show(&self, message: impl Into<String>, category: ToastCategory) -> ToastSnapshot {
        let message = message.into();
        let mut timeline = self.lock_timeline();

        if let Some(previous) = timeline.take() {
            previous.abort();
        }

        let mut generation = 0;
        self.inner.sender.send_modify(|toast| {
            toast.generation += 1;
            generation = toast.generation;
            toast.message = message;
            toast.category = category;
            toast.phase = ToastPhase::FadingIn;
            toast.visible = true;
            toast.shown_at = Some(Utc::now());
        });

        debug!(generation, ?category, "Toast shown");

        *timeline = Some(self.inner.runtime.spawn(run_timeline(
            Arc::clone(&self.inner.sender),
            generation,
            self.inner.timings,
        )));

        self.snapshot()
    }

    /// Current state of the banner.
    pub fn snapshot(&self) -> ToastSnapshot {
        self.inner.sender.borrow().clone()
    }

    /// Receiver that wakes on every phase change.
    pub fn subscribe(&self) -> watch::Receiver<ToastSnapshot> {
        self.inner.sender.subscribe()
    }

    pub fn timings(&self) -> ToastTimings {
        self.inner.timings
    }

    /// Aborts any running timeline and hides the banner. Session teardown only.
    pub(crate) fn dismiss_for_shutdown(&self) {
        let mut timeline = self.lock_timeline();
        if let Some(previous) = timeline.take() {
            previous.abort();
        }

        self.inner.sender.send_if_modified(|toast| {
            toast.generation += 1;
            let was_visible = toast.visible;
            toast.phase = ToastPhase::Hidden;
            toast.visible = false;
            was_visible
        });
    }

    fn lock_timeline(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.inner
            .timeline
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Walks one toast through its timed phases.
async fn run_timeline(
    sender: Arc<watch::Sender<ToastSnapshot>>,
    generation: u64,
    timings: ToastTimings,
) {
    let steps = [
        (timings.fade_in, ToastPhase::Visible),
        (timings.hold, ToastPhase::FadingOut),
        (timings.fade_out, ToastPhase::Hidden),
    ];

    for (wait, next) in steps {
        tokio::time::sleep(wait).await;
        if !advance(&sender, generation, next) {
            return;
        }
    }
}

/// Moves the toast to `phase` if it still belongs to `generation`.
fn advance(sender: &watch::Sender<ToastSnapshot>, generation: u64, phase: ToastPhase) -> bool {
    let applied = sender.send_if_modified(|toast| {
        if toast.generation != generation {
            return false;
        }
        toast.phase = phase;
        toast.visible = phase.is_visible();
        true
    });

    if applied {
        debug!(generation, ?phase, "Toast phase changed");
    } else {
        debug!(generation, "Stale toast timeline stopped");
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep_until, Instant};

    fn toast() -> ToastState {
        ToastState::new(ToastTimings::default(), Handle::current())
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_hidden() {
        let snapshot = toast().snapshot();
        assert_eq!(snapshot.phase, ToastPhase::Hidden);
        assert!(!snapshot.visible);
        assert_eq!(snapshot.category, ToastCategory::Info);
        assert!(snapshot.shown_at.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_is_visible_immediately_and_hides_after_full_timeline() {
        let toast = toast();
        let start = Instant::now();

        let shown = toast.show("Added to cart!", ToastCategory::Success);
        assert!(shown.visible);
        assert_eq!(shown.phase, ToastPhase::FadingIn);
        assert_eq!(shown.message, "Added to cart!");
        assert_eq!(shown.accent_color(), "#16A34A");
        assert!(shown.shown_at.is_some());

        let mut rx = toast.subscribe();
        rx.wait_for(|t| t.phase == ToastPhase::Hidden).await.unwrap();

        assert!(start.elapsed() >= ms(2600));
        assert!(!toast.snapshot().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_phases_follow_timeline() {
        let toast = toast();
        let start = Instant::now();
        toast.show("Saved", ToastCategory::Info);

        sleep_until(start + ms(100)).await;
        assert_eq!(toast.snapshot().phase, ToastPhase::FadingIn);

        sleep_until(start + ms(1000)).await;
        assert_eq!(toast.snapshot().phase, ToastPhase::Visible);

        sleep_until(start + ms(2450)).await;
        assert_eq!(toast.snapshot().phase, ToastPhase::FadingOut);
        assert!(toast.snapshot().visible);

        sleep_until(start + ms(2700)).await;
        assert_eq!(toast.snapshot().phase, ToastPhase::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_show_restarts_the_timeline() {
        let toast = toast();
        let start = Instant::now();

        toast.show("Added tomatoes", ToastCategory::Success);
        sleep_until(start + ms(2000)).await;
        toast.show("Payment failed", ToastCategory::Error);

        // The first toast would have been dismissed at 2600 ms.
        sleep_until(start + ms(2650)).await;
        let snapshot = toast.snapshot();
        assert!(snapshot.visible);
        assert_eq!(snapshot.phase, ToastPhase::Visible);
        assert_eq!(snapshot.message, "Payment failed");
        assert_eq!(snapshot.category, ToastCategory::Error);

        // The second one gets its own full 2600 ms.
        sleep_until(start + ms(4550)).await;
        assert!(toast.snapshot().visible);

        sleep_until(start + ms(4700)).await;
        assert!(!toast.snapshot().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_each_phase() {
        let toast = toast();
        let mut rx = toast.subscribe();
        toast.show("Order placed", ToastCategory::Success);

        let mut phases = Vec::new();
        while rx.changed().await.is_ok() {
            let phase = rx.borrow_and_update().phase;
            phases.push(phase);
            if phase == ToastPhase::Hidden {
                break;
            }
        }

        assert_eq!(
            phases,
            vec![
                ToastPhase::FadingIn,
                ToastPhase::Visible,
                ToastPhase::FadingOut,
                ToastPhase::Hidden,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_for_shutdown_stops_timeline() {
        let toast = toast();
        let start = Instant::now();
        toast.show("Bye", ToastCategory::Info);

        toast.dismiss_for_shutdown();
        assert!(!toast.snapshot().visible);

        sleep_until(start + ms(3000)).await;
        let snapshot = toast.snapshot();
        assert_eq!(snapshot.phase, ToastPhase::Hidden);
        assert_eq!(snapshot.message, "Bye");
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_timings() {
        let timings = ToastTimings {
            fade_in: ms(50),
            hold: ms(100),
            fade_out: ms(50),
        };
        let toast = ToastState::new(timings, Handle::current());
        let start = Instant::now();

        toast.show("Quick", ToastCategory::Info);
        let mut rx = toast.subscribe();
        rx.wait_for(|t| !t.visible).await.unwrap();

        assert_eq!(toast.timings().total(), ms(200));
        assert!(start.elapsed() >= ms(200));
        assert!(start.elapsed() < ms(2600));
    }
}
