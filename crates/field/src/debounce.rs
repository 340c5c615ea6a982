//! Typing-pause debounce timer
//!
//! A cancellable single-shot timer: every new input event cancels the
//! pending timer and re-arms it from the latest event. The timer sleeps
//! `delay - EARLY_FIRE_TOLERANCE` and on waking acts only if the input has
//! stayed quiet for that long (debounce, not throttle).

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{trace, warn};

/// Default quiet period before the timer fires.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1200);

/// How much earlier than the full delay the timer is allowed to fire.
pub const EARLY_FIRE_TOLERANCE: Duration = Duration::from_millis(500);

// ============================================================================
// DEBOUNCER
// ============================================================================

/// Cancel-and-reschedule single-shot timer.
///
/// [`poke`](Self::poke) records an input event and arms the timer; the
/// callback runs once the input has been quiet for the configured delay
/// (less the early-fire tolerance). A poke while a timer is pending cancels
/// it, so a burst of events produces exactly one firing, timed from the
/// last event.
///
/// Requires a tokio runtime context when poked; outside a runtime the
/// timer is skipped with a warning.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_field::debounce::Debouncer;
///
/// let mut debounce = Debouncer::new();
/// debounce.poke(|| println!("stopped typing"));
/// ```
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    last_change: Arc<Mutex<Instant>>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the default delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    /// Creates a debouncer with a custom delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            last_change: Arc::new(Mutex::new(Instant::now())),
            pending: None,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sets the quiet period for subsequent pokes.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// True while a timer is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Records an input event and (re)arms the timer.
    ///
    /// `on_fire` runs once the input has stayed quiet long enough. A later
    /// poke cancels it.
    pub fn poke<F>(&mut self, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let Ok(handle) = Handle::try_current() else {
            warn!("no tokio runtime, debounce timer skipped");
            return;
        };

        *self.last_change.lock() = Instant::now();

        let last_change = Arc::clone(&self.last_change);
        let delay = self.delay;
        let quiet = delay.saturating_sub(EARLY_FIRE_TOLERANCE);
        trace!(delay_ms = delay.as_millis() as u64, "debounce armed");

        self.pending = Some(handle.spawn(async move {
            sleep(quiet).await;
            // A cancelled timer never reaches this point; the elapsed check
            // guards the window between wake-up and cancellation.
            let elapsed = last_change.lock().elapsed();
            if elapsed + EARLY_FIRE_TOLERANCE >= delay {
                trace!("debounce fired");
                on_fire();
            } else {
                trace!("debounce wake-up superseded by newer input");
            }
        }));
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_quiet_period() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = Debouncer::new();

        let counter = Arc::clone(&fired);
        debounce.poke(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Quiet period is delay - tolerance = 700 ms.
        sleep(Duration::from_millis(650)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // No second firing.
        sleep(Duration::from_millis(2000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_from_last_event() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = Debouncer::new();

        for _ in 0..3 {
            let counter = Arc::clone(&fired);
            debounce.poke(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            sleep(Duration::from_millis(100)).await;
        }

        // 600 ms after the last poke: nothing yet (quiet period is 700 ms).
        sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_firing() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = Debouncer::new();

        let counter = Arc::clone(&fired);
        debounce.poke(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debounce.cancel();

        sleep(Duration::from_millis(3000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = Debouncer::with_delay(Duration::from_millis(600));
        assert_eq!(debounce.delay(), Duration::from_millis(600));

        let counter = Arc::clone(&fired);
        debounce.poke(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Quiet period is 600 - 500 = 100 ms.
        sleep(Duration::from_millis(50)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_pending() {
        let mut debounce = Debouncer::new();
        assert!(!debounce.is_pending());

        debounce.poke(|| {});
        assert!(debounce.is_pending());

        sleep(Duration::from_millis(1000)).await;
        assert!(!debounce.is_pending());
    }
}
