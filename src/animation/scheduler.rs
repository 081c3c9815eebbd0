//! Host-pumped frame scheduling with mandatory, idempotent cancellation.
//!
//! The engine never owns a display-refresh loop; the host does. A
//! [`FrameScheduler`] wraps the per-frame callback and the host pumps
//! [`FrameScheduler::tick`] once per refresh. Cancellation invalidates the
//! registration handle, so a tick already queued by the host becomes a no-op
//! rather than a stray callback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// What the frame callback wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFlow {
    /// Keep scheduling frames.
    Continue,
    /// Natural completion; the scheduler cancels itself.
    Finished,
}

/// Cancellation handle for a running scheduler.
///
/// Cloneable so teardown paths can hold their own handle. `cancel` is
/// idempotent and safe after natural completion.
#[derive(Clone, Debug)]
pub struct TickHandle {
    alive: Arc<AtomicBool>,
}

impl TickHandle {
    /// Stop all future ticks. Synchronous: no callback runs after this.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// True once cancelled or naturally finished.
    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Acquire)
    }
}

/// Drives a callback once per host refresh until stopped.
///
/// Re-entrancy is structurally impossible: `tick` takes `&mut self`, so a new
/// tick cannot start before the previous one returns. Dropping the scheduler
/// cancels it, which keeps the "every `start` is paired with a `cancel` on
/// all exit paths" contract even when an effect unwinds early.
pub struct FrameScheduler {
    alive: Arc<AtomicBool>,
    started_at: Option<Instant>,
    callback: Box<dyn FnMut(f64) -> TickFlow + Send>,
}

impl FrameScheduler {
    /// Begin scheduling `callback`, returning the scheduler and its handle.
    ///
    /// The callback receives elapsed seconds since the first tick.
    pub fn start(callback: impl FnMut(f64) -> TickFlow + Send + 'static) -> (Self, TickHandle) {
        let alive = Arc::new(AtomicBool::new(true));
        let handle = TickHandle {
            alive: Arc::clone(&alive),
        };
        (
            Self {
                alive,
                started_at: None,
                callback: Box::new(callback),
            },
            handle,
        )
    }

    /// Run one frame at `now`. Returns false once cancelled or finished,
    /// letting the host drop its registration.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.alive.load(Ordering::Acquire) {
            return false;
        }
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        match (self.callback)(elapsed) {
            TickFlow::Continue => true,
            TickFlow::Finished => {
                self.alive.store(false, Ordering::Release);
                false
            }
        }
    }

    /// Stop scheduling. Idempotent; equivalent to cancelling via the handle.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("alive", &self.alive.load(Ordering::Relaxed))
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
