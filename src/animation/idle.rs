use std::time::{Duration, Instant};

/// Result of polling the idle detector on a frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdlePoll {
    /// True while no qualifying input has arrived for the timeout window.
    pub idle: bool,
    /// True at most once per spawn interval while idle.
    pub spawn_due: bool,
}

/// Debounced idle detection with a periodic spawn cadence.
///
/// Any qualifying input event resets the countdown via [`note_activity`];
/// idle state is exited synchronously on that call. While idle, `poll`
/// reports `spawn_due` edge-triggered once per elapsed spawn interval, so a
/// slow host that polls late catches up one spawn per poll instead of
/// bursting.
///
/// [`note_activity`]: IdleDetector::note_activity
#[derive(Clone, Debug)]
pub struct IdleDetector {
    idle_timeout: Duration,
    spawn_interval: Duration,
    last_activity: Instant,
    idle_since: Option<Instant>,
    spawned: u32,
}

impl IdleDetector {
    /// Create a detector; the countdown starts at `now`.
    pub fn new(idle_timeout: Duration, spawn_interval: Duration, now: Instant) -> Self {
        Self {
            idle_timeout,
            spawn_interval: spawn_interval.max(Duration::from_millis(1)),
            last_activity: now,
            idle_since: None,
            spawned: 0,
        }
    }

    /// Record a qualifying input event (pointer, key, scroll, touch).
    pub fn note_activity(&mut self, now: Instant) {
        self.last_activity = now;
        self.idle_since = None;
        self.spawned = 0;
    }

    /// True while idle as of `now` (does not advance spawn accounting).
    pub fn is_idle(&self, now: Instant) -> bool {
        self.idle_since.is_some()
            || now.saturating_duration_since(self.last_activity) >= self.idle_timeout
    }

    /// Advance to `now`, entering idle when the countdown lapses.
    pub fn poll(&mut self, now: Instant) -> IdlePoll {
        if self.idle_since.is_none()
            && now.saturating_duration_since(self.last_activity) >= self.idle_timeout
        {
            self.idle_since = Some(self.last_activity + self.idle_timeout);
        }

        let Some(idle_start) = self.idle_since else {
            return IdlePoll {
                idle: false,
                spawn_due: false,
            };
        };

        let idle_for = now.saturating_duration_since(idle_start);
        let intervals = (idle_for.as_nanos() / self.spawn_interval.as_nanos()) as u32;
        let spawn_due = intervals > self.spawned;
        if spawn_due {
            self.spawned += 1;
        }
        IdlePoll {
            idle: true,
            spawn_due,
        }
    }
}
