//! Process-wide ambiance: scroll-driven color temperature and the shared
//! idle clock.
//!
//! The host exposes a mutable property layer (CSS custom properties in the
//! original storefront); [`AmbianceState`] writes interpolated day-to-night
//! channel values through an injected [`PropertySink`] instead of touching
//! host globals directly. Pre-init values are recorded and restored on
//! teardown. The idle detector is a process-wide singleton: initializing a
//! new state supersedes the previous one's timers rather than stacking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::animation::idle::{IdleDetector, IdlePoll};
use crate::scroll::mapper::lerp_channels;

/// Property keys written by the ambiance layer.
pub const AMBIANCE_KEYS: [&str; 3] = ["--ink-ambient-r", "--ink-ambient-g", "--ink-ambient-b"];

/// Host-provided mutable property layer.
pub trait PropertySink {
    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;
    /// Set `key` to `value`.
    fn set(&mut self, key: &str, value: String);
    /// Remove `key` entirely.
    fn clear(&mut self, key: &str);
}

/// In-memory sink; the default host adapter and the test double.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    values: HashMap<String, String>,
}

impl PropertySink for MemorySink {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Day and night endpoint colors, linear RGB channels in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbiancePalette {
    /// Channels at page top.
    pub day: [f64; 3],
    /// Channels at page bottom.
    pub night: [f64; 3],
}

impl Default for AmbiancePalette {
    fn default() -> Self {
        Self {
            day: [244.0, 240.0, 232.0],
            night: [24.0, 16.0, 38.0],
        }
    }
}

static GENERATION: AtomicU64 = AtomicU64::new(0);

/// The process-wide ambiance instance.
pub struct AmbianceState<S: PropertySink> {
    sink: S,
    palette: AmbiancePalette,
    saved: [(&'static str, Option<String>); 3],
    idle: IdleDetector,
    generation: u64,
    torn_down: bool,
}

impl<S: PropertySink> AmbianceState<S> {
    /// Take over the ambiance layer.
    ///
    /// Records the sink's pre-init values and supersedes any previously
    /// initialized instance's idle timers.
    #[instrument(level = "debug", skip_all)]
    pub fn init(
        sink: S,
        palette: AmbiancePalette,
        idle_timeout: Duration,
        spawn_interval: Duration,
        now: Instant,
    ) -> Self {
        let saved = AMBIANCE_KEYS.map(|key| (key, sink.get(key)));
        let generation = GENERATION.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, "ambiance initialized");
        Self {
            sink,
            palette,
            saved,
            idle: IdleDetector::new(idle_timeout, spawn_interval, now),
            generation,
            torn_down: false,
        }
    }

    /// True while this instance is the live one.
    pub fn is_current(&self) -> bool {
        !self.torn_down && GENERATION.load(Ordering::SeqCst) == self.generation
    }

    /// Write the color temperature for the whole-page scroll fraction.
    pub fn set_scroll_fraction(&mut self, fraction: f64) {
        if !self.is_current() {
            return;
        }
        let t = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let channels = lerp_channels(self.palette.day, self.palette.night, t);
        for (key, value) in AMBIANCE_KEYS.iter().zip(channels) {
            self.sink.set(key, format!("{}", value.round() as i64));
        }
    }

    /// Forward a qualifying host input event to the shared idle clock.
    pub fn note_activity(&mut self, now: Instant) {
        if self.is_current() {
            self.idle.note_activity(now);
        }
    }

    /// Poll the shared idle clock. A superseded instance always reports
    /// not-idle and never signals a spawn, so stale timers cannot fire.
    pub fn poll_idle(&mut self, now: Instant) -> IdlePoll {
        if !self.is_current() {
            return IdlePoll {
                idle: false,
                spawn_due: false,
            };
        }
        self.idle.poll(now)
    }

    /// Restore every pre-init property value and retire this instance.
    ///
    /// Idempotent; also runs on drop.
    #[instrument(level = "debug", skip_all)]
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        for (key, value) in &self.saved {
            match value {
                Some(v) => self.sink.set(key, v.clone()),
                None => self.sink.clear(key),
            }
        }
        debug!(generation = self.generation, "ambiance torn down");
    }

    /// Give back the sink, restoring it first.
    pub fn into_sink(mut self) -> S
    where
        S: Default,
    {
        self.teardown();
        std::mem::take(&mut self.sink)
    }
}

impl<S: PropertySink> Drop for AmbianceState<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../tests/unit/ambiance.rs"]
mod tests;
