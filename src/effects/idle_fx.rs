//! Idle ambience: ink splatters and slow ripple rings.
//!
//! An [`IdleDetector`] debounces host activity; once the page has been quiet
//! past the timeout, each spawn interval drops one splatter at a seeded
//! random position and starts a ripple ring there. Both histories are
//! bounded, most recent entries kept.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::instrument;

use crate::{
    animation::idle::IdleDetector,
    effects::parse_config,
    foundation::core::{Affine, BezPath, Circle, Point, Rgba, Shape},
    foundation::error::BloomResult,
    foundation::field::Rng64,
    shape::droplet::splatter_path,
    shape::frame::{GeometryFrame, Paint, PathStyle},
};

const SPLATTER_COLOR: Rgba = Rgba::new(14, 8, 22, 0.85);
const RIPPLE_COLOR: Rgba = Rgba::new(90, 50, 140, 0.5);

/// Idle ambience configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdleFxConfig {
    /// Random seed for splatter placement and shape.
    pub seed: u64,
    /// Quiet time before the idle state activates, in milliseconds.
    pub idle_timeout_ms: u64,
    /// Interval between spawns while idle, in milliseconds.
    pub spawn_interval_ms: u64,
    /// Splatters kept; the oldest fades out of the history first.
    pub splatter_history: usize,
    /// Ripple rings kept.
    pub ripple_history: usize,
    /// Seconds a ripple takes to expand and fade.
    pub ripple_secs: f64,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Default for IdleFxConfig {
    fn default() -> Self {
        Self {
            seed: 0x1db7,
            idle_timeout_ms: 5000,
            spawn_interval_ms: 3000,
            splatter_history: 5,
            ripple_history: 3,
            ripple_secs: 8.0,
            width: 1920.0,
            height: 1080.0,
        }
    }
}

#[derive(Clone, Debug)]
struct Splatter {
    path: BezPath,
    spawned: Instant,
}

#[derive(Clone, Debug)]
struct Ripple {
    center: Point,
    spawned: Instant,
}

/// Idle splatter/ripple effect instance.
#[derive(Clone, Debug)]
pub struct IdleFxEffect {
    config: IdleFxConfig,
    detector: IdleDetector,
    rng: Rng64,
    splatters: VecDeque<Splatter>,
    ripples: VecDeque<Ripple>,
}

impl IdleFxEffect {
    /// Build an idle effect; `now` anchors the activity clock.
    pub fn new(config: IdleFxConfig, now: Instant) -> Self {
        let detector = IdleDetector::new(
            Duration::from_millis(config.idle_timeout_ms),
            Duration::from_millis(config.spawn_interval_ms),
            now,
        );
        let rng = Rng64::new(config.seed);
        Self {
            config,
            detector,
            rng,
            splatters: VecDeque::new(),
            ripples: VecDeque::new(),
        }
    }

    /// Build from host JSON params.
    pub fn from_params(params: &serde_json::Value, now: Instant) -> BloomResult<Self> {
        Ok(Self::new(parse_config(params)?, now))
    }

    /// Forward a qualifying host input event; exits idle synchronously.
    pub fn note_activity(&mut self, now: Instant) {
        self.detector.note_activity(now);
    }

    /// True when the quiet period has elapsed.
    pub fn is_idle(&self, now: Instant) -> bool {
        self.detector.is_idle(now)
    }

    /// Live splatter count.
    pub fn splatter_count(&self) -> usize {
        self.splatters.len()
    }

    /// Poll the detector, spawn if due, and compute this tick's frame.
    #[instrument(level = "trace", skip(self))]
    pub fn compute_frame(&mut self, now: Instant) -> GeometryFrame {
        let poll = self.detector.poll(now);
        if poll.spawn_due {
            self.spawn(now);
        }

        let mut frame = GeometryFrame::new();

        for ripple in &self.ripples {
            let age = now.duration_since(ripple.spawned).as_secs_f64();
            let t = (age / self.config.ripple_secs).clamp(0.0, 1.0);
            if t >= 1.0 {
                continue;
            }
            let radius = 10.0 + t * self.config.width.min(self.config.height) * 0.3;
            let ring = Circle::new(ripple.center, radius).to_path(0.1);
            frame.push(
                ring,
                PathStyle::stroke(Paint::Solid(RIPPLE_COLOR.scaled_alpha(1.0 - t)), 1.5),
            );
        }

        for splatter in &self.splatters {
            let age = now.duration_since(splatter.spawned).as_secs_f64();
            // Lands at full strength, then a long slow fade.
            let opacity = (1.0 - age / 30.0).clamp(0.0, 1.0);
            if opacity <= 0.0 {
                continue;
            }
            frame.push(
                splatter.path.clone(),
                PathStyle::fill(Paint::Solid(SPLATTER_COLOR.scaled_alpha(opacity))),
            );
        }
        frame
    }

    fn spawn(&mut self, now: Instant) {
        let x = self.rng.next_range(0.1, 0.9) * self.config.width;
        let y = self.rng.next_range(0.1, 0.9) * self.config.height;
        let size = self.rng.next_range(14.0, 42.0);

        let mut path = splatter_path(&mut self.rng, size);
        path.apply_affine(Affine::translate((x, y)));

        self.splatters.push_back(Splatter { path, spawned: now });
        while self.splatters.len() > self.config.splatter_history {
            self.splatters.pop_front();
        }

        self.ripples.push_back(Ripple {
            center: Point::new(x, y),
            spawned: now,
        });
        while self.ripples.len() > self.config.ripple_history {
            self.ripples.pop_front();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/idle_fx.rs"]
mod tests;
