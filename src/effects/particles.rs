//! Ambient drifting particle field.
//!
//! A steady-state pool of small motes drifting upward with slight lateral
//! jitter. Retired particles are respawned near the bottom edge every tick,
//! so the field runs forever until externally cancelled. Opacity follows a
//! fade-in/hold/fade-out profile over each particle's life.

use tracing::instrument;

use crate::{
    effects::parse_config,
    foundation::core::{Circle, Point, Rgba, Shape, Vec2},
    foundation::error::BloomResult,
    foundation::field::Rng64,
    scroll::mapper::fade_profile,
    shape::droplet::{Particle, ParticlePool},
    shape::frame::{GeometryFrame, Paint, PathStyle},
};

const MOTE_COLOR: Rgba = Rgba::new(150, 110, 200, 0.45);

/// Ambient field configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmbientConfig {
    /// Random seed.
    pub seed: u64,
    /// Target live particle count; also the pool cap.
    pub count: usize,
    /// Upward drift speed in pixels per second.
    pub drift: f64,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            count: 24,
            drift: 18.0,
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Continuously respawning mote field.
#[derive(Clone, Debug)]
pub struct AmbientField {
    config: AmbientConfig,
    rng: Rng64,
    pool: ParticlePool,
}

impl AmbientField {
    /// Build an empty field; motes fill in over the first few ticks.
    pub fn new(config: AmbientConfig) -> Self {
        let rng = Rng64::new(config.seed);
        let pool = ParticlePool::new(config.count.max(1));
        Self { config, rng, pool }
    }

    /// Build from host JSON params.
    pub fn from_params(params: &serde_json::Value) -> BloomResult<Self> {
        Ok(Self::new(parse_config(params)?))
    }

    /// Live mote count.
    pub fn live(&self) -> usize {
        self.pool.len()
    }

    /// Advance the field by `dt` seconds and compute this tick's frame.
    #[instrument(level = "trace", skip(self))]
    pub fn compute_frame(&mut self, dt: f64) -> GeometryFrame {
        // Negative gravity drifts motes upward.
        self.pool.step(dt, -2.0);

        while self.pool.len() < self.config.count {
            let mote = self.spawn_mote();
            self.pool.spawn(mote);
        }

        let mut frame = GeometryFrame::new();
        for p in self.pool.iter() {
            let opacity = fade_profile(p.life_progress());
            if opacity <= 0.0 {
                continue;
            }
            let dot = Circle::new(p.position, p.size).to_path(0.1);
            frame.push(
                dot,
                PathStyle::fill(Paint::Solid(MOTE_COLOR.scaled_alpha(opacity))),
            );
        }
        frame
    }

    fn spawn_mote(&mut self) -> Particle {
        let x = self.rng.next_range(0.0, self.config.width);
        let y = self.rng.next_range(0.6, 1.05) * self.config.height;
        Particle {
            position: Point::new(x, y),
            velocity: Vec2::new(
                self.rng.next_range(-6.0, 6.0),
                -self.rng.next_range(0.6, 1.4) * self.config.drift,
            ),
            size: self.rng.next_range(1.0, 3.2),
            age: 0.0,
            max_age: self.rng.next_range(6.0, 14.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
