//! Pointer-coupled tendril ring around a host element.
//!
//! While the pointer hovers the host rect, a ring of tendrils radiates from
//! its edge; the ones facing the pointer reach further and thicken. A click
//! bursts a ring of droplets into the particle pool.

use std::f64::consts::TAU;

use tracing::instrument;

use crate::{
    effects::parse_config,
    foundation::core::{Point, Rect, Rgba, Vec2},
    foundation::error::BloomResult,
    foundation::field::{NoiseField, Rng64},
    shape::droplet::{droplet_path, Particle, ParticlePool},
    shape::frame::{GeometryFrame, Paint, PathStyle},
    shape::tendril::{proximity, TendrilParams},
};

const TENDRIL_COLOR: Rgba = Rgba::new(20, 12, 30, 1.0);
const DROPLET_COLOR: Rgba = Rgba::new(30, 16, 44, 0.9);

/// Hover ring configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HoverConfig {
    /// Noise seed.
    pub seed: f64,
    /// Tendrils around the host rect.
    pub tendril_count: usize,
    /// Reach in pixels with the pointer fully opposed.
    pub base_reach: f64,
    /// Extra reach granted at full proximity.
    pub proximity_reach: f64,
    /// Root half-thickness with the pointer fully opposed.
    pub base_thickness: f64,
    /// Extra thickness granted at full proximity.
    pub proximity_thickness: f64,
    /// Droplets spawned per click.
    pub click_droplets: usize,
    /// Particle pool capacity.
    pub pool_cap: usize,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            seed: 5.0,
            tendril_count: 12,
            base_reach: 20.0,
            proximity_reach: 28.0,
            base_thickness: 3.5,
            proximity_thickness: 4.0,
            click_droplets: 12,
            pool_cap: 64,
        }
    }
}

/// Hover effect instance bound to one host element.
#[derive(Clone, Debug)]
pub struct HoverEffect {
    config: HoverConfig,
    field: NoiseField,
    rng: Rng64,
    pool: ParticlePool,
    cursor: Option<Point>,
}

impl HoverEffect {
    /// Build a hover ring.
    pub fn new(config: HoverConfig) -> Self {
        let field = NoiseField::new(config.seed);
        let rng = Rng64::new(config.seed.to_bits());
        let pool = ParticlePool::new(config.pool_cap);
        Self {
            config,
            field,
            rng,
            pool,
            cursor: None,
        }
    }

    /// Build from host JSON params.
    pub fn from_params(params: &serde_json::Value) -> BloomResult<Self> {
        Ok(Self::new(parse_config(params)?))
    }

    /// Record the pointer position in element-local pixels, or `None` when
    /// the pointer leaves the host.
    pub fn note_pointer(&mut self, position: Option<Point>) {
        self.cursor = position;
    }

    /// Burst a ring of droplets from the click position.
    pub fn note_click(&mut self, position: Point) {
        let n = self.config.click_droplets;
        for i in 0..n {
            let angle = (i as f64 / n.max(1) as f64) * TAU + self.rng.next_range(-0.2, 0.2);
            let speed = self.rng.next_range(60.0, 160.0);
            self.pool.spawn(Particle {
                position,
                velocity: Vec2::new(angle.cos() * speed, angle.sin() * speed - 40.0),
                size: self.rng.next_range(2.5, 6.0),
                age: 0.0,
                max_age: self.rng.next_range(0.5, 1.1),
            });
        }
    }

    /// Live droplet count, bounded by the pool cap.
    pub fn live_droplets(&self) -> usize {
        self.pool.len()
    }

    /// Advance droplets and compute the ring for this tick.
    ///
    /// Proximity is re-derived from the stored pointer every call, never
    /// cached across frames.
    #[instrument(level = "trace", skip(self))]
    pub fn compute_frame(&mut self, host: Rect, time: f64, dt: f64) -> GeometryFrame {
        self.pool.step(dt, 240.0);

        let mut frame = GeometryFrame::new();
        let center = Point::new((host.x0 + host.x1) / 2.0, (host.y0 + host.y1) / 2.0);
        let half_w = host.width().abs() / 2.0;
        let half_h = host.height().abs() / 2.0;

        let cursor_angle = self
            .cursor
            .map(|c| (c.y - center.y).atan2(c.x - center.x));

        for i in 0..self.config.tendril_count {
            let angle = (i as f64 / self.config.tendril_count.max(1) as f64) * TAU;
            let p = cursor_angle.map_or(0.0, |ca| proximity(angle, ca));

            let jitter = self.field.sample(i as f64);
            // Elliptical edge distance approximates the rounded host rect.
            let edge = ((half_w * angle.cos()).powi(2) + (half_h * angle.sin()).powi(2)).sqrt();

            let mut t = TendrilParams::new(
                center,
                angle,
                edge,
                self.config.base_reach + p * self.config.proximity_reach + jitter * 6.0,
            );
            t.thickness = self.config.base_thickness + p * self.config.proximity_thickness;
            t.phase = jitter * TAU;
            frame.push(t.path(time), PathStyle::fill(Paint::Solid(TENDRIL_COLOR)));
        }

        for particle in self.pool.iter() {
            let shrink = 1.0 - particle.life_progress();
            let path = droplet_path(
                particle.position,
                particle.size * shrink,
                particle.size * 2.0 * shrink,
            );
            frame.push(
                path,
                PathStyle::fill(Paint::Solid(
                    DROPLET_COLOR.scaled_alpha(shrink),
                )),
            );
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/hover.rs"]
mod tests;
