//! Teardrop droplets, splatter polygons, and the bounded particle pool.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::field::Rng64;

/// Teardrop path: two quadratic curves from the trailing tip, bulging out
/// through the widest point and tapering back.
///
/// `width` is the half-width of the bulge and `trail` the distance from the
/// bulge center to the trailing tip. Both are expected to shrink over a
/// droplet's lifetime. Non-positive dimensions yield an empty path.
pub fn droplet_path(center: Point, width: f64, trail: f64) -> BezPath {
    if width <= 0.0 || trail <= 0.0 {
        return BezPath::new();
    }
    let tip = Point::new(center.x, center.y - trail);
    let bottom = Point::new(center.x, center.y + width * 0.8);

    let mut path = BezPath::new();
    path.move_to(tip);
    path.quad_to(Point::new(center.x + width, center.y), bottom);
    path.quad_to(Point::new(center.x - width, center.y), tip);
    path.close_path();
    path
}

/// Irregular closed splat polygon for idle ink splatters.
///
/// Splatters are transient one-shot effects, so placement and shape may
/// reshuffle per trigger; they draw from [`Rng64`], not the seeded field.
pub fn splatter_path(rng: &mut Rng64, size: f64) -> BezPath {
    if size <= 0.0 {
        return BezPath::new();
    }
    let points = 8 + (rng.next_f64_01() * 6.0).floor() as usize;
    let mut path = BezPath::new();

    let mut first = Point::ORIGIN;
    for i in 0..=points {
        let angle = (i as f64 / points as f64) * TAU;
        if i == points {
            // Close back onto the starting sample.
            let mid_angle = ((i as f64 - 0.5) / points as f64) * TAU;
            let cr = size * rng.next_range(0.3, 1.0);
            path.quad_to(
                Point::new(mid_angle.cos() * cr, mid_angle.sin() * cr),
                first,
            );
            break;
        }
        let r = size * rng.next_range(0.5, 1.0);
        let p = Point::new(angle.cos() * r, angle.sin() * r);
        if i == 0 {
            first = p;
            path.move_to(p);
        } else {
            let mid_angle = ((i as f64 - 0.5) / points as f64) * TAU;
            let cr = size * rng.next_range(0.3, 1.0);
            path.quad_to(Point::new(mid_angle.cos() * cr, mid_angle.sin() * cr), p);
        }
    }
    path.close_path();
    path
}

/// One pooled particle advanced by Euler integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Point,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Render size (radius or droplet width).
    pub size: f64,
    /// Seconds lived so far.
    pub age: f64,
    /// Lifetime; the particle is retired when `age >= max_age`.
    pub max_age: f64,
}

impl Particle {
    /// Normalized life progress in `[0, 1]`.
    pub fn life_progress(&self) -> f64 {
        if self.max_age <= 0.0 {
            1.0
        } else {
            (self.age / self.max_age).clamp(0.0, 1.0)
        }
    }
}

/// Fixed-capacity particle collection; spawning past the cap evicts the
/// oldest entry so long idle sessions never grow memory or per-frame cost.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: VecDeque<Particle>,
    cap: usize,
}

impl ParticlePool {
    /// Pool with the given capacity (clamped to at least 1).
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            particles: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Configured capacity.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Live particle count.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when no particles are alive.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Add a particle, evicting the oldest when full.
    pub fn spawn(&mut self, particle: Particle) {
        if self.particles.len() == self.cap {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }

    /// Advance all particles by `dt` seconds with optional gravity, retiring
    /// expired ones.
    pub fn step(&mut self, dt: f64, gravity: f64) {
        for p in &mut self.particles {
            p.position += p.velocity * dt;
            p.velocity.y += gravity * dt;
            p.age += dt;
        }
        self.particles.retain(|p| p.age < p.max_age);
    }

    /// Iterate live particles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Drop all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
