//! Irregular radial blob geometry.
//!
//! A blob is a center plus a ring of sampled radii distorted by a stack of
//! sine octaves. Decreasing amplitude with increasing frequency gives the
//! fractal-like irregularity; joining samples with quadratic curves through
//! perturbed midpoints keeps the silhouette from reading as a faceted
//! polygon.

use std::f64::consts::TAU;

use crate::foundation::core::{BezPath, Point};

/// One sine distortion term: `amplitude * sin(frequency*angle + speed*time)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Octave {
    /// Radial distortion amplitude as a fraction of the base radius.
    pub amplitude: f64,
    /// Angular frequency (lobes around the circumference).
    pub frequency: f64,
    /// Temporal phase speed in radians per second.
    pub speed: f64,
}

impl Octave {
    /// Build an octave.
    pub const fn new(amplitude: f64, frequency: f64, speed: f64) -> Self {
        Self {
            amplitude,
            frequency,
            speed,
        }
    }
}

/// Octave stack matching the reveal's viscous-mass look.
pub fn organic_octaves() -> Vec<Octave> {
    vec![
        Octave::new(0.15, 3.0, 6.0),
        Octave::new(0.08, 7.0, 10.0),
        Octave::new(0.04, 13.0, 14.0),
    ]
}

/// Parameters for one blob layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlobParams {
    /// Blob center in device space.
    pub center: Point,
    /// Undistorted radius.
    pub base_radius: f64,
    /// Number of angular samples around the circumference.
    pub points: usize,
    /// Sine distortion stack (2–5 octaves reads best).
    pub octaves: Vec<Octave>,
    /// Constant phase offset, used to decorrelate stacked layers.
    pub phase: f64,
    /// Amplitude of the lower-weight midpoint control perturbation.
    pub smoothing_jitter: f64,
}

impl BlobParams {
    /// Blob with the default organic octave stack.
    pub fn new(center: Point, base_radius: f64) -> Self {
        Self {
            center,
            base_radius,
            points: 64,
            octaves: organic_octaves(),
            phase: 0.0,
            smoothing_jitter: 0.12,
        }
    }

    /// Build the closed path for this blob at `time` seconds.
    pub fn path(&self, time: f64) -> BezPath {
        if self.base_radius <= 0.0 {
            return BezPath::new();
        }
        let octaves = &self.octaves;
        let phase = self.phase;
        let jitter = self.smoothing_jitter;
        let radius_at = |angle: f64| {
            let distort: f64 = octaves
                .iter()
                .map(|o| o.amplitude * (o.frequency * angle + o.speed * time + phase).sin())
                .sum();
            self.base_radius * (1.0 + distort)
        };
        let control_at =
            |angle: f64| self.base_radius * (1.0 + (angle * 5.0 + time * 8.0 + phase).sin() * jitter);
        radial_blob(self.center, self.points, radius_at, control_at)
    }
}

/// Closed blob from arbitrary per-angle radius functions.
///
/// `radius_at` gives the on-curve radius for each sampled angle and
/// `control_at` the radius for the quadratic control point at the midpoint
/// angle between consecutive samples. Exposed separately so effects with
/// non-uniform distortion (the splitting masses stretch along one axis) can
/// reuse the smoothing scheme.
pub fn radial_blob(
    center: Point,
    points: usize,
    radius_at: impl Fn(f64) -> f64,
    control_at: impl Fn(f64) -> f64,
) -> BezPath {
    let points = points.max(3);
    let mut path = BezPath::new();

    for i in 0..=points {
        let angle = (i as f64 / points as f64) * TAU;
        let r = radius_at(angle).max(0.0);
        let p = Point::new(center.x + angle.cos() * r, center.y + angle.sin() * r);

        if i == 0 {
            path.move_to(p);
        } else {
            let mid_angle = ((i as f64 - 0.5) / points as f64) * TAU;
            let cr = control_at(mid_angle).max(0.0);
            let cp = Point::new(
                center.x + mid_angle.cos() * cr,
                center.y + mid_angle.sin() * cr,
            );
            path.quad_to(cp, p);
        }
    }
    path.close_path();
    path
}

/// Append a quadratically smoothed open polyline to `path`.
///
/// Control points are midpoints of consecutive samples, the same scheme the
/// tendril and strand ribbons use for their long edges.
pub fn append_smoothed(path: &mut BezPath, pts: &[Point]) {
    let Some((first, rest)) = pts.split_first() else {
        return;
    };
    if path.elements().is_empty() {
        path.move_to(*first);
    } else {
        path.line_to(*first);
    }
    let mut prev = *first;
    for &p in rest {
        let mid = Point::new((prev.x + p.x) / 2.0, (prev.y + p.y) / 2.0);
        path.quad_to(mid, p);
        prev = p;
    }
}
