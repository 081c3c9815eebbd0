//! Tapered tendril ribbons with pointer proximity coupling.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::shape::blob::append_smoothed;

/// Parameters for one tendril ribbon.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TendrilParams {
    /// Origin the tendril radiates from.
    pub center: Point,
    /// Base direction in radians.
    pub base_angle: f64,
    /// Radius at which the ribbon starts (the host shape's edge).
    pub start_radius: f64,
    /// How far past the start radius the tip reaches.
    pub reach: f64,
    /// Half-thickness at the root.
    pub thickness: f64,
    /// Segment count along the ribbon; clamped to at least 1.
    pub segments: usize,
    /// Angular wobble amplitude in radians.
    pub wobble: f64,
    /// Fraction of the root thickness lost at the tip (`0.85`–`0.9` reads
    /// organic; `1.0` collapses to a sharp point).
    pub taper: f64,
    /// Per-tendril phase so neighbours wobble out of step.
    pub phase: f64,
}

impl TendrilParams {
    /// Tendril with reveal-style defaults.
    pub fn new(center: Point, base_angle: f64, start_radius: f64, reach: f64) -> Self {
        Self {
            center,
            base_angle,
            start_radius,
            reach,
            thickness: 6.0,
            segments: 12,
            wobble: 0.2,
            taper: 0.85,
            phase: 0.0,
        }
    }

    /// Build the closed tapering ribbon path at `time` seconds.
    ///
    /// Wobble is scaled by the fractional position along the ribbon so it
    /// vanishes at the root and is maximal toward the tip; the taper follows
    /// `thickness * (1 - frac^2 * taper)`.
    pub fn path(&self, time: f64) -> BezPath {
        if self.reach <= 0.0 || self.thickness <= 0.0 {
            return BezPath::new();
        }
        let segments = self.segments.max(1);

        let mut left = Vec::with_capacity(segments + 1);
        let mut right = Vec::with_capacity(segments + 1);
        for s in 0..=segments {
            let frac = s as f64 / segments as f64;
            let seg_angle = self.base_angle
                + (frac * TAU + time * 8.0 + self.phase).sin() * self.wobble * frac;
            let r = self.start_radius + self.reach * frac;
            let half = self.thickness * (1.0 - frac * frac * self.taper).max(0.0);
            let spine = Point::new(
                self.center.x + seg_angle.cos() * r,
                self.center.y + seg_angle.sin() * r,
            );
            let perp = Vec2::new(-seg_angle.sin(), seg_angle.cos()) * half;
            left.push(spine + perp);
            right.push(spine - perp);
        }
        right.reverse();

        let mut path = BezPath::new();
        append_smoothed(&mut path, &left);
        append_smoothed(&mut path, &right);
        path.close_path();
        path
    }
}

/// Inverse angular distance between a tendril's base direction and the
/// pointer direction, in `[0, 1]`.
///
/// `1.0` means the tendril points straight at the cursor, `0.0` that it
/// points directly away. Recomputed every hovered frame; reach and thickness
/// scale with it so the tendrils nearest the pointer stretch furthest.
pub fn proximity(tendril_angle: f64, cursor_angle: f64) -> f64 {
    let diff = (tendril_angle - cursor_angle).rem_euclid(TAU);
    let dist = diff.min(TAU - diff);
    1.0 - dist / PI
}
