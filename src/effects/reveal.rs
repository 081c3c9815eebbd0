//! Full-screen ink-mass reveal.
//!
//! Two one-shot phases: `Expanding` grows a stack of blob layers with an
//! outward tendril fringe from the canvas center, then `Splitting` pulls the
//! mass apart into two stretched halves joined by sagging viscous strands
//! that thin out and drip as the gap widens.

use std::f64::consts::{PI, TAU};

use tracing::instrument;

use crate::{
    animation::ease::Ease,
    animation::phase::{PhaseMachine, PhaseRun, PhaseSpec},
    effects::parse_config,
    foundation::core::{Affine, BezPath, Point, Rgba},
    foundation::error::BloomResult,
    foundation::field::NoiseField,
    shape::blob::{BlobParams, radial_blob},
    shape::droplet::droplet_path,
    shape::frame::{
        FillSpec, GeometryFrame, GlowSpec, GradientStop, HighlightSpec, Paint, PathStyle,
        RadialGradient,
    },
    shape::tendril::TendrilParams,
};

const INK_BODY: Rgba = Rgba::new(16, 10, 26, 1.0);
const INK_CORE: Rgba = Rgba::new(64, 34, 92, 1.0);
const INK_GLOW: Rgba = Rgba::new(110, 60, 170, 0.28);
const INK_SHEEN: Rgba = Rgba::new(235, 225, 255, 0.35);

/// Reveal configuration. `null` params give the storefront defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Noise seed for layer decorrelation.
    pub seed: f64,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Stacked blob layer count.
    pub layers: usize,
    /// Outward tendril count during the expanding phase.
    pub tendrils: usize,
    /// Viscous strand count during the splitting phase.
    pub strands: usize,
    /// Expanding phase duration in seconds.
    pub expand_secs: f64,
    /// Splitting phase duration in seconds.
    pub split_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            seed: 11.0,
            width: 1920.0,
            height: 1080.0,
            layers: 4,
            tendrils: 16,
            strands: 5,
            expand_secs: 1.4,
            split_secs: 1.2,
        }
    }
}

/// One-shot reveal effect instance.
#[derive(Clone, Debug)]
pub struct RevealEffect {
    config: RevealConfig,
    machine: PhaseMachine,
    field: NoiseField,
}

impl RevealEffect {
    /// Build a reveal with the standard Expanding/Splitting phase pair.
    pub fn new(config: RevealConfig) -> BloomResult<Self> {
        let machine = PhaseMachine::new(
            vec![
                PhaseSpec::new("expanding", config.expand_secs, Ease::OutQuart),
                PhaseSpec::new("splitting", config.split_secs, Ease::InOutCubic),
            ],
            PhaseRun::Once,
        )?;
        let field = NoiseField::new(config.seed);
        Ok(Self {
            config,
            machine,
            field,
        })
    }

    /// Build from host JSON params.
    pub fn from_params(params: &serde_json::Value) -> BloomResult<Self> {
        Self::new(parse_config(params)?)
    }

    /// True once the split has completed; the scheduler should stop ticking.
    pub fn is_finished(&self) -> bool {
        self.machine.is_finished()
    }

    /// Compute the frame for `elapsed_secs` since the effect started.
    #[instrument(level = "trace", skip(self))]
    pub fn compute_frame(&mut self, elapsed_secs: f64) -> GeometryFrame {
        let sample = self.machine.tick(elapsed_secs);
        if sample.finished {
            return GeometryFrame::new();
        }
        match sample.phase_index {
            0 => self.expanding_frame(sample.eased, elapsed_secs),
            _ => self.splitting_frame(sample.eased, elapsed_secs),
        }
    }

    fn expanding_frame(&self, eased: f64, time: f64) -> GeometryFrame {
        let mut frame = GeometryFrame::new();
        if eased <= 0.0 {
            return frame;
        }

        let center = Point::new(self.config.width / 2.0, self.config.height / 2.0);
        let full = self.config.width.hypot(self.config.height) * 0.5;
        let radius = full * eased;

        // Tendril fringe sits under the mass so roots stay hidden.
        for i in 0..self.config.tendrils {
            let angle = (i as f64 / self.config.tendrils.max(1) as f64) * TAU;
            let jitter = self.field.sample(i as f64);
            let mut t = TendrilParams::new(
                center,
                angle,
                radius * 0.9,
                (40.0 + jitter * 70.0) * eased,
            );
            t.thickness = 5.0 + jitter * 3.0;
            t.phase = jitter * TAU;
            frame.push(t.path(time), PathStyle::fill(Paint::Solid(INK_BODY)));
        }

        for layer in 0..self.config.layers {
            let shrink = 1.0 - layer as f64 * 0.16;
            let mut blob = BlobParams::new(center, radius * shrink);
            blob.phase = self.field.sample(100.0 + layer as f64) * TAU;

            let mut style = PathStyle {
                fill: Some(FillSpec {
                    paint: mass_paint(center, radius * shrink),
                }),
                ..PathStyle::default()
            };
            if layer == 0 {
                style.glow = Some(GlowSpec {
                    color: INK_GLOW,
                    blur_radius: 18,
                    sigma: 9.0,
                });
            }
            if layer + 1 == self.config.layers {
                // Sheen pass on the innermost layer only.
                style.highlight = Some(HighlightSpec {
                    color: INK_SHEEN,
                    width: 2.0,
                });
            }
            frame.push(blob.path(time), style);
        }
        frame
    }

    fn splitting_frame(&self, eased: f64, time: f64) -> GeometryFrame {
        let mut frame = GeometryFrame::new();

        let center = Point::new(self.config.width / 2.0, self.config.height / 2.0);
        let full = self.config.width.hypot(self.config.height) * 0.5;
        let gap = eased * self.config.width * 0.35;
        let radius = full * (1.0 - eased * 0.45);

        // Strands render first so the masses overlap their anchor points.
        let left_edge = Point::new(center.x - gap + radius * 0.5, center.y);
        let right_edge = Point::new(center.x + gap - radius * 0.5, center.y);
        for s in 0..self.config.strands {
            let f = self.field.sample(300.0 + s as f64);
            let y_off = (f - 0.5) * radius * 0.8;
            let sag = (30.0 + f * 60.0) * eased;
            let width = (6.0 - eased * 5.0).max(0.4) * (0.6 + f * 0.8);

            let a = Point::new(left_edge.x, left_edge.y + y_off);
            let b = Point::new(right_edge.x, right_edge.y + y_off);
            let ctrl = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0 + sag);

            let mut strand = BezPath::new();
            strand.move_to(a);
            strand.quad_to(ctrl, b);
            frame.push(strand, PathStyle::stroke(Paint::Solid(INK_BODY), width));

            // Staggered drip from the strand's sag point.
            let drip_start = 0.3 + f * 0.4;
            if eased > drip_start {
                let fall = (eased - drip_start) * self.config.height * 0.4;
                let drop = droplet_path(
                    Point::new(ctrl.x, ctrl.y + fall),
                    4.0 + f * 3.0,
                    10.0 + fall * 0.15,
                );
                frame.push(drop, PathStyle::fill(Paint::Solid(INK_BODY)));
            }
        }

        for (side, dir) in [(0.0, -1.0), (1.0, 1.0)] {
            let c = Point::new(center.x + dir * gap, center.y);
            let phase = self.field.sample(200.0 + side) * TAU + PI * side;

            // Outward-facing half bulges, trailing half compresses. The
            // cos^2 weight pins the stretch to the separation axis and
            // leaves the poles alone, so the silhouette stays smooth at
            // the top and bottom.
            let stretch = |angle: f64| {
                let along = angle.cos();
                let axial = along * along;
                if dir * along > 0.0 {
                    1.0 + eased * 0.6 * axial
                } else {
                    1.0 - eased * 0.3 * axial
                }
            };
            let radius_at = |angle: f64| {
                let n1 = (angle * 4.0 + time * 5.0 + phase).sin() * 0.12 * (1.0 - eased);
                let n2 = (angle * 9.0 + time * 8.0 + phase).sin() * 0.06 * (1.0 - eased);
                radius * (1.0 + n1 + n2) * stretch(angle)
            };
            let control_at = |angle: f64| {
                radius * (1.0 + (angle * 6.0 + time * 7.0 + phase).sin() * 0.1) * stretch(angle)
            };

            let mut mass = radial_blob(c, 48, radius_at, control_at);
            // Vertical squash as the masses accelerate apart.
            let squash = Affine::translate(c.to_vec2())
                * Affine::scale_non_uniform(1.0, 1.0 - eased * 0.15)
                * Affine::translate(-c.to_vec2());
            mass.apply_affine(squash);

            let style = PathStyle {
                fill: Some(FillSpec {
                    paint: mass_paint(c, radius),
                }),
                glow: Some(GlowSpec {
                    color: INK_GLOW,
                    blur_radius: 14,
                    sigma: 7.0,
                }),
                ..PathStyle::default()
            };
            frame.push(mass, style);
        }
        frame
    }
}

/// Off-center radial gradient faking a directional light from upper left.
fn mass_paint(center: Point, radius: f64) -> Paint {
    Paint::Radial(RadialGradient {
        start_center: Point::new(center.x - radius * 0.3, center.y - radius * 0.3),
        end_center: center,
        radius: radius * 1.1,
        stops: vec![
            GradientStop::new(0.0, INK_CORE),
            GradientStop::new(1.0, INK_BODY),
        ],
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/reveal.rs"]
mod tests;
