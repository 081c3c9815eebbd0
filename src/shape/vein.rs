//! Branching vein networks for section dividers.
//!
//! Geometry is derived entirely from the seeded noise field so the same
//! divider keeps its shape across re-renders; two placements with different
//! seeds diverge. Branch recursion is capped at two levels (branch plus one
//! sub-branch) to bound path count.

use crate::foundation::core::{BezPath, Point};
use crate::foundation::field::NoiseField;

/// Parameters for one vein network.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VeinParams {
    /// Network width in device units.
    pub width: f64,
    /// Network height in device units.
    pub height: f64,
    /// Seed for the noise field.
    pub seed: f64,
    /// Mirror vertically (divider hanging from the top edge instead of
    /// resting on the bottom one).
    pub flip: bool,
}

impl VeinParams {
    /// Network sized to the original divider viewBox.
    pub fn new(seed: f64) -> Self {
        Self {
            width: 1200.0,
            height: 100.0,
            seed,
            flip: false,
        }
    }
}

/// A pulse node: a point on the network that blinks with its own phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PulseNode {
    /// Node position.
    pub position: Point,
    /// Phase offset in seconds for the blink cycle.
    pub phase: f64,
}

/// Generated vein network: primary spine, branches, and pulse nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct VeinNetwork {
    /// The main flowing vein.
    pub primary: BezPath,
    /// Branch and sub-branch paths.
    pub branches: Vec<BezPath>,
    /// Pulse node placements.
    pub nodes: Vec<PulseNode>,
}

impl VeinNetwork {
    /// Generate the full network (`reveal = 1`).
    pub fn generate(params: &VeinParams) -> Self {
        Self::generate_revealed(params, 1.0)
    }

    /// Generate the network revealed up to `reveal` in `[0, 1]` of its
    /// horizontal extent, for the scroll-driven draw-on.
    ///
    /// `reveal <= 0` produces an empty network; branches appear once the
    /// reveal front passes their root.
    pub fn generate_revealed(params: &VeinParams, reveal: f64) -> Self {
        let reveal = reveal.clamp(0.0, 1.0);
        if reveal <= 0.0 {
            return Self {
                primary: BezPath::new(),
                branches: Vec::new(),
                nodes: Vec::new(),
            };
        }

        let field = NoiseField::new(params.seed);
        let (w, h) = (params.width, params.height);
        let main_y = if params.flip { h * 0.1 } else { h * 0.9 };
        let control_y = if params.flip { h * 0.7 } else { h * 0.3 };

        // Primary spine through evenly spaced x positions.
        let segments = 8 + (field.sample(0.0) * 4.0).floor() as usize;
        let mut spine = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let x = (i as f64 / segments as f64) * w;
            let y = main_y + field.sample_signed(i as f64 + 10.0, h * 0.2);
            spine.push(Point::new(x, y));
        }

        let mut primary = BezPath::new();
        let visible = spine_prefix(&spine, reveal * w);
        if let Some((first, rest)) = visible.split_first() {
            primary.move_to(*first);
            for (i, &p) in rest.iter().enumerate() {
                let prev = visible[i];
                let cpx = (prev.x + p.x) / 2.0;
                let cpy = control_y + field.sample_signed(i as f64 + 21.0, h * 0.15);
                primary.quad_to(Point::new(cpx, cpy), p);
            }
        }

        // Branch tendrils rooted on the spine, angled away from it.
        let mut branches = Vec::new();
        let branch_count = 4 + (field.sample(100.0) * 5.0).floor() as usize;
        let up = if params.flip { 1.0 } else { -1.0 };
        for b in 0..branch_count {
            let bf = b as f64;
            let root_idx =
                ((field.sample(bf + 50.0) * (spine.len() - 1) as f64).floor() as usize)
                    .min(spine.len() - 1);
            let root = spine[root_idx];
            if root.x > reveal * w {
                continue;
            }

            let len = field.sample_range(bf + 70.0, 15.0, 25.0);
            let angle = up * field.sample_range(bf + 90.0, 0.3, 1.2);
            let end = Point::new(root.x + angle.cos() * len * 8.0, root.y + angle.sin() * len);
            let control = Point::new(
                root.x + (end.x - root.x) * 0.5 + field.sample_signed(bf + 110.0, 10.0),
                root.y + (end.y - root.y) * 0.3,
            );
            let mut branch = BezPath::new();
            branch.move_to(root);
            branch.quad_to(control, end);
            branches.push(branch);

            // One optional sub-branch from the midpoint; depth stops here.
            if field.sample(bf + 130.0) > 0.5 {
                let sub_angle = angle + field.sample_signed(bf + 140.0, 0.4);
                let sub_len = len * 0.5;
                let mid = Point::new((root.x + end.x) / 2.0, (root.y + end.y) / 2.0);
                let sub_end = Point::new(
                    mid.x + sub_angle.cos() * sub_len * 5.0,
                    mid.y + sub_angle.sin() * sub_len,
                );
                let mut sub = BezPath::new();
                sub.move_to(mid);
                sub.line_to(sub_end);
                branches.push(sub);
            }
        }

        // Pulse nodes spread along the visible extent.
        let mut nodes = Vec::new();
        let node_count = 3 + ((params.seed * 7.0).sin() * 2.0 + 2.0).floor().max(0.0) as usize;
        for i in 0..node_count {
            let fi = i as f64;
            let x = (fi + 1.0) * (w / (5.0 + fi)) + (params.seed + fi).sin() * w / 12.0;
            let y = h * 0.5 + (params.seed * 3.0 + fi * 2.0).sin() * h * 0.25;
            if x <= reveal * w {
                nodes.push(PulseNode {
                    position: Point::new(x, y),
                    phase: 0.5 + fi * 0.2,
                });
            }
        }

        Self {
            primary,
            branches,
            nodes,
        }
    }
}

/// Spine points up to `limit_x`, with the last segment interpolated so the
/// reveal front moves continuously instead of popping per segment.
fn spine_prefix(spine: &[Point], limit_x: f64) -> Vec<Point> {
    let mut out = Vec::new();
    for (i, &p) in spine.iter().enumerate() {
        if p.x <= limit_x {
            out.push(p);
            continue;
        }
        if i > 0 {
            let prev = spine[i - 1];
            let span = p.x - prev.x;
            if span > 0.0 {
                let t = ((limit_x - prev.x) / span).clamp(0.0, 1.0);
                if t > 0.0 {
                    out.push(Point::new(
                        prev.x + span * t,
                        prev.y + (p.y - prev.y) * t,
                    ));
                }
            }
        }
        break;
    }
    out
}
