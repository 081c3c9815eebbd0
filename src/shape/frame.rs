//! The drawable content computed for one render tick.
//!
//! Effects compute a fresh [`GeometryFrame`] every tick from their phase
//! state, seed, and elapsed time; frames are never mutated in place, only
//! replaced. Keeping the frame purely declarative is what lets geometry math
//! run in tests without a real drawing surface.

use crate::foundation::core::{BezPath, Point, Rgba};

/// Paint for a fill or stroke pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Paint {
    /// Flat color.
    Solid(Rgba),
    /// Linear gradient between two device-space points.
    Linear(LinearGradient),
    /// Radial gradient with an off-center start to fake a directional light.
    Radial(RadialGradient),
}

/// One gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    /// Stop color.
    pub color: Rgba,
}

impl GradientStop {
    /// Build a stop.
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient description.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    /// Gradient start point in device space.
    pub start: Point,
    /// Gradient end point in device space.
    pub end: Point,
    /// Ordered color stops.
    pub stops: Vec<GradientStop>,
}

/// Radial gradient description.
///
/// `start_center` is the highlight anchor (typically offset toward the upper
/// left of the shape); `end_center`/`radius` bound the falloff.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialGradient {
    /// Focus point where the first stop sits.
    pub start_center: Point,
    /// Center of the outer circle.
    pub end_center: Point,
    /// Radius of the outer circle.
    pub radius: f64,
    /// Ordered color stops.
    pub stops: Vec<GradientStop>,
}

/// Main body fill pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FillSpec {
    /// Fill paint.
    pub paint: Paint,
}

/// Thin stroke drawn with normal blending.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeSpec {
    /// Stroke paint.
    pub paint: Paint,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Wide soft under-glow: a low-opacity fill blurred before compositing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowSpec {
    /// Glow color (expected low alpha).
    pub color: Rgba,
    /// Gaussian blur radius in pixels.
    pub blur_radius: u32,
    /// Gaussian sigma.
    pub sigma: f32,
}

/// Specular highlight stroked with additive blending.
///
/// Additive compositing is reserved for this pass; base fills always blend
/// normally so stacked shapes never double-darken.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HighlightSpec {
    /// Highlight color (expected low alpha).
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Per-path style; every pass is optional so each shape kind opts in.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathStyle {
    /// Body fill pass.
    pub fill: Option<FillSpec>,
    /// Stroke pass.
    pub stroke: Option<StrokeSpec>,
    /// Blurred glow pass, composited under the body.
    pub glow: Option<GlowSpec>,
    /// Additive highlight pass, composited over the body.
    pub highlight: Option<HighlightSpec>,
}

impl PathStyle {
    /// Fill-only style.
    pub fn fill(paint: Paint) -> Self {
        Self {
            fill: Some(FillSpec { paint }),
            ..Self::default()
        }
    }

    /// Stroke-only style.
    pub fn stroke(paint: Paint, width: f64) -> Self {
        Self {
            stroke: Some(StrokeSpec { paint, width }),
            ..Self::default()
        }
    }
}

/// One path plus how to paint it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyledPath {
    /// Path geometry in device space.
    pub path: BezPath,
    /// Paint passes for this path.
    pub style: PathStyle,
}

/// Complete drawable output of one render tick, in back-to-front order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryFrame {
    /// Styled paths in painting order.
    pub paths: Vec<StyledPath>,
}

impl GeometryFrame {
    /// Empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path, skipping empty geometry.
    pub fn push(&mut self, path: BezPath, style: PathStyle) {
        if !path.is_empty() {
            self.paths.push(StyledPath { path, style });
        }
    }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of styled paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
