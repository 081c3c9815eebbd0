//! Inkbloom is a procedural organic-shape animation engine.
//!
//! It synthesizes blob, tendril, vein, and droplet geometry from seeded
//! noise and sinusoidal fields, drives it through timed easing phases, ties
//! scroll position to animation parameters, and composites the result into
//! premultiplied RGBA8 pixels via a backend-agnostic render plan.
//!
//! # Pipeline overview
//!
//! 1. **Trigger**: host events (frame tick, pointer, scroll, idle timeout)
//!    feed an effect instance or the scroll mapper.
//! 2. **Progress**: [`PhaseMachine`] or [`ScrollBinding`] reduces time or
//!    viewport position to a progress scalar.
//! 3. **Geometry**: the shape generators consume progress, seed, and time
//!    and emit a [`GeometryFrame`].
//! 4. **Render**: [`compile_frame`] turns the frame into a [`RenderPlan`]
//!    executed by a [`PixmapBackend`] (or any other [`PassBackend`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical seed, time, and progress always
//!   produce identical geometry and pixels.
//! - **Decorative-layer error policy**: invalid configuration degrades
//!   (clamp, normalize, skip the tick) instead of crashing the host page.
//! - **Premultiplied RGBA8** end-to-end: renderers output premultiplied
//!   pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod ambiance;
mod animation;
mod effects;
mod foundation;
mod render;
mod scroll;
mod shape;

pub use ambiance::{
    AMBIANCE_KEYS, AmbiancePalette, AmbianceState, MemorySink, PropertySink,
};
pub use animation::ease::Ease;
pub use animation::idle::{IdleDetector, IdlePoll};
pub use animation::phase::{PhaseMachine, PhaseRun, PhaseSample, PhaseSpec};
pub use animation::scheduler::{FrameScheduler, TickFlow, TickHandle};
pub use effects::divider::{DividerConfig, DividerEffect};
pub use effects::fabric::{FabricConfig, FabricEffect, warp_rows};
pub use effects::hover::{HoverConfig, HoverEffect};
pub use effects::idle_fx::{IdleFxConfig, IdleFxEffect};
pub use effects::particles::{AmbientConfig, AmbientField};
pub use effects::reveal::{RevealConfig, RevealEffect};
pub use foundation::core::{
    Affine, BezPath, Canvas, Circle, Point, Rect, Rgba, Rgba8Premul, Shape, Vec2,
};
pub use foundation::error::{BloomError, BloomResult};
pub use foundation::field::{NoiseField, Rng64};
pub use render::backend::{FrameRgba, PixmapBackend};
pub use render::blend::{PremulRgba8, additive, additive_in_place, over, over_in_place};
pub use render::blur::{GlowKernel, blur_rgba8_premul};
pub use render::compositor::{
    BlendMode, BlurPass, CompositeOp, CompositePass, DrawCmd, Pass, PassBackend, RecordingBackend,
    RenderPlan, ScenePass, SurfaceDesc, SurfaceId, compile_frame, execute_plan,
};
pub use scroll::mapper::{
    ScrollBinding, fade_profile, interpolate, lerp_channels, lerp_color, parallax_offset,
};
pub use shape::blob::{BlobParams, Octave, append_smoothed, organic_octaves, radial_blob};
pub use shape::droplet::{Particle, ParticlePool, droplet_path, splatter_path};
pub use shape::frame::{
    FillSpec, GeometryFrame, GlowSpec, GradientStop, HighlightSpec, LinearGradient, Paint,
    PathStyle, RadialGradient, StrokeSpec, StyledPath,
};
pub use shape::tendril::{TendrilParams, proximity};
pub use shape::vein::{PulseNode, VeinNetwork, VeinParams};
