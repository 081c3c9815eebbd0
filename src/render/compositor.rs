//! Frame compilation into a backend-agnostic pass plan.
//!
//! A [`GeometryFrame`] splits into up to three layers: a blurred glow layer
//! underneath, the base fills and strokes, and an additive highlight layer on
//! top. `compile_frame` turns that into surface declarations and an ordered
//! pass list; [`execute_plan`] walks the list against any [`PassBackend`].

use tracing::instrument;

use crate::{
    foundation::core::{BezPath, Canvas},
    foundation::error::BloomResult,
    shape::frame::{GeometryFrame, Paint},
};

/// Backend-agnostic render plan for a single frame.
#[derive(Clone, Debug)]
pub struct RenderPlan {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Surface declarations, indexed by [`SurfaceId`].
    pub surfaces: Vec<SurfaceDesc>,
    /// Ordered passes to execute.
    pub passes: Vec<Pass>,
    /// Surface holding the finished frame.
    pub final_surface: SurfaceId,
}

/// A single pass in a [`RenderPlan`].
#[derive(Clone, Debug)]
pub enum Pass {
    /// Draw vector geometry into a surface.
    Scene(ScenePass),
    /// Gaussian-blur one surface into another.
    Blur(BlurPass),
    /// Merge source surfaces into a target surface.
    Composite(CompositePass),
}

/// Identifier for a surface declared in [`RenderPlan::surfaces`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// Surface declaration. All surfaces are premultiplied RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceDesc {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

/// Draw operations into a surface.
#[derive(Clone, Debug)]
pub struct ScenePass {
    /// Destination surface.
    pub target: SurfaceId,
    /// Draw commands, in paint order.
    pub cmds: Vec<DrawCmd>,
    /// Clear the target before drawing.
    pub clear_to_transparent: bool,
}

/// Blur `input` into `output` with a separable gaussian.
#[derive(Clone, Debug)]
pub struct BlurPass {
    /// Source surface.
    pub input: SurfaceId,
    /// Destination surface.
    pub output: SurfaceId,
    /// Kernel radius in pixels.
    pub radius_px: u32,
    /// Gaussian sigma.
    pub sigma: f32,
}

/// Composite source surfaces into a target surface.
#[derive(Clone, Debug)]
pub struct CompositePass {
    /// Destination surface.
    pub target: SurfaceId,
    /// Composite operations, applied in order.
    pub ops: Vec<CompositeOp>,
}

/// One surface-to-surface composite.
#[derive(Clone, Debug)]
pub struct CompositeOp {
    /// Source surface.
    pub src: SurfaceId,
    /// Blend applied when merging.
    pub blend: BlendMode,
    /// Extra opacity factor in `[0, 1]`.
    pub opacity: f32,
}

/// Blend mode for a [`CompositeOp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over.
    Over,
    /// Plus-lighter, used for specular highlights.
    Additive,
}

/// Vector draw command emitted by the compiler.
#[derive(Clone, Debug)]
pub enum DrawCmd {
    /// Fill a closed path.
    FillPath {
        /// Path geometry in canvas coordinates.
        path: BezPath,
        /// Fill paint.
        paint: Paint,
        /// Opacity factor in `[0, 1]`.
        opacity: f32,
    },
    /// Stroke a path outline.
    StrokePath {
        /// Path geometry in canvas coordinates.
        path: BezPath,
        /// Stroke paint.
        paint: Paint,
        /// Stroke width in pixels.
        width: f64,
        /// Opacity factor in `[0, 1]`.
        opacity: f32,
    },
}

/// Compile one geometry frame into a render plan.
///
/// Pass order is glow scene, glow blur, base scene, highlight scene, then a
/// single composite into surface 0 (blurred glow under, base over, highlight
/// additive on top). Layers with no content emit no surfaces or passes, so an
/// all-fill frame compiles to one scene pass and one composite op.
#[instrument(level = "trace", skip(frame))]
pub fn compile_frame(canvas: Canvas, frame: &GeometryFrame) -> RenderPlan {
    let desc = SurfaceDesc {
        width: canvas.width,
        height: canvas.height,
    };

    let mut surfaces = vec![desc];
    let mut alloc = |surfaces: &mut Vec<SurfaceDesc>| {
        let id = SurfaceId(surfaces.len() as u32);
        surfaces.push(desc);
        id
    };

    let mut glow_cmds = Vec::new();
    let mut base_cmds = Vec::new();
    let mut highlight_cmds = Vec::new();

    for styled in &frame.paths {
        if let Some(glow) = &styled.style.glow {
            // Alpha rides in the paint; opacity stays 1 so it applies once.
            glow_cmds.push((
                DrawCmd::FillPath {
                    path: styled.path.clone(),
                    paint: Paint::Solid(glow.color),
                    opacity: 1.0,
                },
                glow.blur_radius,
                glow.sigma,
            ));
        }
        if let Some(fill) = &styled.style.fill {
            base_cmds.push(DrawCmd::FillPath {
                path: styled.path.clone(),
                paint: fill.paint.clone(),
                opacity: 1.0,
            });
        }
        if let Some(stroke) = &styled.style.stroke {
            base_cmds.push(DrawCmd::StrokePath {
                path: styled.path.clone(),
                paint: stroke.paint.clone(),
                width: stroke.width,
                opacity: 1.0,
            });
        }
        if let Some(hl) = &styled.style.highlight {
            highlight_cmds.push(DrawCmd::StrokePath {
                path: styled.path.clone(),
                paint: Paint::Solid(hl.color),
                width: hl.width,
                opacity: 1.0,
            });
        }
    }

    let mut passes = Vec::new();
    let mut composite_ops = Vec::new();

    if !glow_cmds.is_empty() {
        // All glow shapes share one surface and the widest requested kernel.
        let radius = glow_cmds.iter().map(|(_, r, _)| *r).max().unwrap_or(0);
        let sigma = glow_cmds
            .iter()
            .map(|(_, _, s)| *s)
            .fold(0.0f32, f32::max)
            .max(0.1);

        let raw = alloc(&mut surfaces);
        let blurred = alloc(&mut surfaces);
        passes.push(Pass::Scene(ScenePass {
            target: raw,
            cmds: glow_cmds.into_iter().map(|(cmd, _, _)| cmd).collect(),
            clear_to_transparent: true,
        }));
        passes.push(Pass::Blur(BlurPass {
            input: raw,
            output: blurred,
            radius_px: radius,
            sigma,
        }));
        composite_ops.push(CompositeOp {
            src: blurred,
            blend: BlendMode::Over,
            opacity: 1.0,
        });
    }

    if !base_cmds.is_empty() {
        let surf = alloc(&mut surfaces);
        passes.push(Pass::Scene(ScenePass {
            target: surf,
            cmds: base_cmds,
            clear_to_transparent: true,
        }));
        composite_ops.push(CompositeOp {
            src: surf,
            blend: BlendMode::Over,
            opacity: 1.0,
        });
    }

    if !highlight_cmds.is_empty() {
        let surf = alloc(&mut surfaces);
        passes.push(Pass::Scene(ScenePass {
            target: surf,
            cmds: highlight_cmds,
            clear_to_transparent: true,
        }));
        composite_ops.push(CompositeOp {
            src: surf,
            blend: BlendMode::Additive,
            opacity: 1.0,
        });
    }

    if !composite_ops.is_empty() {
        passes.push(Pass::Composite(CompositePass {
            target: SurfaceId(0),
            ops: composite_ops,
        }));
    }

    RenderPlan {
        canvas,
        surfaces,
        passes,
        final_surface: SurfaceId(0),
    }
}

/// Executes the passes of a [`RenderPlan`] against concrete surfaces.
pub trait PassBackend {
    /// Allocate (or reuse) the plan's surfaces before execution.
    fn prepare(&mut self, plan: &RenderPlan) -> BloomResult<()>;
    /// Execute one scene pass.
    fn exec_scene(&mut self, pass: &ScenePass) -> BloomResult<()>;
    /// Execute one blur pass.
    fn exec_blur(&mut self, pass: &BlurPass) -> BloomResult<()>;
    /// Execute one composite pass.
    fn exec_composite(&mut self, pass: &CompositePass) -> BloomResult<()>;
}

/// Run every pass of `plan` in order against `backend`.
#[instrument(level = "trace", skip_all)]
pub fn execute_plan<B: PassBackend>(plan: &RenderPlan, backend: &mut B) -> BloomResult<()> {
    backend.prepare(plan)?;
    for pass in &plan.passes {
        match pass {
            Pass::Scene(p) => backend.exec_scene(p)?,
            Pass::Blur(p) => backend.exec_blur(p)?,
            Pass::Composite(p) => backend.exec_composite(p)?,
        }
    }
    Ok(())
}

/// Records executed passes instead of rasterizing. Test double.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// One entry per executed pass, in order.
    pub log: Vec<String>,
}

impl PassBackend for RecordingBackend {
    fn prepare(&mut self, plan: &RenderPlan) -> BloomResult<()> {
        self.log.push(format!("prepare surfaces={}", plan.surfaces.len()));
        Ok(())
    }

    fn exec_scene(&mut self, pass: &ScenePass) -> BloomResult<()> {
        self.log.push(format!(
            "scene target={} cmds={}",
            pass.target.0,
            pass.cmds.len()
        ));
        Ok(())
    }

    fn exec_blur(&mut self, pass: &BlurPass) -> BloomResult<()> {
        self.log.push(format!(
            "blur {}->{} r={}",
            pass.input.0, pass.output.0, pass.radius_px
        ));
        Ok(())
    }

    fn exec_composite(&mut self, pass: &CompositePass) -> BloomResult<()> {
        self.log.push(format!(
            "composite target={} ops={}",
            pass.target.0,
            pass.ops.len()
        ));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
