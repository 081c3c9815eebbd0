//! CPU rasterization backend over `vello_cpu` pixmaps.
//!
//! Every plan surface maps to one [`vello_cpu::Pixmap`]. Scene passes draw
//! vector geometry through a fresh `RenderContext`; blur and composite passes
//! operate directly on the premultiplied pixel buffers via
//! [`crate::render::blur`] and [`crate::render::blend`].

use std::collections::HashMap;

use crate::{
    foundation::core::{BezPath, Canvas, Point},
    foundation::error::{BloomError, BloomResult},
    render::blur::GlowKernel,
    render::compositor::{
        self, BlendMode, BlurPass, CompositePass, DrawCmd, PassBackend, RenderPlan, ScenePass,
        SurfaceId,
    },
    shape::frame::{GeometryFrame, GradientStop, Paint},
};

/// A finished frame read back from the backend.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel bytes, row-major RGBA8.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied.
    pub premultiplied: bool,
}

/// CPU backend holding one pixmap per plan surface.
pub struct PixmapBackend {
    surfaces: HashMap<SurfaceId, PixmapSurface>,
    // The compositor asks for the same glow kernel every frame.
    glow_kernel: Option<GlowKernel>,
}

struct PixmapSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl PixmapBackend {
    /// Backend with no surfaces allocated yet.
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
            glow_kernel: None,
        }
    }

    /// Compile and rasterize one geometry frame.
    pub fn render_frame(&mut self, canvas: Canvas, frame: &GeometryFrame) -> BloomResult<FrameRgba> {
        let plan = compositor::compile_frame(canvas, frame);
        compositor::execute_plan(&plan, self)?;
        self.readback_rgba8(plan.final_surface, &plan)
    }

    /// Render a tick if the host surface is ready.
    ///
    /// `size` is the host-reported surface size; `None` or a zero dimension
    /// means the surface is not mounted yet, in which case the tick is
    /// skipped (returns `Ok(None)`) and the caller retries next frame.
    pub fn render_tick(
        &mut self,
        size: Option<(u32, u32)>,
        frame: &GeometryFrame,
    ) -> BloomResult<Option<FrameRgba>> {
        let Some((w, h)) = size else {
            return Ok(None);
        };
        if w == 0 || h == 0 {
            return Ok(None);
        }
        let canvas = Canvas::new(w, h)?;
        self.render_frame(canvas, frame).map(Some)
    }

    /// Copy the pixel contents of `surface` out of the backend.
    ///
    /// Surfaces beyond the plan's declarations are dropped so a one-off frame
    /// with many layers does not pin memory for the next one.
    pub fn readback_rgba8(
        &mut self,
        surface: SurfaceId,
        plan: &RenderPlan,
    ) -> BloomResult<FrameRgba> {
        let s = self
            .surfaces
            .get(&surface)
            .ok_or_else(|| surface_missing("readback", surface))?;
        let data = s.pixmap.data_as_u8_slice().to_vec();

        let surface_cap = plan.surfaces.len() as u32;
        self.surfaces.retain(|id, _| id.0 < surface_cap);

        Ok(FrameRgba {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data,
            premultiplied: true,
        })
    }
}

impl Default for PixmapBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PassBackend for PixmapBackend {
    fn prepare(&mut self, plan: &RenderPlan) -> BloomResult<()> {
        for (idx, desc) in plan.surfaces.iter().enumerate() {
            let id = SurfaceId(idx as u32);
            let width: u16 = desc
                .width
                .try_into()
                .map_err(|_| BloomError::render("surface width exceeds u16"))?;
            let height: u16 = desc
                .height
                .try_into()
                .map_err(|_| BloomError::render("surface height exceeds u16"))?;

            match self.surfaces.get_mut(&id) {
                Some(s) if s.width == width && s.height == height => {}
                other => {
                    let fresh = PixmapSurface {
                        width,
                        height,
                        pixmap: vello_cpu::Pixmap::new(width, height),
                    };
                    match other {
                        Some(s) => *s = fresh,
                        None => {
                            self.surfaces.insert(id, fresh);
                        }
                    }
                }
            }
        }

        // The final surface accumulates composites, so it must start empty.
        if let Some(s) = self.surfaces.get_mut(&plan.final_surface) {
            clear_pixmap(&mut s.pixmap);
        }
        Ok(())
    }

    fn exec_scene(&mut self, pass: &ScenePass) -> BloomResult<()> {
        let mut surface = self
            .surfaces
            .remove(&pass.target)
            .ok_or_else(|| surface_missing("scene target", pass.target))?;

        if pass.clear_to_transparent {
            clear_pixmap(&mut surface.pixmap);
        }

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        for cmd in &pass.cmds {
            draw_cmd(&mut ctx, cmd);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);
        self.surfaces.insert(pass.target, surface);
        Ok(())
    }

    fn exec_blur(&mut self, pass: &BlurPass) -> BloomResult<()> {
        let mut output = self
            .surfaces
            .remove(&pass.output)
            .ok_or_else(|| surface_missing("blur output", pass.output))?;

        let (w, h) = (u32::from(output.width), u32::from(output.height));
        let input_bytes = if pass.input == pass.output {
            output.pixmap.data_as_u8_slice().to_vec()
        } else {
            let input = self
                .surfaces
                .get(&pass.input)
                .ok_or_else(|| surface_missing("blur input", pass.input))?;
            if input.width != output.width || input.height != output.height {
                return Err(BloomError::render("blur input/output size mismatch"));
            }
            input.pixmap.data_as_u8_slice().to_vec()
        };

        // Clamp then reuse the kernel while the pass parameters hold still.
        let radius = pass.radius_px.min(w.max(h));
        let stale = !self
            .glow_kernel
            .as_ref()
            .is_some_and(|k| k.radius() == radius && k.sigma() == pass.sigma);
        if stale {
            self.glow_kernel = Some(GlowKernel::new(radius, pass.sigma)?);
        }
        let blurred = match &self.glow_kernel {
            Some(kernel) => kernel.apply(&input_bytes, w, h)?,
            None => return Err(BloomError::render("glow kernel was not built")),
        };
        output
            .pixmap
            .data_as_u8_slice_mut()
            .copy_from_slice(&blurred);

        self.surfaces.insert(pass.output, output);
        Ok(())
    }

    fn exec_composite(&mut self, pass: &CompositePass) -> BloomResult<()> {
        let mut dst = self
            .surfaces
            .remove(&pass.target)
            .ok_or_else(|| surface_missing("composite target", pass.target))?;

        for op in &pass.ops {
            let src = self
                .surfaces
                .get(&op.src)
                .ok_or_else(|| surface_missing("composite src", op.src))?;
            match op.blend {
                BlendMode::Over => crate::render::blend::over_in_place(
                    dst.pixmap.data_as_u8_slice_mut(),
                    src.pixmap.data_as_u8_slice(),
                    op.opacity,
                )?,
                BlendMode::Additive => crate::render::blend::additive_in_place(
                    dst.pixmap.data_as_u8_slice_mut(),
                    src.pixmap.data_as_u8_slice(),
                    op.opacity,
                )?,
            }
        }
        self.surfaces.insert(pass.target, dst);
        Ok(())
    }
}

fn surface_missing(what: &str, id: SurfaceId) -> BloomError {
    BloomError::render(format!("{what} surface {} was not initialized", id.0))
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn draw_cmd(ctx: &mut vello_cpu::RenderContext, cmd: &DrawCmd) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match cmd {
        DrawCmd::FillPath {
            path,
            paint,
            opacity,
        } => {
            set_paint(ctx, paint);
            fill_with_opacity(ctx, path, *opacity);
        }
        DrawCmd::StrokePath {
            path,
            paint,
            width,
            opacity,
        } => {
            // Expand the stroke to a fill so paint handling stays uniform.
            let outline = kurbo::stroke(
                path.elements().iter().copied(),
                &kurbo::Stroke::new(*width),
                &kurbo::StrokeOpts::default(),
                0.25,
            );
            set_paint(ctx, paint);
            fill_with_opacity(ctx, &outline, *opacity);
        }
    }
}

fn fill_with_opacity(ctx: &mut vello_cpu::RenderContext, path: &BezPath, opacity: f32) {
    let cpu_path = bezpath_to_cpu(path);
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
        ctx.fill_path(&cpu_path);
        ctx.pop_layer();
    } else {
        ctx.fill_path(&cpu_path);
    }
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, paint: &Paint) {
    match paint {
        Paint::Solid(c) => {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                c.r,
                c.g,
                c.b,
                c.alpha_u8(),
            ));
        }
        Paint::Linear(g) => {
            let gradient =
                vello_cpu::peniko::Gradient::new_linear(point_to_cpu(g.start), point_to_cpu(g.end))
                    .with_stops(gradient_stops(&g.stops).as_slice());
            ctx.set_paint(gradient);
        }
        Paint::Radial(g) => {
            let gradient = vello_cpu::peniko::Gradient::new_two_point_radial(
                point_to_cpu(g.start_center),
                0.0,
                point_to_cpu(g.end_center),
                g.radius as f32,
            )
            .with_stops(gradient_stops(&g.stops).as_slice());
            ctx.set_paint(gradient);
        }
    }
}

fn gradient_stops(stops: &[GradientStop]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|s| vello_cpu::peniko::ColorStop {
            offset: s.offset.clamp(0.0, 1.0),
            color: vello_cpu::peniko::color::DynamicColor::from_alpha_color(
                vello_cpu::peniko::Color::from_rgba8(
                    s.color.r,
                    s.color.g,
                    s.color.b,
                    s.color.alpha_u8(),
                ),
            ),
        })
        .collect()
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
