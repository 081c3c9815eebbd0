use super::*;
use crate::foundation::core::Rgba;
use crate::shape::frame::{GlowSpec, HighlightSpec, PathStyle, StyledPath};

fn square() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((10.0, 10.0));
    p.line_to((50.0, 10.0));
    p.line_to((50.0, 50.0));
    p.line_to((10.0, 50.0));
    p.close_path();
    p
}

fn canvas() -> Canvas {
    Canvas::new(64, 64).unwrap()
}

#[test]
fn empty_frame_compiles_to_no_passes() {
    let plan = compile_frame(canvas(), &GeometryFrame::new());
    assert!(plan.passes.is_empty());
    assert_eq!(plan.surfaces.len(), 1);
    assert_eq!(plan.final_surface, SurfaceId(0));
}

#[test]
fn fill_only_frame_compiles_to_scene_and_composite() {
    let mut frame = GeometryFrame::new();
    frame.push(square(), PathStyle::fill(Paint::Solid(Rgba::new(20, 30, 40, 1.0))));

    let plan = compile_frame(canvas(), &frame);
    assert_eq!(plan.surfaces.len(), 2);
    assert_eq!(plan.passes.len(), 2);

    let Pass::Scene(scene) = &plan.passes[0] else {
        panic!("expected Scene pass");
    };
    assert_eq!(scene.target, SurfaceId(1));
    assert_eq!(scene.cmds.len(), 1);
    assert!(scene.clear_to_transparent);

    let Pass::Composite(comp) = &plan.passes[1] else {
        panic!("expected Composite pass");
    };
    assert_eq!(comp.target, SurfaceId(0));
    assert_eq!(comp.ops.len(), 1);
    assert_eq!(comp.ops[0].blend, BlendMode::Over);
}

#[test]
fn glow_compiles_under_base_with_blur() {
    let mut frame = GeometryFrame::new();
    let mut style = PathStyle::fill(Paint::Solid(Rgba::new(20, 30, 40, 1.0)));
    style.glow = Some(GlowSpec {
        color: Rgba::new(120, 200, 180, 0.3),
        blur_radius: 6,
        sigma: 3.0,
    });
    frame.push(square(), style);

    let plan = compile_frame(canvas(), &frame);

    // glow raw, glow blurred, base
    assert_eq!(plan.surfaces.len(), 4);

    let Pass::Scene(glow_scene) = &plan.passes[0] else {
        panic!("expected glow Scene first");
    };
    assert_eq!(glow_scene.target, SurfaceId(1));

    let Pass::Blur(blur) = &plan.passes[1] else {
        panic!("expected Blur pass");
    };
    assert_eq!(blur.input, SurfaceId(1));
    assert_eq!(blur.output, SurfaceId(2));
    assert_eq!(blur.radius_px, 6);

    let Pass::Composite(comp) = plan.passes.last().unwrap() else {
        panic!("expected trailing Composite");
    };
    // Blurred glow composites before the base layer.
    assert_eq!(comp.ops[0].src, SurfaceId(2));
    assert_eq!(comp.ops[0].blend, BlendMode::Over);
    assert_eq!(comp.ops[1].blend, BlendMode::Over);
}

#[test]
fn highlight_composites_additively_last() {
    let mut frame = GeometryFrame::new();
    let mut style = PathStyle::fill(Paint::Solid(Rgba::new(20, 30, 40, 1.0)));
    style.highlight = Some(HighlightSpec {
        color: Rgba::new(255, 255, 255, 0.4),
        width: 1.5,
    });
    frame.push(square(), style);

    let plan = compile_frame(canvas(), &frame);
    let Pass::Composite(comp) = plan.passes.last().unwrap() else {
        panic!("expected trailing Composite");
    };
    assert_eq!(comp.ops.len(), 2);
    let last = comp.ops.last().unwrap();
    assert_eq!(last.blend, BlendMode::Additive);

    // The highlight scene carries a stroke command, not a fill.
    let highlight_scene = plan
        .passes
        .iter()
        .filter_map(|p| match p {
            Pass::Scene(s) if s.target == last.src => Some(s),
            _ => None,
        })
        .next()
        .unwrap();
    assert!(matches!(
        highlight_scene.cmds[0],
        DrawCmd::StrokePath { .. }
    ));
}

#[test]
fn glow_and_highlight_alpha_is_applied_once() {
    let mut frame = GeometryFrame::new();
    let style = PathStyle {
        glow: Some(GlowSpec {
            color: Rgba::new(110, 60, 170, 0.28),
            blur_radius: 4,
            sigma: 2.0,
        }),
        highlight: Some(HighlightSpec {
            color: Rgba::new(235, 225, 255, 0.35),
            width: 2.0,
        }),
        ..PathStyle::default()
    };
    frame.push(square(), style);

    let plan = compile_frame(canvas(), &frame);
    let mut checked = 0;
    for pass in &plan.passes {
        let Pass::Scene(scene) = pass else { continue };
        match &scene.cmds[0] {
            DrawCmd::FillPath { paint, opacity, .. } => {
                // The color's alpha is the only attenuation.
                let Paint::Solid(c) = paint else {
                    panic!("expected solid glow paint");
                };
                assert!((c.a - 0.28).abs() < 1e-6);
                assert_eq!(*opacity, 1.0);
                checked += 1;
            }
            DrawCmd::StrokePath { paint, opacity, .. } => {
                let Paint::Solid(c) = paint else {
                    panic!("expected solid highlight paint");
                };
                assert!((c.a - 0.35).abs() < 1e-6);
                assert_eq!(*opacity, 1.0);
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 2);
}

#[test]
fn glow_layer_uses_widest_requested_kernel() {
    let mut frame = GeometryFrame::new();
    for radius in [3u32, 9, 5] {
        let style = PathStyle {
            glow: Some(GlowSpec {
                color: Rgba::new(100, 100, 100, 0.2),
                blur_radius: radius,
                sigma: radius as f32 / 2.0,
            }),
            ..PathStyle::default()
        };
        frame.push(square(), style);
    }

    let plan = compile_frame(canvas(), &frame);
    let Pass::Blur(blur) = &plan.passes[1] else {
        panic!("expected Blur pass");
    };
    assert_eq!(blur.radius_px, 9);
    assert!((blur.sigma - 4.5).abs() < 1e-6);
}

#[test]
fn execute_plan_visits_passes_in_order() {
    let mut frame = GeometryFrame::new();
    let mut style = PathStyle::fill(Paint::Solid(Rgba::new(20, 30, 40, 1.0)));
    style.glow = Some(GlowSpec {
        color: Rgba::new(120, 200, 180, 0.3),
        blur_radius: 4,
        sigma: 2.0,
    });
    style.highlight = Some(HighlightSpec {
        color: Rgba::new(255, 255, 255, 0.4),
        width: 1.0,
    });
    frame.push(square(), style);

    let plan = compile_frame(canvas(), &frame);
    let mut backend = RecordingBackend::default();
    execute_plan(&plan, &mut backend).unwrap();

    assert!(backend.log[0].starts_with("prepare"));
    assert!(backend.log[1].starts_with("scene"));
    assert!(backend.log[2].starts_with("blur"));
    assert!(backend.log[3].starts_with("scene"));
    assert!(backend.log[4].starts_with("scene"));
    assert!(backend.log[5].starts_with("composite"));
}

#[test]
fn styled_path_fields_survive_compilation() {
    let mut frame = GeometryFrame::new();
    frame.push(square(), PathStyle::stroke(Paint::Solid(Rgba::new(9, 9, 9, 1.0)), 2.5));
    let _ = StyledPath {
        path: square(),
        style: PathStyle::default(),
    };

    let plan = compile_frame(canvas(), &frame);
    let Pass::Scene(scene) = &plan.passes[0] else {
        panic!("expected Scene pass");
    };
    let DrawCmd::StrokePath { width, .. } = &scene.cmds[0] else {
        panic!("expected StrokePath");
    };
    assert_eq!(*width, 2.5);
}
