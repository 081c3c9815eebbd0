use super::*;
use crate::foundation::core::Shape;

fn effect() -> DividerEffect {
    DividerEffect::new(DividerConfig::default())
}

#[test]
fn offscreen_divider_draws_nothing() {
    let fx = effect();
    assert!(fx.compute_frame(ScrollBinding::new(0.0), 0.0).is_empty());
    assert!(fx.compute_frame(ScrollBinding::new(1.0), 0.0).is_empty());
}

#[test]
fn reveal_grows_with_scroll() {
    let fx = effect();
    let quarter = fx.compute_frame(ScrollBinding::new(0.15), 0.0);
    let half = fx.compute_frame(ScrollBinding::new(0.3), 0.0);

    let qx = quarter.paths[0].path.bounding_box().max_x();
    let hx = half.paths[0].path.bounding_box().max_x();
    assert!(hx > qx, "reveal front must advance with scroll ({hx:.1} vs {qx:.1})");
}

#[test]
fn fully_scrolled_in_shows_the_whole_network() {
    let fx = effect();
    let frame = fx.compute_frame(ScrollBinding::new(0.6), 0.0);

    // Primary stroke + branch strokes + pulse node fills.
    let strokes = frame.paths.iter().filter(|p| p.style.stroke.is_some()).count();
    let fills = frame.paths.iter().filter(|p| p.style.fill.is_some()).count();
    assert!(strokes >= 5);
    assert!(fills >= 1);
}

#[test]
fn opacity_follows_the_fade_profile() {
    let fx = effect();
    let mid = fx.compute_frame(ScrollBinding::new(0.5), 0.0);
    let edge = fx.compute_frame(ScrollBinding::new(0.1), 0.0);

    let alpha_of = |frame: &GeometryFrame| match &frame.paths[0].style.stroke {
        Some(stroke) => match &stroke.paint {
            Paint::Solid(c) => c.a,
            _ => panic!("divider strokes are solid"),
        },
        None => panic!("expected a stroke"),
    };
    assert!((alpha_of(&mid) - 1.0).abs() < 1e-6);
    assert!(alpha_of(&edge) < 1.0);
}

#[test]
fn frames_are_deterministic_for_a_fixed_time() {
    let fx = effect();
    let a = fx.compute_frame(ScrollBinding::new(0.4), 1.25);
    let b = fx.compute_frame(ScrollBinding::new(0.4), 1.25);
    assert_eq!(a, b);
}

#[test]
fn pulse_nodes_throb_over_time() {
    let fx = effect();
    let a = fx.compute_frame(ScrollBinding::new(0.6), 0.0);
    let b = fx.compute_frame(ScrollBinding::new(0.6), 0.7);
    assert_ne!(a, b);
}
