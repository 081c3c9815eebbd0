use super::*;

fn effect() -> RevealEffect {
    RevealEffect::new(RevealConfig::default()).unwrap()
}

#[test]
fn params_null_uses_defaults() {
    let fx = RevealEffect::from_params(&serde_json::Value::Null).unwrap();
    assert!(!fx.is_finished());
}

#[test]
fn params_reject_unknown_fields() {
    let params = serde_json::json!({ "seeed": 3.0 });
    assert!(RevealEffect::from_params(&params).is_err());
}

#[test]
fn frame_is_empty_at_zero_progress() {
    let mut fx = effect();
    assert!(fx.compute_frame(0.0).is_empty());
}

#[test]
fn expanding_frame_has_layers_and_tendrils() {
    let mut fx = effect();
    let frame = fx.compute_frame(0.7);
    // 16 tendrils plus 4 blob layers.
    assert_eq!(frame.len(), 20);

    // Outermost layer carries the glow, innermost the sheen.
    let glows = frame.paths.iter().filter(|p| p.style.glow.is_some()).count();
    let sheens = frame
        .paths
        .iter()
        .filter(|p| p.style.highlight.is_some())
        .count();
    assert_eq!(glows, 1);
    assert_eq!(sheens, 1);
}

#[test]
fn phases_follow_the_expand_split_timeline() {
    let mut fx = effect();
    let dt = 1.0 / 60.0;
    let mut t = 0.0;

    // Through the 1.4s expanding phase.
    while t < 1.4 {
        fx.compute_frame(t);
        assert!(!fx.is_finished());
        t += dt;
    }

    // Splitting now: two masses plus strands instead of the tendril fringe.
    let frame = fx.compute_frame(1.4 + 0.6);
    let strands = frame
        .paths
        .iter()
        .filter(|p| p.style.stroke.is_some())
        .count();
    assert!(strands >= 5);
    assert!(!fx.is_finished());

    // Past expand + split the effect is done and produces nothing.
    while t < 1.4 + 1.2 + dt {
        fx.compute_frame(t);
        t += dt;
    }
    assert!(fx.is_finished());
    assert!(fx.compute_frame(t).is_empty());
}

#[test]
fn droplets_appear_late_in_the_split() {
    let mut fx = effect();
    fx.compute_frame(1.4); // enter splitting

    let early = fx.compute_frame(1.4 + 0.1).len();
    let late = fx.compute_frame(1.4 + 1.1).len();
    assert!(late > early, "drips should accumulate as the split widens");
}

#[test]
fn split_masses_stretch_along_the_separation_axis() {
    use crate::foundation::core::Shape;

    let mut fx = effect();
    fx.compute_frame(1.4); // enter splitting
    let frame = fx.compute_frame(1.4 + 1.08);

    // Masses render last; deep into the split each is wider than tall from
    // the directional stretch plus the vertical squash.
    assert!(frame.len() >= 2);
    for mass in &frame.paths[frame.len() - 2..] {
        let bbox = mass.path.bounding_box();
        assert!(
            bbox.width() > bbox.height() * 1.2,
            "mass should be stretched: w={} h={}",
            bbox.width(),
            bbox.height()
        );
    }
}

#[test]
fn same_seed_same_geometry() {
    let mut a = effect();
    let mut b = effect();
    assert_eq!(a.compute_frame(0.9), b.compute_frame(0.9));
}
