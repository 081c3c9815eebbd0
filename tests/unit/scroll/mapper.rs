use super::*;

#[test]
fn interpolation_hits_breakpoints_exactly() {
    let breaks = [0.0, 0.2, 0.8, 1.0];
    let outputs = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(interpolate(0.0, &breaks, &outputs), 0.0);
    assert_eq!(interpolate(0.2, &breaks, &outputs), 1.0);
    assert_eq!(interpolate(0.8, &breaks, &outputs), 1.0);
    assert_eq!(interpolate(1.0, &breaks, &outputs), 0.0);
}

#[test]
fn interpolation_is_linear_between_breakpoints() {
    let v = interpolate(0.1, &[0.0, 0.2], &[0.0, 1.0]);
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn re_evaluation_is_idempotent() {
    let breaks = [0.0, 0.3, 1.0];
    let outputs = [2.0, -1.0, 5.0];
    for i in 0..=100 {
        let f = f64::from(i) / 100.0;
        assert_eq!(
            interpolate(f, &breaks, &outputs),
            interpolate(f, &breaks, &outputs)
        );
    }
}

#[test]
fn output_never_overshoots_configured_range() {
    let breaks = [0.0, 0.25, 0.5, 1.0];
    let outputs = [0.0, 10.0, 3.0, 7.0];
    for i in 0..=1000 {
        let f = f64::from(i) / 1000.0;
        let v = interpolate(f, &breaks, &outputs);
        assert!((0.0..=10.0).contains(&v), "overshoot at {f}: {v}");
    }
}

#[test]
fn fraction_is_clamped_before_mapping() {
    let breaks = [0.0, 1.0];
    let outputs = [0.0, 100.0];
    assert_eq!(interpolate(-2.0, &breaks, &outputs), 0.0);
    assert_eq!(interpolate(2.0, &breaks, &outputs), 100.0);
}

#[test]
fn degenerate_breakpoints_degrade_gracefully() {
    assert_eq!(interpolate(0.5, &[], &[]), 0.0);
    assert_eq!(interpolate(0.5, &[0.0], &[42.0]), 42.0);
    // Mismatched lengths truncate to the shorter list.
    assert_eq!(interpolate(1.0, &[0.0, 1.0], &[0.0, 8.0, 9.0]), 8.0);
    // Unsorted lists are normalized rather than raised.
    let v = interpolate(0.5, &[1.0, 0.0], &[10.0, 0.0]);
    assert!((v - 5.0).abs() < 1e-12);
}

#[test]
fn fade_profile_holds_in_the_middle() {
    assert_eq!(fade_profile(0.5), 1.0);
    assert_eq!(fade_profile(0.0), 0.0);
    assert_eq!(fade_profile(1.0), 0.0);
}

#[test]
fn parallax_is_symmetric_around_the_midpoint() {
    assert_eq!(parallax_offset(0.0, 0.5), 50.0);
    assert_eq!(parallax_offset(1.0, 0.5), -50.0);
    assert_eq!(parallax_offset(0.5, 0.5), 0.0);
}

#[test]
fn scroll_binding_tracks_element_traversal() {
    // 600px viewport, 200px element at y=1000.
    let enter = ScrollBinding::from_viewport(1000.0, 200.0, 400.0, 600.0);
    assert_eq!(enter.fraction, 0.0);
    let past = ScrollBinding::from_viewport(1000.0, 200.0, 1200.0, 600.0);
    assert_eq!(past.fraction, 1.0);
    let mid = ScrollBinding::from_viewport(1000.0, 200.0, 800.0, 600.0);
    assert!((mid.fraction - 0.5).abs() < 1e-12);
}

#[test]
fn channel_lerp_endpoints() {
    let warm = [43.0, 74.0, 49.0];
    let cool = [220.0, 60.0, 45.0];
    assert_eq!(lerp_channels(warm, cool, 0.0), warm);
    assert_eq!(lerp_channels(warm, cool, 1.0), cool);
    let mid = lerp_channels(warm, cool, 0.5);
    assert!((mid[0] - 131.5).abs() < 1e-9);
}
