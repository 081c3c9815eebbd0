use super::*;
use kurbo::Shape;

fn host() -> Rect {
    Rect::new(100.0, 100.0, 300.0, 200.0)
}

fn effect() -> HoverEffect {
    HoverEffect::new(HoverConfig::default())
}

#[test]
fn ring_has_configured_tendril_count() {
    let mut fx = effect();
    let frame = fx.compute_frame(host(), 0.0, 1.0 / 60.0);
    assert_eq!(frame.len(), 12);
}

#[test]
fn tendril_facing_pointer_reaches_further_than_opposed() {
    let center = Point::new(200.0, 150.0);

    // Pointer directly to the right of the host center.
    let mut fx = effect();
    fx.note_pointer(Some(Point::new(500.0, 150.0)));
    let frame = fx.compute_frame(host(), 0.0, 1.0 / 60.0);

    // Tendril 0 points right (angle 0), tendril 6 points left (angle pi).
    let right_extent = frame.paths[0]
        .path
        .bounding_box()
        .max_x()
        - center.x;
    let left_extent = center.x
        - frame.paths[6]
            .path
            .bounding_box()
            .min_x();
    assert!(
        right_extent > left_extent,
        "aligned tendril ({right_extent:.1}px) must out-reach the opposed one ({left_extent:.1}px)"
    );
}

#[test]
fn click_spawns_droplets_bounded_by_cap() {
    let mut fx = effect();
    for _ in 0..10 {
        fx.note_click(Point::new(200.0, 150.0));
    }
    // 120 spawned against a cap of 64.
    assert_eq!(fx.live_droplets(), 64);

    let frame = fx.compute_frame(host(), 0.0, 1.0 / 60.0);
    assert_eq!(frame.len(), 12 + 64);
}

#[test]
fn droplets_retire_with_age() {
    let mut fx = effect();
    fx.note_click(Point::new(200.0, 150.0));
    assert_eq!(fx.live_droplets(), 12);

    // Max lifetime is 1.1s; step well past it.
    for _ in 0..90 {
        fx.compute_frame(host(), 0.0, 1.0 / 30.0);
    }
    assert_eq!(fx.live_droplets(), 0);
}

#[test]
fn pointer_leave_drops_proximity_boost() {
    let mut fx = effect();
    fx.note_pointer(Some(Point::new(500.0, 150.0)));
    let hovered = fx.compute_frame(host(), 0.0, 1.0 / 60.0);

    fx.note_pointer(None);
    let idle = fx.compute_frame(host(), 0.0, 1.0 / 60.0);

    let hovered_reach = hovered.paths[0].path.bounding_box().max_x();
    let idle_reach = idle.paths[0].path.bounding_box().max_x();
    assert!(hovered_reach > idle_reach);
}
