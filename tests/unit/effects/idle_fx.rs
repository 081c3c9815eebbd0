use super::*;

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

#[test]
fn stays_quiet_before_timeout() {
    let start = Instant::now();
    let mut fx = IdleFxEffect::new(IdleFxConfig::default(), start);

    let frame = fx.compute_frame(at(start, 4999));
    assert!(!fx.is_idle(at(start, 4999)));
    assert!(frame.is_empty());
    assert_eq!(fx.splatter_count(), 0);
}

#[test]
fn idle_scenario_spawns_one_splatter_after_interval() {
    let start = Instant::now();
    let mut fx = IdleFxEffect::new(IdleFxConfig::default(), start);

    // 5000ms quiet: idle, but the first 3000ms interval has not elapsed.
    fx.compute_frame(at(start, 5000));
    assert!(fx.is_idle(at(start, 5000)));
    assert_eq!(fx.splatter_count(), 0);

    // 5000 + 3000: exactly one splatter (and its ripple).
    let frame = fx.compute_frame(at(start, 8000));
    assert_eq!(fx.splatter_count(), 1);
    // splatter fill + ripple stroke
    assert_eq!(frame.len(), 2);
}

#[test]
fn activity_resets_the_countdown() {
    let start = Instant::now();
    let mut fx = IdleFxEffect::new(IdleFxConfig::default(), start);

    fx.compute_frame(at(start, 4000));
    fx.note_activity(at(start, 4500));
    fx.compute_frame(at(start, 8000));

    assert!(!fx.is_idle(at(start, 8000)));
    assert_eq!(fx.splatter_count(), 0);
    assert!(fx.is_idle(at(start, 9500)));
}

#[test]
fn splatter_history_is_bounded_most_recent_kept() {
    let start = Instant::now();
    let mut fx = IdleFxEffect::new(IdleFxConfig::default(), start);

    // Poll once per interval for long enough to spawn 9 times.
    for i in 0..9u64 {
        fx.compute_frame(at(start, 5000 + (i + 1) * 3000));
    }
    assert_eq!(fx.splatter_count(), 5);
}

#[test]
fn ripples_expand_then_expire() {
    let start = Instant::now();
    let cfg = IdleFxConfig {
        splatter_history: 0,
        ..IdleFxConfig::default()
    };
    let mut fx = IdleFxEffect::new(cfg, start);

    fx.compute_frame(at(start, 8000));
    let young = fx.compute_frame(at(start, 8100));
    assert_eq!(young.len(), 1);

    // Break idleness so the final poll cannot spawn a fresh ring.
    fx.note_activity(at(start, 8200));

    // After ripple_secs (8s) the ring is gone.
    let old = fx.compute_frame(at(start, 8000 + 8100));
    assert!(old.paths.iter().all(|p| p.style.stroke.is_none()));
}
