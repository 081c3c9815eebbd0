use super::*;

#[test]
fn field_fills_to_target_count_and_stays_there() {
    let mut field = AmbientField::new(AmbientConfig::default());
    assert_eq!(field.live(), 0);

    field.compute_frame(1.0 / 60.0);
    assert_eq!(field.live(), 24);

    // Run long enough for many motes to retire and respawn.
    for _ in 0..2000 {
        field.compute_frame(1.0 / 30.0);
    }
    assert_eq!(field.live(), 24);
}

#[test]
fn motes_drift_upward() {
    let mut field = AmbientField::new(AmbientConfig::default());
    field.compute_frame(0.0);
    let before: f64 = field.pool_mean_y();

    for _ in 0..60 {
        field.compute_frame(1.0 / 60.0);
    }
    let after: f64 = field.pool_mean_y();
    assert!(after < before, "mean y should decrease ({after:.1} vs {before:.1})");
}

#[test]
fn frame_skips_fully_faded_motes() {
    let mut field = AmbientField::new(AmbientConfig::default());
    let frame = field.compute_frame(0.0);
    // Fresh motes sit at life 0 where the fade profile is 0.
    assert!(frame.len() < field.live());
}

impl AmbientField {
    fn pool_mean_y(&self) -> f64 {
        let (sum, n) = self
            .pool
            .iter()
            .fold((0.0, 0usize), |(s, n), p| (s + p.position.y, n + 1));
        sum / n.max(1) as f64
    }
}
