use super::*;

const CURVES: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::OutExpo,
];

#[test]
fn endpoints_are_fixed() {
    for ease in CURVES {
        assert!(ease.apply(0.0).abs() < 1e-3, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-3, "{ease:?} at 1");
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in CURVES {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev - 1e-12, "{ease:?} dipped at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_of_range_inputs_are_clamped() {
    for ease in CURVES {
        assert_eq!(ease.apply(-5.0), ease.apply(0.0));
        assert_eq!(ease.apply(5.0), ease.apply(1.0));
    }
}

#[test]
fn out_quart_leads_out_cubic() {
    // Steeper launch: quartic ease-out overtakes cubic early on.
    assert!(Ease::OutQuart.apply(0.3) > Ease::OutCubic.apply(0.3));
}
