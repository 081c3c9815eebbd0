use super::*;

#[test]
fn offsets_vanish_at_both_scroll_extremes() {
    let fx = FabricEffect::new(FabricConfig::default());
    for offset in fx.slice_offsets(ScrollBinding::new(0.0), 1.7) {
        assert!(offset.abs() < 1e-9);
    }
    for offset in fx.slice_offsets(ScrollBinding::new(1.0), 1.7) {
        assert!(offset.abs() < 1e-9);
    }
}

#[test]
fn offsets_peak_at_mid_scroll_within_bounds() {
    let fx = FabricEffect::new(FabricConfig::default());
    let offsets = fx.slice_offsets(ScrollBinding::new(0.5), 2.3);
    assert_eq!(offsets.len(), 60);

    let max = offsets.iter().fold(0.0f64, |m, o| m.max(o.abs()));
    assert!(max > 0.5, "mid-scroll warp should be visible");
    assert!(max <= 6.0 + 1e-9, "never exceeds the configured peak");
}

#[test]
fn zero_slices_clamps_to_one() {
    let fx = FabricEffect::new(FabricConfig {
        slices: 0,
        peak: 6.0,
    });
    assert_eq!(fx.slices(), 1);
    assert_eq!(fx.slice_offsets(ScrollBinding::new(0.5), 0.0).len(), 1);
}

#[test]
fn warp_rows_shifts_a_slice_and_clears_vacated_pixels() {
    // 4x2 image, single slice shifted +1.
    let w = 4u32;
    let h = 2u32;
    let mut src = vec![0u8; (w * h * 4) as usize];
    // Mark pixel (0, 0) and (3, 1).
    src[0..4].copy_from_slice(&[10, 20, 30, 255]);
    let last = ((1 * w + 3) * 4) as usize;
    src[last..last + 4].copy_from_slice(&[40, 50, 60, 255]);

    let mut dst = vec![0xAAu8; src.len()];
    warp_rows(&src, &mut dst, w, h, &[1.0]).unwrap();

    // (0,0) moved to (1,0); (3,1) shifted off the right edge.
    assert_eq!(&dst[4..8], &[10, 20, 30, 255]);
    assert_eq!(&dst[0..4], &[0, 0, 0, 0]);
    assert!(dst[last..last + 4].iter().all(|&b| b == 0));
}

#[test]
fn warp_rows_rejects_mismatched_buffers() {
    let src = vec![0u8; 16];
    let mut dst = vec![0u8; 12];
    assert!(warp_rows(&src, &mut dst, 2, 2, &[0.0]).is_err());
}

#[test]
fn empty_offsets_copy_through() {
    let src = vec![7u8; 16];
    let mut dst = vec![0u8; 16];
    warp_rows(&src, &mut dst, 2, 2, &[]).unwrap();
    assert_eq!(dst, src);
}
