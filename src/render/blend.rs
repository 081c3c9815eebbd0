//! Premultiplied-RGBA8 pixel blending.
//!
//! `over` is the only blend used for base fills; `additive` is reserved for
//! specular highlight passes so stacked dark shapes never double-darken.

use crate::foundation::error::{BloomError, BloomResult};

/// One premultiplied pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over one pixel onto `dst` with an extra opacity factor.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Additive (plus-lighter) blend of one pixel onto `dst`.
pub fn additive(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }
    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let sc = mul_div255(u16::from(src[i]), op);
        out[i] = add_sat_u8(dst[i], sc);
    }
    out
}

/// Source-over an entire buffer in place.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> BloomResult<()> {
    check_buffers(dst, src)?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Additively blend an entire buffer in place.
pub fn additive_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> BloomResult<()> {
    check_buffers(dst, src)?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = additive([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn check_buffers(dst: &[u8], src: &[u8]) -> BloomResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BloomError::render(
            "blend expects equal-length rgba8 buffers",
        ));
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}
