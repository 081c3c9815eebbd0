//! Gaussian blur for the glow layer.
//!
//! The compositor emits one blur pass per frame with the same radius and
//! sigma, so the kernel is a value the backend builds once and reapplies:
//! [`GlowKernel`] holds Q16 integer taps summing to exactly `1 << 16`,
//! keeping both passes in integer arithmetic (deterministic across
//! platforms) and conserving premultiplied coverage. Glow surfaces are
//! mostly transparent, so each pass skips source lines with no coverage.

use crate::foundation::error::{BloomError, BloomResult};

const Q16_ONE: i64 = 1 << 16;

/// Precomputed separable gaussian kernel for glow blurring.
#[derive(Clone, Debug)]
pub struct GlowKernel {
    taps: Vec<u32>,
    radius: u32,
    sigma: f32,
}

impl GlowKernel {
    /// Build a kernel with `2 * radius + 1` taps.
    pub fn new(radius: u32, sigma: f32) -> BloomResult<Self> {
        if radius == 0 {
            return Ok(Self {
                taps: vec![Q16_ONE as u32],
                radius: 0,
                sigma,
            });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(BloomError::validation("glow sigma must be finite and > 0"));
        }

        let r = i64::from(radius);
        let s = f64::from(sigma);
        let weight = |i: i64| {
            let x = i as f64;
            (-(x * x) / (2.0 * s * s)).exp()
        };
        let total: f64 = (-r..=r).map(weight).sum();

        // Quantize by rounding the running sum, diffusing the rounding error
        // across the taps instead of dumping it on the center.
        let mut taps = Vec::with_capacity((2 * r + 1) as usize);
        let mut running = 0.0f64;
        let mut emitted: i64 = 0;
        for i in -r..=r {
            running += weight(i) / total * Q16_ONE as f64;
            let tap = (running.round() as i64 - emitted).clamp(0, Q16_ONE);
            taps.push(tap as u32);
            emitted += tap;
        }
        if emitted != Q16_ONE {
            let mid = r as usize;
            taps[mid] = (i64::from(taps[mid]) + Q16_ONE - emitted).clamp(1, Q16_ONE) as u32;
        }

        Ok(Self {
            taps,
            radius,
            sigma,
        })
    }

    /// Kernel radius in pixels.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Sigma the kernel was built with.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Blur a `width * height * 4` premultiplied RGBA8 buffer.
    pub fn apply(&self, src: &[u8], width: u32, height: u32) -> BloomResult<Vec<u8>> {
        let len = surface_len(width, height)?;
        if src.len() != len {
            return Err(BloomError::render("glow blur src must be width*height*4"));
        }
        if self.radius == 0 || len == 0 {
            return Ok(src.to_vec());
        }

        let mut tmp = vec![0u8; len];
        let mut out = vec![0u8; len];
        // Horizontal: one line per row, samples 4 bytes apart.
        blur_axis(
            &self.taps,
            src,
            &mut tmp,
            Lines {
                count: height as usize,
                len: width as usize,
                line_stride: width as usize * 4,
                sample_stride: 4,
            },
        );
        // Vertical: one line per column, samples a full row apart.
        blur_axis(
            &self.taps,
            &tmp,
            &mut out,
            Lines {
                count: width as usize,
                len: height as usize,
                line_stride: 4,
                sample_stride: width as usize * 4,
            },
        );
        Ok(out)
    }
}

/// One-shot blur of a premultiplied RGBA8 buffer.
///
/// The radius is clamped to the longer surface side; with clamp-to-edge
/// sampling, taps beyond that only resample the border pixels.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> BloomResult<Vec<u8>> {
    let radius = radius.min(width.max(height));
    GlowKernel::new(radius, sigma)?.apply(src, width, height)
}

fn surface_len(width: u32, height: u32) -> BloomResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| BloomError::render("glow surface size overflow"))
}

struct Lines {
    count: usize,
    len: usize,
    line_stride: usize,
    sample_stride: usize,
}

fn blur_axis(taps: &[u32], src: &[u8], dst: &mut [u8], lines: Lines) {
    let radius = (taps.len() / 2) as isize;
    let last = lines.len as isize - 1;
    for line in 0..lines.count {
        let base = line * lines.line_stride;

        // Premultiplied input: zero alpha means zero everywhere, and dst is
        // already zeroed, so an uncovered source line needs no work.
        let covered = (0..lines.len).any(|i| src[base + i * lines.sample_stride + 3] != 0);
        if !covered {
            continue;
        }

        for i in 0..=last {
            let mut acc = [0u64; 4];
            for (t, &w) in taps.iter().enumerate() {
                let s = (i + t as isize - radius).clamp(0, last) as usize;
                let px = base + s * lines.sample_stride;
                for c in 0..4 {
                    acc[c] += u64::from(w) * u64::from(src[px + c]);
                }
            }
            let px = base + i as usize * lines.sample_stride;
            for c in 0..4 {
                dst[px + c] = ((acc[c] + (1 << 15)) >> 16).min(255) as u8;
            }
        }
    }
}
