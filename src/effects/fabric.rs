//! Scroll-coupled fabric warp.
//!
//! The canvas is cut into horizontal slices; each slice shifts sideways by a
//! sum of two sine terms whose overall amplitude follows `sin(fraction * pi)`
//! of the element's scroll fraction, so the warp is strongest while the
//! element crosses the viewport middle and settles flat at both extremes.
//! Offset computation is pure; [`warp_rows`] applies it to raw pixel rows.

use std::f64::consts::PI;

use tracing::instrument;

use crate::{
    effects::parse_config,
    foundation::error::{BloomError, BloomResult},
    scroll::mapper::ScrollBinding,
};

/// Fabric warp configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FabricConfig {
    /// Horizontal slice count.
    pub slices: usize,
    /// Peak displacement in pixels at mid-scroll.
    pub peak: f64,
}

impl Default for FabricConfig {
    fn default() -> Self {
        Self {
            slices: 60,
            peak: 6.0,
        }
    }
}

/// Fabric warp instance.
#[derive(Clone, Debug)]
pub struct FabricEffect {
    config: FabricConfig,
}

impl FabricEffect {
    /// Build a warp.
    pub fn new(config: FabricConfig) -> Self {
        let config = FabricConfig {
            slices: config.slices.max(1),
            ..config
        };
        Self { config }
    }

    /// Build from host JSON params.
    pub fn from_params(params: &serde_json::Value) -> BloomResult<Self> {
        Ok(Self::new(parse_config(params)?))
    }

    /// Slice count after clamping.
    pub fn slices(&self) -> usize {
        self.config.slices
    }

    /// Horizontal offset of every slice at this scroll position and time.
    #[instrument(level = "trace", skip(self))]
    pub fn slice_offsets(&self, binding: ScrollBinding, time: f64) -> Vec<f64> {
        let amp = (binding.fraction * PI).sin() * self.config.peak;
        (0..self.config.slices)
            .map(|i| {
                let fi = i as f64;
                let wave = (fi * 0.18 + time * 1.3).sin() * 0.6 + (fi * 0.07 + time * 0.8).sin() * 0.4;
                wave * amp
            })
            .collect()
    }
}

/// Shift each horizontal slice of a premultiplied RGBA8 buffer sideways.
///
/// Rows inside slice `i` move by `round(offsets[i])` pixels; pixels shifted
/// past the edge are discarded and vacated pixels become transparent.
pub fn warp_rows(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    offsets: &[f64],
) -> BloomResult<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BloomError::render("warp buffer size overflow"))?;
    if src.len() != expected || dst.len() != expected {
        return Err(BloomError::render(
            "warp_rows expects buffers matching width*height*4",
        ));
    }
    if offsets.is_empty() {
        dst.copy_from_slice(src);
        return Ok(());
    }

    let w = width as usize;
    let rows_per_slice = (height as usize).div_ceil(offsets.len());

    for y in 0..height as usize {
        let slice = (y / rows_per_slice.max(1)).min(offsets.len() - 1);
        let shift = offsets[slice].round() as isize;

        let row_src = &src[y * w * 4..(y + 1) * w * 4];
        let row_dst = &mut dst[y * w * 4..(y + 1) * w * 4];
        row_dst.fill(0);

        for x in 0..w {
            let tx = x as isize + shift;
            if tx < 0 || tx >= w as isize {
                continue;
            }
            let tx = tx as usize;
            row_dst[tx * 4..tx * 4 + 4].copy_from_slice(&row_src[x * 4..x * 4 + 4]);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fabric.rs"]
mod tests;
