//! Scroll-coupled parameter mapping.
//!
//! Converts a normalized viewport-intersection fraction into animation-facing
//! scalars via piecewise-linear interpolation over breakpoints. Invalid
//! breakpoint configurations are normalized defensively instead of raised:
//! visual degradation beats a crash in a decorative layer.

use crate::foundation::core::Rgba;

/// Piecewise-linear interpolation of `fraction` over `(breaks, outputs)`.
///
/// `fraction` is clamped to `[0, 1]` first. Breakpoints are expected to be
/// strictly increasing within `[0, 1]` and the same length as `outputs`;
/// violations degrade gracefully: mismatched lengths are truncated to the
/// shorter list, an unsorted list is sorted pairwise, and fewer than two
/// usable pairs returns the single output (or `0.0` when there is none).
/// For in-range inputs the result never overshoots the configured outputs.
pub fn interpolate(fraction: f64, breaks: &[f64], outputs: &[f64]) -> f64 {
    let n = breaks.len().min(outputs.len());
    match n {
        0 => return 0.0,
        1 => return outputs[0],
        _ => {}
    }

    let fraction = fraction.clamp(0.0, 1.0);

    let sorted = breaks[..n].windows(2).all(|w| w[0] <= w[1]);
    if sorted {
        return interpolate_sorted(fraction, &breaks[..n], &outputs[..n]);
    }

    let mut pairs: Vec<(f64, f64)> = breaks[..n]
        .iter()
        .copied()
        .zip(outputs[..n].iter().copied())
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    let (b, o): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    interpolate_sorted(fraction, &b, &o)
}

fn interpolate_sorted(fraction: f64, breaks: &[f64], outputs: &[f64]) -> f64 {
    if fraction <= breaks[0] {
        return outputs[0];
    }
    if fraction >= breaks[breaks.len() - 1] {
        return outputs[outputs.len() - 1];
    }
    for w in 0..breaks.len() - 1 {
        let (b0, b1) = (breaks[w], breaks[w + 1]);
        if fraction <= b1 {
            let span = b1 - b0;
            if span <= 0.0 {
                return outputs[w + 1];
            }
            let t = (fraction - b0) / span;
            return outputs[w] + (outputs[w + 1] - outputs[w]) * t;
        }
    }
    outputs[outputs.len() - 1]
}

/// The standard fade profile: in over the first fifth, hold, out over the
/// last fifth.
pub fn fade_profile(fraction: f64) -> f64 {
    interpolate(fraction, &[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])
}

/// Parallax offset for an element at `fraction` through the viewport:
/// `+speed*100` on entry easing to `-speed*100` on exit.
pub fn parallax_offset(fraction: f64, speed: f64) -> f64 {
    interpolate(fraction, &[0.0, 1.0], &[speed * 100.0, -speed * 100.0])
}

/// Channel-wise lerp of two color-channel triples (HSL or RGB alike).
pub fn lerp_channels(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Channel-wise lerp between two endpoint colors, for the page-scroll
/// ambient color temperature.
pub fn lerp_color(a: Rgba, b: Rgba, t: f64) -> Rgba {
    a.lerp(b, t)
}

/// Normalized scroll progress of one element through the viewport.
///
/// `0` = the element's leading edge at the viewport's trailing edge (just
/// entering), `1` = the element's trailing edge at the viewport's leading
/// edge (fully scrolled past). Owned by the host page; read-only input to
/// the generators.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollBinding {
    /// Intersection fraction in `[0, 1]`.
    pub fraction: f64,
}

impl ScrollBinding {
    /// Wrap a host-computed fraction, clamping it.
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    /// Derive the fraction from element and viewport geometry (all in page
    /// coordinates, y growing downward).
    pub fn from_viewport(
        element_top: f64,
        element_height: f64,
        scroll_y: f64,
        viewport_height: f64,
    ) -> Self {
        let traversal = viewport_height + element_height.max(0.0);
        if traversal <= 0.0 {
            return Self::new(0.0);
        }
        let viewport_bottom = scroll_y + viewport_height;
        Self::new((viewport_bottom - element_top) / traversal)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
