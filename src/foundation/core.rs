use crate::foundation::error::{BloomError, BloomResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape, Vec2};

/// Logical drawing surface size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting dimensions that exceed the rasterizer's
    /// `u16` surface limit.
    pub fn new(width: u32, height: u32) -> BloomResult<Self> {
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BloomError::validation("canvas dimensions exceed u16"));
        }
        Ok(Self { width, height })
    }

    /// Larger of the two dimensions, the reference length for radial effects.
    pub fn max_dim(self) -> f64 {
        f64::from(self.width.max(self.height))
    }

    /// Geometric center of the canvas.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// True when either dimension is zero and render ticks should be skipped.
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Straight (non-premultiplied) color with a fractional alpha.
///
/// Generated gradients fade stops in and out per tick, so alpha is kept as a
/// float and only quantized at the surface boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// Same color with alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn scaled_alpha(self, factor: f64) -> Self {
        Self {
            a: (self.a * factor as f32).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Alpha quantized to `u8`.
    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Channel-wise linear interpolation toward `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0) as f32;
        let ch = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.alpha_u8())
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Premultiplied red channel.
    pub r: u8,
    /// Premultiplied green channel.
    pub g: u8,
    /// Premultiplied blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent pixel.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply straight RGBA8 channels.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}
