//! Seeded scalar noise used for reproducible organic irregularity.
//!
//! Geometry that must look the same across re-renders of the same instance
//! (vein dividers, blob octave phases) samples [`NoiseField`] exclusively.
//! True one-shot randomness (click-splash velocities, idle splatter
//! placement) goes through [`Rng64`] instead.

/// Deterministic seed-keyed scalar field.
///
/// `sample` is a hashed sinusoid: `frac(sin(seed*A + index*B) * C)` with the
/// usual shader constants. Adjacent indices decorrelate strongly, which is
/// what makes the output read as organic jitter rather than a smooth wave.
#[derive(Clone, Copy, Debug)]
pub struct NoiseField {
    seed: f64,
}

impl NoiseField {
    /// Create a field for one animation instance.
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// The seed this field was created with.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Deterministic sample in `[0, 1)`.
    ///
    /// Total over all finite inputs: a non-finite intermediate (overflowing
    /// seed/index products) collapses to `0.0` instead of propagating NaN.
    pub fn sample(&self, index: f64) -> f64 {
        let x = (self.seed * 127.1 + index * 311.7).sin() * 43758.5453;
        let v = x - x.floor();
        if v.is_finite() { v.clamp(0.0, 0.999_999_9) } else { 0.0 }
    }

    /// Sample remapped into `[lo, lo + span)`.
    pub fn sample_range(&self, index: f64, lo: f64, span: f64) -> f64 {
        lo + self.sample(index) * span
    }

    /// Sample remapped into `(-amp, amp)`, centered on zero.
    pub fn sample_signed(&self, index: f64, amp: f64) -> f64 {
        (self.sample(index) * 2.0 - 1.0) * amp
    }
}

/// SplitMix64 generator for transient effects that may reshuffle per trigger.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed the generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Next value in `[lo, hi)`.
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64_01() * (hi - lo)
    }
}
