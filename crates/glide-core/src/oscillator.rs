//! Sinusoidal phase accumulator driving the pan sweep.
//!
//! Phase is kept in radians in `[0, 2π)` at double precision. The pan value
//! for a sample is read from the phase *before* it advances, so the first
//! sample after a reset always pans to the centre (`0.5`).

use core::f64::consts::TAU;

/// Low-frequency phase accumulator.
///
/// # Example
///
/// ```rust
/// use glide_core::PhaseAccumulator;
///
/// let mut osc = PhaseAccumulator::new();
/// osc.set_increment(1.0, 48000.0);
///
/// let first = osc.advance();
/// assert_eq!(first, 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseAccumulator {
    /// Current phase in radians, `[0, 2π)`.
    phase: f64,
    /// Radians per sample.
    increment: f64,
}

impl PhaseAccumulator {
    /// Create an accumulator at phase 0 with no increment.
    pub const fn new() -> Self {
        Self {
            phase: 0.0,
            increment: 0.0,
        }
    }

    /// Reset phase to 0. The increment is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Recompute the increment: `rate_hz * 2π / sample_rate`.
    ///
    /// A non-positive sample rate leaves the oscillator frozen.
    #[inline]
    pub fn set_increment(&mut self, rate_hz: f32, sample_rate: f64) {
        self.increment = if sample_rate > 0.0 {
            f64::from(rate_hz.max(0.0)) * TAU / sample_rate
        } else {
            0.0
        };
    }

    /// Radians per sample.
    #[inline]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Current phase in radians.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Pan value for the current phase, then advance by one sample.
    ///
    /// Returns `(sin(phase) + 1) / 2`, in `[0, 1]`. Wraparound subtracts
    /// 2π once, keeping the fractional overshoot.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        let pan = ((libm::sin(self.phase) + 1.0) * 0.5) as f32;
        self.phase += self.increment;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        pan
    }
}

/// Per-channel gains for a pan value.
///
/// `left = 1 - depth * pan`, `right = 1 - depth * (1 - pan)`.
///
/// The result is not clamped: with `depth > 1` the gains leave `[0, 1]`
/// and go negative (phase-inverted) or above unity.
#[inline]
pub fn pan_gains(pan: f32, depth: f32) -> (f32, f32) {
    (1.0 - depth * pan, 1.0 - depth * (1.0 - pan))
}
