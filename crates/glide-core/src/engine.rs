//! Auto-pan gain engine.
//!
//! [`AutoPan`] owns the phase accumulator and applies a sinusoidal
//! left/right gain sweep to a block of audio in place.
//!
//! ## Timing contract
//!
//! - The phase increment is computed once per block from a single Rate
//!   snapshot. A Rate change mid-block takes effect on the next block.
//! - Depth is read fresh for every sample, so Depth automation is
//!   sample-accurate.
//! - Phase carries across blocks and is reset only by
//!   [`on_start`](AutoPan::on_start) or [`reset`](AutoPan::reset).
//!   Splitting a stream into blocks of any size yields the same output.
//!
//! ## Unprepared engines
//!
//! Before the first successful `on_start`, [`process`](AutoPan::process)
//! passes audio through unmodified (output-only channels are still
//! zero-filled).

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use crate::oscillator::{PhaseAccumulator, pan_gains};
use crate::param::GlideParams;
use crate::processor::{AudioProcessor, PluginInfo};

/// Lifecycle state of an [`AutoPan`] engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineState {
    /// No `on_start` yet: `process` is a pass-through.
    Unprepared,
    /// Ready to process at the recorded sample rate.
    Prepared {
        /// Active sample rate in Hz.
        sample_rate: f64,
        /// Largest block the host announced.
        max_block_size: usize,
    },
}

/// Stereo auto-pan: a sine LFO sweeping gain between channels.
///
/// Channel 0 gets `1 - depth * pan`, every other channel gets
/// `1 - depth * (1 - pan)`, where `pan = (sin(phase) + 1) / 2`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use glide_core::{AutoPan, GlideParams};
///
/// let params = Arc::new(GlideParams::new());
/// let mut glide = AutoPan::new(Arc::clone(&params));
/// glide.on_start(48000.0, 512);
///
/// let mut left = vec![1.0; 512];
/// let mut right = vec![1.0; 512];
/// glide.process_stereo(&mut left, &mut right);
///
/// // First frame sits at the centre of the sweep.
/// assert_eq!(left[0], 0.5);
/// assert_eq!(right[0], 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct AutoPan {
    params: Arc<GlideParams>,
    osc: PhaseAccumulator,
    state: EngineState,
}

impl AutoPan {
    /// Create an unprepared engine reading from `params`.
    pub fn new(params: Arc<GlideParams>) -> Self {
        Self {
            params,
            osc: PhaseAccumulator::new(),
            state: EngineState::Unprepared,
        }
    }

    /// Prepare for playback at `sample_rate`.
    ///
    /// Always resets phase to 0. A sample rate that is not finite or not
    /// above [`GlideParams::MAX`] leaves the engine unprepared.
    pub fn on_start(&mut self, sample_rate: f64, max_block_size: usize) {
        self.osc.reset();

        if Self::accepts_sample_rate(sample_rate) {
            self.osc.set_increment(self.params.rate(), sample_rate);
            self.state = EngineState::Prepared {
                sample_rate,
                max_block_size,
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(sample_rate, max_block_size, "autopan prepared");
        } else {
            self.state = EngineState::Unprepared;
            #[cfg(feature = "tracing")]
            tracing::warn!(sample_rate, "autopan: invalid sample rate, staying unprepared");
        }
    }

    /// Whether `sample_rate` keeps the per-sample increment below 2π at the
    /// highest Rate, so a single wrap per sample stays in `[0, 2π)`.
    pub fn accepts_sample_rate(sample_rate: f64) -> bool {
        sample_rate.is_finite() && sample_rate > f64::from(GlideParams::MAX)
    }

    /// Reset phase to 0 without changing the prepared sample rate.
    pub fn reset(&mut self) {
        self.osc.reset();
    }

    /// Apply the auto-pan to one block in place.
    ///
    /// `channels[..input_channels]` carry input audio. Channels at
    /// `input_channels..` exist only as outputs and are zero-filled before
    /// the gain pass. The block length is the shortest channel slice.
    pub fn process(&mut self, channels: &mut [&mut [f32]], input_channels: usize) {
        let input_channels = input_channels.min(channels.len());
        for channel in channels[input_channels..].iter_mut() {
            channel.fill(0.0);
        }

        let EngineState::Prepared { sample_rate, .. } = self.state else {
            return;
        };

        self.osc.set_increment(self.params.rate(), sample_rate);

        let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
        for frame in 0..frames {
            let pan = self.osc.advance();
            let (left, right) = pan_gains(pan, self.params.depth());

            if let Some((first, rest)) = channels.split_first_mut() {
                first[frame] *= left;
                for channel in rest.iter_mut() {
                    channel[frame] *= right;
                }
            }
        }
    }

    /// Convenience wrapper for a stereo pair.
    pub fn process_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        let mut channels = [left, right];
        self.process(&mut channels, 2);
    }

    /// Convenience wrapper for a single channel.
    ///
    /// A mono stream only ever sees the left-channel gain.
    pub fn process_mono(&mut self, buffer: &mut [f32]) {
        let mut channels = [buffer];
        self.process(&mut channels, 1);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether `on_start` has succeeded.
    pub fn is_prepared(&self) -> bool {
        matches!(self.state, EngineState::Prepared { .. })
    }

    /// Active sample rate, if prepared.
    pub fn sample_rate(&self) -> Option<f64> {
        match self.state {
            EngineState::Prepared { sample_rate, .. } => Some(sample_rate),
            EngineState::Unprepared => None,
        }
    }

    /// Oscillator phase in radians, `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.osc.phase()
    }

    /// Radians per sample used for the most recent block.
    pub fn phase_increment(&self) -> f64 {
        self.osc.increment()
    }

    /// Shared parameter store.
    pub fn params(&self) -> &Arc<GlideParams> {
        &self.params
    }
}

impl AudioProcessor for AutoPan {
    fn name(&self) -> &'static str {
        PluginInfo::GLIDE.name
    }

    fn supports_sample_rate(&self, sample_rate: f64) -> bool {
        Self::accepts_sample_rate(sample_rate)
    }

    fn prepare(&mut self, sample_rate: f64, max_block_size: usize) {
        self.on_start(sample_rate, max_block_size);
    }

    fn process_block(&mut self, channels: &mut [&mut [f32]], input_channels: usize) {
        self.process(channels, input_channels);
    }
}
