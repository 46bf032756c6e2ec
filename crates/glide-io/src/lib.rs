//! Audio I/O layer for the glide auto-pan.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav_channels`] and [`write_wav_channels`] keep
//!   every channel separate (no mixdown), so stereo panning survives a round trip
//! - **Offline rendering**: [`OfflineRenderer`] drives an [`AutoPan`](glide_core::AutoPan)
//!   the way a host does: prepare once, then fixed-size blocks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use glide_core::{AutoPan, GlideParams};
//! use glide_io::{OfflineRenderer, read_wav_channels, write_wav_channels};
//!
//! let (mut channels, spec) = read_wav_channels("input.wav")?;
//! let inputs = channels.len();
//!
//! let params = Arc::new(GlideParams::new());
//! let mut renderer = OfflineRenderer::new(AutoPan::new(params), 512)?;
//! renderer.render(&mut channels, inputs, spec.sample_rate as f64)?;
//!
//! write_wav_channels("output.wav", &channels, spec)?;
//! ```

mod render;
mod wav;

pub use render::OfflineRenderer;
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav_channels, read_wav_info, write_wav_channels};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Channel buffers do not agree in length or count.
    #[error("Channel mismatch: {0}")]
    ChannelMismatch(String),

    /// Block size must be at least one frame.
    #[error("Invalid block size: {0}")]
    InvalidBlockSize(usize),

    /// Sample rate the processor cannot run at.
    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(f64),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
