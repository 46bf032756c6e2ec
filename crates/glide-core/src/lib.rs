//! Glide Core - real-time auto-pan engine
//!
//! This crate implements a stereo auto-pan ("glide"): a sinusoidal
//! low-frequency oscillator sweeps gain between the left and right channels,
//! controlled by two host-automatable parameters, Rate and Depth.
//!
//! # Core Abstractions
//!
//! - [`GlideParams`] - Lock-free parameter store shared with the control thread
//! - [`AtomicParam`] - One clamped, atomically-updated scalar slot
//! - [`PhaseAccumulator`] - Double-precision sine LFO phase in `[0, 2π)`
//! - [`AutoPan`] - The gain engine: per-block increment, per-sample gain
//!
//! ## Host Integration
//!
//! - [`AudioProcessor`] - Lifecycle trait a host adapter drives
//! - [`BusLayout`] / [`is_layout_supported`] - Mono/stereo, input mirrors output
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Parameter metadata for automation
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glide_core::{AutoPan, GlideParams};
//!
//! let params = Arc::new(GlideParams::new());
//! let mut glide = AutoPan::new(Arc::clone(&params));
//!
//! // Control thread
//! params.set_rate(2.0);
//! params.set_depth(0.8);
//!
//! // Audio thread
//! glide.on_start(48000.0, 256);
//! let mut left = vec![0.5; 256];
//! let mut right = vec![0.5; 256];
//! glide.process_stereo(&mut left, &mut right);
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! glide-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: `process` never allocates, locks, blocks, or logs
//! - **No host required**: the engine is constructible and testable standalone
//! - **Relaxed sharing**: parameters are atomic scalars, eventually consistent

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod engine;
pub mod oscillator;
pub mod param;
pub mod param_info;
pub mod processor;

// Re-export main types at crate root
pub use engine::{AutoPan, EngineState};
pub use oscillator::{PhaseAccumulator, pan_gains};
pub use param::{AtomicParam, GlideParams};
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit, ParameterInfo};
pub use processor::{AudioProcessor, BusLayout, ChannelSet, PluginInfo, is_layout_supported};
