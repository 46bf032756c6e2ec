//! Lock-free parameter store shared between the control and audio threads.
//!
//! Each parameter lives in an [`AtomicParam`]: an `f32` bit-cast into an
//! `AtomicU32`. The control thread (host automation, UI) writes, the audio
//! thread reads. Loads and stores use `Relaxed` ordering: a reader sees
//! either the old or the new value, never a torn one, but there is no
//! ordering between the two parameters. The store is eventually
//! consistent, not linearizable.
//!
//! ```rust
//! use std::sync::Arc;
//! use glide_core::{GlideParams, ParamId};
//!
//! let params = Arc::new(GlideParams::new());
//! let ui = Arc::clone(&params);
//!
//! ui.set(GlideParams::RATE_ID, 4.0);
//! assert_eq!(params.rate(), 4.0);
//!
//! // Writes outside the range are clamped, never rejected.
//! ui.set_depth(42.0);
//! assert_eq!(params.depth(), 10.0);
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use crate::param_info::{ParamDescriptor, ParamId, ParameterInfo};

/// A single host-automatable scalar backed by an atomic slot.
#[derive(Debug)]
pub struct AtomicParam {
    descriptor: ParamDescriptor,
    bits: AtomicU32,
}

impl AtomicParam {
    /// Create a slot initialized to the descriptor's default.
    pub fn new(descriptor: ParamDescriptor) -> Self {
        let initial = descriptor.clamp(descriptor.default);
        Self {
            descriptor,
            bits: AtomicU32::new(initial.to_bits()),
        }
    }

    /// Current value. Never fails, never blocks.
    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Store a new value, clamped to `[min, max]`.
    ///
    /// NaN is ignored and the current value kept. Returns the value held
    /// after the write.
    #[inline]
    pub fn set(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.get();
        }
        let clamped = self.descriptor.clamp(value);
        self.bits.store(clamped.to_bits(), Ordering::Relaxed);
        clamped
    }

    /// Restore the default value.
    pub fn reset(&self) {
        self.set(self.descriptor.default);
    }

    /// Metadata for this parameter.
    pub fn descriptor(&self) -> &ParamDescriptor {
        &self.descriptor
    }
}

/// The glide parameter store: Rate and Depth.
///
/// Created once, shared via `Arc` for the life of the engine. Index order
/// matches [`ParameterInfo`]: 0 = Rate, 1 = Depth.
#[derive(Debug)]
pub struct GlideParams {
    rate: AtomicParam,
    depth: AtomicParam,
}

impl GlideParams {
    /// Stable ID of the Rate parameter.
    pub const RATE_ID: ParamId = ParamId(1090);
    /// Stable ID of the Depth parameter.
    pub const DEPTH_ID: ParamId = ParamId(1091);

    /// Lower bound shared by Rate (Hz) and Depth.
    pub const MIN: f32 = 0.1;
    /// Upper bound shared by Rate (Hz) and Depth.
    pub const MAX: f32 = 10.0;
    /// Default for both parameters.
    pub const DEFAULT: f32 = 1.0;

    /// Create the store with both parameters at their defaults.
    pub fn new() -> Self {
        Self {
            rate: AtomicParam::new(Self::rate_descriptor()),
            depth: AtomicParam::new(Self::depth_descriptor()),
        }
    }

    /// Descriptor for Rate: 0.1-10 Hz, default 1 Hz.
    pub fn rate_descriptor() -> ParamDescriptor {
        ParamDescriptor::rate_hz(Self::MIN, Self::MAX, Self::DEFAULT)
            .with_id(Self::RATE_ID, "glideRate_1090")
    }

    /// Descriptor for Depth: 0.1-10, default 1.
    pub fn depth_descriptor() -> ParamDescriptor {
        ParamDescriptor::depth(Self::MIN, Self::MAX, Self::DEFAULT)
            .with_id(Self::DEPTH_ID, "glideDepth_1090")
    }

    /// Read a parameter by ID. Unknown IDs read as `0.0`.
    #[inline]
    pub fn get(&self, id: ParamId) -> f32 {
        self.slot(id).map_or(0.0, AtomicParam::get)
    }

    /// Write a parameter by ID, clamping to its range. Unknown IDs are ignored.
    #[inline]
    pub fn set(&self, id: ParamId, value: f32) {
        if let Some(slot) = self.slot(id) {
            slot.set(value);
        }
    }

    /// Current oscillator rate in Hz.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate.get()
    }

    /// Current modulation depth.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth.get()
    }

    /// Set the oscillator rate in Hz (clamped). Returns the stored value.
    pub fn set_rate(&self, rate_hz: f32) -> f32 {
        self.rate.set(rate_hz)
    }

    /// Set the modulation depth (clamped). Returns the stored value.
    pub fn set_depth(&self, depth: f32) -> f32 {
        self.depth.set(depth)
    }

    /// Descriptors in index order.
    pub fn descriptors(&self) -> [ParamDescriptor; 2] {
        [*self.rate.descriptor(), *self.depth.descriptor()]
    }

    /// Restore both parameters to their defaults.
    pub fn reset_to_defaults(&self) {
        self.rate.reset();
        self.depth.reset();
    }

    fn slot(&self, id: ParamId) -> Option<&AtomicParam> {
        match id {
            Self::RATE_ID => Some(&self.rate),
            Self::DEPTH_ID => Some(&self.depth),
            _ => None,
        }
    }

    fn slot_at(&self, index: usize) -> Option<&AtomicParam> {
        match index {
            0 => Some(&self.rate),
            1 => Some(&self.depth),
            _ => None,
        }
    }
}

impl Default for GlideParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterInfo for GlideParams {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.slot_at(index).map(|slot| *slot.descriptor())
    }

    fn get_param(&self, index: usize) -> f32 {
        self.slot_at(index).map_or(0.0, AtomicParam::get)
    }

    fn set_param(&self, index: usize, value: f32) {
        if let Some(slot) = self.slot_at(index) {
            slot.set(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = GlideParams::new();
        assert_eq!(params.rate(), 1.0);
        assert_eq!(params.depth(), 1.0);
        assert_eq!(params.get(GlideParams::RATE_ID), 1.0);
        assert_eq!(params.get(GlideParams::DEPTH_ID), 1.0);
    }

    #[test]
    fn set_clamps_to_range() {
        let params = GlideParams::new();

        params.set(GlideParams::RATE_ID, 20.0);
        assert_eq!(params.rate(), 10.0);

        params.set(GlideParams::RATE_ID, 0.0);
        assert_eq!(params.rate(), 0.1);

        // Fractional overshoot from host curve interpolation
        params.set_depth(10.000_001);
        assert_eq!(params.depth(), 10.0);

        params.set_depth(-3.0);
        assert_eq!(params.depth(), 0.1);
    }

    #[test]
    fn nan_write_is_ignored() {
        let params = GlideParams::new();
        params.set_rate(7.0);
        assert_eq!(params.set_rate(f32::NAN), 7.0);
        assert_eq!(params.rate(), 7.0);

        params.set_depth(0.4);
        params.set(GlideParams::DEPTH_ID, f32::NAN);
        params.set_param(1, f32::NAN);
        assert_eq!(params.depth(), 0.4);
    }

    #[test]
    fn infinite_writes_clamp_to_bounds() {
        let params = GlideParams::new();
        params.set_rate(f32::INFINITY);
        assert_eq!(params.rate(), GlideParams::MAX);
        params.set_depth(f32::NEG_INFINITY);
        assert_eq!(params.depth(), GlideParams::MIN);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let params = GlideParams::new();
        params.set(ParamId(42), 5.0);
        assert_eq!(params.get(ParamId(42)), 0.0);
        assert_eq!(params.rate(), 1.0);
        assert_eq!(params.depth(), 1.0);
    }

    #[test]
    fn parameter_info_indexing() {
        let params = GlideParams::new();
        assert_eq!(params.param_count(), 2);

        let rate = params.param_info(0).unwrap();
        assert_eq!(rate.name, "Rate");
        assert_eq!(rate.id, GlideParams::RATE_ID);
        assert_eq!(rate.string_id, "glideRate_1090");
        assert_eq!((rate.min, rate.max, rate.default), (0.1, 10.0, 1.0));

        let depth = params.param_info(1).unwrap();
        assert_eq!(depth.name, "Depth");
        assert_eq!(depth.string_id, "glideDepth_1090");

        assert!(params.param_info(2).is_none());

        params.set_param(1, 2.5);
        assert_eq!(params.get_param(1), 2.5);
        assert_eq!(params.get_param(9), 0.0);
    }

    #[test]
    fn lookup_by_name_and_id() {
        let params = GlideParams::new();
        assert_eq!(params.find_param_by_name("rate"), Some(0));
        assert_eq!(params.find_param_by_name("DEPTH"), Some(1));
        assert_eq!(params.find_param_by_name("glideDepth_1090"), Some(1));
        assert_eq!(params.find_param_by_name("mix"), None);
        assert_eq!(params.param_index_by_id(GlideParams::DEPTH_ID), Some(1));
        assert_eq!(params.param_id(0), Some(GlideParams::RATE_ID));
    }

    #[test]
    fn reset_restores_defaults() {
        let params = GlideParams::new();
        params.set_rate(7.0);
        params.set_depth(0.2);
        params.reset_to_defaults();
        assert_eq!(params.rate(), 1.0);
        assert_eq!(params.depth(), 1.0);
    }

    #[test]
    fn string_ids_are_unique() {
        let params = GlideParams::new();
        let [rate, depth] = params.descriptors();
        assert_ne!(rate.string_id, depth.string_id);
        assert_ne!(rate.id, depth.id);
    }
}
