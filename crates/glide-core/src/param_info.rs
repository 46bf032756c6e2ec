//! Parameter metadata for host negotiation and automation display.
//!
//! Every glide parameter is described by a [`ParamDescriptor`]: display
//! names, unit, range, default, and the stable identifiers a host uses to
//! record automation. The metadata is purely descriptive; the live values
//! sit in [`GlideParams`](crate::GlideParams).
//!
//! # Example
//!
//! ```rust
//! use glide_core::{ParamDescriptor, ParamId, ParamUnit};
//!
//! let rate = ParamDescriptor::rate_hz(0.1, 10.0, 1.0)
//!     .with_id(ParamId(1090), "glideRate_1090");
//!
//! assert_eq!(rate.unit, ParamUnit::Hertz);
//! assert_eq!(rate.clamp(25.0), 10.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Scaling curve for parameter normalization.
///
/// Determines how a plain value maps to normalized \[0.0, 1.0\] space for
/// host automation lanes and knob travel.
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    /// Requires `min > 0.0`.
    Logarithmic,
}

/// Stable parameter identifier.
///
/// Once assigned, a `ParamId` must never change for a given parameter:
/// hosts key recorded automation on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// ```rust
/// use glide_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::HIDDEN);
/// assert!(flags.contains(ParamFlags::AUTOMATABLE));
/// assert!(!flags.contains(ParamFlags::READ_ONLY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter should be hidden from generic host UI.
    pub const HIDDEN: Self = Self(1 << 1);
    /// Parameter is read-only (display only).
    pub const READ_ONLY: Self = Self(1 << 2);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz) - oscillator rate.
    Hertz,
    /// No unit - dimensionless scalars such as modulation depth.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use glide_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Rate").
    pub name: &'static str,

    /// Short name for compact displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value at construction and after a reset to defaults.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Stable numeric ID for host automation.
    pub id: ParamId,

    /// Human-readable stable ID, unique across the process lifetime.
    pub string_id: &'static str,

    /// Normalization curve for mapping between plain and normalized values.
    pub scale: ParamScale,

    /// Capability flags for host communication.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// LFO rate parameter in Hz.
    ///
    /// Uses logarithmic scaling so that slow sweeps get most of the knob travel.
    pub fn rate_hz(min: f32, max: f32, default: f32) -> Self {
        Self {
            name: "Rate",
            short_name: "Rate",
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 0.05,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Logarithmic,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Dimensionless modulation depth with a custom range.
    pub fn depth(min: f32, max: f32, default: f32) -> Self {
        Self {
            name: "Depth",
            short_name: "Depth",
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use glide_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::depth(0.1, 10.0, 1.0).with_id(ParamId(7), "depth");
    /// assert_eq!(desc.id, ParamId(7));
    /// assert_eq!(desc.string_id, "depth");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// NaN maps to the default. Parameter writes drop NaN before clamping
    /// (see [`AtomicParam::set`](crate::AtomicParam::set)).
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// ```rust
    /// use glide_core::ParamDescriptor;
    ///
    /// let depth = ParamDescriptor::depth(0.0, 10.0, 1.0);
    /// assert_eq!(depth.normalize(5.0), 0.5);
    /// ```
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the plain parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }

    /// Formats a value with this parameter's unit for display.
    ///
    /// ```rust
    /// use glide_core::ParamDescriptor;
    ///
    /// let rate = ParamDescriptor::rate_hz(0.1, 10.0, 1.0);
    /// assert_eq!(rate.format_value(2.5), "2.50 Hz");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        format!("{:.2}{}", value, self.unit.suffix())
    }

    /// Parses display text back to a clamped plain value.
    ///
    /// Accepts an optional trailing unit suffix. Returns `None` on
    /// unparseable text or NaN.
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        let trimmed = text.trim();
        let number = trimmed
            .strip_suffix(self.unit.suffix().trim())
            .unwrap_or(trimmed)
            .trim();
        number
            .parse::<f32>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(|v| self.clamp(v))
    }
}

/// Trait for types that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime
/// of the instance. Setters take `&self` because the values live in
/// atomic slots shared with the audio thread.
pub trait ParameterInfo {
    /// Returns the number of parameters exposed.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at `index`, or `None` if
    /// out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value at `index`. Returns `0.0` when out of range.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value at `index`, clamped to the descriptor range.
    /// Out-of-range indices are ignored.
    fn set_param(&self, index: usize, value: f32);

    /// Find a parameter index by name or short name (case-insensitive).
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Linear scan; meant for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}
