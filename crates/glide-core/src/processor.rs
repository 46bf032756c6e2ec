//! Host-facing processor interface and bus layout negotiation.
//!
//! A plugin host drives a processor through a small lifecycle: negotiate a
//! [`BusLayout`], [`prepare`](AudioProcessor::prepare) before playback,
//! call [`process_block`](AudioProcessor::process_block) once per audio
//! callback, and [`release`](AudioProcessor::release) when playback stops.
//! The DSP types in this crate implement the trait but never depend on a
//! host being present.

/// A channel configuration for one audio bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSet {
    /// Bus is not connected.
    #[default]
    Disabled,
    /// One channel.
    Mono,
    /// Left and right.
    Stereo,
    /// Any other channel count (surround, ambisonic, ...).
    Discrete(u16),
}

impl ChannelSet {
    /// Number of channels on the bus.
    pub const fn channel_count(self) -> usize {
        match self {
            ChannelSet::Disabled => 0,
            ChannelSet::Mono => 1,
            ChannelSet::Stereo => 2,
            ChannelSet::Discrete(n) => n as usize,
        }
    }

    /// Channel set for a raw channel count.
    pub const fn from_count(count: u16) -> Self {
        match count {
            0 => ChannelSet::Disabled,
            1 => ChannelSet::Mono,
            2 => ChannelSet::Stereo,
            n => ChannelSet::Discrete(n),
        }
    }
}

/// Main input and output bus configuration proposed by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    /// Main input bus.
    pub input: ChannelSet,
    /// Main output bus.
    pub output: ChannelSet,
}

impl BusLayout {
    /// Mono in, mono out.
    pub const fn mono() -> Self {
        Self {
            input: ChannelSet::Mono,
            output: ChannelSet::Mono,
        }
    }

    /// Stereo in, stereo out.
    pub const fn stereo() -> Self {
        Self {
            input: ChannelSet::Stereo,
            output: ChannelSet::Stereo,
        }
    }
}

/// Whether glide can run with `layout`.
///
/// The output must be mono or stereo, and as an effect (not a generator)
/// the input must mirror the output.
///
/// ```rust
/// use glide_core::{BusLayout, ChannelSet, is_layout_supported};
///
/// assert!(is_layout_supported(&BusLayout::stereo()));
/// assert!(!is_layout_supported(&BusLayout {
///     input: ChannelSet::Mono,
///     output: ChannelSet::Stereo,
/// }));
/// ```
pub fn is_layout_supported(layout: &BusLayout) -> bool {
    matches!(layout.output, ChannelSet::Mono | ChannelSet::Stereo) && layout.input == layout.output
}

/// Static plugin metadata reported to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    /// Display name.
    pub name: &'static str,
    /// Whether the plugin consumes MIDI.
    pub accepts_midi: bool,
    /// Whether the plugin emits MIDI.
    pub produces_midi: bool,
    /// Number of programs. At least 1; some hosts misbehave with 0.
    pub num_programs: usize,
}

impl PluginInfo {
    /// Metadata for the glide auto-pan.
    pub const GLIDE: Self = Self {
        name: "Glide",
        accepts_midi: false,
        produces_midi: false,
        num_programs: 1,
    };

    /// Name of the program at `index`. Programs are unnamed.
    pub fn program_name(&self, _index: usize) -> &'static str {
        ""
    }
}

/// Lifecycle contract between a host adapter and a block processor.
///
/// All methods are called from the audio thread, never concurrently.
/// `process_block` must not allocate, lock, or block.
pub trait AudioProcessor {
    /// Display name reported to the host.
    fn name(&self) -> &'static str;

    /// Whether `prepare` can run at `sample_rate`. Default: any positive
    /// finite rate.
    fn supports_sample_rate(&self, sample_rate: f64) -> bool {
        sample_rate.is_finite() && sample_rate > 0.0
    }

    /// Called before playback starts and whenever the host restarts or
    /// reconfigures playback.
    fn prepare(&mut self, sample_rate: f64, max_block_size: usize);

    /// Called when playback stops.
    fn release(&mut self) {}

    /// Process one block in place.
    ///
    /// `channels` holds one slice per output channel. The first
    /// `input_channels` carry input audio; the rest exist only as outputs
    /// and hold unspecified data on entry.
    fn process_block(&mut self, channels: &mut [&mut [f32]], input_channels: usize);

    /// Seconds of output after input stops. Default: no tail.
    fn tail_seconds(&self) -> f64 {
        0.0
    }

    /// Processing latency in samples. Default: none.
    fn latency_samples(&self) -> usize {
        0
    }
}
