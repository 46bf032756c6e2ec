//! Test tone generation command.

use clap::Args;
use glide_io::{WavSpec, write_wav_channels};
use std::f64::consts::TAU;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Frequency in Hz
    #[arg(long, default_value = "440.0")]
    freq: f64,

    /// Duration in seconds
    #[arg(long, default_value = "2.0")]
    duration: f64,

    /// Sample rate
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Channel count; every channel carries the same tone
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u16).range(1..=2))]
    channels: u16,

    /// Amplitude (0-1)
    #[arg(long, default_value = "0.5")]
    amplitude: f32,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    if !(args.duration.is_finite() && args.duration > 0.0) {
        anyhow::bail!("duration must be positive, got {}", args.duration);
    }
    if args.sample_rate == 0 {
        anyhow::bail!("sample rate must be positive");
    }

    println!(
        "Generating {:.1} Hz tone, {:.2}s at {} Hz...",
        args.freq, args.duration, args.sample_rate
    );

    let tone = sine(args.freq, args.amplitude, args.duration, args.sample_rate);
    let channels = vec![tone; usize::from(args.channels)];

    let spec = WavSpec {
        channels: args.channels,
        sample_rate: args.sample_rate,
        bits_per_sample: 32,
    };
    write_wav_channels(&args.output, &channels, spec)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

fn sine(freq: f64, amplitude: f32, duration: f64, sample_rate: u32) -> Vec<f32> {
    let sr = f64::from(sample_rate);
    let len = (duration * sr).round() as usize;
    (0..len)
        .map(|i| (TAU * freq * i as f64 / sr).sin() as f32 * amplitude)
        .collect()
}
