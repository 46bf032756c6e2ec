//! File-based auto-pan processing command.

use crate::config::GlideConfig;
use clap::Args;
use glide_core::{AutoPan, BusLayout, ChannelSet, GlideParams, is_layout_supported};
use glide_io::{OfflineRenderer, WavSpec, read_wav_channels, write_wav_channels};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Pan rate in Hz (0.1-10)
    #[arg(long)]
    rate: Option<f32>,

    /// Pan depth (0.1-10)
    #[arg(long)]
    depth: Option<f32>,

    /// Processing block size [default: 512]
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32) [default: 32]
    #[arg(long)]
    bit_depth: Option<u16>,

    /// Output channel count (1 or 2); defaults to the input's
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=2))]
    channels: Option<u16>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ProcessArgs {
    fn overrides(&self) -> GlideConfig {
        GlideConfig {
            rate: self.rate,
            depth: self.depth,
            block_size: self.block_size,
            bit_depth: self.bit_depth,
        }
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => GlideConfig::load(path)?,
        None => GlideConfig::default(),
    };
    let config = file_config.merged_with(args.overrides());
    config.validate()?;

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) = read_wav_channels(&args.input)?;
    let input_channels = channels.len();
    let frames = channels[0].len();

    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        input_channels,
        spec.sample_rate,
        frames as f64 / f64::from(spec.sample_rate)
    );

    let layout = BusLayout {
        input: ChannelSet::from_count(spec.channels),
        output: ChannelSet::from_count(args.channels.unwrap_or(spec.channels)),
    };
    if !is_layout_supported(&layout) {
        if layout.input == ChannelSet::Mono && layout.output == ChannelSet::Stereo {
            tracing::info!("mono input, stereo output: right channel is output-only");
        } else {
            anyhow::bail!(
                "unsupported layout: {} channel(s) in, {} out",
                layout.input.channel_count(),
                layout.output.channel_count()
            );
        }
    }
    let output_channels = layout.output.channel_count();
    channels.resize(output_channels, vec![0.0; frames]);

    let params = Arc::new(GlideParams::new());
    config.apply(&params);
    println!(
        "Auto-pan: rate {:.2} Hz, depth {:.2}",
        params.rate(),
        params.depth()
    );

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let input_stats: Vec<(f32, f32)> = channels[..input_channels]
        .iter()
        .map(|c| (rms(c), peak(c)))
        .collect();

    let mut renderer = OfflineRenderer::new(AutoPan::new(params), config.block_size())?;
    renderer.render_with_progress(
        &mut channels,
        input_channels,
        f64::from(spec.sample_rate),
        |done| pb.set_position(done as u64),
    )?;
    pb.finish_with_message("done");

    println!("\nStats:");
    for (i, (in_rms, in_peak)) in input_stats.iter().enumerate() {
        println!(
            "  Input  ch{}: RMS {:.1} dB, Peak {:.1} dB",
            i + 1,
            linear_to_db(*in_rms),
            linear_to_db(*in_peak)
        );
    }
    for (i, channel) in channels.iter().enumerate() {
        println!(
            "  Output ch{}: RMS {:.1} dB, Peak {:.1} dB",
            i + 1,
            linear_to_db(rms(channel)),
            linear_to_db(peak(channel))
        );
    }

    let out_spec = WavSpec {
        bits_per_sample: config.bit_depth(),
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_channels(&args.output, &channels, out_spec)?;
    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
