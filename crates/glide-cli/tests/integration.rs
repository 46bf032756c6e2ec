//! Integration tests for glide-cli.
//!
//! Tests invoke the `glide` binary and check the files it writes.

use std::path::Path;
use std::process::Command;

use glide_io::{WavSpec, read_wav_channels, read_wav_info, write_wav_channels};
use tempfile::TempDir;

/// Helper to get the path to the `glide` binary built by cargo.
fn glide_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glide"))
}

fn write_constant(path: &Path, channels: u16, frames: usize, value: f32) {
    let buffers = vec![vec![value; frames]; usize::from(channels)];
    write_wav_channels(
        path,
        &buffers,
        WavSpec {
            channels,
            sample_rate: 1000,
            bits_per_sample: 32,
        },
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// `glide params`
// ---------------------------------------------------------------------------

#[test]
fn cli_params_lists_rate_and_depth() {
    let output = glide_bin()
        .arg("params")
        .output()
        .expect("failed to run glide params");
    assert!(output.status.success(), "glide params failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "Glide Parameters",
        "Rate",
        "Depth",
        "glideRate_1090",
        "glideDepth_1090",
        "1090",
        "1091",
        "0.10 Hz - 10.00 Hz",
        "1.00 Hz",
    ] {
        assert!(stdout.contains(expected), "missing '{expected}' in:\n{stdout}");
    }
}

#[test]
fn cli_params_details_by_string_id() {
    let output = glide_bin()
        .args(["params", "glidedepth_1090"])
        .output()
        .expect("failed to run glide params");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Depth"));
    assert!(stdout.contains("1091"));
    assert!(stdout.contains("0.10 - 10.00"));
    assert!(stdout.contains("Flags:      automatable"));
}

#[test]
fn cli_params_unknown_name_fails() {
    let output = glide_bin()
        .args(["params", "feedback"])
        .output()
        .expect("failed to run glide params");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown parameter"));
}

// ---------------------------------------------------------------------------
// `glide generate`
// ---------------------------------------------------------------------------

#[test]
fn cli_generate_writes_tone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tone.wav");

    let status = glide_bin()
        .arg("generate")
        .arg(&path)
        .args(["--freq", "220", "--duration", "0.5", "--sample-rate", "22050"])
        .args(["--channels", "1"])
        .status()
        .expect("failed to run glide generate");
    assert!(status.success());

    let info = read_wav_info(&path).unwrap();
    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_rate, 22050);
    assert_eq!(info.num_frames, 11025);
}

// ---------------------------------------------------------------------------
// `glide process`
// ---------------------------------------------------------------------------

#[test]
fn cli_process_stereo_pans() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_constant(&input, 2, 1000, 1.0);

    let result = glide_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--rate", "1", "--depth", "1", "--block-size", "64"])
        .output()
        .expect("failed to run glide process");
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(String::from_utf8_lossy(&result.stdout).contains("Stats:"));

    let (channels, spec) = read_wav_channels(&output).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(channels[0][0], 0.5);
    assert_eq!(channels[1][0], 0.5);
    // Quarter cycle: pan fully right
    assert!(channels[0][250].abs() < 1e-5);
    assert!((channels[1][250] - 1.0).abs() < 1e-5);
}

#[test]
fn cli_process_mono_to_stereo_leaves_synthesized_channel_silent() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mono.wav");
    let output = dir.path().join("stereo.wav");
    write_constant(&input, 1, 500, 1.0);

    let status = glide_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--channels", "2", "--bit-depth", "24"])
        .status()
        .expect("failed to run glide process");
    assert!(status.success());

    let info = read_wav_info(&output).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.bits_per_sample, 24);

    let (channels, _) = read_wav_channels(&output).unwrap();
    assert!(channels[1].iter().all(|&s| s == 0.0));
    assert!((channels[0][0] - 0.5).abs() < 1e-6);
}

#[test]
fn cli_process_reads_config_and_flags_override() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    let config = dir.path().join("glide.toml");
    write_constant(&input, 2, 1000, 1.0);
    std::fs::write(&config, "rate = 5.0\ndepth = 1.0\nbit_depth = 16\n").unwrap();

    let status = glide_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .args(["--rate", "1"])
        .status()
        .expect("failed to run glide process");
    assert!(status.success());

    let info = read_wav_info(&output).unwrap();
    assert_eq!(info.bits_per_sample, 16);

    // The flag's 1 Hz wins over the file's 5 Hz: hard right at frame 250.
    let (channels, _) = read_wav_channels(&output).unwrap();
    assert!(channels[0][250].abs() < 1e-3);
    assert!((channels[1][250] - 1.0).abs() < 1e-3);
}

#[test]
fn cli_process_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let config = dir.path().join("bad.toml");
    write_constant(&input, 2, 100, 1.0);
    std::fs::write(&config, "block_size = 0\n").unwrap();

    let output = glide_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run glide process");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("block_size"));
}

#[test]
fn cli_process_rejects_downmix() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_constant(&input, 2, 100, 1.0);

    let output = glide_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .args(["--channels", "1"])
        .output()
        .expect("failed to run glide process");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported layout"));
}

#[test]
fn cli_process_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let status = glide_bin()
        .arg("process")
        .arg(dir.path().join("nope.wav"))
        .arg(dir.path().join("out.wav"))
        .status()
        .expect("failed to run glide process");
    assert!(!status.success());
}

#[test]
fn cli_process_rejects_sample_rate_below_max_rate() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("slow.wav");
    write_wav_channels(
        &input,
        &[vec![1.0; 16], vec![1.0; 16]],
        WavSpec {
            channels: 2,
            sample_rate: 5,
            bits_per_sample: 32,
        },
    )
    .unwrap();

    let output = glide_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .output()
        .expect("failed to run glide process");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid sample rate: 5"));
}
