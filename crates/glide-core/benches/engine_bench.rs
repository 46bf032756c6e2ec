//! Criterion benchmarks for the glide engine
//!
//! Run with: cargo bench -p glide-core
#![allow(missing_docs)]

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glide_core::{AutoPan, GlideParams, PhaseAccumulator};

const SAMPLE_RATE: f64 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_autopan(c: &mut Criterion) {
    let mut group = c.benchmark_group("AutoPan");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process_stereo", block_size),
            &block_size,
            |b, _| {
                let params = Arc::new(GlideParams::new());
                params.set_rate(3.0);
                let mut glide = AutoPan::new(params);
                glide.on_start(SAMPLE_RATE, block_size);
                let mut left = input.clone();
                let mut right = input.clone();
                b.iter(|| {
                    glide.process_stereo(black_box(&mut left), black_box(&mut right));
                });
            },
        );
    }

    group.finish();
}

fn bench_oscillator(c: &mut Criterion) {
    c.bench_function("PhaseAccumulator/advance_1024", |b| {
        let mut osc = PhaseAccumulator::new();
        osc.set_increment(5.0, SAMPLE_RATE);
        b.iter(|| {
            for _ in 0..1024 {
                black_box(osc.advance());
            }
        });
    });
}

criterion_group!(benches, bench_autopan, bench_oscillator);
criterion_main!(benches);
