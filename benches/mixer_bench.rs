//! Mixing throughput benchmark
//!
//! Measures the per-buffer mixing cost as the source count grows, plus the
//! easing lookup on its own. The mix loop is the per-sample hot path of
//! the embedding host, so regressions here are regressions everywhere.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softmix::{easing, mix, sample, FadeState, MixFormat, MixSource, SampleWidth};

fn constant_buffer(value: f64, width: SampleWidth, samples: usize) -> Vec<u8> {
    let mut one = vec![0u8; width.bytes()];
    sample::encode(value, width, &mut one);
    one.iter()
        .copied()
        .cycle()
        .take(one.len() * samples)
        .collect()
}

fn bench_mix_source_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix");

    // 4096 stereo frames of 16-bit audio per call
    let format = MixFormat::new(16, 2).unwrap();
    let frames = 4096usize;
    let buffer = constant_buffer(0.4, SampleWidth::Two, frames * 2);
    let length = buffer.len();

    for &count in &[1usize, 2, 4, 8] {
        group.bench_function(BenchmarkId::new("sources", count), |b| {
            let mut output = vec![0u8; length];
            b.iter(|| {
                let mut sources: Vec<MixSource> =
                    (0..count).map(|_| MixSource::new(&buffer, 0.8)).collect();
                mix(black_box(&mut output), &mut sources, &format).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_mix_bit_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix_bit_depth");
    let frames = 4096usize;

    for &width in SampleWidth::all() {
        let format = MixFormat::new(width.bit_depth(), 2).unwrap();
        let a = constant_buffer(0.4, width, frames * 2);
        let b = constant_buffer(-0.2, width, frames * 2);

        group.bench_function(BenchmarkId::new("two_sources", width.bit_depth()), |bench| {
            let mut output = vec![0u8; a.len()];
            bench.iter(|| {
                let mut sources = [MixSource::new(&a, 1.0), MixSource::new(&b, 0.7)];
                mix(black_box(&mut output), &mut sources, &format).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_mix_with_fades(c: &mut Criterion) {
    let format = MixFormat::new(16, 2).unwrap();
    let frames = 4096usize;
    let buffer = constant_buffer(0.4, SampleWidth::Two, frames * 2);

    c.bench_function("mix_fading_sources", |b| {
        let mut output = vec![0u8; buffer.len()];
        b.iter(|| {
            let mut sources = [
                MixSource::with_fade(&buffer, 0.0, FadeState::new(0.0, 1.0, frames as i64)),
                MixSource::with_fade(&buffer, 1.0, FadeState::new(1.0, 0.0, frames as i64)),
            ];
            mix(black_box(&mut output), &mut sources, &format).unwrap();
        });
    });
}

fn bench_easing_lookup(c: &mut Criterion) {
    c.bench_function("easing_lookup", |b| {
        b.iter(|| {
            for i in 0..10_000 {
                let x = i as f64 / 10_000.0;
                black_box(easing::ease(x, 0.0, 1.0));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_mix_source_counts,
    bench_mix_bit_depths,
    bench_mix_with_fades,
    bench_easing_lookup
);
criterion_main!(benches);
