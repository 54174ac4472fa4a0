//! Throughput of the positional hash versus the sequential wrapper.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use noise_rng::{SequentialNoiseGenerator, mix_hash, noise_2d_unit};

const CALLS: i32 = 10_000;

fn bench_mix_hash(c: &mut Criterion) {
    c.bench_function("mix_hash", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for p in 0..CALLS {
                acc ^= mix_hash(black_box(p), 0xBEEF);
            }
            acc
        })
    });
}

fn bench_noise_2d(c: &mut Criterion) {
    c.bench_function("noise_2d_unit", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for p in 0..CALLS {
                acc ^= noise_2d_unit(black_box(p), black_box(p), 0xBEEF);
            }
            acc
        })
    });
}

fn bench_next_value(c: &mut Criterion) {
    c.bench_function("sequential_next_value", |b| {
        let mut rng = SequentialNoiseGenerator::with_seed(0xBEEF);
        b.iter(|| {
            let mut acc = 0.0f32;
            for _ in 0..CALLS {
                acc += rng.next_value();
            }
            acc
        })
    });
}

criterion_group!(benches, bench_mix_hash, bench_noise_2d, bench_next_value);
criterion_main!(benches);
