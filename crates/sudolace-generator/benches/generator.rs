//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation process (solution fill plus digging
//! under the uniqueness check) for each difficulty grade.
//!
//! Three fixed seeds keep the measurements reproducible while still
//! covering several digging orders.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sudolace_generator::{Difficulty, PuzzleGenerator};

const SEEDS: [u64; 3] = [0xc1d4_4bd6_afaf_8af6, 0xa2b3_c4d5_e6f7_a8b9, 0x1234_5678_90ab_cdef];

fn bench_generate(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, &seed| {
                    b.iter_batched(
                        || PuzzleGenerator::from_seed(hint::black_box(seed)),
                        |mut generator| generator.generate(difficulty),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets = bench_generate
);
criterion_main!(benches);
