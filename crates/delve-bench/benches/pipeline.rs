//! Criterion benchmarks for full generation runs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delve_bench::{reference_profile, stress_profile};
use delve_engine::Generator;

/// Benchmark: a complete reference run (10K cells, 5 rounds).
fn bench_reference_run(c: &mut Criterion) {
    c.bench_function("generate_reference_10k", |b| {
        b.iter(|| {
            let mut generator = Generator::new(reference_profile(42)).unwrap();
            generator.run().unwrap();
            black_box(generator.into_grid());
        });
    });
}

/// Benchmark: one round of the stress profile (~100K cells).
fn bench_stress_round(c: &mut Criterion) {
    c.bench_function("stress_round_100k", |b| {
        b.iter(|| {
            let mut generator = Generator::new(stress_profile(42)).unwrap();
            let report = generator.step_round().unwrap();
            black_box(report);
        });
    });
}

criterion_group!(benches, bench_reference_run, bench_stress_round);
criterion_main!(benches);
