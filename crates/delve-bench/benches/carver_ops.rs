//! Criterion micro-benchmarks for the individual carver stages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delve_carve::{CarveContext, Carver};
use delve_carvers::{CellularSmoother, DrunkardsWalk, NoiseSeeder};
use delve_core::RoundId;
use delve_grid::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A 100x100 grid seeded with 45% noise, for smoothing benchmarks.
fn noisy_grid_10k() -> Grid {
    let mut grid = Grid::new(100, 100).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut noise = NoiseSeeder::builder().density(0.45).build().unwrap();
    let mut ctx = CarveContext::new(&mut grid, &mut rng, RoundId(0));
    noise.carve(&mut ctx).unwrap();
    grid
}

/// Benchmark: seed all 10K cells with noise.
fn bench_noise_10k(c: &mut Criterion) {
    let mut noise = NoiseSeeder::builder().density(0.45).build().unwrap();

    c.bench_function("noise_seed_10k", |b| {
        b.iter(|| {
            let mut grid = Grid::new(100, 100).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut ctx = CarveContext::new(&mut grid, &mut rng, RoundId(0));
            noise.carve(&mut ctx).unwrap();
            black_box(&grid);
        });
    });
}

/// Benchmark: one radius-1 smoothing pass over 10K cells.
fn bench_smooth_radius_1(c: &mut Criterion) {
    let grid = noisy_grid_10k();
    let smoother = CellularSmoother::builder()
        .radius(1)
        .threshold(5)
        .iterations(1)
        .build()
        .unwrap();

    c.bench_function("smooth_r1_10k", |b| {
        b.iter(|| {
            let out = smoother.smooth(black_box(&grid));
            black_box(out);
        });
    });
}

/// Benchmark: one radius-2 pass (24-cell window) over 10K cells.
fn bench_smooth_radius_2(c: &mut Criterion) {
    let grid = noisy_grid_10k();
    let smoother = CellularSmoother::builder()
        .radius(2)
        .threshold(13)
        .iterations(1)
        .build()
        .unwrap();

    c.bench_function("smooth_r2_10k", |b| {
        b.iter(|| {
            let out = smoother.smooth(black_box(&grid));
            black_box(out);
        });
    });
}

/// Benchmark: 100 walk phases of 10 steps across a 100x100 grid.
fn bench_walker_1000_steps(c: &mut Criterion) {
    c.bench_function("walk_100_phases", |b| {
        b.iter(|| {
            let mut grid = Grid::new(100, 100).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let mut walker = DrunkardsWalk::builder()
                .phases(100)
                .steps_per_phase(10)
                .build()
                .unwrap();
            let mut ctx = CarveContext::new(&mut grid, &mut rng, RoundId(1));
            walker.carve(&mut ctx).unwrap();
            black_box(&grid);
        });
    });
}

criterion_group!(
    benches,
    bench_noise_10k,
    bench_smooth_radius_1,
    bench_smooth_radius_2,
    bench_walker_1000_steps
);
criterion_main!(benches);
