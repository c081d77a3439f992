//! Benchmark profiles for the Delve map generator.
//!
//! Pre-built [`GeneratorConfig`] profiles shared by the benches:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), full pipeline
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use delve_engine::{GeneratorConfig, InitialFill, SmootherParams, WalkerParams};

/// Build the reference benchmark profile: 100x100 grid, 5 rounds of
/// two-pass smoothing plus a busy walker.
pub fn reference_profile(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        rows: 100,
        cols: 100,
        rounds: 5,
        seed,
        initial: InitialFill::Noise { density: 0.45 },
        smoother: SmootherParams {
            radius: 1,
            threshold: 5,
            iterations: 2,
        },
        walker: WalkerParams {
            phases: 20,
            steps_per_phase: 10,
            ..Default::default()
        },
    }
}

/// Build the stress benchmark profile: 316x316 grid (~100K cells),
/// same pipeline as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        rows: 316,
        cols: 316,
        ..reference_profile(seed)
    }
}
