//! Delve quickstart — generate and print a small cave map.
//!
//! Demonstrates:
//!   1. Describing a run with GeneratorConfig
//!   2. Stepping rounds one at a time and reading RoundMetrics
//!   3. Rendering the finished grid through its ASCII Display
//!   4. Resetting to a new seed
//!
//! Run with:
//!   cargo run --example quickstart

use delve_engine::{Generator, GeneratorConfig, InitialFill, SmootherParams, WalkerParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Delve Quickstart ===\n");

    // 1. Describe the run: a 20x48 map seeded with noise, smoothed and
    //    walked for four rounds.
    let config = GeneratorConfig {
        rows: 20,
        cols: 48,
        rounds: 4,
        seed: 42,
        initial: InitialFill::Noise { density: 0.44 },
        smoother: SmootherParams {
            radius: 1,
            threshold: 5,
            iterations: 2,
        },
        walker: WalkerParams {
            phases: 8,
            steps_per_phase: 6,
            room_width: 5,
            room_height: 3,
            ..Default::default()
        },
    };

    let mut generator = Generator::new(config)?;
    println!(
        "Grid: {}x{} ({} cells), seed {}",
        generator.grid().rows(),
        generator.grid().cols(),
        generator.grid().cell_count(),
        generator.seed(),
    );
    println!(
        "Seeded fill: {:.1}%\n",
        generator.grid().fill_ratio() * 100.0
    );

    // 2. Step the rounds, reporting as we go.
    for _ in 0..4 {
        let report = generator.step_round()?;
        println!(
            "round {}: fill={:5.1}%  steps={:<3} rooms={} turns={} aborts={}  ({}us)",
            report.round,
            report.fill_ratio * 100.0,
            report.walk.steps,
            report.walk.rooms_stamped,
            report.walk.turns,
            report.walk.boundary_aborts,
            report.total_us,
        );
        for stage in &report.stages {
            println!(
                "    {:<15} {:>5} cells in {}us",
                stage.name, stage.filled_delta, stage.elapsed_us
            );
        }
    }

    // 3. Render the result.
    println!("\nFinal map:");
    print!("{}", generator.grid());
    if let Some((row, col)) = generator.agent().pos() {
        println!("agent finished at ({row}, {col})");
    }

    // 4. Reset and regenerate from a different seed.
    generator.reset(1234)?;
    generator.run()?;
    println!(
        "\nRe-generated with seed 1234: fill={:.1}%",
        generator.grid().fill_ratio() * 100.0
    );

    Ok(())
}
