//! Uniform per-cell noise seeding.
//!
//! Overwrites every cell of the grid independently: a cell becomes
//! `Filled` iff a uniform draw in `[0, 1)` falls below the configured
//! density. Deterministic given the context's seeded random source.
//!
//! Constructed via the builder pattern: [`NoiseSeeder::builder`].

use delve_carve::{CarveContext, Carver};
use delve_core::{CarveError, Cell};
use rand::Rng;

/// A carver that fills the grid with independent random occupancy.
///
/// `density` is the probability that any given cell comes out
/// `Filled`. A density of 1.0 produces an all-`Filled` grid no matter
/// what the random source yields (draws are strictly below 1.0);
/// a density of 0.0 produces an all-`Empty` grid.
#[derive(Clone, Debug)]
pub struct NoiseSeeder {
    density: f64,
}

/// Builder for [`NoiseSeeder`].
pub struct NoiseSeederBuilder {
    density: f64,
}

impl NoiseSeeder {
    /// Create a new builder for configuring a `NoiseSeeder`.
    pub fn builder() -> NoiseSeederBuilder {
        NoiseSeederBuilder { density: 0.45 }
    }

    /// The configured fill density.
    pub fn density(&self) -> f64 {
        self.density
    }
}

impl NoiseSeederBuilder {
    /// Set the fill density (default: 0.45). Must be in `[0, 1]`.
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Build the carver, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `density` is not a finite probability in `[0, 1]`.
    pub fn build(self) -> Result<NoiseSeeder, String> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(format!(
                "density must be a probability in [0, 1], got {}",
                self.density
            ));
        }
        Ok(NoiseSeeder {
            density: self.density,
        })
    }
}

impl Carver for NoiseSeeder {
    fn name(&self) -> &str {
        "noise"
    }

    fn carve(&mut self, ctx: &mut CarveContext<'_>) -> Result<(), CarveError> {
        let (grid, rng) = ctx.parts();
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                let cell = if rng.random::<f64>() < self.density {
                    Cell::Filled
                } else {
                    Cell::Empty
                };
                grid.set(row, col, cell);
            }
        }
        Ok(())
    }
}
