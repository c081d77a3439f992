//! Execution context passed to carvers.
//!
//! [`CarveContext`] bundles the shared grid, the single injected random
//! source, and the current round counter. Dynamic dispatch on the RNG
//! (`&mut dyn RngCore`) keeps the [`Carver`](crate::Carver) trait
//! object-safe while letting tests inject scripted sources.

use delve_core::RoundId;
use delve_grid::Grid;
use rand::RngCore;

/// Execution context for one [`Carver::carve`](crate::Carver::carve) call.
///
/// The pipeline constructs one context per stage invocation, all backed
/// by the same grid and the same sequentially-consumed random source.
/// There is deliberately no way to reseed from inside a stage — the
/// generator owns the one seeded RNG for the whole run.
pub struct CarveContext<'a> {
    grid: &'a mut Grid,
    rng: &'a mut dyn RngCore,
    round: RoundId,
}

impl<'a> CarveContext<'a> {
    /// Construct a new carve context.
    ///
    /// Typically called by the pipeline; tests construct one directly
    /// around a grid and any [`RngCore`] implementation.
    pub fn new(grid: &'a mut Grid, rng: &'a mut dyn RngCore, round: RoundId) -> Self {
        Self { grid, rng, round }
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Mutable access to the grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.grid
    }

    /// The injected random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng
    }

    /// Split borrow: grid and RNG simultaneously.
    ///
    /// Carvers that interleave draws with writes (the drunkard's walk)
    /// need both halves at once; borrowing through the individual
    /// accessors would lock the whole context.
    pub fn parts(&mut self) -> (&mut Grid, &mut dyn RngCore) {
        (self.grid, self.rng)
    }

    /// Current pipeline round.
    pub fn round(&self) -> RoundId {
        self.round
    }
}
