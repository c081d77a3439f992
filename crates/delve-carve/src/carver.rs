//! The [`Carver`] trait.

use crate::context::CarveContext;
use delve_core::CarveError;

/// One stage of the map-generation pipeline.
///
/// # Contract
///
/// - `carve()` MUST be deterministic given the context's random source:
///   the same grid, seed, and configuration produce an identical grid.
/// - `&mut self` — a carver may hold per-run state (the drunkard's walk
///   keeps its agent between rounds); stateless carvers simply ignore it.
/// - A carver never touches cells outside the grid: speculative
///   coordinates are checked with `Grid::in_bounds` before any access.
///
/// # Object safety
///
/// This trait is object-safe; the pipeline dispatches its stages as
/// `&mut dyn Carver`.
///
/// # Examples
///
/// A minimal carver that fills the entire grid:
///
/// ```
/// use delve_carve::{CarveContext, Carver};
/// use delve_core::{Cell, CarveError, RoundId};
/// use delve_grid::Grid;
///
/// struct FillAll;
///
/// impl Carver for FillAll {
///     fn name(&self) -> &str {
///         "fill_all"
///     }
///
///     fn carve(&mut self, ctx: &mut CarveContext<'_>) -> Result<(), CarveError> {
///         ctx.grid_mut().fill(Cell::Filled);
///         Ok(())
///     }
/// }
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// let mut rng = rand::rng();
/// let mut ctx = CarveContext::new(&mut grid, &mut rng, RoundId(0));
/// FillAll.carve(&mut ctx).unwrap();
/// assert_eq!(grid.filled_count(), 9);
/// ```
pub trait Carver {
    /// Human-readable stage name for error reporting and metrics.
    fn name(&self) -> &str;

    /// Execute the stage against the context's grid.
    ///
    /// Called once per pipeline round, in pipeline order.
    fn carve(&mut self, ctx: &mut CarveContext<'_>) -> Result<(), CarveError>;
}
