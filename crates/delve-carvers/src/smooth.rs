//! Neighbour-count threshold smoothing.
//!
//! Evolves noisy occupancy toward organic cavern shapes: each
//! iteration, every cell counts the occupied cells in the square window
//! of radius R around it (excluding itself) and becomes `Filled` iff
//! the count reaches the threshold. Positions outside the grid count as
//! occupied, so the lattice behaves as if bordered by solid cells.
//!
//! All counts for an iteration are taken from the state at the start of
//! that iteration: the rule is applied as a whole-iteration snapshot
//! swap between two owned buffers, never read-while-write.
//!
//! Constructed via the builder pattern: [`CellularSmoother::builder`].

use delve_carve::{CarveContext, Carver};
use delve_core::{CarveError, Cell};
use delve_grid::Grid;
use smallvec::SmallVec;

/// A cellular-automaton smoothing carver.
///
/// Applies the threshold rule for a configured number of iterations.
/// The pure entry point is [`smooth`](CellularSmoother::smooth), which
/// leaves its input untouched and returns a fresh grid; the carver
/// wrapper replaces the context grid with the smoothed result.
#[derive(Clone, Debug)]
pub struct CellularSmoother {
    threshold: u32,
    iterations: u32,
    /// Window offsets for the configured radius, center excluded.
    /// Inline capacity covers the radius-1 window.
    offsets: SmallVec<[(i32, i32); 8]>,
}

/// Builder for [`CellularSmoother`].
pub struct CellularSmootherBuilder {
    radius: u32,
    threshold: u32,
    iterations: u32,
}

impl CellularSmoother {
    /// Create a new builder for configuring a `CellularSmoother`.
    pub fn builder() -> CellularSmootherBuilder {
        CellularSmootherBuilder {
            radius: 1,
            threshold: 4,
            iterations: 1,
        }
    }

    /// The occupied-neighbour count at which a cell becomes `Filled`.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Number of smoothing passes per application.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Occupied cells within the window around `(row, col)` in `grid`.
    /// Out-of-bounds positions count as occupied.
    fn occupied_neighbours(&self, grid: &Grid, row: i32, col: i32) -> u32 {
        let mut count = 0;
        for &(dr, dc) in &self.offsets {
            let (nr, nc) = (row + dr, col + dc);
            if !grid.in_bounds(nr, nc) || grid.get(nr, nc).is_filled() {
                count += 1;
            }
        }
        count
    }

    /// Apply the configured number of smoothing iterations to `input`,
    /// returning the result as a fresh grid.
    ///
    /// Each iteration reads only the previous iteration's state: the
    /// two buffers are swapped once per pass. With zero iterations the
    /// result is a plain copy of the input.
    pub fn smooth(&self, input: &Grid) -> Grid {
        let mut current = input.clone();
        if self.iterations == 0 {
            return current;
        }
        let mut next = current.clone();
        for _ in 0..self.iterations {
            for row in 0..current.rows() as i32 {
                for col in 0..current.cols() as i32 {
                    let count = self.occupied_neighbours(&current, row, col);
                    let cell = if count >= self.threshold {
                        Cell::Filled
                    } else {
                        Cell::Empty
                    };
                    next.set(row, col, cell);
                }
            }
            std::mem::swap(&mut current, &mut next);
        }
        current
    }
}

impl CellularSmootherBuilder {
    /// Set the square window radius (default: 1). Must be >= 1.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the occupied-neighbour threshold (default: 4, half the
    /// radius-1 window).
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the number of passes per application (default: 1).
    /// Zero is a valid no-op.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Build the carver, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `radius` is 0.
    pub fn build(self) -> Result<CellularSmoother, String> {
        if self.radius == 0 {
            return Err("radius must be >= 1".to_string());
        }
        let r = self.radius as i32;
        let mut offsets = SmallVec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                if (dr, dc) != (0, 0) {
                    offsets.push((dr, dc));
                }
            }
        }
        Ok(CellularSmoother {
            threshold: self.threshold,
            iterations: self.iterations,
            offsets,
        })
    }
}

impl Carver for CellularSmoother {
    fn name(&self) -> &str {
        "smoother"
    }

    fn carve(&mut self, ctx: &mut CarveContext<'_>) -> Result<(), CarveError> {
        let smoothed = self.smooth(ctx.grid());
        *ctx.grid_mut() = smoothed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::RoundId;
    use delve_test_utils::grid_from_ascii;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn smoother(radius: u32, threshold: u32, iterations: u32) -> CellularSmoother {
        CellularSmoother::builder()
            .radius(radius)
            .threshold(threshold)
            .iterations(iterations)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_rejects_zero_radius() {
        let result = CellularSmoother::builder().radius(0).build();
        assert!(result.unwrap_err().contains("radius"));
    }

    #[test]
    fn radius_one_window_has_eight_offsets() {
        let s = smoother(1, 4, 1);
        assert_eq!(s.offsets.len(), 8);
        assert!(!s.offsets.contains(&(0, 0)));
    }

    #[test]
    fn all_filled_grid_stays_filled() {
        // Every interior cell sees 8 occupied neighbours and every edge
        // cell tops up to 8 through the out-of-bounds wall convention,
        // so any threshold <= 8 is a fixed point on a solid grid.
        let mut grid = Grid::new(5, 5).unwrap();
        grid.fill(Cell::Filled);
        let result = smoother(1, 8, 3).smooth(&grid);
        assert_eq!(result.filled_count(), result.cell_count());
    }

    #[test]
    fn counts_use_the_iteration_start_snapshot() {
        // With threshold 6, (0,0) flips to Filled in this pass. A naive
        // in-place sweep would then see the new (0,0) while counting
        // (0,1) and wrongly fill it; the snapshot count for (0,1) is
        // 3 walls + 2 occupied = 5, below the threshold.
        let grid = grid_from_ascii(
            "...\n\
             ##.\n\
             ...",
        );
        let result = smoother(1, 6, 1).smooth(&grid);
        assert_eq!(
            result.to_string(),
            "#.#\n\
             ...\n\
             #.#\n"
        );
    }

    #[test]
    fn out_of_bounds_counts_as_occupied() {
        // On an all-empty 3x3 grid the only occupancy a cell can see is
        // the wall beyond the edge: 5 for corners, 3 for edges, 0 for
        // the center.
        let grid = Grid::new(3, 3).unwrap();
        let result = smoother(1, 5, 1).smooth(&grid);
        assert_eq!(
            result.to_string(),
            "#.#\n\
             ...\n\
             #.#\n"
        );
    }

    #[test]
    fn single_cell_grid_is_all_wall_neighbours() {
        // Radius 2 window holds 24 positions, all outside a 1x1 grid.
        let grid = Grid::new(1, 1).unwrap();
        let result = smoother(2, 24, 1).smooth(&grid);
        assert!(result.get(0, 0).is_filled());
    }

    #[test]
    fn zero_iterations_returns_a_copy() {
        let grid = grid_from_ascii(
            "#.\n\
             .#",
        );
        let result = smoother(1, 4, 0).smooth(&grid);
        assert_eq!(result, grid);
    }

    #[test]
    fn input_grid_is_not_mutated() {
        let grid = Grid::new(4, 4).unwrap();
        let before = grid.clone();
        let _ = smoother(1, 3, 2).smooth(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn carve_replaces_the_context_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut s = smoother(1, 5, 1);
        let mut ctx = CarveContext::new(&mut grid, &mut rng, RoundId(1));
        s.carve(&mut ctx).unwrap();
        assert_eq!(grid.filled_count(), 4, "corners fill from the wall rule");
    }

    #[test]
    fn repeated_smoothing_converges_on_solid_input() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.fill(Cell::Filled);
        let once = smoother(1, 4, 1).smooth(&grid);
        let many = smoother(1, 4, 5).smooth(&grid);
        assert_eq!(once, many, "a solid grid is a fixed point of the rule");
    }
}
