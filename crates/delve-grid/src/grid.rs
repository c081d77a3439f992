//! The [`Grid`] occupancy store.

use crate::error::GridError;
use delve_core::Cell;
use std::fmt;

/// A rectangular 2D grid of [`Cell`]s in row-major order.
///
/// Cells are addressed by `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`. Coordinates are `i32` so that carver arithmetic
/// (unit-vector movement, window offsets) can go negative and be
/// rejected by [`in_bounds`](Grid::in_bounds) instead of wrapping.
///
/// Carvers mutate the grid in place through [`set`](Grid::set); the
/// smoothing stage replaces its contents wholesale. There is no resize
/// operation once a grid exists.
///
/// # Examples
///
/// ```
/// use delve_core::Cell;
/// use delve_grid::Grid;
///
/// let mut grid = Grid::new(4, 6).unwrap();
/// assert_eq!(grid.cell_count(), 24);
/// assert_eq!(grid.filled_count(), 0);
///
/// grid.set(1, 2, Cell::Filled);
/// assert!(grid.get(1, 2).is_filled());
/// assert!(grid.in_bounds(3, 5));
/// assert!(!grid.in_bounds(4, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-[`Cell::Empty`] grid of exactly `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Grid::MAX_DIM).
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; (rows as usize) * (cols as usize)],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    /// Read the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds. Callers performing
    /// speculative arithmetic must check [`in_bounds`](Grid::in_bounds)
    /// first; an unchecked out-of-bounds access is a programming defect,
    /// not a recoverable condition.
    pub fn get(&self, row: i32, col: i32) -> Cell {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) outside grid [0, {}) x [0, {})",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    /// Write the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds, as with [`get`](Grid::get).
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) outside grid [0, {}) x [0, {})",
            self.rows,
            self.cols
        );
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Row-major view of all cells, for renderers and statistics.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of [`Cell::Filled`] cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Ratio of filled cells to total cells, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.filled_count() as f64 / self.cell_count() as f64
    }
}

impl fmt::Display for Grid {
    /// ASCII rendering, one text row per grid row: `#` filled, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
