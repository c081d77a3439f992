//! Test utilities and fixtures for Delve development.
//!
//! Provides [`FixedRng`], a degenerate random source that lets tests
//! pin every probability decision to its extreme outcome, and
//! [`grid_from_ascii`], a fixture parser matching the grid's own ASCII
//! rendering so expected maps can be written inline.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use delve_core::Cell;
use delve_grid::Grid;
use rand::RngCore;

/// A random source that emits one fixed 64-bit word forever.
///
/// [`zeros`](FixedRng::zeros) makes every uniform `f64` draw come out
/// 0.0 (so any probability strictly above zero fires, and every ranged
/// integer draw takes its low bound); [`ones`](FixedRng::ones) makes
/// every `f64` draw land just below 1.0 (so only probability 1.0
/// fires).
pub struct FixedRng {
    word: u64,
}

impl FixedRng {
    /// All-zero bit stream: minimum draws.
    pub fn zeros() -> Self {
        Self { word: 0 }
    }

    /// All-one bit stream: maximum draws.
    pub fn ones() -> Self {
        Self { word: u64::MAX }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.word.to_le_bytes();
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = bytes[i % bytes.len()];
        }
    }
}

/// Parse a grid from its ASCII rendering: `#` filled, `.` empty.
///
/// Leading/trailing whitespace on each line is trimmed so fixtures can
/// be indented inside test source.
///
/// # Panics
///
/// Panics on empty input, ragged rows, or characters other than `#`
/// and `.` — fixture bugs, not runtime conditions.
pub fn grid_from_ascii(ascii: &str) -> Grid {
    let lines: Vec<&str> = ascii
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert!(!lines.is_empty(), "fixture has no rows");
    let cols = lines[0].chars().count();
    let mut grid = Grid::new(lines.len() as u32, cols as u32).expect("fixture dimensions");
    for (row, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "fixture row {row} has a different width"
        );
        for (col, ch) in line.chars().enumerate() {
            let cell = match ch {
                '#' => Cell::Filled,
                '.' => Cell::Empty,
                other => panic!("fixture character {other:?} at ({row}, {col})"),
            };
            grid.set(row as i32, col as i32, cell);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn zeros_draws_the_minimum() {
        let mut rng = FixedRng::zeros();
        let draw: f64 = rng.random();
        assert!(draw < 1e-9);
        assert_eq!(rng.random_range(0..4), 0);
    }

    #[test]
    fn ones_draws_just_below_one() {
        let mut rng = FixedRng::ones();
        let draw: f64 = rng.random();
        assert!(draw > 0.99 && draw < 1.0);
    }

    #[test]
    fn ascii_roundtrips_through_display() {
        let grid = grid_from_ascii(
            "#.#\n\
             .#.\n",
        );
        assert_eq!(grid.to_string(), "#.#\n.#.\n");
        assert_eq!(grid.filled_count(), 3);
    }

    #[test]
    #[should_panic(expected = "different width")]
    fn ragged_fixture_panics() {
        let _ = grid_from_ascii("##\n#");
    }
}
