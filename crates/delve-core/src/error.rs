//! Error types shared across the generator crates.
//!
//! Configuration errors live with their configuration surfaces
//! (`delve-grid` and `delve-engine`); this module holds the execution
//! errors a carver stage can raise, and the round-level wrapper the
//! pipeline reports them through.

use std::error::Error;
use std::fmt;

/// Errors from an individual carver stage's execution.
///
/// Returned by `Carver::carve()` and wrapped in
/// [`RoundError::CarverFailed`] by the pipeline. All configuration
/// problems are rejected earlier, at build time; the only runtime
/// failures are state the caller threaded in that does not fit the
/// grid being carved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarveError {
    /// A threaded-in agent position lies outside the grid.
    AgentOutOfBounds {
        /// Agent row.
        row: i32,
        /// Agent column.
        col: i32,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// The stage failed for a reason not covered by a typed variant.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgentOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "agent position ({row}, {col}) outside grid [0, {rows}) x [0, {cols})"
                )
            }
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for CarveError {}

/// Errors from the pipeline while running one generation round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundError {
    /// A carver stage returned an error during execution.
    CarverFailed {
        /// Name of the failing stage.
        name: String,
        /// The underlying carver error.
        reason: CarveError,
    },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CarverFailed { name, reason } => {
                write!(f, "carver '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for RoundError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CarverFailed { reason, .. } => Some(reason),
        }
    }
}
