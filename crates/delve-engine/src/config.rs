//! Pipeline configuration, validation, and error types.
//!
//! [`GeneratorConfig`] is the single input to
//! [`Generator::new`](crate::Generator::new).
//! [`validate()`](GeneratorConfig::validate) checks every structural
//! invariant up front so the carver builders never see an invalid
//! value; nothing is silently clamped.

use std::error::Error;
use std::fmt;

use delve_carvers::Persistence;
use delve_grid::{Grid, GridError};

// ── InitialFill ───────────────────────────────────────────────────

/// How the grid is seeded before the first round.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InitialFill {
    /// Start from an all-empty grid.
    #[default]
    Empty,
    /// Seed every cell independently with the given fill density.
    Noise {
        /// Probability in `[0, 1]` that a cell starts filled.
        density: f64,
    },
}

// ── Stage parameter blocks ────────────────────────────────────────

/// Parameters for the smoothing stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmootherParams {
    /// Square window radius. Must be >= 1.
    pub radius: u32,
    /// Occupied-neighbour count at which a cell fills.
    pub threshold: u32,
    /// Passes per round. Zero disables smoothing.
    pub iterations: u32,
}

impl Default for SmootherParams {
    fn default() -> Self {
        Self {
            radius: 1,
            threshold: 4,
            iterations: 1,
        }
    }
}

/// Parameters for the drunkard's-walk stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkerParams {
    /// Movement phases per round.
    pub phases: u32,
    /// Maximum steps per phase.
    pub steps_per_phase: u32,
    /// Stamped room width. Must be >= 1.
    pub room_width: u32,
    /// Stamped room height. Must be >= 1.
    pub room_height: u32,
    /// Baseline room-stamp probability, in `[0, 1]`.
    pub room_chance: f64,
    /// Per-phase room-probability increment. Must be >= 0.
    pub room_chance_step: f64,
    /// Baseline direction-change probability, in `[0, 1]`.
    pub turn_chance: f64,
    /// Per-phase turn-probability increment. Must be >= 0.
    pub turn_chance_step: f64,
    /// Fixed starting position; `None` rolls a random one.
    pub start: Option<(i32, i32)>,
    /// Agent lifecycle across rounds.
    pub persistence: Persistence,
    /// Re-roll the direction after a phase is cut short at the edge.
    pub turn_on_boundary: bool,
}

impl Default for WalkerParams {
    fn default() -> Self {
        Self {
            phases: 5,
            steps_per_phase: 10,
            room_width: 5,
            room_height: 3,
            room_chance: 0.1,
            room_chance_step: 0.05,
            turn_chance: 0.2,
            turn_chance_step: 0.03,
            start: None,
            persistence: Persistence::default(),
            turn_on_boundary: false,
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during [`GeneratorConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// Noise density is not a finite probability in `[0, 1]`.
    InvalidDensity {
        /// The invalid value.
        value: f64,
    },
    /// A baseline probability is not a finite value in `[0, 1]`.
    InvalidProbability {
        /// Which parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A probability increment is negative or non-finite.
    InvalidIncrement {
        /// Which parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The smoothing window radius is zero.
    ZeroSmoothRadius,
    /// A room dimension is zero.
    ZeroRoomDimension {
        /// Configured room width.
        width: u32,
        /// Configured room height.
        height: u32,
    },
    /// The configured start position lies outside the grid.
    InvalidStart {
        /// Configured row.
        row: i32,
        /// Configured column.
        col: i32,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// A carver builder rejected configuration that passed validation.
    Stage {
        /// The builder's message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidDensity { value } => {
                write!(f, "noise density must be in [0, 1], got {value}")
            }
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
            Self::InvalidIncrement { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
            Self::ZeroSmoothRadius => write!(f, "smoothing radius must be >= 1"),
            Self::ZeroRoomDimension { width, height } => {
                write!(f, "room dimensions must be >= 1, got {width}x{height}")
            }
            Self::InvalidStart {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "start position ({row}, {col}) outside grid [0, {rows}) x [0, {cols})"
                )
            }
            Self::Stage { reason } => write!(f, "stage construction: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── GeneratorConfig ───────────────────────────────────────────────

/// Complete configuration for a generation run.
///
/// The default profile is a small console-sized map: 10 x 20 cells,
/// five rounds, empty initial fill, and the stock stage parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub cols: u32,
    /// Smoother + walker rounds to run. Zero leaves the seeded grid
    /// untouched.
    pub rounds: u32,
    /// Seed for the pipeline's single ChaCha8 random source.
    pub seed: u64,
    /// Initial grid contents.
    pub initial: InitialFill,
    /// Smoothing stage parameters.
    pub smoother: SmootherParams,
    /// Walk stage parameters.
    pub walker: WalkerParams,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 20,
            rounds: 5,
            seed: 0,
            initial: InitialFill::default(),
            smoother: SmootherParams::default(),
            walker: WalkerParams::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid dimensions: non-zero, addressable with i32.
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > Grid::MAX_DIM {
                return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid::MAX_DIM,
                }));
            }
        }
        // 2. Noise density is a probability.
        if let InitialFill::Noise { density } = self.initial {
            if !density.is_finite() || !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::InvalidDensity { value: density });
            }
        }
        // 3. Smoothing window must contain at least one neighbour.
        if self.smoother.radius == 0 {
            return Err(ConfigError::ZeroSmoothRadius);
        }
        // 4. Room footprint is at least one cell.
        if self.walker.room_width == 0 || self.walker.room_height == 0 {
            return Err(ConfigError::ZeroRoomDimension {
                width: self.walker.room_width,
                height: self.walker.room_height,
            });
        }
        // 5. Baseline probabilities.
        for (name, value) in [
            ("room_chance", self.walker.room_chance),
            ("turn_chance", self.walker.turn_chance),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        // 6. Increments saturate at 1.0 later, but must be sane numbers.
        for (name, value) in [
            ("room_chance_step", self.walker.room_chance_step),
            ("turn_chance_step", self.walker.turn_chance_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidIncrement { name, value });
            }
        }
        // 7. A fixed start must be on the grid.
        if let Some((row, col)) = self.walker.start {
            if row < 0 || row >= self.rows as i32 || col < 0 || col >= self.cols as i32 {
                return Err(ConfigError::InvalidStart {
                    row,
                    col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }
}
