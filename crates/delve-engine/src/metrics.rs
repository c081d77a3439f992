//! Per-round reporting for the generation pipeline.
//!
//! [`RoundMetrics`] captures timing and carving counters for a single
//! round so external reporters can trace a run without touching the
//! grid. Everything here is derived observation — dropping it on the
//! floor never changes the generated map.

use delve_carvers::WalkStats;
use delve_core::RoundId;

/// Timing and fill data for one carver stage within a round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageMetrics {
    /// Stage name, as reported by the carver.
    pub name: String,
    /// Wall-clock execution time, in microseconds.
    pub elapsed_us: u64,
    /// Net change in filled cells (negative when smoothing clears).
    pub filled_delta: i64,
}

/// Report for one completed pipeline round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundMetrics {
    /// The round this report describes (1-based; round 0 is the seed).
    pub round: RoundId,
    /// Wall-clock time for the whole round, in microseconds.
    pub total_us: u64,
    /// Per-stage execution data, in pipeline order.
    pub stages: Vec<StageMetrics>,
    /// Walker counters for the round.
    pub walk: WalkStats,
    /// Fill ratio of the grid after the round, in `[0, 1]`.
    pub fill_ratio: f64,
}
