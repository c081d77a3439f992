//! The [`RoundId`] counter.

use std::fmt;

/// Monotonically increasing generation-round counter.
///
/// Incremented each time the pipeline completes one smoother + walker
/// round. Round 0 is the initial (seeded but unprocessed) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RoundId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
