//! Reference carvers for the Delve map generator.
//!
//! Provides the three stages the generation pipeline composes:
//!
//! # Pipeline order (each round)
//!
//! 1. [`NoiseSeeder`] — seeds the grid with independent per-cell noise
//!    (run once, before the first round).
//! 2. [`CellularSmoother`] — neighbour-count threshold rule, applied as
//!    a whole-iteration snapshot swap.
//! 3. [`DrunkardsWalk`] — stochastic walker that alternates corridor
//!    steps with room stamps, with self-reinforcing probabilities.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod noise;
pub mod smooth;
pub mod walker;

pub use noise::NoiseSeeder;
pub use smooth::CellularSmoother;
pub use walker::{AgentState, Direction, DrunkardsWalk, Persistence, WalkStats};
