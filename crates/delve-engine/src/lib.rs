//! Generation pipeline for Delve maps.
//!
//! [`GeneratorConfig`] describes a complete run — grid dimensions,
//! initial fill, smoother and walker parameters, round count, and the
//! RNG seed — and is validated in full at construction. [`Generator`]
//! owns the shared grid, the single seeded random source, and the two
//! round stages, and reports a [`RoundMetrics`] per completed round.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod generator;
mod metrics;

pub use config::{ConfigError, GeneratorConfig, InitialFill, SmootherParams, WalkerParams};
pub use generator::Generator;
pub use metrics::{RoundMetrics, StageMetrics};
