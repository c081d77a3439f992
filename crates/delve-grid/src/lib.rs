//! 2D occupancy grid and room-footprint geometry for Delve.
//!
//! [`Grid`] is the shared mutable surface every carver stage paints
//! into; [`Rect`] describes the rectangular footprint of a room stamp.
//! Both crates above this one treat the grid purely as occupancy — no
//! pathfinding, reachability, or gameplay semantics live here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod rect;

pub use error::GridError;
pub use grid::Grid;
pub use rect::Rect;
