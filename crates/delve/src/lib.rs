//! Delve: a procedural cave and dungeon map generator.
//!
//! Delve paints 2D occupancy grids by composing two classic
//! generators: a cellular-automata smoother that evolves noise toward
//! organic cavern shapes, and a drunkard's-walk agent that etches
//! corridors and stamps rooms. This facade crate re-exports the public
//! API from the Delve sub-crates; for most users, adding `delve` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use delve::prelude::*;
//!
//! let config = GeneratorConfig {
//!     rows: 16,
//!     cols: 32,
//!     rounds: 3,
//!     seed: 42,
//!     initial: InitialFill::Noise { density: 0.45 },
//!     ..Default::default()
//! };
//!
//! let mut generator = Generator::new(config).unwrap();
//! let reports = generator.run().unwrap();
//! assert_eq!(reports.len(), 3);
//!
//! // Read-only view for rendering and statistics.
//! let grid = generator.grid();
//! assert!((0.0..=1.0).contains(&grid.fill_ratio()));
//! println!("{grid}");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `delve-core` | Cell, round counter, error taxonomy |
//! | [`grid`] | `delve-grid` | Occupancy grid and room geometry |
//! | [`carve`] | `delve-carve` | Carver trait and carve context |
//! | [`carvers`] | `delve-carvers` | Noise, smoothing, and walk stages |
//! | [`engine`] | `delve-engine` | Configuration and the round pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and error taxonomy (`delve-core`).
pub use delve_core as types;

/// Occupancy grid and room geometry (`delve-grid`).
///
/// Provides [`grid::Grid`], the shared surface every stage carves, and
/// [`grid::Rect`] for room footprints.
pub use delve_grid as grid;

/// Carver trait and carve context (`delve-carve`).
///
/// The [`carve::Carver`] trait is the extension point for custom
/// generation stages.
pub use delve_carve as carve;

/// Reference carver implementations (`delve-carvers`).
///
/// Includes [`carvers::NoiseSeeder`], [`carvers::CellularSmoother`],
/// and [`carvers::DrunkardsWalk`].
pub use delve_carvers as carvers;

/// Configuration and the round pipeline (`delve-engine`).
///
/// [`engine::Generator`] drives smoother + walker rounds over one grid
/// and one seeded random source.
pub use delve_engine as engine;

/// Common imports for typical Delve usage.
///
/// ```rust
/// use delve::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use delve_core::{CarveError, Cell, RoundError, RoundId};

    // Grid
    pub use delve_grid::{Grid, GridError, Rect};

    // Carving
    pub use delve_carve::{CarveContext, Carver};
    pub use delve_carvers::{
        AgentState, CellularSmoother, Direction, DrunkardsWalk, NoiseSeeder, Persistence,
        WalkStats,
    };

    // Engine
    pub use delve_engine::{
        ConfigError, Generator, GeneratorConfig, InitialFill, RoundMetrics, SmootherParams,
        StageMetrics, WalkerParams,
    };
}
