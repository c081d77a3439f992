//! The round-based generation pipeline.

use std::time::Instant;

use delve_carve::{CarveContext, Carver};
use delve_carvers::{AgentState, CellularSmoother, DrunkardsWalk, NoiseSeeder};
use delve_core::{RoundError, RoundId};
use delve_grid::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, GeneratorConfig, InitialFill};
use crate::metrics::{RoundMetrics, StageMetrics};

/// The generation pipeline: one grid, one seeded random source, and
/// the two round stages (smoother, then walker) run in order.
///
/// The pipeline is the sole owner of the grid and the agent state
/// between rounds; there is no other mutator. Rounds are driven one at
/// a time with [`step_round`](Generator::step_round) or to completion
/// with [`run`](Generator::run); with `rounds = 0` the seeded grid is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use delve_engine::{Generator, GeneratorConfig, InitialFill};
///
/// let config = GeneratorConfig {
///     rows: 16,
///     cols: 24,
///     rounds: 3,
///     seed: 7,
///     initial: InitialFill::Noise { density: 0.45 },
///     ..Default::default()
/// };
/// let mut generator = Generator::new(config).unwrap();
/// let reports = generator.run().unwrap();
/// assert_eq!(reports.len(), 3);
/// assert_eq!(generator.grid().cell_count(), 16 * 24);
/// ```
pub struct Generator {
    config: GeneratorConfig,
    grid: Grid,
    rng: ChaCha8Rng,
    smoother: CellularSmoother,
    walker: DrunkardsWalk,
    rounds_done: u32,
}

impl Generator {
    /// Build a pipeline from a validated configuration and seed the
    /// initial grid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any configuration invariant is
    /// violated. Nothing is clamped: an invalid density, probability,
    /// radius, or start position is rejected here, not repaired.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.rows, config.cols)?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        let smoother = CellularSmoother::builder()
            .radius(config.smoother.radius)
            .threshold(config.smoother.threshold)
            .iterations(config.smoother.iterations)
            .build()
            .map_err(|reason| ConfigError::Stage { reason })?;

        let w = &config.walker;
        let mut builder = DrunkardsWalk::builder()
            .phases(w.phases)
            .steps_per_phase(w.steps_per_phase)
            .room_size(w.room_width, w.room_height)
            .room_chance(w.room_chance)
            .room_chance_step(w.room_chance_step)
            .turn_chance(w.turn_chance)
            .turn_chance_step(w.turn_chance_step)
            .persistence(w.persistence)
            .turn_on_boundary(w.turn_on_boundary);
        if let Some((row, col)) = w.start {
            builder = builder.start(row, col);
        }
        let walker = builder
            .build()
            .map_err(|reason| ConfigError::Stage { reason })?;

        let mut generator = Self {
            config,
            grid,
            rng,
            smoother,
            walker,
            rounds_done: 0,
        };
        generator.seed_initial()?;
        Ok(generator)
    }

    /// Apply the configured initial fill to the fresh grid (round 0).
    fn seed_initial(&mut self) -> Result<(), ConfigError> {
        if let InitialFill::Noise { density } = self.config.initial {
            let mut noise = NoiseSeeder::builder()
                .density(density)
                .build()
                .map_err(|reason| ConfigError::Stage { reason })?;
            let mut ctx = CarveContext::new(&mut self.grid, &mut self.rng, RoundId(0));
            noise
                .carve(&mut ctx)
                .map_err(|e| ConfigError::Stage {
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Execute one smoother + walker round and report on it.
    ///
    /// Callable past the configured round count for callers that drive
    /// the pipeline themselves; [`run`](Generator::run) stops at
    /// `config.rounds`.
    pub fn step_round(&mut self) -> Result<RoundMetrics, RoundError> {
        let round = RoundId(u64::from(self.rounds_done) + 1);
        let started = Instant::now();

        let smooth_metrics =
            Self::run_stage(&mut self.smoother, &mut self.grid, &mut self.rng, round)?;
        let walk_metrics =
            Self::run_stage(&mut self.walker, &mut self.grid, &mut self.rng, round)?;

        self.rounds_done += 1;
        Ok(RoundMetrics {
            round,
            total_us: started.elapsed().as_micros() as u64,
            stages: vec![smooth_metrics, walk_metrics],
            walk: self.walker.stats(),
            fill_ratio: self.grid.fill_ratio(),
        })
    }

    fn run_stage(
        stage: &mut dyn Carver,
        grid: &mut Grid,
        rng: &mut ChaCha8Rng,
        round: RoundId,
    ) -> Result<StageMetrics, RoundError> {
        let filled_before = grid.filled_count() as i64;
        let started = Instant::now();
        let mut ctx = CarveContext::new(grid, rng, round);
        if let Err(reason) = stage.carve(&mut ctx) {
            return Err(RoundError::CarverFailed {
                name: stage.name().to_string(),
                reason,
            });
        }
        Ok(StageMetrics {
            name: stage.name().to_string(),
            elapsed_us: started.elapsed().as_micros() as u64,
            filled_delta: grid.filled_count() as i64 - filled_before,
        })
    }

    /// Run all remaining configured rounds, collecting one report per
    /// round. With `rounds = 0` this is a no-op returning no reports.
    pub fn run(&mut self) -> Result<Vec<RoundMetrics>, RoundError> {
        let remaining = self.config.rounds.saturating_sub(self.rounds_done);
        let mut reports = Vec::with_capacity(remaining as usize);
        while self.rounds_done < self.config.rounds {
            reports.push(self.step_round()?);
        }
        Ok(reports)
    }

    /// Read-only view of the grid for renderers and statistics.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the pipeline, yielding the generated grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The walking agent's state after the most recent round.
    pub fn agent(&self) -> &AgentState {
        self.walker.state()
    }

    /// Replace the walking agent's state, e.g. to thread an agent
    /// between separately-configured runs.
    pub fn set_agent(&mut self, state: AgentState) {
        self.walker.set_state(state);
    }

    /// Rounds completed so far.
    pub fn rounds_done(&self) -> u32 {
        self.rounds_done
    }

    /// The seed this run was built from.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Rebuild the initial state from a new seed: fresh grid, fresh
    /// RNG, fresh stage state, zero rounds completed.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.seed = seed;
        *self = Self::new(config)?;
        Ok(())
    }
}
