//! The drunkard's-walk corridor and room carver.
//!
//! A stateful agent wanders the grid in axis-aligned unit steps,
//! painting every cell it enters and occasionally stamping a
//! rectangular room centered on itself. Both events are driven by
//! self-reinforcing probabilities: each resets to its configured
//! baseline when it fires and otherwise grows by a configured
//! increment, saturating at 1.0.
//!
//! One carve call runs a configured number of movement *phases*. Each
//! phase decides whether to turn, takes up to a configured number of
//! steps in the current direction (a step that would leave the grid
//! aborts the rest of the phase — no wrap, no clamp), then decides
//! whether to stamp a room.
//!
//! Constructed via the builder pattern: [`DrunkardsWalk::builder`].

use delve_carve::{CarveContext, Carver};
use delve_core::{CarveError, Cell};
use delve_grid::{Grid, Rect};
use rand::{Rng, RngCore};

/// Cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Row - 1.
    North,
    /// Col + 1.
    East,
    /// Row + 1.
    South,
    /// Col - 1.
    West,
}

impl Direction {
    /// All four directions, in drawing order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row_offset, col_offset)` unit vector.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Draw a uniformly random direction.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// How the walker treats its agent across carve calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    /// One agent for the lifetime of the walker: position, direction,
    /// and probabilities carry over from the previous call.
    #[default]
    Persistent,
    /// A fresh agent every call: position is re-rolled and the
    /// probabilities reset to their baselines.
    FreshEachRound,
}

/// Snapshot of the walking agent between carve calls.
///
/// The position is an explicit `Option` — `None` means the agent has
/// not been placed yet and will be dropped uniformly at random into
/// the grid on the next carve. Probabilities are clamped into `[0, 1]`
/// at construction and stay there for the lifetime of the state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentState {
    pos: Option<(i32, i32)>,
    dir: Direction,
    room_prob: f64,
    turn_prob: f64,
}

impl AgentState {
    /// Construct a state snapshot, clamping both probabilities into
    /// `[0, 1]`.
    pub fn new(pos: Option<(i32, i32)>, dir: Direction, room_prob: f64, turn_prob: f64) -> Self {
        Self {
            pos,
            dir,
            room_prob: room_prob.clamp(0.0, 1.0),
            turn_prob: turn_prob.clamp(0.0, 1.0),
        }
    }

    /// Agent position, if placed.
    pub fn pos(&self) -> Option<(i32, i32)> {
        self.pos
    }

    /// Current movement direction.
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Current room-stamp probability, always in `[0, 1]`.
    pub fn room_prob(&self) -> f64 {
        self.room_prob
    }

    /// Current direction-change probability, always in `[0, 1]`.
    pub fn turn_prob(&self) -> f64 {
        self.turn_prob
    }
}

/// Counters from the most recent carve call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Corridor steps successfully taken.
    pub steps: u64,
    /// Rooms stamped.
    pub rooms_stamped: u64,
    /// Phases cut short at the grid edge.
    pub boundary_aborts: u64,
    /// Direction changes rolled.
    pub turns: u64,
}

/// The drunkard's-walk carver.
#[derive(Clone, Debug)]
pub struct DrunkardsWalk {
    phases: u32,
    steps_per_phase: u32,
    room_width: u32,
    room_height: u32,
    room_chance: f64,
    room_chance_step: f64,
    turn_chance: f64,
    turn_chance_step: f64,
    persistence: Persistence,
    turn_on_boundary: bool,
    state: AgentState,
    stats: WalkStats,
}

/// Builder for [`DrunkardsWalk`].
pub struct DrunkardsWalkBuilder {
    phases: u32,
    steps_per_phase: u32,
    room_width: u32,
    room_height: u32,
    room_chance: f64,
    room_chance_step: f64,
    turn_chance: f64,
    turn_chance_step: f64,
    start: Option<(i32, i32)>,
    persistence: Persistence,
    turn_on_boundary: bool,
}

impl DrunkardsWalk {
    /// Create a new builder for configuring a `DrunkardsWalk`.
    pub fn builder() -> DrunkardsWalkBuilder {
        DrunkardsWalkBuilder {
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

    /// The agent state after the most recent carve call.
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Replace the agent state, e.g. to thread a walker's endpoint into
    /// another walker or to resume a run.
    pub fn set_state(&mut self, state: AgentState) {
        self.state = state;
    }

    /// Counters from the most recent carve call.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    fn stamp_room(&self, grid: &mut Grid, center: (i32, i32)) {
        let rect = Rect::centered_at(center.0, center.1, self.room_width, self.room_height)
            .shifted_into(grid.rows(), grid.cols());
        for row in rect.row..rect.bottom() {
            for col in rect.col..rect.right() {
                // Overhang only exists when the room exceeds the grid.
                if grid.in_bounds(row, col) {
                    grid.set(row, col, Cell::Filled);
                }
            }
        }
    }
}

impl Carver for DrunkardsWalk {
    fn name(&self) -> &str {
        "drunkards_walk"
    }

    fn carve(&mut self, ctx: &mut CarveContext<'_>) -> Result<(), CarveError> {
        let (grid, rng) = ctx.parts();
        self.stats = WalkStats::default();

        if self.persistence == Persistence::FreshEachRound {
            self.state = AgentState::new(None, self.state.dir, self.room_chance, self.turn_chance);
        }

        let (mut row, mut col) = match self.state.pos {
            Some((row, col)) => {
                if !grid.in_bounds(row, col) {
                    return Err(CarveError::AgentOutOfBounds {
                        row,
                        col,
                        rows: grid.rows(),
                        cols: grid.cols(),
                    });
                }
                (row, col)
            }
            None => {
                self.state.dir = Direction::random(rng);
                (
                    rng.random_range(0..grid.rows() as i32),
                    rng.random_range(0..grid.cols() as i32),
                )
            }
        };
        grid.set(row, col, Cell::Filled);

        for _ in 0..self.phases {
            // Turn decision.
            if rng.random::<f64>() < self.state.turn_prob {
                self.state.dir = Direction::random(rng);
                self.state.turn_prob = self.turn_chance;
                self.stats.turns += 1;
            } else {
                self.state.turn_prob = (self.state.turn_prob + self.turn_chance_step).min(1.0);
            }

            // Movement: stop the phase at the grid edge.
            let (dr, dc) = self.state.dir.offset();
            for _ in 0..self.steps_per_phase {
                let (next_row, next_col) = (row + dr, col + dc);
                if !grid.in_bounds(next_row, next_col) {
                    self.stats.boundary_aborts += 1;
                    if self.turn_on_boundary {
                        self.state.dir = Direction::random(rng);
                    }
                    break;
                }
                row = next_row;
                col = next_col;
                grid.set(row, col, Cell::Filled);
                self.stats.steps += 1;
            }

            // Room decision.
            if rng.random::<f64>() < self.state.room_prob {
                self.stamp_room(grid, (row, col));
                self.state.room_prob = self.room_chance;
                self.stats.rooms_stamped += 1;
            } else {
                self.state.room_prob = (self.state.room_prob + self.room_chance_step).min(1.0);
            }
        }

        self.state.pos = Some((row, col));
        Ok(())
    }
}

impl DrunkardsWalkBuilder {
    /// Set the number of movement phases per carve call (default: 5).
    /// Zero is a valid no-op.
    pub fn phases(mut self, phases: u32) -> Self {
        self.phases = phases;
        self
    }

    /// Set the maximum steps per phase (default: 10). Zero is a valid
    /// no-op: the agent only ever attempts room stamps.
    pub fn steps_per_phase(mut self, steps: u32) -> Self {
        self.steps_per_phase = steps;
        self
    }

    /// Set the stamped room footprint (default: 5 x 3). Both dimensions
    /// must be >= 1; rooms larger than the grid are valid and simply
    /// cover it.
    pub fn room_size(mut self, width: u32, height: u32) -> Self {
        self.room_width = width;
        self.room_height = height;
        self
    }

    /// Set the baseline room-stamp probability (default: 0.1).
    pub fn room_chance(mut self, chance: f64) -> Self {
        self.room_chance = chance;
        self
    }

    /// Set the per-phase room-probability increment (default: 0.05).
    pub fn room_chance_step(mut self, step: f64) -> Self {
        self.room_chance_step = step;
        self
    }

    /// Set the baseline direction-change probability (default: 0.2).
    pub fn turn_chance(mut self, chance: f64) -> Self {
        self.turn_chance = chance;
        self
    }

    /// Set the per-phase turn-probability increment (default: 0.03).
    pub fn turn_chance_step(mut self, step: f64) -> Self {
        self.turn_chance_step = step;
        self
    }

    /// Fix the agent's starting position instead of rolling a random
    /// one on first placement (default: random).
    pub fn start(mut self, row: i32, col: i32) -> Self {
        self.start = Some((row, col));
        self
    }

    /// Set the agent lifecycle across carve calls (default:
    /// [`Persistence::Persistent`]).
    pub fn persistence(mut self, persistence: Persistence) -> Self {
        self.persistence = persistence;
        self
    }

    /// When set, a phase aborted at the grid edge immediately re-rolls
    /// a random direction for the next phase (default: off).
    pub fn turn_on_boundary(mut self, enabled: bool) -> Self {
        self.turn_on_boundary = enabled;
        self
    }

    /// Build the carver, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - either room dimension is 0
    /// - either baseline probability is not a finite value in `[0, 1]`
    /// - either increment is not finite and >= 0
    pub fn build(self) -> Result<DrunkardsWalk, String> {
        if self.room_width == 0 || self.room_height == 0 {
            return Err(format!(
                "room dimensions must be >= 1, got {}x{}",
                self.room_width, self.room_height
            ));
        }
        for (name, value) in [
            ("room_chance", self.room_chance),
            ("turn_chance", self.turn_chance),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "{name} must be a probability in [0, 1], got {value}"
                ));
            }
        }
        for (name, value) in [
            ("room_chance_step", self.room_chance_step),
            ("turn_chance_step", self.turn_chance_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        Ok(DrunkardsWalk {
            phases: self.phases,
            steps_per_phase: self.steps_per_phase,
            room_width: self.room_width,
            room_height: self.room_height,
            room_chance: self.room_chance,
            room_chance_step: self.room_chance_step,
            turn_chance: self.turn_chance,
            turn_chance_step: self.turn_chance_step,
            persistence: self.persistence,
            turn_on_boundary: self.turn_on_boundary,
            state: AgentState::new(self.start, Direction::North, self.room_chance, self.turn_chance),
            stats: WalkStats::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::RoundId;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn carve_once(walker: &mut DrunkardsWalk, grid: &mut Grid, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ctx = CarveContext::new(grid, &mut rng, RoundId(1));
        walker.carve(&mut ctx).unwrap();
    }

    #[test]
    fn builder_rejects_zero_room_dimension() {
        let result = DrunkardsWalk::builder().room_size(0, 3).build();
        assert!(result.unwrap_err().contains("room dimensions"));
    }

    #[test]
    fn builder_rejects_probability_above_one() {
        let result = DrunkardsWalk::builder().room_chance(1.5).build();
        assert!(result.unwrap_err().contains("room_chance"));
    }

    #[test]
    fn builder_rejects_nan_turn_chance() {
        assert!(DrunkardsWalk::builder().turn_chance(f64::NAN).build().is_err());
    }

    #[test]
    fn builder_rejects_negative_increment() {
        let result = DrunkardsWalk::builder().room_chance_step(-0.1).build();
        assert!(result.unwrap_err().contains("room_chance_step"));
    }

    #[test]
    fn straight_walk_marks_start_plus_steps() {
        // Turn chance 1.0 re-rolls the direction each phase; with one
        // phase of two steps from the grid center, exactly the start
        // cell and two stepped cells are painted and no room appears.
        let mut grid = Grid::new(10, 10).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .start(5, 5)
            .phases(1)
            .steps_per_phase(2)
            .room_chance(0.0)
            .room_chance_step(0.0)
            .turn_chance(1.0)
            .build()
            .unwrap();
        carve_once(&mut walker, &mut grid, 42);
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(walker.stats().steps, 2);
        assert_eq!(walker.stats().rooms_stamped, 0);
    }

    #[test]
    fn zero_steps_only_attempts_rooms() {
        // Three phases with no movement: at most three stamp attempts,
        // and with a 1x1 room every stamp lands on the start cell.
        let mut grid = Grid::new(10, 10).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .start(5, 5)
            .phases(3)
            .steps_per_phase(0)
            .room_size(1, 1)
            .room_chance(1.0)
            .build()
            .unwrap();
        carve_once(&mut walker, &mut grid, 42);
        assert_eq!(walker.stats().rooms_stamped, 3);
        assert_eq!(walker.stats().steps, 0);
        assert_eq!(grid.filled_count(), 1, "no corridor beyond the start cell");
    }

    #[test]
    fn zero_phases_marks_only_the_start() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut walker = DrunkardsWalk::builder().start(2, 2).phases(0).build().unwrap();
        carve_once(&mut walker, &mut grid, 42);
        assert_eq!(grid.filled_count(), 1);
        assert_eq!(walker.state().pos(), Some((2, 2)));
    }

    #[test]
    fn boundary_aborts_the_phase_without_wrapping() {
        // Pin the agent to the top-left corner heading north: the first
        // step would leave the grid, so the phase ends with no steps.
        let mut grid = Grid::new(4, 4).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .phases(1)
            .steps_per_phase(5)
            .room_chance(0.0)
            .room_chance_step(0.0)
            .turn_chance(0.0)
            .turn_chance_step(0.0)
            .build()
            .unwrap();
        walker.set_state(AgentState::new(Some((0, 0)), Direction::North, 0.0, 0.0));
        carve_once(&mut walker, &mut grid, 42);
        assert_eq!(walker.stats().steps, 0);
        assert_eq!(walker.stats().boundary_aborts, 1);
        assert_eq!(grid.filled_count(), 1);
        assert_eq!(walker.state().pos(), Some((0, 0)));
    }

    #[test]
    fn room_stamp_is_shifted_fully_inside_the_grid() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .start(0, 0)
            .phases(1)
            .steps_per_phase(0)
            .room_size(3, 3)
            .room_chance(1.0)
            .build()
            .unwrap();
        carve_once(&mut walker, &mut grid, 42);
        // Shifted to the corner, the full 3x3 footprint survives.
        assert_eq!(grid.filled_count(), 9);
        for row in 0..3 {
            for col in 0..3 {
                assert!(grid.get(row, col).is_filled());
            }
        }
    }

    #[test]
    fn oversized_room_covers_the_whole_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .start(1, 1)
            .phases(1)
            .steps_per_phase(0)
            .room_size(10, 10)
            .room_chance(1.0)
            .build()
            .unwrap();
        carve_once(&mut walker, &mut grid, 42);
        assert_eq!(grid.filled_count(), grid.cell_count());
    }

    #[test]
    fn threaded_out_of_bounds_state_is_rejected() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut walker = DrunkardsWalk::builder().build().unwrap();
        walker.set_state(AgentState::new(Some((50, 50)), Direction::North, 0.1, 0.2));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut ctx = CarveContext::new(&mut grid, &mut rng, RoundId(1));
        let err = walker.carve(&mut ctx).unwrap_err();
        assert!(matches!(err, CarveError::AgentOutOfBounds { row: 50, col: 50, .. }));
    }

    #[test]
    fn persistent_agent_resumes_where_it_stopped() {
        let mut grid = Grid::new(16, 16).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .start(8, 8)
            .phases(2)
            .steps_per_phase(3)
            .build()
            .unwrap();
        carve_once(&mut walker, &mut grid, 7);
        let end = walker.state().pos().unwrap();
        carve_once(&mut walker, &mut grid, 8);
        // The second call started from `end`, so it is painted.
        assert!(grid.get(end.0, end.1).is_filled());
    }

    #[test]
    fn fresh_agent_is_rerolled_each_call() {
        let mut grid = Grid::new(64, 64).unwrap();
        let mut walker = DrunkardsWalk::builder()
            .phases(0)
            .persistence(Persistence::FreshEachRound)
            .build()
            .unwrap();
        let mut placements = std::collections::HashSet::new();
        for seed in 0..6 {
            carve_once(&mut walker, &mut grid, seed);
            placements.insert(walker.state().pos().unwrap());
        }
        assert!(placements.len() > 1, "fresh placement re-rolls the position");
    }

    #[test]
    fn state_probabilities_are_clamped_at_construction() {
        let state = AgentState::new(None, Direction::East, 7.0, -3.0);
        assert_eq!(state.room_prob(), 1.0);
        assert_eq!(state.turn_prob(), 0.0);
    }

    #[test]
    fn determinism_same_seed_same_walk() {
        let run = |seed: u64| {
            let mut grid = Grid::new(20, 20).unwrap();
            let mut walker = DrunkardsWalk::builder().phases(8).build().unwrap();
            carve_once(&mut walker, &mut grid, seed);
            (grid, *walker.state())
        };
        let (grid_a, state_a) = run(99);
        let (grid_b, state_b) = run(99);
        assert_eq!(grid_a, grid_b);
        assert_eq!(state_a, state_b);
    }

    proptest! {
        // The walker only paints through checked coordinates, so a run
        // that completes without a grid assertion firing has stayed in
        // bounds; the remaining invariants are checked explicitly.
        #[test]
        fn invariants_hold_for_arbitrary_walks(
            seed in 0u64..1000,
            phases in 0u32..32,
            steps in 0u32..16,
            room_chance in 0.0f64..=1.0,
            turn_chance in 0.0f64..=1.0,
            step_inc in 0.0f64..0.5,
        ) {
            let mut grid = Grid::new(8, 8).unwrap();
            let mut walker = DrunkardsWalk::builder()
                .phases(phases)
                .steps_per_phase(steps)
                .room_chance(room_chance)
                .room_chance_step(step_inc)
                .turn_chance(turn_chance)
                .turn_chance_step(step_inc)
                .build()
                .unwrap();
            carve_once(&mut walker, &mut grid, seed);

            let state = walker.state();
            prop_assert!((0.0..=1.0).contains(&state.room_prob()));
            prop_assert!((0.0..=1.0).contains(&state.turn_prob()));
            let (row, col) = state.pos().unwrap();
            prop_assert!(grid.in_bounds(row, col));

            let stats = walker.stats();
            prop_assert!(stats.steps <= (phases as u64) * (steps as u64));
            prop_assert!(stats.rooms_stamped <= phases as u64);
            prop_assert!(grid.filled_count() >= 1);
        }
    }
}
