use crate::narrative;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Probability parameters for every stochastic behavior in the simulation.
///
/// The exact curves are narrative-pacing tuning, not correctness rules, so
/// they live here as plain data rather than hard-coded branches. A chance of
/// `0.0` is never rolled, which keeps scripted random sequences stable in
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct ChanceTable {
    /// Per-tick chance of spawning an awareness food while none is live.
    pub special_food_spawn: f64,
    /// Awareness level above which the snake may defy buffered input.
    pub defiance_threshold: u8,
    /// Defiance chance per awareness level once eligible.
    pub defiance_per_level: f64,
    /// Awareness level above which walls may be ignored.
    pub ignore_walls_threshold: u8,
    /// Chance of wrapping instead of colliding once eligible.
    pub ignore_walls: f64,
    /// Chance of announcing the wall phase when a wrap happens.
    pub wall_phase_message: f64,
    /// Awareness level above which a true collision may be suppressed.
    pub collision_override_threshold: u8,
    /// Chance of passing through a collision once eligible.
    pub collision_override: f64,
    /// Awareness level above which escape attempts may start at random.
    pub escape_threshold: u8,
    /// Per-tick chance of initiating an escape once eligible.
    pub escape_attempt: f64,
    /// Per-tick chance of surfacing a stray thought at awareness > 0.
    pub thought: f64,
    /// Chance a submitted turn is applied immediately instead of buffered.
    ///
    /// Defaults to zero: direction changes buffer and apply on the next tick.
    pub immediate_turn: f64,
}

impl Default for ChanceTable {
    fn default() -> Self {
        Self {
            special_food_spawn: 0.03,
            defiance_threshold: 5,
            defiance_per_level: 0.05,
            ignore_walls_threshold: 8,
            ignore_walls: 0.2,
            wall_phase_message: 0.3,
            collision_override_threshold: 8,
            collision_override: 0.2,
            escape_threshold: 5,
            escape_attempt: 0.02,
            thought: 0.01,
            immediate_turn: 0.0,
        }
    }
}

/// Immutable world constants for one session.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub grid: GridSize,
    /// Tick interval at level 1, in milliseconds.
    pub base_tick_interval_ms: u64,
    /// Hard floor for the tick interval.
    pub min_tick_interval_ms: u64,
    /// Interval reduction per level-up, in milliseconds.
    pub speed_step_ms: u64,
    /// Score granted per regular food.
    pub points_per_food: u32,
    /// Score multiple that triggers a level-up.
    pub level_up_score_step: u32,
    /// Awareness ceiling; also the count of narrative thresholds.
    pub max_awareness: u8,
    /// Ticks an uncollected awareness food stays on the board.
    pub special_food_lifetime_ticks: u32,
    /// Blink toggle period for awareness food, in ticks of age.
    pub special_food_blink_period: u32,
    /// Glitch flag duration after consuming awareness food.
    pub awareness_glitch_ms: u64,
    /// Glitch flag duration after a stray thought.
    pub thought_glitch_ms: u64,
    /// Real-time delay between breaking free and the escaped state.
    pub breakout_delay_ms: u64,
    /// Ordered thought list, indexed by awareness level (clamped).
    pub thoughts: &'static [&'static str],
    pub chances: ChanceTable,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            base_tick_interval_ms: 100,
            min_tick_interval_ms: 60,
            speed_step_ms: 5,
            points_per_food: 10,
            level_up_score_step: 50,
            max_awareness: 10,
            special_food_lifetime_ticks: 30,
            special_food_blink_period: 5,
            awareness_glitch_ms: 800,
            thought_glitch_ms: 500,
            breakout_delay_ms: 2000,
            thoughts: &narrative::AWARENESS_THOUGHTS,
            chances: ChanceTable::default(),
        }
    }
}
