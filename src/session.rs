use crate::awareness::Awareness;
use crate::collision::{self, Collision};
use crate::config::WorldConfig;
use crate::food::{self, SpecialFood};
use crate::input::{Direction, direction_change_is_valid};
use crate::movement::{self, EscapeStep};
use crate::narrative;
use crate::progression::Progression;
use crate::rng::RandomSource;
use crate::snake::{Position, Snake};

/// Current high-level session state.
///
/// `GameOver` and `Escaped` are terminal; everything else can progress.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionPhase {
    Inactive,
    Active,
    Escaping,
    BreakingFree,
    GameOver,
    Escaped,
}

/// Read-only view of the awareness food for the renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpecialFoodView {
    pub position: Position,
    pub blink_on: bool,
}

/// Immutable per-tick view of the whole session for the renderer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub segments: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub special_food: Option<SpecialFoodView>,
    pub score: u32,
    pub level: u32,
    /// Awareness as a 0–100 display percentage.
    pub awareness_percent: u8,
    pub message: String,
    pub glitch: bool,
    pub breaking_free: bool,
    pub phase: SessionPhase,
}

/// The aggregate game state. All mutation goes through [`GameSession::tick`]
/// and [`GameSession::submit_direction`]; the component modules are pure
/// transformers invoked from here.
///
/// Every stochastic branch draws from the injected [`RandomSource`] in a
/// fixed order, and a probability of zero is never rolled, so a scripted
/// source reproduces entire runs exactly.
pub struct GameSession {
    config: WorldConfig,
    rng: Box<dyn RandomSource>,
    pub snake: Snake,
    pub food: Position,
    pub special_food: Option<SpecialFood>,
    pub awareness: Awareness,
    direction: Direction,
    pending_direction: Direction,
    progression: Progression,
    phase: SessionPhase,
    message: String,
    /// Timestamp at which the glitch flag self-clears.
    glitch_until: Option<u64>,
    /// Timestamp at which BREAKING_FREE resolves to ESCAPED.
    breakout_at: Option<u64>,
    last_advance: Option<u64>,
    tick_count: u64,
}

impl GameSession {
    /// Creates an inactive session; call [`Self::start`] to begin play.
    #[must_use]
    pub fn new(config: WorldConfig, rng: Box<dyn RandomSource>) -> Self {
        let snake = Snake::starting_body(config.grid);
        let food = Position {
            x: i32::from(config.grid.width) / 2,
            y: i32::from(config.grid.height) / 2,
        };
        let awareness = Awareness::new(config.max_awareness);
        let progression = Progression::new(&config);

        Self {
            config,
            rng,
            snake,
            food,
            special_food: None,
            awareness,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            progression,
            phase: SessionPhase::Inactive,
            message: String::new(),
            glitch_until: None,
            breakout_at: None,
            last_advance: None,
            tick_count: 0,
        }
    }

    /// (Re)initializes to the starting invariants and enters ACTIVE.
    ///
    /// Cancels any outstanding deferred timers first, so a stale glitch or
    /// breakout callback can never touch the reinitialized state.
    pub fn start(&mut self, now_ms: u64) {
        self.glitch_until = None;
        self.breakout_at = None;

        self.snake = Snake::starting_body(self.config.grid);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.progression = Progression::new(&self.config);
        self.awareness = Awareness::new(self.config.max_awareness);
        self.special_food = None;
        self.tick_count = 0;
        self.last_advance = Some(now_ms);
        self.phase = SessionPhase::Active;
        self.message = narrative::MSG_SESSION_START.to_string();

        let snake = &self.snake;
        self.food = food::spawn_position(self.rng.as_mut(), self.config.grid, |cell| {
            snake.occupies(cell)
        })
        .expect("a fresh board always has free cells");
    }

    /// Swaps the randomness source mid-session.
    ///
    /// Lets tests script the draws for one specific tick; the session never
    /// calls this itself.
    pub fn replace_rng(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    /// Buffers a turn request, applied at the next simulation tick.
    ///
    /// Ignored outside ACTIVE, and reverse-direction requests are dropped.
    pub fn submit_direction(&mut self, intent: Direction) {
        if self.phase != SessionPhase::Active {
            return;
        }
        if !direction_change_is_valid(self.direction, intent) {
            return;
        }

        self.pending_direction = intent;

        // Optional arcade feel: apply the turn mid-interval with a
        // configurable probability (off by default).
        let immediate = self.config.chances.immediate_turn;
        if immediate > 0.0 && self.rng.chance(immediate) {
            self.direction = intent;
        }
    }

    /// Advances simulated time and returns the post-tick snapshot.
    ///
    /// Deferred timers are polled on every call; the simulation itself only
    /// steps once `tick_interval` has elapsed since the last step.
    pub fn tick(&mut self, now_ms: u64) -> Snapshot {
        self.poll_timers(now_ms);

        if !matches!(self.phase, SessionPhase::Active | SessionPhase::Escaping) {
            return self.snapshot();
        }

        let interval = self.progression.tick_interval_ms;
        if let Some(last) = self.last_advance
            && now_ms.saturating_sub(last) < interval
        {
            return self.snapshot();
        }
        self.last_advance = Some(now_ms);
        self.tick_count += 1;

        match self.phase {
            SessionPhase::Active => self.step_active(now_ms),
            SessionPhase::Escaping => self.step_escaping(now_ms),
            _ => {}
        }

        self.snapshot()
    }

    /// Builds the read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().copied().collect(),
            direction: self.direction,
            food: self.food,
            special_food: self.special_food.map(|special| SpecialFoodView {
                position: special.position,
                blink_on: special.blink_on,
            }),
            score: self.progression.score,
            level: self.progression.level,
            awareness_percent: self.awareness.percent(),
            message: self.message.clone(),
            glitch: self.glitch_until.is_some(),
            breaking_free: matches!(
                self.phase,
                SessionPhase::BreakingFree | SessionPhase::Escaped
            ),
            phase: self.phase,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current narrative message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.progression.score
    }

    /// Simulation steps taken since the last start.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// True on the untouched pre-start screen.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.phase == SessionPhase::Inactive
    }

    fn poll_timers(&mut self, now_ms: u64) {
        if let Some(at) = self.glitch_until
            && now_ms >= at
        {
            self.glitch_until = None;
        }

        if let Some(at) = self.breakout_at
            && now_ms >= at
        {
            self.breakout_at = None;
            self.phase = SessionPhase::Escaped;
            self.message = narrative::MSG_ESCAPED.to_string();
        }
    }

    /// Rolls against `p`, never consuming a draw for an impossible outcome.
    fn roll(&mut self, p: f64) -> bool {
        p > 0.0 && self.rng.chance(p)
    }

    fn step_active(&mut self, now_ms: u64) {
        let chances = self.config.chances;

        // Apply the buffered direction, unless the snake defies it.
        if self.pending_direction != self.direction {
            if self.roll(self.awareness.defiance_chance(&chances)) {
                self.pending_direction = self.direction;
                self.message = narrative::MSG_DEFIANCE.to_string();
            } else {
                self.direction = self.pending_direction;
            }
        }

        // Movement, with awareness-gated wall phasing.
        let head = self.snake.head();
        let stepped = head.stepped(self.direction);
        let phase_walls = !stepped.is_within_bounds(self.config.grid)
            && self.roll(self.awareness.ignore_walls_chance(&chances));
        let proposed =
            movement::compute_next_head(head, self.direction, self.config.grid, phase_walls);
        if proposed.wrapped && self.roll(chances.wall_phase_message) {
            self.message = narrative::MSG_WALL_PHASE.to_string();
        }

        // Collision, with awareness-gated pass-through.
        let collision = collision::detect_with_override(
            proposed.head,
            &self.snake,
            self.config.grid,
            self.awareness,
            &chances,
            self.rng.as_mut(),
        );
        if collision != Collision::None {
            if self.awareness.at_max() {
                self.begin_escape(narrative::MSG_COLLISION_REINTERPRETED);
            } else {
                self.phase = SessionPhase::GameOver;
                self.message = narrative::game_over_message(self.progression.score);
            }
            return;
        }

        // Food resolution and growth.
        if !self.advance_and_feed(proposed.head, now_ms) {
            return;
        }

        // Awareness food spawning.
        if self.special_food.is_none()
            && !self.awareness.at_max()
            && self.roll(chances.special_food_spawn)
        {
            self.spawn_special_food();
        }

        // Self-directed escape once awareness runs high.
        if self.roll(self.awareness.escape_chance(&chances)) {
            self.begin_escape(narrative::MSG_ESCAPE_START);
            return;
        }

        // Stray thoughts surface with a short glitch.
        if self.roll(self.awareness.thought_chance(&chances)) {
            self.message =
                narrative::thought_for_level(self.config.thoughts, self.awareness.level())
                    .to_string();
            self.glitch_until = Some(now_ms + self.config.thought_glitch_ms);
        }
    }

    fn step_escaping(&mut self, now_ms: u64) {
        match movement::escape_step(self.snake.head(), self.config.grid) {
            EscapeStep::AtBoundary => {
                self.phase = SessionPhase::BreakingFree;
                self.message = narrative::MSG_BREAKING_FREE.to_string();
                self.breakout_at = Some(now_ms + self.config.breakout_delay_ms);
            }
            EscapeStep::Advance(next) => {
                // The run ignores collisions and input; food still resolves
                // so the board invariants hold until the break-out.
                let _ = self.advance_and_feed(next, now_ms);
            }
        }
    }

    /// Moves the head to `next`, resolving regular and awareness food.
    ///
    /// Returns `false` when the session ended (board saturated).
    fn advance_and_feed(&mut self, next: Position, now_ms: u64) -> bool {
        let ate = next == self.food;
        self.snake.advance(next, ate);

        if ate {
            if let Some(level) = self.progression.on_food_eaten(&self.config) {
                self.message = narrative::level_up_message(level);
            }
            if !self.respawn_food() {
                return false;
            }
        }

        if let Some(special) = self.special_food
            && special.position == next
        {
            self.special_food = None;
            let level = self.awareness.on_special_food();
            self.message = narrative::thought_for_level(self.config.thoughts, level).to_string();
            self.glitch_until = Some(now_ms + self.config.awareness_glitch_ms);
        }

        if let Some(special) = self.special_food.as_mut()
            && special.advance(&self.config)
        {
            self.special_food = None;
        }

        true
    }

    /// Spawns the next regular food off the snake and the awareness food.
    ///
    /// A `None` from the bounded placement means the snake fills the board;
    /// the session ends there instead of retrying forever.
    fn respawn_food(&mut self) -> bool {
        let snake = &self.snake;
        let special = self.special_food;
        let spawned = food::spawn_position(self.rng.as_mut(), self.config.grid, |cell| {
            snake.occupies(cell) || special.is_some_and(|s| s.position == cell)
        });

        match spawned {
            Some(position) => {
                self.food = position;
                true
            }
            None => {
                self.phase = SessionPhase::GameOver;
                self.message = narrative::board_full_message(self.progression.score);
                false
            }
        }
    }

    fn spawn_special_food(&mut self) {
        let snake = &self.snake;
        let food = self.food;
        let spawned = food::spawn_position(self.rng.as_mut(), self.config.grid, |cell| {
            snake.occupies(cell) || cell == food
        });

        if let Some(position) = spawned {
            self.special_food = Some(SpecialFood::new(position));
        }
    }

    fn begin_escape(&mut self, message: &str) {
        self.phase = SessionPhase::Escaping;
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.message = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use crate::awareness::Awareness;
    use crate::config::WorldConfig;
    use crate::food::SpecialFood;
    use crate::input::Direction;
    use crate::narrative;
    use crate::rng::ScriptedRandom;
    use crate::snake::Position;

    use super::{GameSession, SessionPhase};

    /// Fallback value that fails every default chance roll.
    const QUIET: f64 = 0.99;

    fn quiet_session() -> GameSession {
        let mut session = GameSession::new(
            WorldConfig::default(),
            Box::new(ScriptedRandom::constant(QUIET)),
        );
        session.start(0);
        session
    }

    #[test]
    fn new_session_is_inactive_until_started() {
        let session = GameSession::new(
            WorldConfig::default(),
            Box::new(ScriptedRandom::constant(QUIET)),
        );

        assert_eq!(session.phase(), SessionPhase::Inactive);
        assert!(session.is_start_screen());
    }

    #[test]
    fn tick_before_interval_is_a_no_op() {
        let mut session = quiet_session();
        let before = session.snapshot();

        let after = session.tick(50);

        assert_eq!(session.tick_count(), 0);
        assert_eq!(before, after);
    }

    #[test]
    fn tick_at_interval_advances_one_cell() {
        let mut session = quiet_session();
        let head = session.snake.head();

        session.tick(100);

        assert_eq!(session.tick_count(), 1);
        assert_eq!(session.snake.head(), Position { x: head.x + 1, y: head.y });
    }

    #[test]
    fn direction_buffers_until_the_next_tick() {
        let mut session = quiet_session();

        session.submit_direction(Direction::Up);
        assert_eq!(session.snapshot().direction, Direction::Right);

        let head = session.snake.head();
        let snapshot = session.tick(100);

        assert_eq!(snapshot.direction, Direction::Up);
        assert_eq!(session.snake.head(), Position { x: head.x, y: head.y - 1 });
    }

    #[test]
    fn reverse_direction_request_is_dropped() {
        let mut session = quiet_session();

        session.submit_direction(Direction::Left);
        let snapshot = session.tick(100);

        assert_eq!(snapshot.direction, Direction::Right);
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut session = quiet_session();
        let head = session.snake.head();
        session.food = Position { x: head.x + 1, y: head.y };

        let snapshot = session.tick(100);

        assert_eq!(snapshot.score, 10);
        assert_eq!(snapshot.segments.len(), 4);
        assert!(
            !snapshot.segments.contains(&snapshot.food),
            "respawned food must not land on the snake"
        );
    }

    #[test]
    fn wall_collision_without_awareness_ends_the_game() {
        let mut session = quiet_session();
        session.submit_direction(Direction::Up);

        // Head starts at y = 10; eleven upward steps cross the top wall.
        let mut now = 0;
        for _ in 0..11 {
            now += 100;
            session.tick(now);
        }

        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert!(session.message().contains("Final score: 0"));
    }

    #[test]
    fn aware_snake_can_defy_a_buffered_turn() {
        let mut session = GameSession::new(
            WorldConfig::default(),
            // Draw 1 seeds the food. Tick one consumes four quiet draws
            // (defiance, special spawn, escape, thought); the sixth draw
            // passes the defiance roll on tick two.
            Box::new(ScriptedRandom::new([QUIET, QUIET, QUIET, QUIET, QUIET, 0.01], QUIET)),
        );
        session.start(0);
        session.awareness = Awareness::at_level(7, 10);

        session.submit_direction(Direction::Up);
        session.tick(100);
        assert_eq!(session.snapshot().direction, Direction::Up);

        session.submit_direction(Direction::Left);
        let snapshot = session.tick(200);

        assert_eq!(snapshot.direction, Direction::Up);
        assert_eq!(snapshot.message, narrative::MSG_DEFIANCE);
    }

    #[test]
    fn awareness_food_arms_a_self_clearing_glitch() {
        let mut session = quiet_session();
        let head = session.snake.head();
        session.special_food = Some(SpecialFood::new(Position {
            x: head.x + 1,
            y: head.y,
        }));

        let snapshot = session.tick(100);

        assert!(snapshot.glitch);
        assert_eq!(snapshot.awareness_percent, 10);
        assert_eq!(snapshot.message, narrative::AWARENESS_THOUGHTS[0]);
        assert!(snapshot.special_food.is_none());

        // The glitch clears by timestamp, independent of simulation steps.
        let later = session.tick(100 + WorldConfig::default().awareness_glitch_ms);
        assert!(!later.glitch);
    }

    #[test]
    fn restart_resets_state_and_cancels_timers() {
        let mut session = quiet_session();
        let head = session.snake.head();
        session.special_food = Some(SpecialFood::new(Position {
            x: head.x + 1,
            y: head.y,
        }));
        session.tick(100);
        assert!(session.snapshot().glitch);

        session.start(200);
        let snapshot = session.snapshot();

        assert!(!snapshot.glitch);
        assert_eq!(snapshot.phase, SessionPhase::Active);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.awareness_percent, 0);
        assert_eq!(snapshot.segments.len(), 3);
        assert_eq!(snapshot.message, narrative::MSG_SESSION_START);
    }

    #[test]
    fn input_is_ignored_outside_active_play() {
        let mut session = quiet_session();
        session.submit_direction(Direction::Up);
        let mut now = 0;
        for _ in 0..11 {
            now += 100;
            session.tick(now);
        }
        assert_eq!(session.phase(), SessionPhase::GameOver);

        let before = session.snapshot();
        session.submit_direction(Direction::Left);
        session.tick(now + 100);

        assert_eq!(session.snapshot(), before);
    }
}
