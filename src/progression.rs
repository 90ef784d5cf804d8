use crate::config::WorldConfig;

/// Score, level, and simulation speed for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Progression {
    pub score: u32,
    pub level: u32,
    /// Current tick interval in milliseconds; smaller is faster.
    pub tick_interval_ms: u64,
}

impl Progression {
    /// Creates the starting progression from the world constants.
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            score: 0,
            level: 1,
            tick_interval_ms: config.base_tick_interval_ms,
        }
    }

    /// Applies one regular food: score goes up, and every time the new score
    /// lands on a level-up multiple the level rises and the game speeds up,
    /// floored at the minimum interval.
    ///
    /// Returns the new level when a level-up happened.
    pub fn on_food_eaten(&mut self, config: &WorldConfig) -> Option<u32> {
        self.score += config.points_per_food;

        if self.score > 0 && self.score % config.level_up_score_step == 0 {
            self.level += 1;
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(config.speed_step_ms)
                .max(config.min_tick_interval_ms);
            return Some(self.level);
        }

        None
    }
}
