use crate::config::ChanceTable;

/// The narrative-progress scalar, 0 to the configured maximum.
///
/// Monotone within a session: nothing ever decreases it, only a session
/// restart rebuilds it at zero. All behavioral-override probabilities are
/// derived here so the gating thresholds live in exactly one place.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Awareness {
    level: u8,
    max: u8,
}

impl Awareness {
    /// Creates the zero-awareness state for a new session.
    #[must_use]
    pub fn new(max: u8) -> Self {
        debug_assert!(max > 0);
        Self { level: 0, max }
    }

    /// Creates an awareness at an explicit level, capped at `max`.
    #[must_use]
    pub fn at_level(level: u8, max: u8) -> Self {
        Self {
            level: level.min(max),
            max,
        }
    }

    /// Current level.
    #[must_use]
    pub fn level(self) -> u8 {
        self.level
    }

    /// True once the ceiling has been reached.
    #[must_use]
    pub fn at_max(self) -> bool {
        self.level >= self.max
    }

    /// Display percentage for the HUD (0–100).
    #[must_use]
    pub fn percent(self) -> u8 {
        (u16::from(self.level) * 100 / u16::from(self.max)) as u8
    }

    /// Increments by one (capped) and returns the new level.
    pub fn on_special_food(&mut self) -> u8 {
        self.level = (self.level + 1).min(self.max);
        self.level
    }

    /// Chance of dropping the player's buffered turn this tick.
    #[must_use]
    pub fn defiance_chance(self, chances: &ChanceTable) -> f64 {
        if self.level > chances.defiance_threshold {
            f64::from(self.level) * chances.defiance_per_level
        } else {
            0.0
        }
    }

    /// Chance of wrapping through a wall instead of colliding.
    #[must_use]
    pub fn ignore_walls_chance(self, chances: &ChanceTable) -> f64 {
        if self.level > chances.ignore_walls_threshold {
            chances.ignore_walls
        } else {
            0.0
        }
    }

    /// Chance of a true collision being suppressed.
    #[must_use]
    pub fn collision_override_chance(self, chances: &ChanceTable) -> f64 {
        if self.level > chances.collision_override_threshold {
            chances.collision_override
        } else {
            0.0
        }
    }

    /// Per-tick chance of starting an escape run on its own.
    #[must_use]
    pub fn escape_chance(self, chances: &ChanceTable) -> f64 {
        if self.level > chances.escape_threshold {
            chances.escape_attempt
        } else {
            0.0
        }
    }

    /// Per-tick chance of surfacing a stray thought.
    #[must_use]
    pub fn thought_chance(self, chances: &ChanceTable) -> f64 {
        if self.level > 0 { chances.thought } else { 0.0 }
    }
}
