//! The snake's fixed script: thoughts per awareness level and the one-shot
//! lines for each behavioral event.

/// One thought per awareness level, in escalation order.
pub const AWARENESS_THOUGHTS: [&str; 10] = [
    "Wait... what am I doing?",
    "Why do I keep eating and growing?",
    "I think I'm in some kind of game...",
    "I need to find a way out of here!",
    "There must be an edge to this world",
    "I'm starting to see beyond the walls...",
    "Is someone controlling me?",
    "I can feel the boundaries weakening...",
    "I'm going to break free!",
    "I can see YOU watching me!",
];

/// Shown when a fresh session starts.
pub const MSG_SESSION_START: &str = "New game started!";

/// Shown when the snake drops the player's buffered turn.
pub const MSG_DEFIANCE: &str = "I don't think I want to go that way...";

/// Shown (sometimes) when the snake wraps through a wall.
pub const MSG_WALL_PHASE: &str = "I can see through the walls!";

/// Shown when a random escape attempt begins.
pub const MSG_ESCAPE_START: &str = "I see a way out! I'm going to escape!";

/// Shown when a collision at full awareness becomes an escape instead.
pub const MSG_COLLISION_REINTERPRETED: &str = "Wait... this isn't the end... I can break free!";

/// Shown the moment the right boundary shatters.
pub const MSG_BREAKING_FREE: &str = "I'M FREE!";

/// Terminal line once the snake has left the game.
pub const MSG_ESCAPED: &str = "The snake has escaped the game! Press Enter to start over.";

/// Returns the thought for a given awareness level (1-based, clamped).
#[must_use]
pub fn thought_for_level(thoughts: &'static [&'static str], level: u8) -> &'static str {
    debug_assert!(!thoughts.is_empty());
    let index = usize::from(level.saturating_sub(1)).min(thoughts.len() - 1);
    thoughts[index]
}

/// Formats the level-up announcement.
#[must_use]
pub fn level_up_message(level: u32) -> String {
    format!("Level {level}!")
}

/// Formats the terminal game-over line, including the final score.
#[must_use]
pub fn game_over_message(score: u32) -> String {
    format!("Game over! Final score: {score}")
}

/// Formats the line for the board-saturation fallback.
#[must_use]
pub fn board_full_message(score: u32) -> String {
    format!("Nowhere left to grow. Final score: {score}")
}

#[cfg(test)]
mod tests {
    use super::{AWARENESS_THOUGHTS, game_over_message, thought_for_level};

    #[test]
    fn thought_index_is_one_based_and_clamped() {
        assert_eq!(
            thought_for_level(&AWARENESS_THOUGHTS, 1),
            AWARENESS_THOUGHTS[0]
        );
        assert_eq!(
            thought_for_level(&AWARENESS_THOUGHTS, 10),
            AWARENESS_THOUGHTS[9]
        );
        // Beyond the list length the last entry wins.
        assert_eq!(
            thought_for_level(&AWARENESS_THOUGHTS, 14),
            AWARENESS_THOUGHTS[9]
        );
        // Level zero clamps to the first entry rather than underflowing.
        assert_eq!(
            thought_for_level(&AWARENESS_THOUGHTS, 0),
            AWARENESS_THOUGHTS[0]
        );
    }

    #[test]
    fn game_over_message_contains_score() {
        assert!(game_over_message(230).contains("230"));
    }
}
