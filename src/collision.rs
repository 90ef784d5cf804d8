use crate::awareness::Awareness;
use crate::config::{ChanceTable, GridSize};
use crate::rng::RandomSource;
use crate::snake::{Position, Snake};

/// Outcome of checking one proposed head cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    None,
    Wall,
    SelfHit,
}

/// Classifies a proposed head against the walls and the pre-move body.
///
/// The body is checked before the tail drops because growth may keep the
/// tail cell occupied this tick.
#[must_use]
pub fn detect(proposed: Position, snake: &Snake, bounds: GridSize) -> Collision {
    if !proposed.is_within_bounds(bounds) {
        return Collision::Wall;
    }
    if snake.occupies(proposed) {
        return Collision::SelfHit;
    }
    Collision::None
}

/// Like [`detect`], but a sufficiently aware snake sometimes passes through.
///
/// The override draw happens only when a true collision exists and awareness
/// clears the threshold, so low-awareness play consumes no randomness here.
#[must_use]
pub fn detect_with_override(
    proposed: Position,
    snake: &Snake,
    bounds: GridSize,
    awareness: Awareness,
    chances: &ChanceTable,
    rng: &mut dyn RandomSource,
) -> Collision {
    let collision = detect(proposed, snake, bounds);
    if collision == Collision::None {
        return collision;
    }

    let chance = awareness.collision_override_chance(chances);
    if chance > 0.0 && rng.chance(chance) {
        return Collision::None;
    }

    collision
}
