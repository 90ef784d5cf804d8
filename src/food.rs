use crate::config::{GridSize, WorldConfig};
use crate::rng::RandomSource;
use crate::snake::Position;

/// Rejection-sampling attempts before falling back to a full-board scan.
const SPAWN_RETRY_LIMIT: u32 = 64;

/// Picks a free cell for food placement.
///
/// Samples uniformly and rejects occupied cells up to a fixed retry limit,
/// then scans the board for the first free cell. Returns `None` only when
/// every cell is occupied, which the session treats as the board-saturation
/// end state rather than looping forever.
#[must_use]
pub fn spawn_position(
    rng: &mut dyn RandomSource,
    bounds: GridSize,
    occupied: impl Fn(Position) -> bool,
) -> Option<Position> {
    let width = i32::from(bounds.width);

    for _ in 0..SPAWN_RETRY_LIMIT {
        let index = rng.pick_index(bounds.total_cells());
        let candidate = Position {
            x: index as i32 % width,
            y: index as i32 / width,
        };
        if !occupied(candidate) {
            return Some(candidate);
        }
    }

    for y in 0..i32::from(bounds.height) {
        for x in 0..width {
            let candidate = Position { x, y };
            if !occupied(candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

/// The transient awareness collectible. At most one exists at a time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpecialFood {
    pub position: Position,
    pub blink_on: bool,
    /// Ticks since spawn.
    pub age: u32,
}

impl SpecialFood {
    /// Creates a fresh awareness food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            blink_on: true,
            age: 0,
        }
    }

    /// Ages the food one tick, toggling the blink on the configured period.
    ///
    /// Returns `true` once the food has outlived its lifetime and must be
    /// removed from the board.
    pub fn advance(&mut self, config: &WorldConfig) -> bool {
        self.age += 1;
        if self.age > config.special_food_lifetime_ticks {
            return true;
        }
        if self.age % config.special_food_blink_period == 0 {
            self.blink_on = !self.blink_on;
        }
        false
    }
}
