use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::Position;

/// Result of one normal movement computation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ProposedMove {
    pub head: Position,
    /// True when the head left the board and was wrapped to the far edge.
    pub wrapped: bool,
}

/// Computes the next head cell from the effective direction.
///
/// When `ignore_walls` is set a head that would leave the board wraps to the
/// opposite edge instead of being handed to collision detection.
#[must_use]
pub fn compute_next_head(
    head: Position,
    direction: Direction,
    bounds: GridSize,
    ignore_walls: bool,
) -> ProposedMove {
    let stepped = head.stepped(direction);

    if ignore_walls && !stepped.is_within_bounds(bounds) {
        return ProposedMove {
            head: stepped.wrapped(bounds),
            wrapped: true,
        };
    }

    ProposedMove {
        head: stepped,
        wrapped: false,
    }
}

/// One step of the forced-right escape run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EscapeStep {
    /// Keep running toward the right boundary.
    Advance(Position),
    /// The head is at the rightmost column; the next step breaks out.
    AtBoundary,
}

/// Computes the escape-mode step: always RIGHT, until the boundary.
#[must_use]
pub fn escape_step(head: Position, bounds: GridSize) -> EscapeStep {
    if head.x >= i32::from(bounds.width) - 1 {
        EscapeStep::AtBoundary
    } else {
        EscapeStep::Advance(head.stepped(Direction::Right))
    }
}
