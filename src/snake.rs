use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a proposed head one step outside the board can
/// be represented before collision resolution decides what it means.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 { wrapped + upper_bound } else { wrapped }
}

/// Ordered snake body, head at the front.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the standard starting body: three segments trailing left from
    /// the head at a quarter of the board width, vertically centered.
    #[must_use]
    pub fn starting_body(bounds: GridSize) -> Self {
        let head = Position {
            x: i32::from(bounds.width) / 4,
            y: i32::from(bounds.height) / 2,
        };
        Self::from_segments(vec![
            head,
            Position {
                x: head.x - 1,
                y: head.y,
            },
            Position {
                x: head.x - 2,
                y: head.y,
            },
        ])
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Advances the body to `new_head`, keeping the tail cell when `grow`.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(bounds);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(bounds);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn stepped_moves_one_cell_per_direction() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.stepped(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.stepped(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(origin.stepped(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(origin.stepped(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn starting_body_has_three_segments_heading_right() {
        let snake = Snake::starting_body(GridSize {
            width: 30,
            height: 20,
        });

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 7, y: 10 },
                Position { x: 6, y: 10 },
                Position { x: 5, y: 10 },
            ]
        );
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ]);

        snake.advance(Position { x: 4, y: 3 }, false);

        assert_eq!(snake.head(), Position { x: 4, y: 3 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 1, y: 3 }));
    }

    #[test]
    fn advance_with_growth_keeps_tail_cell() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
        ]);

        snake.advance(Position { x: 4, y: 3 }, true);

        assert_eq!(snake.len(), 3);
        assert!(snake.occupies(Position { x: 2, y: 3 }));
    }
}
