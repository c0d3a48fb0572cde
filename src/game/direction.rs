use super::grid::{Bounds, Coord};

/// The direction in which the snake moves, as a unit step on the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The `(row, col)` change applied by one step in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Step one cell from `pos`, wrapping around the edges of `bounds`
    pub(crate) fn advance(self, pos: Coord, bounds: Bounds) -> Coord {
        let (drow, dcol) = self.delta();
        bounds.offset(pos, drow, dcol)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
