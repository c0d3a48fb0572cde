use super::direction::Direction;
use super::field::Field;
use super::grid::{Bounds, Coord};
use super::GameError;
use std::collections::VecDeque;

/// The snake: its body and the direction it is heading.
///
/// All positions are cells of a wraparound grid of size `bounds`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, from the tail (front) to the head
    /// (back)
    pub(super) body: VecDeque<Coord>,

    /// The direction in which the snake will move on the next tick
    pub(super) direction: Direction,

    pub(super) bounds: Bounds,
}

impl Snake {
    /// Create a snake of `length` cells with its head at the center of
    /// `bounds`, facing right, and the rest of its body trailing to the left.
    ///
    /// `length` must be at least two, so that a tail always remains after the
    /// tail cell is lifted at the start of a move.
    pub(super) fn new(bounds: Bounds, length: usize) -> Snake {
        debug_assert!(length >= 2, "snake length must be at least 2");
        let direction = Direction::Right;
        let backwards = direction.reverse();
        let mut pos = bounds.center();
        let mut body = VecDeque::with_capacity(length);
        body.push_front(pos);
        for _ in 1..length {
            pos = backwards.advance(pos, bounds);
            body.push_front(pos);
        }
        Snake {
            body,
            direction,
            bounds,
        }
    }

    /// Create a snake from explicit body cells, listed from tail to head
    #[cfg(test)]
    pub(crate) fn from_body<I>(bounds: Bounds, body: I, direction: Direction) -> Snake
    where
        I: IntoIterator<Item = (u16, u16)>,
    {
        Snake {
            body: body.into_iter().map(Coord::from).collect(),
            direction,
            bounds,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Coord {
        *self
            .body
            .back()
            .expect("snake body should always contain at least one cell")
    }

    /// Return the position of the last cell of the snake's tail
    pub(crate) fn tail(&self) -> Coord {
        *self
            .body
            .front()
            .expect("snake body should always contain at least one cell")
    }

    /// Return the cells of the snake's body, from the tail to the head
    pub(crate) fn body(&self) -> &VecDeque<Coord> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn occupies(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`.  Reversing straight back
    /// into the body is allowed and kills the snake on the next move.
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Add one cell beyond the end of the tail, continuing the line formed by
    /// the last two tail cells.  A one-cell body grows along its heading.
    ///
    /// The new cell is not checked against the rest of the body, so in rare
    /// layouts it can land on a cell the snake already occupies.
    pub(super) fn grow(&mut self) {
        let tail = self.tail();
        let (drow, dcol) = match self.body.get(1) {
            Some(&next) => (
                i32::from(tail.row) - i32::from(next.row),
                i32::from(tail.col) - i32::from(next.col),
            ),
            None => self.direction.delta(),
        };
        self.body.push_front(self.bounds.offset(tail, drow, dcol));
    }

    /// Move the snake forwards one cell, eating the flower in front of it (if
    /// any).
    ///
    /// On a collision with its own body the snake is left with its tail
    /// lifted and without the new head cell.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `field` refuses to give up a flower it reported as
    /// present.
    pub(super) fn update(&mut self, field: &mut Field) -> Result<Step, GameError> {
        let head = self.head();
        let _ = self.body.pop_front();
        let next = self.direction.advance(head, self.bounds);
        if self.body.contains(&next) {
            return Ok(Step::Collided(next));
        }
        let ate = field.contains(next);
        if ate {
            field.eat_flower(next)?;
            self.grow();
        }
        self.body.push_back(next);
        Ok(if ate { Step::Ate } else { Step::Moved })
    }
}

/// What happened to the snake on one tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The snake's head ran into its own body at the given cell
    Collided(Coord),

    /// The snake moved into an empty cell
    Moved,

    /// The snake moved onto a flower, ate it, and grew
    Ate,
}

impl Step {
    pub(crate) fn ate_flower(self) -> bool {
        self == Step::Ate
    }
}
