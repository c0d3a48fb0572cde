use rand::Rng;
use std::fmt;

/// A cell on the grid, as `(row, col)` counted from the top-left corner
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Coord {
    pub(crate) row: u16,
    pub(crate) col: u16,
}

impl Coord {
    pub(crate) const fn new(row: u16, col: u16) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u16, u16)> for Coord {
    fn from((row, col): (u16, u16)) -> Coord {
        Coord { row, col }
    }
}

/// The dimensions of a toroidal grid.  Moving off one edge reenters on the
/// opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) rows: u16,
    pub(crate) cols: u16,
}

impl Bounds {
    pub(crate) const fn new(rows: u16, cols: u16) -> Bounds {
        Bounds { rows, cols }
    }

    /// The cell at which a new snake's head is placed
    pub(crate) fn center(self) -> Coord {
        Coord::new(self.rows / 2, self.cols / 2)
    }

    /// Total number of cells
    pub(crate) fn area(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    #[cfg(test)]
    pub(crate) fn contains(self, pos: Coord) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Shift `pos` by `drow` rows and `dcol` columns, wrapping around the
    /// edges of the grid
    pub(crate) fn offset(self, pos: Coord, drow: i32, dcol: i32) -> Coord {
        Coord {
            row: wrap(i32::from(pos.row) + drow, self.rows),
            col: wrap(i32::from(pos.col) + dcol, self.cols),
        }
    }

    /// Pick a cell uniformly at random
    pub(crate) fn random_coord<R: Rng + ?Sized>(self, rng: &mut R) -> Coord {
        Coord {
            row: rng.random_range(0..self.rows),
            col: rng.random_range(0..self.cols),
        }
    }
}

/// Reduce `value` into `0..bound`.
///
/// `bound` must be nonzero.
pub(crate) fn wrap(value: i32, bound: u16) -> u16 {
    let wrapped = value.rem_euclid(i32::from(bound));
    u16::try_from(wrapped).expect("remainder modulo a u16 bound should fit in a u16")
}
