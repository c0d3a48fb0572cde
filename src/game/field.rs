use super::grid::{Bounds, Coord};
use super::snake::Snake;
use super::GameError;
use log::warn;
use rand::Rng;
use std::collections::HashSet;

/// The flowers currently growing on the grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    bounds: Bounds,
    flowers: HashSet<Coord>,
    /// How many flowers the field is kept stocked with
    target: usize,
}

impl Field {
    /// Create a field of `target` flowers placed at random cells not occupied
    /// by `snake`
    pub(super) fn new<R: Rng + ?Sized>(
        bounds: Bounds,
        target: usize,
        snake: &Snake,
        rng: &mut R,
    ) -> Field {
        let mut field = Field {
            bounds,
            flowers: HashSet::with_capacity(target),
            target,
        };
        field.update(snake, rng);
        field
    }

    /// Replace the flowers with the given cells
    #[cfg(test)]
    pub(crate) fn set_flowers<I: IntoIterator<Item = Coord>>(&mut self, flowers: I) {
        self.flowers = flowers.into_iter().collect();
    }

    pub(crate) fn flowers(&self) -> &HashSet<Coord> {
        &self.flowers
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> usize {
        self.target
    }

    pub(crate) fn contains(&self, pos: Coord) -> bool {
        self.flowers.contains(&pos)
    }

    /// Plant new flowers at random cells not occupied by `snake` until the
    /// field is back up to its target count.
    ///
    /// Cells are sampled uniformly and retried until a free one comes up.  If
    /// the grid does not have enough free cells left for every missing
    /// flower, only the free cells are filled.
    pub(super) fn update<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) {
        if self.flowers.len() >= self.target {
            return;
        }
        let occupied = snake
            .body()
            .iter()
            .chain(&self.flowers)
            .collect::<HashSet<_>>()
            .len();
        let free = self.bounds.area().saturating_sub(occupied);
        let missing = self.target - self.flowers.len();
        if free < missing {
            warn!(
                "Only {free} free cells left on the grid; cannot plant {missing} more flowers"
            );
        }
        let goal = self.flowers.len() + missing.min(free);
        while self.flowers.len() < goal {
            let pos = self.bounds.random_coord(rng);
            if !snake.occupies(pos) {
                let _ = self.flowers.insert(pos);
            }
        }
    }

    /// Remove the flower at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no flower at `pos`.
    pub(super) fn eat_flower(&mut self, pos: Coord) -> Result<(), GameError> {
        if self.flowers.remove(&pos) {
            Ok(())
        } else {
            Err(GameError::MissingFlower(pos))
        }
    }
}
