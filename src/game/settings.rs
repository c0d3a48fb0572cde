use super::grid::Bounds;
use crate::consts;
use serde::Deserialize;
use thiserror::Error;

/// Parameters fixed for the lifetime of a game
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Settings {
    /// Number of rows in the grid
    pub(crate) rows: u16,

    /// Number of columns in the grid
    pub(crate) cols: u16,

    /// Number of lives at the start of the game
    pub(crate) lives: u32,

    /// Number of flowers kept on the grid at once
    pub(crate) flowers: usize,

    /// Length of the snake at the start of each life
    pub(crate) snake_length: usize,
}

impl Settings {
    pub(crate) fn bounds(self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }

    /// Check that a game can be started with these settings
    pub(crate) fn validate(self) -> Result<Settings, SettingsError> {
        let Settings {
            rows,
            cols,
            lives,
            flowers,
            snake_length,
        } = self;
        if rows == 0 || cols == 0 {
            return Err(SettingsError::EmptyGrid { rows, cols });
        }
        if lives == 0 {
            return Err(SettingsError::NoLives);
        }
        if flowers == 0 {
            return Err(SettingsError::NoFlowers);
        }
        if snake_length < consts::MIN_SNAKE_LENGTH {
            return Err(SettingsError::SnakeTooShort(snake_length));
        }
        if snake_length > usize::from(cols) {
            return Err(SettingsError::SnakeTooLong {
                length: snake_length,
                cols,
            });
        }
        if self.bounds().area() < snake_length.saturating_add(flowers) {
            return Err(SettingsError::Crowded {
                rows,
                cols,
                length: snake_length,
                flowers,
            });
        }
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            rows: consts::DEFAULT_ROWS,
            cols: consts::DEFAULT_COLS,
            lives: consts::DEFAULT_LIVES,
            flowers: consts::DEFAULT_FLOWERS,
            snake_length: consts::INITIAL_SNAKE_LENGTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("grid must have at least one row and one column, but got {rows}x{cols}")]
    EmptyGrid { rows: u16, cols: u16 },
    #[error("at least one life is required")]
    NoLives,
    #[error("at least one flower is required")]
    NoFlowers,
    #[error("snake length must be at least {min}, but got {0}", min = consts::MIN_SNAKE_LENGTH)]
    SnakeTooShort(usize),
    #[error("snake of length {length} does not fit in a row of {cols} columns")]
    SnakeTooLong { length: usize, cols: u16 },
    #[error("a {rows}x{cols} grid has no room for a snake of length {length} and {flowers} flowers")]
    Crowded {
        rows: u16,
        cols: u16,
        length: usize,
        flowers: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(rows: u16, cols: u16, lives: u32, flowers: usize, snake_length: usize) -> Settings {
        Settings {
            rows,
            cols,
            lives,
            flowers,
            snake_length,
        }
    }

    #[test]
    fn default_is_valid() {
        let s = Settings::default();
        assert_eq!(s.validate(), Ok(s));
        assert_eq!(s.bounds(), Bounds::new(30, 40));
    }

    #[rstest]
    #[case(settings(0, 40, 3, 2, 3), SettingsError::EmptyGrid { rows: 0, cols: 40 })]
    #[case(settings(30, 0, 3, 2, 3), SettingsError::EmptyGrid { rows: 30, cols: 0 })]
    #[case(settings(30, 40, 0, 2, 3), SettingsError::NoLives)]
    #[case(settings(30, 40, 3, 0, 3), SettingsError::NoFlowers)]
    #[case(settings(30, 40, 3, 2, 1), SettingsError::SnakeTooShort(1))]
    #[case(settings(30, 4, 3, 2, 5), SettingsError::SnakeTooLong { length: 5, cols: 4 })]
    #[case(
        settings(1, 4, 3, 2, 3),
        SettingsError::Crowded { rows: 1, cols: 4, length: 3, flowers: 2 }
    )]
    fn invalid(#[case] s: Settings, #[case] err: SettingsError) {
        assert_eq!(s.validate(), Err(err));
    }

    #[test]
    fn smallest_valid() {
        let s = settings(1, 3, 1, 1, 2);
        assert_eq!(s.validate(), Ok(s));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            SettingsError::SnakeTooShort(1).to_string(),
            "snake length must be at least 2, but got 1"
        );
    }
}
