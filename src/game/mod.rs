mod direction;
mod field;
mod grid;
mod settings;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::field::Field;
pub(crate) use self::grid::{Bounds, Coord};
pub(crate) use self::settings::{Settings, SettingsError};
pub(crate) use self::snake::Snake;
use self::snake::Step;
use crate::consts;
use log::{debug, info};
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

/// A game session: a snake and its flowers, plus the score and lives carried
/// over from one life to the next
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    settings: Settings,
    lives: u32,
    score: u32,
    state: GameState,
    snake: Snake,
    field: Field,
    /// The cell the snake ran into when it last died
    crash: Option<Coord>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Result<Self, SettingsError> {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, mut rng: R) -> Result<Game<R>, SettingsError> {
        let settings = settings.validate()?;
        let snake = Snake::new(settings.bounds(), settings.snake_length);
        let field = Field::new(settings.bounds(), settings.flowers, &snake, &mut rng);
        Ok(Game {
            rng,
            settings,
            lives: settings.lives,
            score: 0,
            state: GameState::Playing,
            snake,
            field,
            crash: None,
        })
    }

    /// Advance the game by one tick.
    ///
    /// Returns `Ok(false)` if the snake has just lost its last life and the
    /// session is over.
    ///
    /// # Errors
    ///
    /// Returns `Err` if called again after the session is over.
    pub(crate) fn update(&mut self) -> Result<bool, GameError> {
        match self.state {
            GameState::Playing => (),
            GameState::Died => {
                self.new_life();
                return Ok(true);
            }
            GameState::Over => return Err(GameError::InvalidState(self.state)),
        }
        let step = self.snake.update(&mut self.field)?;
        if let Step::Collided(pos) = step {
            self.crash = Some(pos);
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                info!("Snake crashed at {pos} on its last life; final score {}", self.score);
                self.state = GameState::Over;
                return Ok(false);
            }
            info!("Snake crashed at {pos}; {} lives left", self.lives);
            self.state = GameState::Died;
        }
        if step.ate_flower() {
            self.score += 1;
            debug!("Ate flower at {}; score is now {}", self.snake.head(), self.score);
        }
        self.field.update(&self.snake, &mut self.rng);
        Ok(true)
    }

    /// Throw away the snake & field and start the next life from scratch
    fn new_life(&mut self) {
        let bounds = self.settings.bounds();
        self.snake = Snake::new(bounds, self.settings.snake_length);
        self.field = Field::new(bounds, self.settings.flowers, &self.snake, &mut self.rng);
        self.crash = None;
        self.state = GameState::Playing;
        info!("Starting new life with {} lives", self.lives);
    }
}

impl<R> Game<R> {
    /// Point the snake in `direction`, starting with the next tick
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// How long to wait after the current tick before running the next one.
    /// While playing, the game speeds up as the score rises.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the session is over.
    pub(crate) fn tick_delay(&self) -> Result<Duration, GameError> {
        match self.state {
            GameState::Playing => Ok(consts::BASE_TICK_PERIOD
                .saturating_sub(consts::TICK_SPEEDUP_PER_POINT.saturating_mul(self.score))
                .max(consts::MIN_TICK_PERIOD)),
            GameState::Died => Ok(consts::DEATH_PAUSE),
            GameState::Over => Err(GameError::InvalidState(self.state)),
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn lives(&self) -> u32 {
        self.lives
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    /// The cell the snake ran into, if it has crashed and not yet respawned
    pub(crate) fn crash(&self) -> Option<Coord> {
        self.crash
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn field(&self) -> &Field {
        &self.field
    }

    pub(crate) fn bounds(&self) -> Bounds {
        self.settings.bounds()
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    /// The snake is alive and moving
    Playing,

    /// The snake has crashed; the next tick starts a new life
    Died,

    /// The snake has crashed on its last life
    Over,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GameError {
    #[error("operation is not valid while the game is in the {0:?} state")]
    InvalidState(GameState),
    #[error("no flower at {0} to eat")]
    MissingFlower(Coord),
}
