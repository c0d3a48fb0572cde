use crate::command::Command;
use crate::game::{Game, GameError};
use crate::view::{required_size, GameView, Palette};
use crossterm::event::Event;
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// A source of terminal input events
pub(crate) trait EventSource {
    /// Return the next pending event, or `None` if there is nothing to read
    /// right now.  Must not block.
    fn poll_event(&mut self) -> io::Result<Option<Event>>;

    /// Block until an event arrives and return it
    fn wait_event(&mut self) -> io::Result<Event>;
}

/// Events read from the terminal via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        if crossterm::event::poll(Duration::ZERO)? {
            crossterm::event::read().map(Some)
        } else {
            Ok(None)
        }
    }

    fn wait_event(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}

/// Drives a [`Game`]: reads input, ticks the game, and draws it, at the pace
/// the game asks for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    palette: Palette,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, palette: Palette) -> App<R> {
        App { game, palette }
    }

    /// Play the game to the end.
    ///
    /// Once the snake has lost its last life, the final screen stays up until
    /// a key is pressed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the terminal is too small to show the whole grid, if
    /// reading input or drawing fails, or if the game reports an error.
    pub(crate) fn run<B: Backend, E: EventSource>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<Outcome, AppError> {
        let available = terminal.size()?;
        let required = required_size(self.game.bounds());
        if available.width < required.width || available.height < required.height {
            return Err(AppError::ScreenTooSmall {
                required,
                available,
            });
        }
        info!(
            "Starting game on a {}x{} grid",
            self.game.bounds().rows,
            self.game.bounds().cols
        );
        self.draw(terminal)?;
        let ending = loop {
            match self.step(terminal, events)? {
                Flow::Wait(delay) => thread::sleep(delay),
                Flow::Stop(ending) => break ending,
            }
        };
        if ending == Ending::GameOver {
            while events.wait_event()?.as_key_press_event().is_none() {}
        }
        let outcome = Outcome {
            ending,
            score: self.game.score(),
        };
        info!("Game ended: {outcome:?}");
        Ok(outcome)
    }

    /// Run one tick: apply the latest input, advance the game, and redraw
    pub(crate) fn step<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<Flow, AppError> {
        if self.read_input(events)? {
            return Ok(Flow::Stop(Ending::Quit));
        }
        let alive = self.game.update()?;
        self.draw(terminal)?;
        if !alive {
            return Ok(Flow::Stop(Ending::GameOver));
        }
        debug!(
            "Tick: head at {}, length {}, score {}, lives {}",
            self.game.snake().head(),
            self.game.snake().len(),
            self.game.score(),
            self.game.lives()
        );
        Ok(Flow::Wait(self.game.tick_delay()?))
    }

    /// Drain all pending input.  The last direction key pressed is applied to
    /// the game.  Returns `true` if the user asked to quit.
    fn read_input<E: EventSource>(&mut self, events: &mut E) -> io::Result<bool> {
        let mut turn = None;
        while let Some(event) = events.poll_event()? {
            let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
                continue;
            };
            match cmd.direction() {
                Some(d) => turn = Some(d),
                None => return Ok(true),
            }
        }
        if let Some(d) = turn {
            self.game.set_direction(d);
        }
        Ok(false)
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            frame.render_widget(GameView::new(&self.game, self.palette), frame.area());
        })?;
        Ok(())
    }
}

/// What the app should do after a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    /// Sleep for the given time, then run the next tick
    Wait(Duration),

    /// Stop ticking
    Stop(Ending),
}

/// How a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The user quit
    Quit,

    /// The snake ran out of lives
    GameOver,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Outcome {
    pub(crate) ending: Ending,
    pub(crate) score: u32,
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(
        "Screen not large enough to initialize game: required rows: {}, available rows: {}, required cols: {}, available cols: {}",
        .required.height,
        .available.height,
        .required.width,
        .available.width
    )]
    ScreenTooSmall { required: Size, available: Size },
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error("game failed")]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Direction, GameState, Settings};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// Events fed to the app from a script.  Each tick drains `polls` up to
    /// the next `None`.
    #[derive(Clone, Debug, Default)]
    struct ScriptedEvents {
        polls: VecDeque<Option<Event>>,
        waits: VecDeque<Event>,
    }

    impl ScriptedEvents {
        fn new(polls: Vec<Option<Event>>, waits: Vec<Event>) -> ScriptedEvents {
            ScriptedEvents {
                polls: polls.into(),
                waits: waits.into(),
            }
        }
    }

    impl EventSource for ScriptedEvents {
        fn poll_event(&mut self) -> io::Result<Option<Event>> {
            Ok(self.polls.pop_front().flatten())
        }

        fn wait_event(&mut self) -> io::Result<Event> {
            self.waits
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out"))
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn new_app(settings: Settings) -> App<ChaCha12Rng> {
        let game = Game::new_with_rng(settings, ChaCha12Rng::seed_from_u64(RNG_SEED))
            .expect("settings should be valid");
        App::new(game, Palette::default())
    }

    fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).expect("test terminal should be created")
    }

    #[test]
    fn screen_too_small() {
        let app = new_app(Settings::default());
        let mut term = terminal(40, 20);
        let mut events = ScriptedEvents::default();
        let e = app
            .run(&mut term, &mut events)
            .expect_err("run should fail on a small screen");
        assert_eq!(
            e.to_string(),
            "Screen not large enough to initialize game: required rows: 34, available rows: 20, required cols: 42, available cols: 40"
        );
    }

    #[test]
    fn quit_at_once() {
        let app = new_app(Settings::default());
        let mut term = terminal(42, 34);
        let mut events = ScriptedEvents::new(vec![Some(key(KeyCode::Char('q')))], vec![]);
        let outcome = app
            .run(&mut term, &mut events)
            .expect("run should succeed");
        assert_eq!(
            outcome,
            Outcome {
                ending: Ending::Quit,
                score: 0
            }
        );
    }

    #[test]
    fn play_to_game_over() {
        let app = new_app(Settings {
            lives: 1,
            ..Settings::default()
        });
        let mut term = terminal(42, 34);
        let mut events = ScriptedEvents::new(
            vec![Some(key(KeyCode::Left))],
            vec![Event::FocusLost, key(KeyCode::Char('x'))],
        );
        let outcome = app
            .run(&mut term, &mut events)
            .expect("run should succeed");
        assert_eq!(
            outcome,
            Outcome {
                ending: Ending::GameOver,
                score: 0
            }
        );
        assert!(events.waits.is_empty());
        let buffer = term.backend().buffer();
        let message = (0..26)
            .map(|x| buffer[(x, 33)].symbol())
            .collect::<String>();
        assert_eq!(message, " GAME OVER (press any key)");
        // Crash marker on the cell just behind the head
        assert_eq!(buffer[(20, 17)].symbol(), "×");
    }

    #[test]
    fn step_applies_last_direction() {
        let mut app = new_app(Settings::default());
        app.game.field_mut().set_flowers([Coord::new(0, 0)]);
        let mut term = terminal(42, 34);
        let mut events = ScriptedEvents::new(
            vec![Some(key(KeyCode::Up)), Some(key(KeyCode::Down)), None],
            vec![],
        );
        assert_eq!(
            app.step(&mut term, &mut events).expect("step should succeed"),
            Flow::Wait(Duration::from_millis(100))
        );
        assert_eq!(app.game.snake().direction(), Direction::Down);
        assert_eq!(app.game.snake().head(), Coord::new(16, 20));
    }

    #[test]
    fn quit_wins_over_directions() {
        let mut app = new_app(Settings::default());
        let mut term = terminal(42, 34);
        let mut events = ScriptedEvents::new(
            vec![
                Some(key(KeyCode::Up)),
                Some(key(KeyCode::Char('q'))),
                Some(key(KeyCode::Down)),
            ],
            vec![],
        );
        assert_eq!(
            app.step(&mut term, &mut events).expect("step should succeed"),
            Flow::Stop(Ending::Quit)
        );
        assert_eq!(app.game.snake().head(), Coord::new(15, 20));
    }

    #[test]
    fn step_ignores_other_events() {
        let mut app = new_app(Settings::default());
        app.game.field_mut().set_flowers([Coord::new(0, 0)]);
        let mut term = terminal(42, 34);
        let mut events = ScriptedEvents::new(
            vec![
                Some(Event::FocusLost),
                Some(Event::Resize(80, 24)),
                Some(key(KeyCode::Enter)),
            ],
            vec![],
        );
        assert_eq!(
            app.step(&mut term, &mut events).expect("step should succeed"),
            Flow::Wait(Duration::from_millis(100))
        );
        assert_eq!(app.game.snake().direction(), Direction::Right);
        assert_eq!(app.game.snake().head(), Coord::new(15, 21));
    }

    #[test]
    fn step_pauses_after_crash() {
        let mut app = new_app(Settings::default());
        let mut term = terminal(42, 34);
        let mut events = ScriptedEvents::new(vec![Some(key(KeyCode::Left)), None, None], vec![]);
        assert_eq!(
            app.step(&mut term, &mut events).expect("step should succeed"),
            Flow::Wait(Duration::from_secs(1))
        );
        assert_eq!(app.game.state(), GameState::Died);
        assert_eq!(app.game.lives(), 2);
        assert_eq!(
            app.step(&mut term, &mut events).expect("step should succeed"),
            Flow::Wait(Duration::from_millis(100))
        );
        assert_eq!(app.game.state(), GameState::Playing);
        assert_eq!(app.game.snake().head(), Coord::new(15, 20));
    }
}
