//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default number of rows in the grid
pub(crate) const DEFAULT_ROWS: u16 = 30;

/// Default number of columns in the grid
pub(crate) const DEFAULT_COLS: u16 = 40;

/// Default number of lives at the start of a game
pub(crate) const DEFAULT_LIVES: u32 = 3;

/// Default number of flowers on the grid at once
pub(crate) const DEFAULT_FLOWERS: usize = 2;

/// Default length of the snake at the start of each life
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Shortest allowed starting length for the snake
pub(crate) const MIN_SNAKE_LENGTH: usize = 2;

/// Time between ticks at a score of zero
pub(crate) const BASE_TICK_PERIOD: Duration = Duration::from_millis(100);

/// How much shorter the time between ticks gets for each point scored
pub(crate) const TICK_SPEEDUP_PER_POINT: Duration = Duration::from_millis(2);

/// Shortest time between ticks, no matter the score
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(50);

/// How long the crash is shown before the next life starts
pub(crate) const DEATH_PAUSE: Duration = Duration::from_secs(1);

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for flowers
pub(crate) const FLOWER_SYMBOL: char = '✿';

/// Glyph for the cell the snake crashed into
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Style for flowers
pub(crate) const FLOWER_STYLE: Style = Style::new().fg(Color::Green);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the message line below the grid
pub(crate) const MESSAGE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
