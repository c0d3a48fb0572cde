use crate::consts;
use crate::game::{Bounds, Coord, Direction, Game, GameState};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

/// Styles used for drawing a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) snake: Style,
    pub(crate) flower: Style,
    pub(crate) collision: Style,
    pub(crate) score_bar: Style,
    pub(crate) message: Style,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            snake: consts::SNAKE_STYLE,
            flower: consts::FLOWER_STYLE,
            collision: consts::COLLISION_STYLE,
            score_bar: consts::SCORE_BAR_STYLE,
            message: consts::MESSAGE_STYLE,
        }
    }
}

/// A read-only view of a [`Game`] that can be rendered as a widget
#[derive(Debug)]
pub(crate) struct GameView<'a, R> {
    pub(crate) game: &'a Game<R>,
    pub(crate) palette: Palette,
}

impl<'a, R> GameView<'a, R> {
    pub(crate) fn new(game: &'a Game<R>, palette: Palette) -> Self {
        GameView { game, palette }
    }
}

/// Return the smallest terminal size that can show a full game on a grid of
/// the given size: the grid plus its border, the score bar, and the message
/// line
pub(crate) fn required_size(bounds: Bounds) -> Size {
    Size {
        width: bounds.cols.saturating_add(2),
        height: bounds.rows.saturating_add(4),
    }
}

impl<R> Widget for GameView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let GameView { game, palette } = self;
        let display = center_rect(area, required_size(game.bounds()));
        let [score_area, block_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}   Lives: {}", game.score(), game.lives()),
            palette.score_bar,
        )
        .render(score_area, buf);

        Block::bordered().render(block_area, buf);
        let mut grid = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &pos in game.field().flowers() {
            grid.draw_cell(pos, consts::FLOWER_SYMBOL, palette.flower);
        }
        let snake = game.snake();
        for &pos in snake.body() {
            grid.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, palette.snake);
        }
        grid.draw_cell(snake.head(), head_symbol(snake.direction()), palette.snake);
        if let Some(pos) = game.crash() {
            grid.draw_cell(pos, consts::COLLISION_SYMBOL, palette.collision);
        }

        let message = match game.state() {
            GameState::Playing => None,
            GameState::Died => Some(" You crashed! Respawning..."),
            GameState::Over => Some(" GAME OVER (press any key)"),
        };
        if let Some(msg) = message {
            Line::styled(msg, palette.message).render(msg_area, buf);
        }
    }
}

/// The snake's head is drawn as a mouth opening in the direction of travel
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` at the grid cell `pos`, ignoring cells that fall outside
    /// the canvas
    fn draw_cell(&mut self, pos: Coord, symbol: char, style: Style) {
        if pos.col >= self.area.width || pos.row >= self.area.height {
            return;
        }
        let x = self.area.x.saturating_add(pos.col);
        let y = self.area.y.saturating_add(pos.row);
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
