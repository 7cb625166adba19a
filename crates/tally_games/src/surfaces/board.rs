//! Board surface: the 3x3 grid of clickable cells.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_tictactoe::{GameState, Intent, Player, Position, Square};
use tracing::{debug, instrument};

use super::layout::BoardGrid;
use super::overlay::render_winning_line;
use super::{Surface, SurfaceAction};

/// The board surface. Owns the keyboard cursor.
#[derive(Debug, Clone)]
pub struct BoardSurface {
    cursor: Position,
}

impl BoardSurface {
    /// Creates a board surface with the cursor in the center.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
        }
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Clicks a cell. Only empty cells are forwarded to the game.
    #[instrument(skip(self, state))]
    pub fn click(&mut self, pos: Position, state: &GameState) -> SurfaceAction {
        self.cursor = pos;
        if state.round().board().is_empty(pos) {
            SurfaceAction::Play(Intent::Place(pos))
        } else {
            debug!("Click on occupied cell ignored");
            SurfaceAction::Stay
        }
    }

    /// Handles a mouse click at a terminal coordinate inside the board `area`.
    #[instrument(skip(self, state))]
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        state: &GameState,
    ) -> SurfaceAction {
        match BoardGrid::centered_in(area).hit(column, row) {
            Some(pos) => self.click(pos, state),
            None => SurfaceAction::Stay,
        }
    }

    fn move_cursor(&mut self, rows: isize, cols: isize) {
        if let Some(next) = self.cursor.step(rows, cols) {
            self.cursor = next;
        }
    }
}

impl Default for BoardSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for BoardSurface {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        frame.render_widget(
            Block::default().borders(Borders::ALL).title("Board"),
            area,
        );

        let grid = BoardGrid::centered_in(area);
        let separator = Style::default().fg(Color::DarkGray);
        for rect in grid.row_separators() {
            let line = "─".repeat(usize::from(rect.width));
            frame.render_widget(Paragraph::new(line).style(separator), rect);
        }
        for rect in grid.column_separators() {
            let lines: Vec<Line> = (0..rect.height).map(|_| Line::from("│")).collect();
            frame.render_widget(Paragraph::new(lines).style(separator), rect);
        }

        // The canvas resets cell styles, so cells go on top of it.
        render_winning_line(frame, &grid, state);
        for pos in Position::ALL {
            render_cell(frame, grid.cell(pos), state, pos, pos == self.cursor);
        }
    }

    #[instrument(skip(self, state))]
    fn handle_key(&mut self, key: KeyEvent, state: &GameState) -> SurfaceAction {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match Position::from_index(index) {
                    Some(pos) => self.click(pos, state),
                    None => SurfaceAction::Stay,
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor, state),
            KeyCode::Up => {
                self.move_cursor(-1, 0);
                SurfaceAction::Stay
            }
            KeyCode::Down => {
                self.move_cursor(1, 0);
                SurfaceAction::Stay
            }
            KeyCode::Left => {
                self.move_cursor(0, -1);
                SurfaceAction::Stay
            }
            KeyCode::Right => {
                self.move_cursor(0, 1);
                SurfaceAction::Stay
            }
            _ => SurfaceAction::Stay,
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, state: &GameState, pos: Position, cursor: bool) {
    let (text, base_style) = match state.round().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(symbol) => {
            let color = if symbol == state.players().symbol(Player::One) {
                Color::Blue
            } else {
                Color::Red
            };
            (
                symbol.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    // Only the symbol itself is written, so an overlay line under the cell
    // stays visible on either side of it.
    let highlight = Style::default().bg(Color::White).fg(Color::Black);
    let (cell_style, text_style) = if cursor {
        (highlight, base_style.patch(highlight))
    } else {
        (Style::default(), base_style)
    };

    let padding = usize::from(area.height / 2);
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(text, text_style)));

    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tally_tictactoe::{Game, Players};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_places_on_empty_cell() {
        let game = Game::new(Players::default());
        let mut board = BoardSurface::new();
        let action = board.handle_key(key(KeyCode::Char('1')), game.state());
        assert_eq!(action, SurfaceAction::Play(Intent::Place(Position::TopLeft)));
    }

    #[test]
    fn test_occupied_cell_is_not_forwarded() {
        let mut game = Game::new(Players::default());
        game.on_move(Position::Center);
        let mut board = BoardSurface::new();
        assert_eq!(
            board.handle_key(key(KeyCode::Enter), game.state()),
            SurfaceAction::Stay
        );
        assert_eq!(
            board.handle_key(key(KeyCode::Char('5')), game.state()),
            SurfaceAction::Stay
        );
    }

    #[test]
    fn test_arrows_move_cursor_and_stop_at_edges() {
        let game = Game::new(Players::default());
        let mut board = BoardSurface::new();
        board.handle_key(key(KeyCode::Up), game.state());
        board.handle_key(key(KeyCode::Up), game.state());
        board.handle_key(key(KeyCode::Left), game.state());
        assert_eq!(board.cursor(), Position::TopLeft);

        let action = board.handle_key(key(KeyCode::Char(' ')), game.state());
        assert_eq!(action, SurfaceAction::Play(Intent::Place(Position::TopLeft)));
    }

    #[test]
    fn test_mouse_click_hits_cell() {
        let game = Game::new(Players::default());
        let mut board = BoardSurface::new();
        let area = Rect::new(0, 0, 39, 19);
        let cell = BoardGrid::centered_in(area).cell(Position::BottomRight);

        let action = board.handle_click(cell.x + 1, cell.y + 1, area, game.state());

        assert_eq!(action, SurfaceAction::Play(Intent::Place(Position::BottomRight)));
        assert_eq!(board.cursor(), Position::BottomRight);
        assert_eq!(board.handle_click(0, 0, area, game.state()), SurfaceAction::Stay);
    }
}
