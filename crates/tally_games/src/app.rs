//! Application state and event handling.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tally_tictactoe::{Game, Intent, MoveOutcome, Players};
use tracing::{debug, info, instrument};

use crate::config::{ConfigError, TallyConfig};
use crate::surfaces::{BoardSurface, ControlsSurface, PageLayout, Surface, SurfaceAction};

const HELP: &str =
    "Click / 1-9: place | Arrows + Enter: cursor | s / S: symbols | R: reset board | G: reset game | Q: quit";

/// Main application state: the game plus the two surfaces rendering it.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    board: BoardSurface,
    controls: ControlsSurface,
}

impl App {
    /// Creates the application from a validated configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TallyConfig) -> Result<Self, ConfigError> {
        let selectors = config.selectors()?;
        let (one, two) = selectors.current();
        info!(%one, %two, "Starting match");
        Ok(Self {
            game: Game::new(Players::new(one, two)),
            board: BoardSurface::new(),
            controls: ControlsSurface::new(selectors),
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the board surface.
    pub fn board(&self) -> &BoardSurface {
        &self.board
    }

    /// Gets the controls surface.
    pub fn controls(&self) -> &ControlsSurface {
        &self.controls
    }

    /// Draws the whole page.
    pub fn render(&self, frame: &mut Frame) {
        let page = PageLayout::new(frame.area());
        let state = self.game.state();

        let title = Paragraph::new("Tally Games - Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, page.title);

        self.controls.render_banner(frame, page.banner, state);
        self.board.render(frame, page.board, state);
        self.controls.render(frame, page.controls, state);

        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, page.help);
    }

    /// Handles a terminal event. `area` is the current terminal size.
    ///
    /// Returns `false` once the user asked to quit.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event, area: Rect) -> bool {
        let state = self.game.state();
        let action = match event {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind == KeyEventKind::Release => SurfaceAction::Stay,
            Event::Key(key) => match self.controls.handle_key(key, state) {
                SurfaceAction::Stay => self.board.handle_key(key, state),
                action => action,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let page = PageLayout::new(area);
                self.board
                    .handle_click(mouse.column, mouse.row, page.board, state)
            }
            _ => SurfaceAction::Stay,
        };
        self.apply(action)
    }

    /// Applies a surface action. Returns `false` on quit.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: SurfaceAction) -> bool {
        match action {
            SurfaceAction::Stay => true,
            SurfaceAction::Quit => {
                info!("User quit");
                false
            }
            SurfaceAction::Play(intent) => {
                let outcome = self.game.dispatch(intent);
                if let Some(message) = describe(intent, outcome) {
                    self.controls.set_message(message);
                }
                true
            }
        }
    }
}

/// One-line note for the controls surface. Ignored moves leave the note alone.
fn describe(intent: Intent, outcome: Option<MoveOutcome>) -> Option<String> {
    match (intent, outcome) {
        (Intent::Place(pos), Some(MoveOutcome::Continue { next })) => {
            Some(format!("{} played {}", next.other(), pos))
        }
        (Intent::Place(_), Some(MoveOutcome::Won(win))) => {
            Some(format!("{} completed a line", win.player()))
        }
        (Intent::Place(_), Some(MoveOutcome::Drawn)) => Some("The board is full".to_string()),
        (Intent::Place(pos), Some(MoveOutcome::Ignored(reason))) => {
            debug!(%pos, %reason, "Move ignored");
            None
        }
        (Intent::SelectSymbols { one, two }, _) => {
            Some(format!("Symbols set to {} / {}, board cleared", one, two))
        }
        (Intent::ResetBoard, _) => Some("Board cleared".to_string()),
        (Intent::ResetGame, _) => Some("New game, wins cleared".to_string()),
        (Intent::Place(_), None) => None,
    }
}
