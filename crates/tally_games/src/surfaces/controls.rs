//! Controls surface: symbol selectors, turn text, win counters, banner.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_tictactoe::{GameState, Intent, Outcome, Phase, Player};
use tracing::{info, instrument};

use super::selector::SymbolSelectors;
use super::{Surface, SurfaceAction};

/// Text of the results banner, or `None` while the round is undecided.
pub fn banner_text(state: &GameState) -> Option<String> {
    match state.round().outcome().as_ref()? {
        Outcome::Win(win) => {
            let marks = win.symbol().repeat(3);
            Some(format!("{} {} Wins! {}", marks, win.player(), marks))
        }
        Outcome::Draw => {
            let players = state.players();
            Some(format!(
                "{} It's a Draw! {}",
                players.symbol(Player::One).repeat(3),
                players.symbol(Player::Two).repeat(3)
            ))
        }
    }
}

/// Turn indicator, replaced by "Game Over" once the round is decided.
pub fn status_text(state: &GameState) -> String {
    match state.round().phase() {
        Phase::AwaitingMove => format!(
            "Current turn: {} ({})",
            state.round().current(),
            state.current_symbol()
        ),
        Phase::RoundOver => "Game Over".to_string(),
    }
}

/// The controls surface. Owns the symbol selectors.
#[derive(Debug, Clone)]
pub struct ControlsSurface {
    selectors: SymbolSelectors,
    message: String,
}

impl ControlsSurface {
    /// Creates the controls with the given selectors.
    pub fn new(selectors: SymbolSelectors) -> Self {
        Self {
            selectors,
            message: String::new(),
        }
    }

    /// The symbol selectors.
    pub fn selectors(&self) -> &SymbolSelectors {
        &self.selectors
    }

    /// Sets the one-line note shown under the turn indicator.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// The note shown under the turn indicator.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the results banner. Nothing is drawn while the round is undecided.
    #[instrument(skip_all)]
    pub fn render_banner(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let Some(text) = banner_text(state) else {
            return;
        };
        let banner = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, area);
    }

    #[instrument(skip(self))]
    fn advance(&mut self, player: Player) -> SurfaceAction {
        match self.selectors.advance(player) {
            Some((one, two)) => {
                info!(%one, %two, "Symbol selection changed");
                SurfaceAction::Play(Intent::SelectSymbols { one, two })
            }
            None => SurfaceAction::Stay,
        }
    }

    fn selector_line(&self, player: Player) -> Line<'static> {
        let selected = self.selectors.selected(player);
        let mut spans = vec![Span::raw(format!("{}  ", player))];
        for (index, symbol) in self.selectors.options(player).iter().enumerate() {
            if index == selected {
                spans.push(Span::styled(
                    format!("[{}]", symbol),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", symbol),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        Line::from(spans)
    }
}

impl Surface for ControlsSurface {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let tally = state.tally();
        let status_style = match state.round().phase() {
            Phase::AwaitingMove => Style::default().fg(Color::Green),
            Phase::RoundOver => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        let lines = vec![
            Line::from(Span::styled(
                "Symbols",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            self.selector_line(Player::One),
            self.selector_line(Player::Two),
            Line::from(""),
            Line::from(Span::styled(
                "Wins",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(format!("{}: {}", Player::One, tally.wins(Player::One))),
            Line::from(format!("{}: {}", Player::Two, tally.wins(Player::Two))),
            Line::from(""),
            Line::from(Span::styled(status_text(state), status_style)),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );
        frame.render_widget(panel, area);
    }

    #[instrument(skip(self, _state))]
    fn handle_key(&mut self, key: KeyEvent, _state: &GameState) -> SurfaceAction {
        match key.code {
            KeyCode::Char('s') => self.advance(Player::One),
            KeyCode::Char('S') => self.advance(Player::Two),
            KeyCode::Char('r') | KeyCode::Char('R') => SurfaceAction::Play(Intent::ResetBoard),
            KeyCode::Char('g') | KeyCode::Char('G') => SurfaceAction::Play(Intent::ResetGame),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => SurfaceAction::Quit,
            _ => SurfaceAction::Stay,
        }
    }
}
