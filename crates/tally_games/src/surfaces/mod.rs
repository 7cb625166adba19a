//! Terminal surfaces: the board, the controls, and the winning-line overlay.

mod board;
mod controls;
mod layout;
mod overlay;
mod selector;

pub use board::BoardSurface;
pub use controls::{ControlsSurface, banner_text, status_text};
pub use layout::{BoardGrid, PageLayout};
pub use overlay::render_winning_line;
pub use selector::SymbolSelectors;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tally_tictactoe::{GameState, Intent};

/// The result of handling an input event on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    /// The event was not for this surface, or changed nothing in the game.
    Stay,
    /// Forward an intent to the game.
    Play(Intent),
    /// Leave the application.
    Quit,
}

/// Trait implemented by each part of the terminal page.
///
/// Surfaces render from the game state they are handed and turn input
/// into [`SurfaceAction`]s. They never mutate the game themselves.
pub trait Surface {
    /// Renders the surface into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, state: &GameState);

    /// Handles a key event and returns the resulting [`SurfaceAction`].
    fn handle_key(&mut self, key: KeyEvent, state: &GameState) -> SurfaceAction;
}
