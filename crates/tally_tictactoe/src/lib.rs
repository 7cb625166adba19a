//! Two-player tic-tac-toe with a running win tally.
//!
//! # Architecture
//!
//! - **Types**: symbols, players, positions and the board
//! - **Rules**: win and draw detection over a board
//! - **Game**: the round/match state machine driven by [`Intent`]s
//! - **Geometry**: endpoints of the line drawn over a winning triple
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{Game, MoveOutcome, Player, Players, Position};
//!
//! let mut game = Game::new(Players::default());
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomLeft,
//! ] {
//!     game.on_move(pos);
//! }
//! let outcome = game.on_move(Position::TopRight);
//! assert!(matches!(outcome, MoveOutcome::Won(_)));
//! assert_eq!(game.state().tally().wins(Player::One), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod geometry;
mod position;
pub mod rules;
mod state;
mod types;

pub use game::{Game, Ignored, Intent, MoveOutcome};
pub use position::Position;
pub use state::{GameState, Outcome, Phase, RoundState, Tally, Win};
pub use types::{Board, Player, Players, Square, Symbol, SymbolError};
