//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the round state machine so they can be tested on hand-built boards.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, find_winning_line};
