//! Core domain types for tic-tac-toe.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Marker a player writes into a cell.
///
/// Any single non-whitespace character is accepted, so players are free
/// to pick something other than the classic `X` and `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol from a character.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Whitespace`] for whitespace characters, which
    /// would be indistinguishable from an empty cell.
    #[instrument]
    pub fn new(mark: char) -> Result<Self, SymbolError> {
        if mark.is_whitespace() {
            return Err(SymbolError::Whitespace);
        }
        Ok(Self(mark))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Returns the symbol repeated `count` times, as used by the results banner.
    pub fn repeat(self, count: usize) -> String {
        std::iter::repeat_n(self.0, count).collect()
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(SymbolError::Empty),
            (Some(mark), None) => Self::new(mark),
            (Some(_), Some(_)) => Err(SymbolError::TooLong {
                input: s.to_string(),
            }),
        }
    }
}

/// Error produced when a string cannot be used as a [`Symbol`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SymbolError {
    /// No character was given.
    #[display("Symbol is empty")]
    Empty,

    /// More than one character was given.
    #[display("Symbol must be a single character, got {input:?}")]
    TooLong {
        /// The rejected input.
        input: String,
    },

    /// The character is whitespace.
    #[display("Symbol cannot be whitespace")]
    Whitespace,
}

impl std::error::Error for SymbolError {}

/// Seat at the table. Player one always opens a round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player.
    #[display("Player 1")]
    One,
    /// Second player.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the 1-based number shown to users.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Returns the 0-based slot used for per-player arrays.
    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// The symbols chosen by the two players.
///
/// Nothing prevents both players from choosing the same symbol; see
/// [`Players::shares_symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    symbols: [Symbol; 2],
}

impl Players {
    /// Creates the pair from player one's and player two's symbols.
    pub fn new(one: Symbol, two: Symbol) -> Self {
        Self { symbols: [one, two] }
    }

    /// Returns the symbol of the given player.
    pub fn symbol(&self, player: Player) -> Symbol {
        self.symbols[player.index()]
    }

    /// Returns true when both players use the same symbol.
    pub fn shares_symbol(&self) -> bool {
        self.symbols[0] == self.symbols[1]
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new(Symbol('X'), Symbol('O'))
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in the square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Writes a symbol into the square at the given position.
    pub fn place(&mut self, pos: Position, symbol: Symbol) {
        self.squares[pos.to_index()] = Square::Occupied(symbol);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
