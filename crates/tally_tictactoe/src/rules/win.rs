//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in the order they are checked.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed triple and the symbol filling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The three cells, in table order.
    pub cells: [Position; 3],
    /// The symbol occupying all three cells.
    pub symbol: Symbol,
}

impl WinningLine {
    /// First cell of the triple.
    pub fn first(&self) -> Position {
        self.cells[0]
    }

    /// Last cell of the triple.
    pub fn last(&self) -> Position {
        self.cells[2]
    }
}

/// Returns the first completed line in table order, if any.
///
/// Only one line is reported even if the board holds several.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.into_iter().find_map(|cells| {
        let [a, b, c] = cells;
        let symbol = board.get(a).symbol()?;
        (board.get(b).symbol() == Some(symbol) && board.get(c).symbol() == Some(symbol))
            .then_some(WinningLine { cells, symbol })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Symbol {
        Symbol::new('X').unwrap()
    }

    fn o() -> Symbol {
        Symbol::new('O').unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for cells in WINNING_LINES {
            let mut board = Board::new();
            for pos in cells {
                board.place(pos, o());
            }
            let line = find_winning_line(&board).expect("line should win");
            assert_eq!(line.cells, cells);
            assert_eq!(line.symbol, o());
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, x());
        board.place(Position::TopCenter, x());
        board.place(Position::TopRight, o());
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        let mut board = Board::new();
        // Top row and left column both complete; the row comes first.
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.place(pos, x());
        }
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.cells, WINNING_LINES[0]);
        assert_eq!(line.first(), Position::TopLeft);
        assert_eq!(line.last(), Position::TopRight);
    }
}
