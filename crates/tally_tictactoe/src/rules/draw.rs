//! Draw detection logic for tic-tac-toe.

use super::win::find_winning_line;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Symbol};

    fn fill(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks.chars()) {
            if mark != '.' {
                board.place(pos, Symbol::new(mark).unwrap());
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill("XO.......")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        assert!(is_draw(&fill("XOXXOOOXX")));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = fill("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
