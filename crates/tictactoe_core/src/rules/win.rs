//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::events::WinningLine;
use tracing::instrument;

/// The eight winning lines, in scan order.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line, in [`WINNING_LINES`] order, fully held by `symbol`.
///
/// Only the given symbol is checked. Called after a move, that is the mover's
/// symbol; the opponent cannot have completed a line on this turn.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, symbol: &str) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.symbol_at(pos) == Some(symbol)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBus;
    use std::rc::Rc;

    fn board_with(marks: &[(usize, &str)]) -> Board {
        let mut board = Board::new(Rc::new(EventBus::new()));
        for &(pos, symbol) in marks {
            board.place(pos, symbol).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = board_with(&[]);
        assert_eq!(winning_line(&board, "X"), None);
        assert_eq!(winning_line(&board, "O"), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, "X"), (1, "X"), (2, "X")]);
        assert_eq!(winning_line(&board, "X"), Some([0, 1, 2]));
        assert_eq!(winning_line(&board, "O"), None);
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(1, "O"), (4, "O"), (7, "O")]);
        assert_eq!(winning_line(&board, "O"), Some([1, 4, 7]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, "O"), (4, "O"), (6, "O")]);
        assert_eq!(winning_line(&board, "O"), Some([2, 4, 6]));
    }

    #[test]
    fn test_first_line_in_scan_order() {
        // Row 0 and column 0 both complete; rows are scanned first.
        let board = board_with(&[(0, "X"), (1, "X"), (2, "X"), (3, "X"), (6, "X")]);
        assert_eq!(winning_line(&board, "X"), Some([0, 1, 2]));

        // Column 2 and the main diagonal both complete; columns come first.
        let board = board_with(&[(2, "X"), (5, "X"), (8, "X"), (0, "X"), (4, "X")]);
        assert_eq!(winning_line(&board, "X"), Some([2, 5, 8]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, "X"), (1, "O"), (2, "X")]);
        assert_eq!(winning_line(&board, "X"), None);
    }
}
