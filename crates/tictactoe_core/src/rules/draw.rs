//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board has no empty position left.
///
/// A full board with no winner indicates a tie.
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}
