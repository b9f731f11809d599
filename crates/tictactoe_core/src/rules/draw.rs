//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
