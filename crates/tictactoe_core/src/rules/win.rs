//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};

/// The eight winning lines in canonical order: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
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

/// Returns the first line (in [`LINES`] order) held entirely by one mark.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let squares = board.squares();
    LINES.into_iter().find(|&[a, b, c]| {
        squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
    })
}

/// Returns the mark owning a winning line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.squares()[a].mark())
}

/// Indices still open for play; empty once the board has a winner.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    if winner(board).is_some() {
        Vec::new()
    } else {
        board.empty_indices()
    }
}
