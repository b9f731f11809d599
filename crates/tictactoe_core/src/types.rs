//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{BoardError, ParseBoardError};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index (0-8).
    pub fn cell_at(&self, index: usize) -> Result<Square, BoardError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfRange { index })
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for an index past 8, `IllegalMove` if the square is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.cell_at(index)? {
            Square::Empty => {
                self.squares[index] = Square::Occupied(mark);
                Ok(())
            }
            Square::Occupied(_) => Err(BoardError::IllegalMove { index }),
        }
    }

    /// Returns a copy of the board with `mark` written at `index`.
    ///
    /// Used for lookahead; `index` must come from [`Board::empty_indices`].
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.squares[index] = Square::Occupied(mark);
        next
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    /// True when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Formats the board as a human-readable grid; empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .zip(row * 3 + 1..)
                    .map(|(square, number)| {
                        square.mark().map_or_else(|| number.to_string(), |m| m.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells, row-major: `X`, `O`, or one of `.`, `-`, `_`, ` ` for empty.
    /// Newlines and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|')).collect();
        if cells.len() != CELLS {
            return Err(ParseBoardError {
                reason: format!("expected {CELLS} cells, found {}", cells.len()),
            });
        }

        let mut board = Board::new();
        for (index, c) in cells.into_iter().enumerate() {
            board.squares[index] = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => {
                    return Err(ParseBoardError {
                        reason: format!("unexpected character {other:?} at cell {index}"),
                    });
                }
            };
        }
        Ok(board)
    }
}
