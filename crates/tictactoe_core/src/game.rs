//! Turn sequencing and terminal-state evaluation, free of any I/O.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, Mark};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Drawn,
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with `next` to move.
    Continue {
        /// Mark now to move.
        next: Mark,
    },
    /// The mover completed `line`.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line, for highlighting.
        line: [usize; 3],
    },
    /// The board filled up with no line.
    Drawn,
}

/// A single game of tic-tac-toe: board, turn, status and move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move (the mover of the last move once the game is over).
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the indices played, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Places the current mark at `index` and evaluates the result.
    ///
    /// # Errors
    ///
    /// `Rejected` once the game is over; board errors for bad or occupied
    /// cells. Nothing changes on error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::Rejected);
        }

        let mover = self.turn;
        self.board.place(index, mover)?;
        self.history.push(index);

        let outcome = if let Some(line) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won(mover);
            MoveOutcome::Won {
                winner: mover,
                line,
            }
        } else if rules::is_draw(&self.board) {
            self.status = GameStatus::Drawn;
            MoveOutcome::Drawn
        } else {
            self.turn = mover.opponent();
            MoveOutcome::Continue { next: self.turn }
        };

        debug!(index, ?outcome, "Move applied");
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );

        Ok(outcome)
    }

    /// Clears the board for a new game with X to move.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
