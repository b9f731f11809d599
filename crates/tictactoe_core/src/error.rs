//! Error types for board access, move application and opponent decisions.

use derive_more::{Display, Error, From};

use crate::types::Mark;

/// Error raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index outside 0-8.
    #[display("Cell {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// Cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    IllegalMove {
        /// The occupied index.
        index: usize,
    },
}

/// Error raised when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse board: {reason}")]
pub struct ParseBoardError {
    /// What was wrong with the input.
    pub reason: String,
}

/// Error raised by an opponent strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StrategyError {
    /// The board has no empty cell left.
    #[display("No legal move available for {mark:?}")]
    NoLegalMove {
        /// The mark asked to move.
        mark: Mark,
    },
}

/// Error raised when a move or opponent ticket is refused by a game or session.
///
/// A refused move never mutates state and never emits an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// Out of range or occupied cell.
    #[display("{source}")]
    #[from]
    Board {
        /// Underlying board error.
        source: BoardError,
    },
    /// The game has already finished.
    #[display("Game is already over")]
    Rejected,
    /// The computer opponent owns the current turn.
    #[display("It's the opponent's turn ({mark:?})")]
    OpponentsTurn {
        /// The opponent's mark.
        mark: Mark,
    },
    /// The opponent ticket was cancelled or belongs to an earlier game.
    #[display("Opponent ticket {ticket} from generation {generation} is stale")]
    StaleTicket {
        /// Ticket id.
        ticket: u64,
        /// Generation the ticket was issued in.
        generation: u64,
    },
    /// The opponent strategy failed to pick a move.
    #[display("{source}")]
    #[from]
    Strategy {
        /// Underlying strategy error.
        source: StrategyError,
    },
}
