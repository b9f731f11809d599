//! Tic-tac-toe engine with a computer opponent.
//!
//! The crate covers everything except presentation:
//!
//! - **Board** and **rules**: 3x3 grid, win/draw detection, legal moves
//! - **Game**: turn sequencing, status, history, invariants
//! - **Session**: score tally, play mode, events, opponent scheduling
//! - **Strategy**: random, heuristic and minimax opponents
//!
//! Presentation layers feed user intents into a [`GameSession`] and render
//! the [`GameEvent`]s it emits.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{
//!     Difficulty, GameEvent, GameSession, Mode, Opponent, SessionConfig, ThinkTimes,
//! };
//!
//! let config = SessionConfig::default()
//!     .with_mode(Mode::SinglePlayer)
//!     .with_difficulty(Difficulty::Hard)
//!     .with_think_times(ThinkTimes::instant());
//! let mut session = GameSession::new(config, Opponent::seeded(7), Vec::<GameEvent>::new());
//!
//! let ticket = session.select_cell(0)?.expect("computer plays O");
//! // A real front end waits `ticket.delay()` first.
//! assert_eq!(session.play_opponent(ticket)?, 4);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod events;
mod game;
mod invariants;
mod position;
pub mod rules;
mod score;
mod session;
mod settings;
mod strategy;
mod types;

pub use error::{BoardError, MoveError, ParseBoardError, StrategyError};
pub use events::{EventSink, GameEvent};
pub use game::{Game, GameStatus, MoveOutcome};
pub use invariants::{
    AlternatingHistory, GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance,
    SingleWinner,
};
pub use position::Position;
pub use score::ScoreTally;
pub use session::{GameSession, OPPONENT_MARK, OpponentTicket};
pub use settings::{Difficulty, Mode, SessionConfig, ThinkTime, ThinkTimes};
pub use strategy::{
    HeuristicStrategy, MinimaxStrategy, Opponent, RandomStrategy, Strategy,
};
pub use types::{Board, CELLS, Mark, Square};
