//! Events a session emits for the presentation layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::score::ScoreTally;
use crate::types::Mark;

/// Something the presentation layer should render.
///
/// After an accepted move, `CellFilled` always comes first, followed by
/// either `TurnChanged` or `GameWon`/`GameDrawn` and then `ScoreChanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    CellFilled {
        /// Cell index (0-8).
        index: usize,
        /// Mark placed there.
        mark: Mark,
    },
    /// The other mark is now to move.
    TurnChanged(Mark),
    /// A line was completed.
    GameWon {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: [usize; 3],
    },
    /// The board filled without a line.
    GameDrawn,
    /// The board was cleared for a new game.
    GameReset,
    /// The score tally changed.
    ScoreChanged(ScoreTally),
    /// The computer opponent will move after `delay`.
    OpponentThinking {
        /// The opponent's mark.
        mark: Mark,
        /// Pause before the move lands.
        delay: Duration,
    },
}

/// Receiver of session events.
pub trait EventSink {
    /// Handles one event. Must not call back into the session.
    fn emit(&mut self, event: GameEvent);
}

/// Buffers events for the caller to drain.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
