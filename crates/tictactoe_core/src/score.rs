//! Running score across games.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::game::GameStatus;
use crate::types::Mark;

/// Wins per mark and draws.
///
/// Serialized with the keys `X`, `O` and `draw`; missing keys read as zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters, new,
)]
pub struct ScoreTally {
    /// Games won by X.
    #[serde(rename = "X", default)]
    x_wins: u32,
    /// Games won by O.
    #[serde(rename = "O", default)]
    o_wins: u32,
    /// Drawn games.
    #[serde(rename = "draw", default)]
    draws: u32,
}

impl ScoreTally {
    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Counts a finished game. In-progress status is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins = self.x_wins.saturating_add(1),
            GameStatus::Won(Mark::O) => self.o_wins = self.o_wins.saturating_add(1),
            GameStatus::Drawn => self.draws = self.draws.saturating_add(1),
            GameStatus::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} | O {} | Draws {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
