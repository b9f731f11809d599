//! Play mode, opponent difficulty and thinking delays.

use std::time::Duration;

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::score::ScoreTally;

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "two-player", serialize = "two")]
    TwoPlayer,
    /// A human plays X against the computer as O.
    #[strum(to_string = "single-player", serialize = "single")]
    SinglePlayer,
}

/// Computer opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    #[default]
    Easy,
    /// Win, block, center, corner.
    Medium,
    /// Full minimax search.
    Hard,
}

/// Range for the artificial pause before an opponent move, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct ThinkTime {
    /// Shortest pause.
    min_ms: u64,
    /// Upper bound (exclusive) for the pause.
    max_ms: u64,
}

impl ThinkTime {
    /// Draws a pause uniformly from `[min_ms, max_ms)`; `min_ms` when the range is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let ms = if self.max_ms > self.min_ms {
            rng.gen_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(ms)
    }
}

/// Thinking delay per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct ThinkTimes {
    /// Delay range for [`Difficulty::Easy`].
    easy: ThinkTime,
    /// Delay range for [`Difficulty::Medium`].
    medium: ThinkTime,
    /// Delay range for [`Difficulty::Hard`].
    hard: ThinkTime,
}

impl ThinkTimes {
    /// No delay at any difficulty.
    pub fn instant() -> Self {
        let zero = ThinkTime::new(0, 0);
        Self {
            easy: zero,
            medium: zero,
            hard: zero,
        }
    }

    /// Delay range used at `difficulty`.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> ThinkTime {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for ThinkTimes {
    fn default() -> Self {
        Self {
            easy: ThinkTime::new(200, 450),
            medium: ThinkTime::new(500, 900),
            hard: ThinkTime::new(120, 320),
        }
    }
}

/// Initial settings for a [`GameSession`](crate::GameSession).
///
/// Callers restore these from whatever storage they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Starting mode.
    mode: Mode,
    /// Starting difficulty.
    difficulty: Difficulty,
    /// Score carried over from earlier sessions.
    tally: ScoreTally,
    /// Thinking delays.
    think_times: ThinkTimes,
}
