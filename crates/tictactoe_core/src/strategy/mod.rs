//! Computer opponent move selection.
//!
//! Each difficulty maps to one [`Strategy`] object. The [`Opponent`] owns all
//! three plus the random source and picks the one for the current difficulty
//! at decision time; the objects themselves never change after construction.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use std::time::Duration;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::error::StrategyError;
use crate::settings::{Difficulty, ThinkTimes};
use crate::types::{Board, Mark};

/// Picks a move for `mark` on `board`.
pub trait Strategy: std::fmt::Debug + Send {
    /// Returns an empty index of `board`.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` when the board is full.
    fn choose_move(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<usize, StrategyError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Empty indices, or `NoLegalMove` if there are none.
pub(crate) fn open_cells(board: &Board, mark: Mark) -> Result<Vec<usize>, StrategyError> {
    let open = board.empty_indices();
    if open.is_empty() {
        Err(StrategyError::NoLegalMove { mark })
    } else {
        Ok(open)
    }
}

/// The computer player: one strategy per difficulty and a seedable RNG.
#[derive(Debug)]
pub struct Opponent {
    easy: Box<dyn Strategy>,
    medium: Box<dyn Strategy>,
    hard: Box<dyn Strategy>,
    rng: ChaCha8Rng,
}

impl Opponent {
    /// Standard strategies with an RNG seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Standard strategies with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self::with_strategies(
            Box::new(RandomStrategy),
            Box::new(HeuristicStrategy),
            Box::new(MinimaxStrategy),
            rng,
        )
    }

    /// Custom strategies per difficulty.
    pub fn with_strategies(
        easy: Box<dyn Strategy>,
        medium: Box<dyn Strategy>,
        hard: Box<dyn Strategy>,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            easy,
            medium,
            hard,
            rng,
        }
    }

    /// The strategy used at `difficulty`.
    pub fn strategy(&self, difficulty: Difficulty) -> &dyn Strategy {
        match difficulty {
            Difficulty::Easy => self.easy.as_ref(),
            Difficulty::Medium => self.medium.as_ref(),
            Difficulty::Hard => self.hard.as_ref(),
        }
    }

    /// Chooses a move for `mark` at `difficulty`.
    #[instrument(skip(self, board))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        difficulty: Difficulty,
    ) -> Result<usize, StrategyError> {
        let strategy = match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        };
        let index = strategy.choose_move(board, mark, &mut self.rng)?;
        debug!(strategy = strategy.name(), index, "Opponent chose move");
        Ok(index)
    }

    /// Samples the pause before a move at `difficulty`.
    pub fn think_time(&mut self, times: &ThinkTimes, difficulty: Difficulty) -> Duration {
        times.for_difficulty(difficulty).sample(&mut self.rng)
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new()
    }
}
