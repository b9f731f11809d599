//! Easy opponent: uniform random choice.

use rand::RngCore;
use rand::seq::SliceRandom;

use super::{Strategy, open_cells};
use crate::error::StrategyError;
use crate::types::{Board, Mark};

/// Plays any empty cell with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_move(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<usize, StrategyError> {
        let open = open_cells(board, mark)?;
        open.choose(rng)
            .copied()
            .ok_or(StrategyError::NoLegalMove { mark })
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
