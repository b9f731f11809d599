//! Medium opponent: win, block, center, corner, anything.

use rand::RngCore;
use rand::seq::SliceRandom;

use super::{Strategy, open_cells};
use crate::error::StrategyError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark};

/// Fixed priority list of one-ply rules.
///
/// 1. Complete a line for `mark`.
/// 2. Block the other mark's immediate win.
/// 3. Take the center.
/// 4. Take a random free corner.
/// 5. Take a random free cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

/// First open cell (ascending) where `mark` would complete a line.
fn completing_move(board: &Board, open: &[usize], mark: Mark) -> Option<usize> {
    open.iter()
        .copied()
        .find(|&index| rules::winner(&board.with_mark(index, mark)) == Some(mark))
}

impl Strategy for HeuristicStrategy {
    fn choose_move(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<usize, StrategyError> {
        let open = open_cells(board, mark)?;

        if let Some(index) = completing_move(board, &open, mark) {
            return Ok(index);
        }
        if let Some(index) = completing_move(board, &open, mark.opponent()) {
            return Ok(index);
        }

        let center = Position::Center.index();
        if open.contains(&center) {
            return Ok(center);
        }

        let corners: Vec<usize> = Position::CORNERS
            .iter()
            .map(|pos| pos.index())
            .filter(|index| open.contains(index))
            .collect();
        let pick = if corners.is_empty() {
            open.choose(rng)
        } else {
            corners.choose(rng)
        };
        pick.copied().ok_or(StrategyError::NoLegalMove { mark })
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
