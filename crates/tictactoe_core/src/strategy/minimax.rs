//! Hard opponent: exhaustive minimax.
//!
//! The board has at most 9! move orders, so the search runs to terminal
//! depth with no pruning or transposition table.

use rand::RngCore;

use super::{Strategy, open_cells};
use crate::error::StrategyError;
use crate::rules;
use crate::types::{Board, Mark};

/// Score of a won position before the depth penalty.
const WIN: i32 = 10;

/// Perfect play by full-depth minimax.
///
/// The mover maximizes: its wins score `10 - depth`, losses `depth - 10`,
/// draws `0`, with the root at depth 0. Ties go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Scores every open cell for `mark`, in ascending index order.
    pub fn evaluate(board: &Board, mark: Mark) -> Vec<(usize, i32)> {
        board
            .empty_indices()
            .into_iter()
            .map(|index| {
                let child = board.with_mark(index, mark);
                (index, score(&child, mark.opponent(), mark, 1))
            })
            .collect()
    }
}

/// Minimax value of `board` with `to_move` next, from `maximizer`'s side.
fn score(board: &Board, to_move: Mark, maximizer: Mark, depth: i32) -> i32 {
    if let Some(winner) = rules::winner(board) {
        return if winner == maximizer {
            WIN - depth
        } else {
            depth - WIN
        };
    }

    let open = board.empty_indices();
    if open.is_empty() {
        return 0;
    }

    let children = open
        .into_iter()
        .map(|index| score(&board.with_mark(index, to_move), to_move.opponent(), maximizer, depth + 1));

    if to_move == maximizer {
        children.max().unwrap_or(0)
    } else {
        children.min().unwrap_or(0)
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(
        &self,
        board: &Board,
        mark: Mark,
        _rng: &mut dyn RngCore,
    ) -> Result<usize, StrategyError> {
        open_cells(board, mark)?;

        let mut best: Option<(usize, i32)> = None;
        for (index, value) in Self::evaluate(board, mark) {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((index, value));
            }
        }

        best.map(|(index, _)| index)
            .ok_or(StrategyError::NoLegalMove { mark })
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn choose(board: &str, mark: Mark) -> usize {
        let board: Board = board.parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        MinimaxStrategy.choose_move(&board, mark, &mut rng).unwrap()
    }

    #[test]
    fn test_answers_corner_with_center() {
        assert_eq!(choose("X..|...|...", Mark::O), 4);
    }

    #[test]
    fn test_prefers_immediate_win() {
        // O wins at 5 now (score 9) rather than later.
        assert_eq!(choose("XX.|OO.|X..", Mark::O), 5);
    }

    #[test]
    fn test_blocks() {
        assert_eq!(choose("XX.|.O.|...", Mark::O), 2);
    }

    #[test]
    fn test_scores_depth_penalized() {
        let board: Board = "XX.|OO.|X..".parse().unwrap();
        let scores = MinimaxStrategy::evaluate(&board, Mark::O);
        assert_eq!(scores.iter().find(|(i, _)| *i == 5), Some(&(5, 9)));
        // Leaving 2 open lets X win next move.
        assert_eq!(scores.iter().find(|(i, _)| *i == 7), Some(&(7, -8)));
    }

    #[test]
    fn test_empty_board_ties_resolve_to_lowest_index() {
        let board = Board::new();
        let scores = MinimaxStrategy::evaluate(&board, Mark::X);
        assert!(scores.iter().all(|&(_, value)| value == 0));
        assert_eq!(choose(".........", Mark::X), 0);
    }
}
