//! First-class invariants for a game of tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. [`Game::apply`](crate::Game::apply) checks them in debug builds and
//! the property tests check them over random move sequences.

use crate::game::{Game, GameStatus};
use crate::rules::LINES;
use crate::types::{Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|&(_, description)| InvariantViolation { description })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// X has placed as many marks as O, or one more.
pub struct MarkBalance;

impl Invariant<Game> for MarkBalance {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// At most one mark owns a line, and it matches the status.
pub struct SingleWinner;

impl Invariant<Game> for SingleWinner {
    fn holds(game: &Game) -> bool {
        let squares = game.board().squares();
        let owns_line = |mark: Mark| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(mark)))
        };

        match (owns_line(Mark::X), owns_line(Mark::O), game.status()) {
            (true, true, _) => false,
            (true, false, status) => status == GameStatus::Won(Mark::X),
            (false, true, status) => status == GameStatus::Won(Mark::O),
            (false, false, status) => !matches!(status, GameStatus::Won(_)),
        }
    }

    fn description() -> &'static str {
        "At most one mark owns a line and the status agrees"
    }
}

/// History alternates X, O, X, ... and matches the board cell by cell.
pub struct AlternatingHistory;

impl Invariant<Game> for AlternatingHistory {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let history = game.history();

        let consistent = history.len() == board.filled()
            && history.iter().enumerate().all(|(k, &index)| {
                let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
                board.cell_at(index) == Ok(Square::Occupied(expected))
            });

        let turn_ok = match game.status() {
            GameStatus::InProgress => {
                let expected = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
                game.turn() == expected
            }
            GameStatus::Won(_) | GameStatus::Drawn => true,
        };

        consistent && turn_ok
    }

    fn description() -> &'static str {
        "Marks alternate starting with X and history matches the board"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkBalance, SingleWinner, AlternatingHistory);
