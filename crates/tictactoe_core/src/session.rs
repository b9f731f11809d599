//! A running tic-tac-toe session: one game at a time, score, mode and opponent.

use std::time::Duration;

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::error::MoveError;
use crate::events::{EventSink, GameEvent};
use crate::game::{Game, GameStatus, MoveOutcome};
use crate::score::ScoreTally;
use crate::settings::{Difficulty, Mode, SessionConfig, ThinkTimes};
use crate::strategy::Opponent;
use crate::types::{Board, Mark};

/// The computer always plays the second mark.
pub const OPPONENT_MARK: Mark = Mark::O;

/// Claim on one scheduled opponent move.
///
/// Returned when the session decides the computer should move. The caller
/// waits for [`delay`](OpponentTicket::delay) and hands the ticket back to
/// [`GameSession::play_opponent`]. A reset, a switch to two-player mode, a
/// direct [`GameSession::apply_move`] or a newer ticket makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct OpponentTicket {
    /// Unique per session.
    id: u64,
    /// Session generation it was issued in.
    generation: u64,
    /// Pause before the move should land.
    delay: Duration,
}

/// Owns the game, score and opponent; emits [`GameEvent`]s to `S`.
///
/// All state changes go through `&mut self`, one call at a time. Handlers in
/// the sink must not call back into the session.
#[derive(Debug)]
pub struct GameSession<S: EventSink> {
    game: Game,
    mode: Mode,
    difficulty: Difficulty,
    tally: ScoreTally,
    think_times: ThinkTimes,
    opponent: Opponent,
    sink: S,
    generation: u64,
    next_ticket: u64,
    pending: Option<OpponentTicket>,
}

impl<S: EventSink> GameSession<S> {
    /// Creates a session with an empty board and X to move.
    #[instrument(skip(opponent, sink))]
    pub fn new(config: SessionConfig, opponent: Opponent, sink: S) -> Self {
        info!("Creating game session");
        Self {
            game: Game::new(),
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            tally: *config.tally(),
            think_times: *config.think_times(),
            opponent,
            sink,
            generation: 0,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Mark to move.
    pub fn turn(&self) -> Mark {
        self.game.turn()
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Score so far.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Increments on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The opponent move waiting to be played, if any.
    pub fn pending(&self) -> Option<OpponentTicket> {
        self.pending
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The event sink, mutably (e.g. to drain buffered events).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// True when the computer owns the current turn.
    fn opponent_to_move(&self) -> bool {
        self.mode == Mode::SinglePlayer
            && self.game.status() == GameStatus::InProgress
            && self.game.turn() == OPPONENT_MARK
    }

    /// Places the current mark at `index` and emits the resulting events.
    ///
    /// Any outstanding [`OpponentTicket`] becomes stale.
    ///
    /// Emits `CellFilled`, then `TurnChanged`, or `GameWon`/`GameDrawn`
    /// followed by `ScoreChanged`.
    ///
    /// # Errors
    ///
    /// Occupied or out-of-range cells and finished games are refused with no
    /// state change and no event.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        let mark = self.game.turn();
        let outcome = self.game.apply(index).inspect_err(|e| {
            debug!(index, error = %e, "Move refused");
        })?;
        if let Some(ticket) = self.pending.take() {
            debug!(?ticket, "Pending opponent move superseded");
        }

        self.sink.emit(GameEvent::CellFilled { index, mark });

        match outcome {
            MoveOutcome::Continue { next } => {
                self.sink.emit(GameEvent::TurnChanged(next));
            }
            MoveOutcome::Won { winner, line } => {
                info!(%winner, ?line, "Game won");
                self.tally.record(self.game.status());
                self.sink.emit(GameEvent::GameWon { winner, line });
                self.sink.emit(GameEvent::ScoreChanged(self.tally));
            }
            MoveOutcome::Drawn => {
                info!("Game drawn");
                self.tally.record(self.game.status());
                self.sink.emit(GameEvent::GameDrawn);
                self.sink.emit(GameEvent::ScoreChanged(self.tally));
            }
        }
        Ok(())
    }

    /// A human picks a cell.
    ///
    /// Returns a ticket when the move hands the turn to the computer.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move), plus `OpponentsTurn` while the
    /// computer owes a move.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<Option<OpponentTicket>, MoveError> {
        if self.opponent_to_move() {
            debug!(index, "Cell selected during opponent's turn");
            return Err(MoveError::OpponentsTurn {
                mark: OPPONENT_MARK,
            });
        }

        self.apply_move(index)?;
        Ok(self.schedule_opponent())
    }

    /// Issues a ticket if the computer should move now.
    fn schedule_opponent(&mut self) -> Option<OpponentTicket> {
        if !self.opponent_to_move() {
            return None;
        }

        let delay = self
            .opponent
            .think_time(&self.think_times, self.difficulty);
        let ticket = OpponentTicket {
            id: self.next_ticket,
            generation: self.generation,
            delay,
        };
        self.next_ticket += 1;
        self.pending = Some(ticket);

        debug!(?ticket, "Opponent move scheduled");
        self.sink.emit(GameEvent::OpponentThinking {
            mark: OPPONENT_MARK,
            delay,
        });
        Some(ticket)
    }

    /// Plays the computer's move for a ticket from [`select_cell`](Self::select_cell)
    /// or [`set_mode`](Self::set_mode). Returns the index played.
    ///
    /// The strategy for the difficulty current at this moment picks the cell.
    ///
    /// # Errors
    ///
    /// `StaleTicket` if the ticket was cancelled or superseded, or the turn is
    /// no longer the computer's; the board is left alone.
    #[instrument(skip(self))]
    pub fn play_opponent(&mut self, ticket: OpponentTicket) -> Result<usize, MoveError> {
        if self.pending != Some(ticket) || ticket.generation != self.generation {
            debug!(
                current_generation = self.generation,
                "Discarding stale opponent ticket"
            );
            return Err(MoveError::StaleTicket {
                ticket: ticket.id,
                generation: ticket.generation,
            });
        }
        self.pending = None;

        if self.game.is_over() {
            return Err(MoveError::Rejected);
        }
        if !self.opponent_to_move() {
            debug!(turn = %self.game.turn(), "Opponent no longer to move");
            return Err(MoveError::StaleTicket {
                ticket: ticket.id,
                generation: ticket.generation,
            });
        }

        let index = self
            .opponent
            .choose_move(self.game.board(), OPPONENT_MARK, self.difficulty)?;
        self.apply_move(index)?;
        Ok(index)
    }

    /// Switches mode.
    ///
    /// Leaving single-player cancels a pending opponent move; entering it while
    /// O is to move schedules one.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) -> Option<OpponentTicket> {
        self.mode = mode;
        match mode {
            Mode::TwoPlayer => {
                if self.pending.take().is_some() {
                    debug!("Pending opponent move cancelled");
                }
                None
            }
            Mode::SinglePlayer => match self.pending {
                Some(ticket) => Some(ticket),
                None => self.schedule_opponent(),
            },
        }
    }

    /// Sets the difficulty used for the next opponent decision.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Starts a new game. The score is kept.
    ///
    /// Any pending opponent move becomes stale.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.game.restart();
        info!(generation = self.generation, "Game reset");
        self.sink.emit(GameEvent::GameReset);
    }

    /// Zeroes the score, then starts a new game.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.tally = ScoreTally::default();
        info!("Score reset");
        self.sink.emit(GameEvent::ScoreChanged(self.tally));
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn session(mode: Mode, difficulty: Difficulty) -> GameSession<Vec<GameEvent>> {
        let config = SessionConfig::default()
            .with_mode(mode)
            .with_difficulty(difficulty)
            .with_think_times(ThinkTimes::instant());
        GameSession::new(config, Opponent::seeded(9), Vec::new())
    }

    #[test]
    fn test_events_for_plain_move() {
        let mut s = session(Mode::TwoPlayer, Difficulty::Easy);
        assert_eq!(s.select_cell(4), Ok(None));
        assert_eq!(
            s.sink(),
            &vec![
                GameEvent::CellFilled {
                    index: 4,
                    mark: Mark::X
                },
                GameEvent::TurnChanged(Mark::O),
            ]
        );
    }

    #[test]
    fn test_win_events_and_tally() {
        let mut s = session(Mode::TwoPlayer, Difficulty::Easy);
        for index in [0, 4, 1, 5, 2] {
            s.select_cell(index).unwrap();
        }
        let tail: Vec<_> = s.sink().iter().rev().take(3).rev().copied().collect();
        assert_eq!(
            tail,
            vec![
                GameEvent::CellFilled {
                    index: 2,
                    mark: Mark::X
                },
                GameEvent::GameWon {
                    winner: Mark::X,
                    line: [0, 1, 2]
                },
                GameEvent::ScoreChanged(ScoreTally::new(1, 0, 0)),
            ]
        );
        assert_eq!(s.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_refused_moves_emit_nothing() {
        let mut s = session(Mode::TwoPlayer, Difficulty::Easy);
        s.select_cell(4).unwrap();
        s.sink_mut().clear();

        assert!(s.select_cell(4).is_err());
        assert!(s.select_cell(9).is_err());
        assert!(s.sink().is_empty());
        assert_eq!(s.board().filled(), 1);
    }

    #[test]
    fn test_single_player_issues_ticket() {
        let mut s = session(Mode::SinglePlayer, Difficulty::Hard);
        let ticket = s.select_cell(0).unwrap().expect("opponent should be scheduled");
        assert_eq!(s.pending(), Some(ticket));
        assert_eq!(
            s.select_cell(1),
            Err(MoveError::OpponentsTurn { mark: Mark::O })
        );

        assert_eq!(s.play_opponent(ticket), Ok(4));
        assert_eq!(s.pending(), None);
        assert_eq!(s.turn(), Mark::X);
    }

    #[test]
    fn test_ticket_redeemed_once() {
        let mut s = session(Mode::SinglePlayer, Difficulty::Easy);
        let ticket = s.select_cell(0).unwrap().unwrap();
        s.play_opponent(ticket).unwrap();
        assert!(matches!(
            s.play_opponent(ticket),
            Err(MoveError::StaleTicket { .. })
        ));
    }

    #[test]
    fn test_direct_move_supersedes_ticket() {
        let mut s = session(Mode::SinglePlayer, Difficulty::Hard);
        let ticket = s.select_cell(0).unwrap().unwrap();

        // O's cell filled outside the opponent path.
        s.apply_move(8).unwrap();
        assert_eq!(s.pending(), None);
        assert_eq!(s.turn(), Mark::X);

        assert_eq!(
            s.play_opponent(ticket),
            Err(MoveError::StaleTicket {
                ticket: *ticket.id(),
                generation: 0
            })
        );
        assert_eq!(s.board().filled(), 2);
        assert_eq!(s.board().count(Mark::X), 1);
        assert_eq!(s.board().cell_at(8), Ok(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_reset_makes_ticket_stale() {
        let mut s = session(Mode::SinglePlayer, Difficulty::Medium);
        let ticket = s.select_cell(4).unwrap().unwrap();
        s.reset();
        s.sink_mut().clear();

        assert_eq!(
            s.play_opponent(ticket),
            Err(MoveError::StaleTicket {
                ticket: *ticket.id(),
                generation: 0
            })
        );
        assert_eq!(s.board(), &Board::new());
        assert!(s.sink().is_empty());
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_mode_switch_cancels_and_reschedules() {
        let mut s = session(Mode::SinglePlayer, Difficulty::Easy);
        let first = s.select_cell(4).unwrap().unwrap();
        assert_eq!(s.set_mode(Mode::TwoPlayer), None);
        assert!(s.play_opponent(first).is_err());

        let second = s.set_mode(Mode::SinglePlayer).expect("O to move");
        assert_ne!(first.id(), second.id());
        assert!(s.play_opponent(second).is_ok());
        assert_eq!(s.board().filled(), 2);
    }

    #[test]
    fn test_difficulty_read_at_decision_time() {
        let mut s = session(Mode::SinglePlayer, Difficulty::Easy);
        let ticket = s.select_cell(0).unwrap().unwrap();
        s.set_difficulty(Difficulty::Hard);
        assert_eq!(s.play_opponent(ticket), Ok(4));
    }

    #[test]
    fn test_reset_score() {
        let config = SessionConfig::default().with_tally(ScoreTally::new(2, 1, 1));
        let mut s = GameSession::new(config, Opponent::seeded(1), Vec::new());
        s.select_cell(0).unwrap();
        s.reset_score();

        assert_eq!(s.tally(), ScoreTally::default());
        assert_eq!(
            s.sink()[s.sink().len() - 2..],
            [
                GameEvent::ScoreChanged(ScoreTally::default()),
                GameEvent::GameReset
            ]
        );
        assert_eq!(s.board(), &Board::new());
    }

    #[test]
    fn test_reset_keeps_score() {
        let config = SessionConfig::default().with_tally(ScoreTally::new(2, 1, 1));
        let mut s = GameSession::new(config, Opponent::seeded(1), Vec::new());
        s.reset();
        assert_eq!(s.tally(), ScoreTally::new(2, 1, 1));
        assert_eq!(s.sink().last(), Some(&GameEvent::GameReset));
    }
}
