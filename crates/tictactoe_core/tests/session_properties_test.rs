//! Property tests for move sequencing through a session.

use proptest::prelude::*;
use tictactoe_core::{
    Board, GameEvent, GameInvariants, GameSession, GameStatus, InvariantSet, Mark, Mode,
    MoveError, Opponent, SessionConfig, Square, ThinkTimes, rules,
};

fn two_player() -> GameSession<Vec<GameEvent>> {
    let config = SessionConfig::default()
        .with_mode(Mode::TwoPlayer)
        .with_think_times(ThinkTimes::instant());
    GameSession::new(config, Opponent::seeded(0), Vec::new())
}

proptest! {
    #[test]
    fn marks_alternate_and_refusals_are_silent(moves in prop::collection::vec(0usize..12, 0..30)) {
        let mut session = two_player();

        for index in moves {
            let before: Board = *session.board();
            let status_before = session.status();
            session.sink_mut().clear();

            match session.select_cell(index) {
                Ok(ticket) => {
                    prop_assert!(ticket.is_none());
                    let k = before.filled() + 1;
                    let expected = if k % 2 == 1 { Mark::X } else { Mark::O };
                    prop_assert_eq!(session.board().cell_at(index), Ok(Square::Occupied(expected)));
                    prop_assert_eq!(
                        session.sink().first(),
                        Some(&GameEvent::CellFilled { index, mark: expected })
                    );
                }
                Err(error) => {
                    prop_assert_eq!(session.board(), &before);
                    prop_assert_eq!(session.status(), status_before);
                    prop_assert!(session.sink().is_empty());
                    let expected_kind = status_before != GameStatus::InProgress
                        || index > 8
                        || !before.is_empty(index);
                    prop_assert!(expected_kind, "unexpected refusal: {error}");
                }
            }

            prop_assert!(GameInvariants::check_all(session.game()).is_ok());
        }
    }

    #[test]
    fn finished_games_accept_nothing(moves in prop::collection::vec(0usize..9, 9..40)) {
        let mut session = two_player();
        for index in moves {
            let _ = session.select_cell(index);
        }

        if session.status() != GameStatus::InProgress {
            let before = *session.board();
            session.sink_mut().clear();
            for index in 0..9 {
                prop_assert_eq!(session.select_cell(index), Err(MoveError::Rejected));
            }
            prop_assert_eq!(session.board(), &before);
            prop_assert!(session.sink().is_empty());
        }
    }

    #[test]
    fn winner_is_never_ambiguous(moves in prop::collection::vec(0usize..9, 0..40)) {
        let mut session = two_player();
        for index in moves {
            let _ = session.select_cell(index);
            let squares = session.board().squares();
            let owners: Vec<Mark> = rules::LINES
                .iter()
                .filter_map(|&[a, b, c]| match (squares[a], squares[b], squares[c]) {
                    (Square::Occupied(m), Square::Occupied(n), Square::Occupied(o)) if m == n && n == o => Some(m),
                    _ => None,
                })
                .collect();
            prop_assert!(owners.windows(2).all(|w| w[0] == w[1]));
        }
    }
}

#[test]
fn top_row_scenario() {
    let mut session = two_player();
    for index in [0, 4, 1, 5, 2] {
        session.select_cell(index).unwrap();
    }
    assert_eq!(rules::winner(session.board()), Some(Mark::X));
    assert_eq!(rules::winning_line(session.board()), Some([0, 1, 2]));
    assert_eq!(session.tally().wins(Mark::X), 1);
}

#[test]
fn draw_scenario() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert!(rules::is_draw(&board));

    let mut session = two_player();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.select_cell(index).unwrap();
    }
    assert_eq!(session.board(), &board);
    assert_eq!(session.status(), GameStatus::Drawn);
    assert_eq!(session.sink().iter().filter(|e| **e == GameEvent::GameDrawn).count(), 1);
    assert_eq!(*session.tally().draws(), 1);
}
