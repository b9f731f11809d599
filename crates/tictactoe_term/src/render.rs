//! Text for the terminal.

use tictactoe_core::{
    EventSink, GameEvent, GameSession, GameStatus, Mark, Mode, OPPONENT_MARK, Position,
    ScoreTally,
};

/// Command list shown by `help`.
pub const HELP: &str = "\
Commands:
  1-9 or a name like top-left   place your mark
  r | new                       new game, keep the score
  R | reset-score               zero the score and start over
  mode two|single               two players or play the computer (O)
  difficulty easy|medium|hard   computer strength
  show                          print the board again
  help                          this list
  q | quit                      leave";

/// How a mark's owner is addressed in `mode`.
pub fn player_name(mark: Mark, mode: Mode) -> &'static str {
    match (mark, mode) {
        (Mark::X, _) => "Player 1 (X)",
        (Mark::O, Mode::SinglePlayer) => "Computer (O)",
        (Mark::O, Mode::TwoPlayer) => "Player 2 (O)",
    }
}

/// Scoreboard line.
pub fn scoreboard(tally: &ScoreTally, mode: Mode) -> String {
    format!(
        "{}: {}  {}: {}  Draws: {}",
        player_name(Mark::X, mode),
        tally.x_wins(),
        player_name(Mark::O, mode),
        tally.o_wins(),
        tally.draws()
    )
}

/// Status line for the current game.
pub fn status_line<S: EventSink>(session: &GameSession<S>) -> String {
    let mode = session.mode();
    match session.status() {
        GameStatus::InProgress => {
            let turn = session.turn();
            if mode == Mode::SinglePlayer && turn == OPPONENT_MARK {
                format!("{} is thinking...", player_name(turn, mode))
            } else {
                format!("{}'s turn", player_name(turn, mode))
            }
        }
        GameStatus::Won(winner) => format!("{} wins!", player_name(winner, mode)),
        GameStatus::Drawn => "It's a draw!".to_string(),
    }
}

/// Board, status and score in one block.
pub fn screen<S: EventSink>(session: &GameSession<S>) -> String {
    let settings = match session.mode() {
        Mode::SinglePlayer => format!("{}, {}", session.mode(), session.difficulty()),
        Mode::TwoPlayer => session.mode().to_string(),
    };
    format!(
        "\n{}\n\n{}\n{}  [{}]",
        session.board().display(),
        status_line(session),
        scoreboard(&session.tally(), session.mode()),
        settings
    )
}

/// One-line description of an event, or `None` if the screen already says it.
pub fn describe(event: &GameEvent, mode: Mode) -> Option<String> {
    match event {
        GameEvent::CellFilled { index, mark } => Some(format!(
            "{} takes {}",
            player_name(*mark, mode),
            Position::from_index(*index).map_or("?", Position::label)
        )),
        GameEvent::GameWon { winner, line } => {
            let cells: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
            Some(format!(
                "{} completes {}",
                player_name(*winner, mode),
                cells.join("-")
            ))
        }
        GameEvent::GameReset => Some("New game".to_string()),
        GameEvent::OpponentThinking { mark, delay } => Some(format!(
            "{} is thinking ({} ms)",
            player_name(*mark, mode),
            delay.as_millis()
        )),
        GameEvent::TurnChanged(_) | GameEvent::GameDrawn | GameEvent::ScoreChanged(_) => None,
    }
}

/// True if `event` changes what the board or score shows.
pub fn redraws(event: &GameEvent) -> bool {
    !matches!(event, GameEvent::OpponentThinking { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_player_names() {
        assert_eq!(player_name(Mark::O, Mode::TwoPlayer), "Player 2 (O)");
        assert_eq!(player_name(Mark::O, Mode::SinglePlayer), "Computer (O)");
    }

    #[test]
    fn test_describe() {
        let filled = GameEvent::CellFilled {
            index: 4,
            mark: Mark::X,
        };
        assert_eq!(
            describe(&filled, Mode::TwoPlayer).as_deref(),
            Some("Player 1 (X) takes center")
        );

        let won = GameEvent::GameWon {
            winner: Mark::O,
            line: [2, 4, 6],
        };
        assert_eq!(
            describe(&won, Mode::SinglePlayer).as_deref(),
            Some("Computer (O) completes 3-5-7")
        );

        let thinking = GameEvent::OpponentThinking {
            mark: Mark::O,
            delay: Duration::from_millis(250),
        };
        assert_eq!(
            describe(&thinking, Mode::SinglePlayer).as_deref(),
            Some("Computer (O) is thinking (250 ms)")
        );
        assert!(!redraws(&thinking));
        assert_eq!(describe(&GameEvent::GameDrawn, Mode::TwoPlayer), None);
    }

    #[test]
    fn test_scoreboard() {
        assert_eq!(
            scoreboard(&ScoreTally::new(3, 1, 2), Mode::TwoPlayer),
            "Player 1 (X): 3  Player 2 (O): 1  Draws: 2"
        );
    }
}
