//! Parsing typed lines into user intents.

use std::str::FromStr;

use derive_more::{Display, Error};
use tictactoe_core::{Difficulty, Mode, Position};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select a cell by index 0-8.
    Select(usize),
    /// Start a new game, keeping the score.
    NewGame,
    /// Zero the score and start a new game.
    ResetScore,
    /// Switch between two-player and single-player.
    SetMode(Mode),
    /// Change the computer's difficulty.
    SetDifficulty(Difficulty),
    /// Print the board and score again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{input}': {reason}")]
pub struct IntentError {
    /// What was typed.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl IntentError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Intent {
    type Err = IntentError;

    /// Cells are typed as `1`-`9` or a name like `top-left`.
    ///
    /// `r` starts a new game and `R` also resets the score, so only those
    /// two are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Intent::Show);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(IntentError::new(line, "too many words"));
        }

        match (head, arg) {
            ("r", None) => return Ok(Intent::NewGame),
            ("R", None) => return Ok(Intent::ResetScore),
            _ => {}
        }

        let head_lower = head.to_ascii_lowercase();
        match (head_lower.as_str(), arg) {
            ("new", None) => Ok(Intent::NewGame),
            ("reset-score" | "reset", None) => Ok(Intent::ResetScore),
            ("show" | "board", None) => Ok(Intent::Show),
            ("help" | "h" | "?", None) => Ok(Intent::Help),
            ("q" | "quit" | "exit", None) => Ok(Intent::Quit),
            ("mode", Some(value)) => value
                .parse()
                .map(Intent::SetMode)
                .map_err(|_| IntentError::new(line, "mode is 'two' or 'single'")),
            ("mode", None) => Err(IntentError::new(line, "mode needs 'two' or 'single'")),
            ("difficulty" | "diff", Some(value)) => value
                .parse()
                .map(Intent::SetDifficulty)
                .map_err(|_| IntentError::new(line, "difficulty is easy, medium or hard")),
            ("difficulty" | "diff", None) => {
                Err(IntentError::new(line, "difficulty needs easy, medium or hard"))
            }
            (cell, None) => parse_cell(cell).ok_or_else(|| IntentError::new(line, "not a cell")),
            _ => Err(IntentError::new(line, "unknown command")),
        }
    }
}

/// `1`-`9` in reading order, or a position name.
fn parse_cell(word: &str) -> Option<Intent> {
    if let Ok(number) = word.parse::<usize>() {
        return (1..=9).contains(&number).then(|| Intent::Select(number - 1));
    }
    Position::from_label(word).map(|position| Intent::Select(position.index()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_by_number() {
        assert_eq!("1".parse(), Ok(Intent::Select(0)));
        assert_eq!(" 9 ".parse(), Ok(Intent::Select(8)));
        assert!("0".parse::<Intent>().is_err());
        assert!("10".parse::<Intent>().is_err());
    }

    #[test]
    fn test_cells_by_name() {
        assert_eq!("center".parse(), Ok(Intent::Select(4)));
        assert_eq!("Bottom-Right".parse(), Ok(Intent::Select(8)));
    }

    #[test]
    fn test_reset_case_matters() {
        assert_eq!("r".parse(), Ok(Intent::NewGame));
        assert_eq!("R".parse(), Ok(Intent::ResetScore));
        assert_eq!("NEW".parse(), Ok(Intent::NewGame));
    }

    #[test]
    fn test_settings() {
        assert_eq!("mode single".parse(), Ok(Intent::SetMode(Mode::SinglePlayer)));
        assert_eq!("mode two-player".parse(), Ok(Intent::SetMode(Mode::TwoPlayer)));
        assert_eq!(
            "difficulty Hard".parse(),
            Ok(Intent::SetDifficulty(Difficulty::Hard))
        );
        assert!("mode solo".parse::<Intent>().is_err());
        assert!("difficulty".parse::<Intent>().is_err());
    }

    #[test]
    fn test_misc() {
        assert_eq!("".parse(), Ok(Intent::Show));
        assert_eq!("q".parse(), Ok(Intent::Quit));
        assert_eq!("?".parse(), Ok(Intent::Help));
        let err = "fly away now".parse::<Intent>().unwrap_err();
        assert_eq!(err.reason, "too many words");
    }
}
