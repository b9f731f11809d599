//! Persisted scores and preferences.
//!
//! One JSON object in a file, keyed like the browser storage it replaces:
//! `tic_scores`, `tic_mode` and `tic_ai_difficulty`.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictactoe_core::{Difficulty, EventSink, GameSession, Mode, ScoreTally};
use tracing::{debug, instrument, warn};

/// Everything that survives between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// Running score.
    #[serde(rename = "tic_scores")]
    scores: ScoreTally,

    /// Last selected mode.
    #[serde(rename = "tic_mode")]
    mode: Mode,

    /// Last selected difficulty.
    #[serde(rename = "tic_ai_difficulty")]
    difficulty: Difficulty,
}

impl SavedState {
    /// Creates a state record.
    pub fn new(scores: ScoreTally, mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            scores,
            mode,
            difficulty,
        }
    }

    /// Snapshot of what a session would persist.
    pub fn of<S: EventSink>(session: &GameSession<S>) -> Self {
        Self::new(session.tally(), session.mode(), session.difficulty())
    }

    /// Same state with a zeroed score.
    pub fn without_scores(self) -> Self {
        Self {
            scores: ScoreTally::default(),
            ..self
        }
    }
}

/// Reads and writes [`SavedState`] at one path.
#[derive(Debug, Clone, Getters)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store backed by `path`. Nothing is touched until load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads saved state, or defaults on a first run.
    ///
    /// An unreadable or malformed file is logged and treated as a first run,
    /// so the game still starts.
    pub fn load(&self) -> SavedState {
        self.load_saved().unwrap_or_default()
    }

    /// Loads saved state, or `None` if there is nothing usable.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_saved(&self) -> Option<SavedState> {
        match self.try_load() {
            Ok(Some(state)) => {
                debug!(?state, "Loaded saved state");
                Some(state)
            }
            Ok(None) => {
                debug!("No saved state");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unusable saved state");
                None
            }
        }
    }

    /// Loads saved state, reporting problems instead of hiding them.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn try_load(&self) -> Result<Option<SavedState>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::new(format!("Failed to read state: {}", e))),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::new(format!("Failed to parse state: {}", e)))
    }

    /// Writes `state`, replacing the previous file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, state: &SavedState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::new(format!("Failed to encode state: {}", e)))?;
        write_file(&self.path, &json)?;
        debug!("Saved state");
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| StoreError::new(format!("Failed to create {}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, content)
        .map_err(|e| StoreError::new(format!("Failed to write state: {}", e)))
}

/// State file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let state: SavedState =
            serde_json::from_str(r#"{"tic_mode":"single-player","tic_scores":{"O":2}}"#).unwrap();
        assert_eq!(state.mode(), &Mode::SinglePlayer);
        assert_eq!(state.difficulty(), &Difficulty::Easy);
        assert_eq!(state.scores(), &ScoreTally::new(0, 2, 0));
    }

    #[test]
    fn test_key_names() {
        let state = SavedState::new(ScoreTally::new(1, 2, 3), Mode::TwoPlayer, Difficulty::Hard);
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "tic_scores": {"X": 1, "O": 2, "draw": 3},
                "tic_mode": "two-player",
                "tic_ai_difficulty": "hard"
            })
        );
    }

    #[test]
    fn test_without_scores() {
        let state = SavedState::new(ScoreTally::new(1, 2, 3), Mode::SinglePlayer, Difficulty::Hard);
        let cleared = state.without_scores();
        assert_eq!(cleared.scores(), &ScoreTally::default());
        assert_eq!(cleared.mode(), &Mode::SinglePlayer);
    }
}
