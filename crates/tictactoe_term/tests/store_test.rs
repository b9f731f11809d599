//! State file behavior on disk.

use tempfile::tempdir;
use tictactoe_core::{Difficulty, Mode, ScoreTally};
use tictactoe_term::{SavedState, StateStore};

#[test]
fn missing_file_is_first_run() {
    let dir = tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    assert_eq!(store.load_saved(), None);
    assert_eq!(store.load(), SavedState::default());
    assert!(!store.path().exists());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let store = StateStore::new(dir.path().join("nested/dir/state.json"));
    let state = SavedState::new(ScoreTally::new(4, 1, 2), Mode::SinglePlayer, Difficulty::Medium);

    store.save(&state).unwrap();

    assert_eq!(store.load_saved(), Some(state));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = StateStore::new(&path);

    let err = store.try_load().unwrap_err();
    assert!(err.message.starts_with("Failed to parse state"));
    assert_eq!(store.load(), SavedState::default());
}

#[test]
fn unknown_values_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"tic_mode":"three-player"}"#).unwrap();

    assert_eq!(StateStore::new(&path).load(), SavedState::default());
}

#[test]
fn file_uses_browser_storage_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = StateStore::new(&path);
    store
        .save(&SavedState::new(ScoreTally::new(0, 0, 1), Mode::TwoPlayer, Difficulty::Easy))
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["tic_scores"]["draw"], 1);
    assert_eq!(raw["tic_mode"], "two-player");
    assert_eq!(raw["tic_ai_difficulty"], "easy");
}
