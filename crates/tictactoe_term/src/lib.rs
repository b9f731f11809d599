//! Terminal front end for `tictactoe_core`.
//!
//! Reads commands line by line, renders session events as text, and keeps
//! the score and last-used settings in a JSON state file.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod intent;
pub mod render;
mod store;

pub use app::{App, Flow};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_STATE_FILE};
pub use intent::{Intent, IntentError};
pub use store::{SavedState, StateStore, StoreError};
