//! Tictactoe - terminal game
//!
//! Plays tic-tac-toe on stdin/stdout. Logs go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, Files};
use tictactoe_core::{Difficulty, GameSession, Mode, Opponent, SessionConfig};
use tictactoe_term::{App, AppConfig, StateStore, render};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            seed,
            files,
        } => run_play(mode, difficulty, seed, files).await,
        Command::Scores { files } => show_scores(files),
        Command::ResetScores { files } => reset_scores(files),
    }
}

/// Loads config and opens the state store it points at.
fn open_store(files: Files) -> Result<(AppConfig, StateStore)> {
    let config = AppConfig::load(files.config.as_deref())?;
    let store = StateStore::new(config.state_file_or(files.state_file));
    Ok((config, store))
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(files))]
async fn run_play(
    mode: Option<Mode>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    files: Files,
) -> Result<()> {
    let (config, store) = open_store(files)?;
    let saved = store.load_saved();

    // CLI flag, then saved choice, then config file, then default.
    let mode = mode
        .or(saved.map(|s| *s.mode()))
        .or(*config.mode())
        .unwrap_or_default();
    let difficulty = difficulty
        .or(saved.map(|s| *s.difficulty()))
        .or(*config.difficulty())
        .unwrap_or_default();
    let tally = saved.map(|s| *s.scores()).unwrap_or_default();
    info!(%mode, %difficulty, state_file = %store.path().display(), "Starting game");

    let session_config = SessionConfig::default()
        .with_mode(mode)
        .with_difficulty(difficulty)
        .with_tally(tally)
        .with_think_times(*config.think_times());
    let opponent = seed
        .or(*config.seed())
        .map(Opponent::seeded)
        .unwrap_or_default();

    let session = GameSession::new(session_config, opponent, Vec::new());
    let mut app = App::new(session, store);
    let mut stdout = std::io::stdout();
    app.run(BufReader::new(tokio::io::stdin()), &mut stdout).await
}

/// Print the saved score
fn show_scores(files: Files) -> Result<()> {
    let (_, store) = open_store(files)?;
    let saved = store.load();
    println!("{}", render::scoreboard(saved.scores(), *saved.mode()));
    println!("Games played: {}", saved.scores().games());
    Ok(())
}

/// Zero the saved score
fn reset_scores(files: Files) -> Result<()> {
    let (_, store) = open_store(files)?;
    let cleared = store.load().without_scores();
    store.save(&cleared)?;
    println!("Scores reset ({})", store.path().display());
    Ok(())
}
