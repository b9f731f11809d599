//! Command-line interface for the tictactoe binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tictactoe_core::{Difficulty, Mode};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Files shared by every subcommand
#[derive(Args, Debug)]
pub struct Files {
    /// Path to a TOML config file (default: tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON state file holding scores and preferences
    #[arg(long)]
    pub state_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play {
        /// two-player or single-player (overrides the saved choice)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// easy, medium or hard (overrides the saved choice)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        files: Files,
    },

    /// Print the saved score
    Scores {
        #[command(flatten)]
        files: Files,
    },

    /// Zero the saved score, keeping mode and difficulty
    ResetScores {
        #[command(flatten)]
        files: Files,
    },
}
