//! Command-line interface for rematch.

use clap::{Parser, Subcommand};

/// Rematch - terminal tic-tac-toe with a session scoreboard
#[derive(Parser, Debug)]
#[command(name = "rematch")]
#[command(about = "Two-player tic-tac-toe with a session scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match in the terminal
    Play {
        /// Path to a match config file (player display names)
        #[arg(short, long, default_value = "rematch.toml")]
        config: std::path::PathBuf,
    },

    /// Replay a scripted round and print the outcome
    Replay {
        /// Path to a JSON script: an array of cell digits 1-9
        file: Option<std::path::PathBuf>,

        /// Inline script: comma-separated cell digits, e.g. "1,5,2,9"
        #[arg(short, long)]
        moves: Option<String>,

        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
