//! Rematch - Unified CLI
//!
//! Terminal tic-tac-toe with a session scoreboard.

#![warn(missing_docs)]

use anyhow::{bail, Result};
use clap::Parser;
use rematch::cli::{Cli, Command};
use rematch::config::MatchConfig;
use rematch::replay::{self, MoveScript};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { file, moves, json } => run_replay(file, moves, json),
    }
}

/// Run the interactive match in the terminal
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: PathBuf) -> Result<()> {
    initialize_tui_tracing()?;

    let config = MatchConfig::load_or_default(&config_path)?;
    info!("Starting interactive match");

    rematch::tui::run(config)
}

/// Replay a scripted round and print the outcome
fn run_replay(file: Option<PathBuf>, moves: Option<String>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = match (file, moves) {
        (Some(path), None) => MoveScript::from_path(&path)?,
        (None, Some(csv)) => MoveScript::from_csv(&csv)?,
        (Some(_), Some(_)) => bail!("pass either a script file or --moves, not both"),
        (None, None) => bail!("a script file or --moves is required"),
    };

    let report = replay::run(&script);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.board_text());
        println!();
        println!("{}", report.headline());
    }

    Ok(())
}

/// Sends tracing output to a file so it does not fight the terminal
/// UI for stdout.
fn initialize_tui_tracing() -> Result<()> {
    let log_file = std::fs::File::create("rematch.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
