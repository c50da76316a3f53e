//! Super Tic-Tac-Toe - terminal front-end

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use super_tictactoe_cli::{Cli, Command, DisplayConfig, ReplayFormat, Session, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout carries the board; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&cli.config),
        Command::Replay { moves, json } => run_replay(&cli.config, &moves, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config_path: &Path) -> Result<()> {
    let config = DisplayConfig::load_or_default(config_path)?;
    info!("Starting interactive game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&config);
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Replay a move list and print the result
#[instrument(skip(moves))]
fn run_replay(config_path: &Path, moves: &[String], json: bool) -> Result<()> {
    let config = DisplayConfig::load_or_default(config_path)?;
    let format = if json {
        ReplayFormat::Json
    } else {
        ReplayFormat::Board
    };

    println!("{}", replay(moves, format, &config.symbols())?);
    Ok(())
}
