//! Strictly Guess - terminal number guessing game
//!
//! Plays the game in the terminal or prints the recorded scores.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_guess::{GameConfig, Leaderboard, ScoreService};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_game(config).await,
        Command::Scores { limit, json } => print_scores(config, limit, json).await,
    }
}

/// Run the terminal game
async fn run_game(config: GameConfig) -> Result<()> {
    // Log to a file so output does not interfere with the terminal UI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_guess=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(db_path = %config.db_path(), "Starting Strictly Guess");

    let score_service = ScoreService::open(config.db_path());
    strictly_guess::run_tui(&config, score_service).await
}

/// Print the leaderboard to stdout
#[instrument(skip(config), fields(db_path = %config.db_path()))]
async fn print_scores(config: GameConfig, limit: Option<usize>, json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let service = ScoreService::open(config.db_path());
    let board = service
        .leaderboard()
        .await
        .context("reading the score history")?;
    let limit = limit.unwrap_or(*config.leaderboard_rows());

    if json {
        println!("{}", serde_json::to_string_pretty(board.top(limit))?);
    } else {
        print_table(&board, limit);
    }
    Ok(())
}

fn print_table(board: &Leaderboard, limit: usize) {
    if board.is_empty() {
        println!("No games recorded yet");
        return;
    }

    if let Some(best) = board.best() {
        println!("Best score: {} in {} attempts\n", best.name(), best.attempts());
    }
    println!("{:>5}  {:<20} {:>8}  {:<10}", "ID", "Name", "Attempts", "Date");
    for entry in board.top(limit) {
        println!(
            "{:>5}  {:<20} {:>8}  {:<10}",
            entry.id(),
            entry.name(),
            entry.attempts(),
            entry.display_date()
        );
    }
}
