//! Terminal frontend for the guessing game.

mod controller;
mod scoreboard;
mod screen;
mod screens;

use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::{GameConfig, GuessingGame, ScoreService};
use controller::GameController;

/// Runs the terminal game until the player quits.
///
/// The terminal is restored even when the game loop fails.
#[instrument(skip_all, fields(db_path = %config.db_path()))]
pub async fn run_tui(config: &GameConfig, score_service: ScoreService) -> Result<()> {
    info!("Starting Strictly Guess TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let game = GuessingGame::new(score_service);
    let mut controller = GameController::new(game, *config.leaderboard_rows());
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
