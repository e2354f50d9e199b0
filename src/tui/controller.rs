//! Game controller: the state machine driving the terminal screens.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::tui::scoreboard::{render_scoreboard, split_main};
use crate::tui::screen::{Screen, ScreenAction};
use crate::tui::screens::{FinishedScreen, NameEntryScreen, PlayingScreen};
use crate::{GameError, GuessOutcome, GuessingGame};

/// Active screen in the terminal state machine.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    Playing(PlayingScreen),
    Finished(FinishedScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::NameEntry(s) => s,
            Self::Playing(s) => s,
            Self::Finished(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::NameEntry(s) => s,
            Self::Playing(s) => s,
            Self::Finished(s) => s,
        }
    }
}

/// Controller that owns the game and drives the screens.
///
/// Call [`GameController::run`] to start the event loop.
#[derive(Debug)]
pub struct GameController {
    game: GuessingGame,
    leaderboard_rows: usize,
}

impl GameController {
    /// Creates a controller for `game`.
    #[instrument(skip(game))]
    pub fn new(game: GuessingGame, leaderboard_rows: usize) -> Self {
        info!("Creating GameController");
        Self {
            game,
            leaderboard_rows,
        }
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        if let Err(e) = self.game.load_scores().await {
            warn!(error = %e, "Initial score load failed");
        }

        let mut screen = ActiveScreen::NameEntry(NameEntryScreen::new(None));

        loop {
            terminal.draw(|f| self.draw(f, &screen))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let action = screen.as_screen_mut().handle_key(key);
                screen = match self.apply_action(action, screen).await {
                    Some(next) => next,
                    None => {
                        info!("Game quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    fn draw(&self, frame: &mut Frame, screen: &ActiveScreen) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(frame.area());
        let (game_area, score_area) = split_main(rows[0]);

        screen.as_screen().render(frame, game_area, &self.game);
        render_scoreboard(frame, score_area, &self.game, self.leaderboard_rows);

        if let Some(warning) = self.game.store_warning() {
            let status = Paragraph::new(warning.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(status, rows[1]);
        }
    }

    /// Applies a screen action, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    async fn apply_action(
        &mut self,
        action: ScreenAction,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(action = ?action, "Applying screen action");
        match action {
            ScreenAction::Stay => Some(current),

            ScreenAction::StartGame { name } => Some(self.start(&name, current)),

            ScreenAction::PlayAgain => {
                let name = self.game.player().unwrap_or_default().to_string();
                Some(self.start(&name, current))
            }

            ScreenAction::SubmitGuess { text } => {
                let mut playing = match current {
                    ActiveScreen::Playing(playing) => playing,
                    other => {
                        warn!("Guess submitted from a non-playing screen");
                        return Some(other);
                    }
                };
                match self.game.submit_guess(&text).await {
                    Ok(GuessOutcome::Continue(_)) => {
                        playing.accept();
                        Some(ActiveScreen::Playing(playing))
                    }
                    Ok(GuessOutcome::Solved { attempts, score, .. }) => {
                        info!(attempts, saved = score.is_some(), "Game won");
                        Some(ActiveScreen::Finished(FinishedScreen::new(score)))
                    }
                    Err(e @ GameError::InvalidGuess(_)) => {
                        playing.set_error(e.to_string());
                        Some(ActiveScreen::Playing(playing))
                    }
                    Err(e) => {
                        warn!(error = %e, "Guess not applied");
                        Some(ActiveScreen::NameEntry(NameEntryScreen::new(self.game.player())))
                    }
                }
            }

            ScreenAction::BackToNameEntry => {
                info!("Returning to name entry");
                Some(ActiveScreen::NameEntry(NameEntryScreen::new(self.game.player())))
            }

            ScreenAction::Quit => None,
        }
    }

    /// Starts a game, staying on name entry if the name is rejected.
    fn start(&mut self, name: &str, current: ActiveScreen) -> ActiveScreen {
        match self.game.start_game(name) {
            Ok(()) => ActiveScreen::Playing(PlayingScreen::new()),
            Err(e) => {
                debug!(error = %e, "Game not started");
                let mut entry = match current {
                    ActiveScreen::NameEntry(entry) => entry,
                    _ => NameEntryScreen::new(Some(name)),
                };
                entry.set_error(e.to_string());
                ActiveScreen::NameEntry(entry)
            }
        }
    }
}
