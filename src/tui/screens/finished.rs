//! Finished screen: congratulations and play again.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{info, instrument};

use crate::tui::screen::{Screen, ScreenAction};
use crate::{GuessingGame, ScoreEntry};

/// Screen shown after the secret was found.
#[derive(Debug)]
pub struct FinishedScreen {
    saved: Option<ScoreEntry>,
}

impl FinishedScreen {
    /// Creates the screen for a finished game; `saved` is the stored score.
    #[instrument(skip(saved), fields(saved = saved.is_some()))]
    pub fn new(saved: Option<ScoreEntry>) -> Self {
        Self { saved }
    }
}

impl Screen for FinishedScreen {
    #[instrument(skip(self, frame, game))]
    fn render(&self, frame: &mut Frame, area: Rect, game: &GuessingGame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let headline = format!(
            "Congratulations, {}! You guessed it in {} attempts.",
            game.player().unwrap_or("player"),
            game.attempts()
        );
        let title = Paragraph::new(headline)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let secret = game
            .session()
            .revealed_secret()
            .map(ToString::to_string)
            .unwrap_or_default();
        let saved_text = match &self.saved {
            Some(entry) => format!("The number was {}. Saved as score #{}.", secret, entry.id()),
            None => format!("The number was {}. Score not saved.", secret),
        };
        let saved = Paragraph::new(saved_text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(saved, chunks[1]);

        let help = Paragraph::new("Enter / n: Play Again | Esc: New Player | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                info!("Playing again");
                ScreenAction::PlayAgain
            }
            KeyCode::Esc => ScreenAction::BackToNameEntry,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
