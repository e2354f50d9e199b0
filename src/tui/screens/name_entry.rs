//! Name entry screen: the player types a name to start a game.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::GuessingGame;
use crate::tui::screen::{Screen, ScreenAction};

/// State for the name entry screen.
#[derive(Debug, Default, Getters)]
pub struct NameEntryScreen {
    name_input: String,
    error_message: Option<String>,
}

impl NameEntryScreen {
    /// Creates the screen with `name` already typed in.
    #[instrument]
    pub fn new(name: Option<&str>) -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            name_input: name.unwrap_or_default().to_string(),
            error_message: None,
        }
    }

    /// Shows an error below the input.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    fn can_start(&self) -> bool {
        !self.name_input.trim().is_empty()
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, _game))]
    fn render(&self, frame: &mut Frame, area: Rect, _game: &GuessingGame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Guessing Number Game")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(self.name_input.as_str())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Enter your name"));
        frame.render_widget(input, chunks[1]);

        let error = Paragraph::new(self.error_message.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, chunks[2]);

        let (help_text, help_style) = if self.can_start() {
            ("Enter: Start Game | Esc: Quit", Style::default().fg(Color::Gray))
        } else {
            ("Type a name to start | Esc: Quit", Style::default().fg(Color::DarkGray))
        };
        let help = Paragraph::new(help_text)
            .style(help_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Char(c) => {
                self.name_input.push(c);
                self.error_message = None;
                ScreenAction::Stay
            }
            KeyCode::Backspace => {
                self.name_input.pop();
                ScreenAction::Stay
            }
            // Start stays disabled until a name is typed.
            KeyCode::Enter if self.can_start() => ScreenAction::StartGame {
                name: self.name_input.clone(),
            },
            KeyCode::Enter => {
                self.error_message = Some("Enter your name to start".to_string());
                ScreenAction::Stay
            }
            KeyCode::Esc => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
