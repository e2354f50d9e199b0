//! Playing screen: guess input and feedback history.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenAction};
use crate::{CODE_LENGTH, FeedbackMarker, GuessRecord, GuessingGame};

/// State for the playing screen.
#[derive(Debug, Default, Getters)]
pub struct PlayingScreen {
    guess_input: String,
    error_message: Option<String>,
}

impl PlayingScreen {
    /// Creates the screen with an empty guess.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing PlayingScreen");
        Self::default()
    }

    /// Shows why the last guess was rejected; the typed text is kept.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clears the input after an accepted guess.
    pub fn accept(&mut self) {
        self.guess_input.clear();
        self.error_message = None;
    }
}

fn marker_color(marker: FeedbackMarker) -> Color {
    match marker {
        FeedbackMarker::Exact => Color::Green,
        FeedbackMarker::Present => Color::Yellow,
        FeedbackMarker::Absent => Color::DarkGray,
    }
}

fn record_line(index: usize, record: &GuessRecord) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:>3}. Guess: ", index + 1))];
    for (digit, marker) in record
        .guess()
        .digits()
        .iter()
        .zip(record.feedback().markers())
    {
        spans.push(Span::styled(
            digit.to_string(),
            Style::default()
                .fg(marker_color(*marker))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::raw(format!(" | Feedback: {}", record.feedback().compact())));
    Line::from(spans)
}

impl Screen for PlayingScreen {
    #[instrument(skip(self, frame, game))]
    fn render(&self, frame: &mut Frame, area: Rect, game: &GuessingGame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let greeting = format!(
            "Hello, {}! Guess the {}-digit number.",
            game.player().unwrap_or("player"),
            CODE_LENGTH
        );
        let title = Paragraph::new(greeting)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(self.guess_input.as_str())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Your guess"));
        frame.render_widget(input, chunks[1]);

        let items: Vec<ListItem> = game
            .history()
            .iter()
            .enumerate()
            .map(|(i, record)| ListItem::new(record_line(i, record)))
            .collect();
        let feedback_title = format!("Feedback (Attempts: {})", game.attempts());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(feedback_title));
        frame.render_widget(list, chunks[2]);

        let legend: Vec<Span> = FeedbackMarker::iter()
            .map(|m| {
                Span::styled(
                    format!(" {} {} ", m.symbol(), m),
                    Style::default().fg(marker_color(m)),
                )
            })
            .collect();
        let legend = Paragraph::new(Line::from(legend))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Legend"));
        frame.render_widget(legend, chunks[3]);

        let (status, style) = match &self.error_message {
            Some(message) => (message.as_str(), Style::default().fg(Color::Red)),
            None => (
                "Enter: Submit Guess | Esc: New Player",
                Style::default().fg(Color::DarkGray),
            ),
        };
        let status = Paragraph::new(status)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Char(c) => {
                self.guess_input.push(c);
                ScreenAction::Stay
            }
            KeyCode::Backspace => {
                self.guess_input.pop();
                ScreenAction::Stay
            }
            KeyCode::Enter => ScreenAction::SubmitGuess {
                text: self.guess_input.clone(),
            },
            KeyCode::Esc => ScreenAction::BackToNameEntry,
            _ => ScreenAction::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(screen: &mut PlayingScreen, code: KeyCode) -> ScreenAction {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_submits_typed_text() {
        let mut screen = PlayingScreen::new();
        for c in "1243".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::SubmitGuess {
                text: "1243".to_string()
            }
        );
    }

    #[test]
    fn test_accept_clears_input_and_error() {
        let mut screen = PlayingScreen::new();
        press(&mut screen, KeyCode::Char('1'));
        screen.set_error("bad");
        screen.accept();
        assert!(screen.guess_input().is_empty());
        assert!(screen.error_message().is_none());
    }

    #[test]
    fn test_record_line_lists_compact_feedback() {
        let secret: crate::SecretCode = "1234".parse().expect("valid code");
        let record = GuessRecord::new(&secret, "1243".parse().expect("valid guess"));
        let line = record_line(0, &record);
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "  1. Guess: 1243 | Feedback: + + - -");
    }
}
