//! Leaderboard panel shared by every screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::instrument;

use crate::GuessingGame;

/// Renders the best score and the score table into `area`.
#[instrument(skip(frame, game))]
pub fn render_scoreboard(frame: &mut Frame, area: Rect, game: &GuessingGame, rows: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let best_text = match game.best_score() {
        Some(best) => format!("Name: {} | Attempts: {}", best.name(), best.attempts()),
        None => "No games recorded yet".to_string(),
    };
    let best = Paragraph::new(best_text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Best Score"));
    frame.render_widget(best, chunks[0]);

    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Attempts").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let current = game.player();
    let table_rows: Vec<Row> = game
        .leaderboard()
        .top(rows)
        .iter()
        .map(|entry| {
            let style = if Some(entry.name().as_str()) == current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(entry.id().to_string()),
                Cell::from(entry.name().as_str()),
                Cell::from(entry.attempts().to_string()),
                Cell::from(entry.display_date()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(40),
        Constraint::Length(9),
        Constraint::Length(11),
    ];

    let title = format!("All Players ({} of {})", table_rows.len(), game.leaderboard().len());
    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, chunks[1]);
}

/// Splits the frame into the game area and the scoreboard area.
pub fn split_main(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (columns[0], columns[1])
}
