//! Screen trait and action type for the terminal game.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::GuessingGame;

/// What a screen asks the controller to do after a key press.
///
/// Screens never touch the game directly; the controller applies the action
/// and picks the next screen from the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen without a state change.
    Stay,
    /// Start a game for the given player name.
    StartGame {
        /// Name as typed.
        name: String,
    },
    /// Submit a guess for the running game.
    SubmitGuess {
        /// Guess text as typed.
        text: String,
    },
    /// Start another game for the same player.
    PlayAgain,
    /// Drop the current game and go back to name entry.
    BackToNameEntry,
    /// Exit the game cleanly.
    Quit,
}

/// Trait implemented by each screen of the terminal game.
pub trait Screen {
    /// Renders the screen into `area` of the provided [`Frame`].
    ///
    /// The scoreboard and status line are drawn by the controller.
    fn render(&self, frame: &mut Frame, area: Rect, game: &GuessingGame);

    /// Handles a key event and returns the resulting [`ScreenAction`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction;
}
