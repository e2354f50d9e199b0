//! Errors surfaced to whoever drives a game.

use derive_more::{Display, From};

use super::guess::GuessError;
use super::session::Phase;
use crate::db::DbError;

/// Every failure the game reports to its caller.
///
/// None of these are fatal. An invalid guess or name leaves the session
/// untouched, and a store failure only means the score was not recorded.
#[derive(Debug, Clone, Display, From)]
pub enum GameError {
    /// The guess text failed the shape or uniqueness check.
    #[display("Invalid guess: {}", _0)]
    #[from]
    InvalidGuess(GuessError),

    /// The player name is empty.
    #[display("Player name must not be empty")]
    InvalidName,

    /// A guess was submitted outside the playing phase.
    #[display("No game in progress (phase: {})", _0)]
    NotPlaying(Phase),

    /// The score store could not be opened or a transaction failed.
    #[display("Score store unavailable: {}", _0)]
    #[from]
    StoreUnavailable(DbError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::StoreUnavailable(e) => Some(e),
            Self::InvalidName | Self::NotPlaying(_) => None,
        }
    }
}
