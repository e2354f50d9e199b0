//! Strictly Guess library - a type-safe number guessing game
//!
//! The player names themselves, the game picks a secret of four distinct
//! digits, and every guess is answered with per-position feedback until the
//! secret is found. Finished games are recorded in a SQLite score history.
//!
//! # Architecture
//!
//! - **Game**: secret generation, feedback evaluation, session state machine
//! - **Db**: durable `scores` table (Diesel + SQLite) behind an async store trait
//! - **Leaderboard**: derived best-first view over the score history
//! - **ScoreService**: explicitly constructed store handle with degraded mode
//! - **Engine**: the facade a frontend drives
//! - **Tui**: terminal frontend
//!
//! # Example
//!
//! ```no_run
//! use strictly_guess::{GuessOutcome, GuessingGame, ScoreService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut game = GuessingGame::new(ScoreService::open("scores.db"));
//! game.load_scores().await?;
//!
//! game.start_game("Ann")?;
//! match game.submit_guess("1234").await? {
//!     GuessOutcome::Continue(record) => println!("{}", record.feedback()),
//!     GuessOutcome::Solved { attempts, .. } => println!("solved in {attempts}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod engine;
mod game;
mod leaderboard;
mod score_service;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Score persistence
pub use db::{DbError, NewScore, ScoreEntry, ScoreRepository, ScoreStore};
pub use leaderboard::{Leaderboard, best_of};
pub use score_service::{RecordedScore, ScoreService};

// Crate-level exports - Game rules
pub use game::{
    AttemptsMatchHistory, CODE_LENGTH, Feedback, FeedbackMarker, FinishedOnlyWhenSolved,
    GameError, GameSession, Guess, GuessError, GuessRecord, HistoryWellFormed, Invariant,
    InvariantSet, InvariantViolation, Phase, Round, SecretCode, SessionInvariants, TurnResult,
    evaluate,
};

// Crate-level exports - Frontend facade
pub use engine::{GuessOutcome, GuessingGame};

// Crate-level exports - Terminal frontend
pub use tui::run_tui;
