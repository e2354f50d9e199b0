//! Core rules of the guessing game: code generation, feedback, and the
//! session state machine.

mod code;
mod error;
mod feedback;
mod guess;
mod invariants;
mod session;

pub use code::{CODE_LENGTH, SecretCode};
pub use error::GameError;
pub use feedback::{Feedback, FeedbackMarker, GuessRecord, evaluate};
pub use guess::{Guess, GuessError};
pub use invariants::{
    AttemptsMatchHistory, FinishedOnlyWhenSolved, HistoryWellFormed, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants,
};
pub use session::{GameSession, Phase, Round, TurnResult};
