//! Game session state machine.
//!
//! ```text
//!   Idle ──start──▶ Playing ──winning guess──▶ Finished
//!                    ▲   │                        │
//!                    └───┴──────── start ─────────┘
//! ```
//!
//! A round only exists once the session has left `Idle`, and the secret,
//! player name, and history all live inside it. A session that is not
//! playing therefore has nothing a guess could be applied to.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, instrument, warn};

use super::code::SecretCode;
use super::error::GameError;
use super::feedback::GuessRecord;
use super::guess::Guess;
use super::invariants::assert_invariants;

/// Lifecycle phase of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    Idle,
    /// Waiting for guesses.
    Playing,
    /// The secret was found.
    Finished,
}

/// State of one play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) player: String,
    pub(super) secret: SecretCode,
    pub(super) history: Vec<GuessRecord>,
    pub(super) attempts: u32,
}

impl Round {
    /// Player who started the round.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The secret code of this round.
    pub fn secret(&self) -> &SecretCode {
        &self.secret
    }

    /// Accepted guesses in submission order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of accepted guesses.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Playing(Round),
    Finished(Round),
}

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The guess was wrong; the session keeps playing.
    InProgress(GuessRecord),
    /// The guess matched the secret and the session is now finished.
    Solved {
        /// Record of the winning guess.
        record: GuessRecord,
        /// Total accepted guesses including the winning one.
        attempts: u32,
    },
}

impl TurnResult {
    /// The record appended for this guess.
    pub fn record(&self) -> &GuessRecord {
        match self {
            Self::InProgress(record) | Self::Solved { record, .. } => record,
        }
    }

    /// True if the guess finished the game.
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One player's game, from name entry to the winning guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    state: State,
}

impl GameSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new round with a freshly generated secret.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidName`] if `name` is blank.
    pub fn start(&mut self, name: &str) -> Result<(), GameError> {
        self.start_with_rng(name, &mut rand::rng())
    }

    /// Starts a new round drawing the secret from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidName`] if `name` is blank.
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<(), GameError> {
        // Validate before drawing so a rejected name leaves the RNG untouched.
        validate_name(name)?;
        self.start_with_secret(name, SecretCode::generate(rng))
    }

    /// Starts a new round with a known secret.
    ///
    /// Any round in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidName`] if `name` is blank.
    #[instrument(skip(self, secret), fields(previous = %self.phase()))]
    pub fn start_with_secret(&mut self, name: &str, secret: SecretCode) -> Result<(), GameError> {
        let player = validate_name(name)?;

        if let State::Playing(round) = &self.state {
            debug!(
                player = %round.player,
                attempts = round.attempts,
                "Discarding unfinished round"
            );
        }

        self.state = State::Playing(Round {
            player: player.to_string(),
            secret,
            history: Vec::new(),
            attempts: 0,
        });
        info!(player = %player, "Round started");

        assert_invariants(self);
        Ok(())
    }

    /// Validates `text`, evaluates it and records the result.
    ///
    /// Rejected guesses leave the session unchanged and do not count as an
    /// attempt.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotPlaying`] outside the playing phase.
    /// - [`GameError::InvalidGuess`] if `text` is not four distinct digits.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn submit_guess(&mut self, text: &str) -> Result<TurnResult, GameError> {
        let phase = self.phase();
        let State::Playing(round) = &mut self.state else {
            warn!("Guess submitted outside a round");
            return Err(GameError::NotPlaying(phase));
        };

        let guess = Guess::parse(text).inspect_err(|e| debug!(error = %e, "Guess rejected"))?;
        let record = GuessRecord::new(&round.secret, guess);
        round.history.push(record);
        round.attempts += 1;
        let attempts = round.attempts;

        debug!(
            guess = %guess,
            feedback = %record.feedback(),
            attempts,
            "Guess recorded"
        );

        let result = if record.feedback().is_solved() {
            if let State::Playing(round) = std::mem::take(&mut self.state) {
                info!(player = %round.player, attempts, "Secret found");
                self.state = State::Finished(round);
            }
            TurnResult::Solved { record, attempts }
        } else {
            TurnResult::InProgress(record)
        };

        assert_invariants(self);
        Ok(result)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Playing(_) => Phase::Playing,
            State::Finished(_) => Phase::Finished,
        }
    }

    /// The current round, if one was started.
    pub fn round(&self) -> Option<&Round> {
        match &self.state {
            State::Idle => None,
            State::Playing(round) | State::Finished(round) => Some(round),
        }
    }

    /// Name of the current player.
    pub fn player(&self) -> Option<&str> {
        self.round().map(Round::player)
    }

    /// Accepted guesses of the current round; empty when idle.
    pub fn history(&self) -> &[GuessRecord] {
        self.round().map(Round::history).unwrap_or_default()
    }

    /// Accepted guesses so far; zero when idle.
    pub fn attempts(&self) -> u32 {
        self.round().map(Round::attempts).unwrap_or(0)
    }

    /// The most recent accepted guess.
    pub fn last_record(&self) -> Option<&GuessRecord> {
        self.history().last()
    }

    /// The secret, revealed only once the round is finished.
    pub fn revealed_secret(&self) -> Option<&SecretCode> {
        match &self.state {
            State::Finished(round) => Some(&round.secret),
            _ => None,
        }
    }
}

#[cfg(test)]
impl GameSession {
    /// Builds a session around an arbitrary round, bypassing every check.
    pub(super) fn from_round(phase: Phase, round: Round) -> Self {
        let state = match phase {
            Phase::Idle => State::Idle,
            Phase::Playing => State::Playing(round),
            Phase::Finished => State::Finished(round),
        };
        Self { state }
    }
}

fn validate_name(name: &str) -> Result<&str, GameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        debug!("Rejecting blank player name");
        return Err(GameError::InvalidName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> SecretCode {
        s.parse().expect("valid code")
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.attempts(), 0);
        assert!(session.history().is_empty());
        assert!(session.player().is_none());
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut session = GameSession::new();
        session
            .start_with_secret("  Ann ", code("1234"))
            .expect("start");
        assert_eq!(session.player(), Some("Ann"));
    }

    #[test]
    fn test_secret_hidden_while_playing() {
        let mut session = GameSession::new();
        session.start_with_secret("Ann", code("1234")).expect("start");
        assert!(session.revealed_secret().is_none());
        session.submit_guess("1234").expect("guess");
        assert_eq!(session.revealed_secret(), Some(&code("1234")));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Playing.to_string(), "playing");
        assert_eq!(Phase::Finished.to_string(), "finished");
    }
}
