//! The game as seen by a frontend.
//!
//! [`GuessingGame`] owns the live session and the score service, and keeps a
//! cached leaderboard that is refreshed whenever a recorded score lands.
//! Frontends call [`GuessingGame::start_game`] and
//! [`GuessingGame::submit_guess`] and re-render from the read-only
//! accessors afterwards.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::{
    GameError, GameSession, GuessRecord, Leaderboard, Phase, ScoreEntry, ScoreService, SecretCode,
    TurnResult,
};

/// Result of a guess accepted by [`GuessingGame::submit_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong guess; keep playing.
    Continue(GuessRecord),
    /// The secret was found.
    Solved {
        /// Record of the winning guess.
        record: GuessRecord,
        /// Attempts it took, including the winning guess.
        attempts: u32,
        /// The stored score, or `None` if it could not be saved.
        score: Option<ScoreEntry>,
    },
}

impl GuessOutcome {
    /// The record appended for this guess.
    pub fn record(&self) -> &GuessRecord {
        match self {
            Self::Continue(record) | Self::Solved { record, .. } => record,
        }
    }
}

/// Game facade combining one session with the score history.
#[derive(Debug, Getters)]
pub struct GuessingGame {
    /// The live session.
    session: GameSession,
    /// Store used to record finished games.
    score_service: ScoreService,
    /// Leaderboard as of the last successful read.
    leaderboard: Leaderboard,
    /// Last store problem, kept so a frontend can show it.
    store_warning: Option<String>,
}

impl GuessingGame {
    /// Creates a game with an idle session.
    ///
    /// The leaderboard starts empty; call [`GuessingGame::load_scores`] to
    /// fill it.
    #[instrument(skip(score_service), fields(store_available = score_service.is_available()))]
    pub fn new(score_service: ScoreService) -> Self {
        let store_warning = (!score_service.is_available())
            .then(|| "Score store unavailable; scores will not be saved".to_string());
        Self {
            session: GameSession::new(),
            score_service,
            leaderboard: Leaderboard::default(),
            store_warning,
        }
    }

    /// Reloads the leaderboard from the store.
    ///
    /// Does nothing when the store is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StoreUnavailable`] if the read fails. The cached
    /// leaderboard is kept in that case.
    #[instrument(skip(self))]
    pub async fn load_scores(&mut self) -> Result<(), GameError> {
        if !self.score_service.is_available() {
            debug!("Skipping score reload; store unavailable");
            return Ok(());
        }
        match self.score_service.leaderboard().await {
            Ok(board) => {
                debug!(count = board.len(), "Leaderboard refreshed");
                self.leaderboard = board;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load scores");
                self.store_warning = Some(format!("Could not load scores: {}", e.message));
                Err(GameError::StoreUnavailable(e))
            }
        }
    }

    /// Starts a new game for `name`, discarding any game in progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidName`] if `name` is blank.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name: &str) -> Result<(), GameError> {
        self.session.start(name)
    }

    /// Starts a new game with a known secret.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidName`] if `name` is blank.
    #[instrument(skip(self, secret))]
    pub fn start_game_with_secret(
        &mut self,
        name: &str,
        secret: SecretCode,
    ) -> Result<(), GameError> {
        self.session.start_with_secret(name, secret)
    }

    /// Submits a guess for the current game.
    ///
    /// A winning guess records the score and, once that write completes,
    /// reloads the leaderboard. Store failures are logged and kept in
    /// [`GuessingGame::store_warning`]; they never fail the guess.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotPlaying`] if no game is in progress.
    /// - [`GameError::InvalidGuess`] if `text` is not four distinct digits.
    #[instrument(skip(self))]
    pub async fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        match self.session.submit_guess(text)? {
            TurnResult::InProgress(record) => Ok(GuessOutcome::Continue(record)),
            TurnResult::Solved { record, attempts } => {
                let score = self.record_score(attempts).await;
                Ok(GuessOutcome::Solved {
                    record,
                    attempts,
                    score,
                })
            }
        }
    }

    /// Persists the finished game and refreshes the leaderboard.
    async fn record_score(&mut self, attempts: u32) -> Option<ScoreEntry> {
        let Some(name) = self.session.player().map(str::to_string) else {
            warn!("Finished session has no player");
            return None;
        };

        if !self.score_service.is_available() {
            debug!(name = %name, attempts, "Store unavailable; score not recorded");
            return None;
        }

        match self.score_service.record_and_refresh(&name, attempts).await {
            Ok(recorded) => {
                info!(score_id = recorded.entry.id(), name = %name, attempts, "Score saved");
                match recorded.leaderboard {
                    Ok(board) => {
                        self.leaderboard = board;
                        self.store_warning = None;
                    }
                    Err(e) => {
                        self.store_warning =
                            Some(format!("Score saved but scores could not be reloaded: {}", e.message));
                    }
                }
                Some(recorded.entry)
            }
            Err(e) => {
                warn!(error = %e, name = %name, attempts, "Failed to save score");
                self.store_warning = Some(format!("Score not saved: {}", e.message));
                None
            }
        }
    }

    /// Current phase of the session.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Name of the current player, once a game was started.
    pub fn player(&self) -> Option<&str> {
        self.session.player()
    }

    /// Accepted guesses of the current game.
    pub fn history(&self) -> &[GuessRecord] {
        self.session.history()
    }

    /// Accepted guesses so far in the current game.
    pub fn attempts(&self) -> u32 {
        self.session.attempts()
    }

    /// Best recorded score across all players.
    pub fn best_score(&self) -> Option<&ScoreEntry> {
        self.leaderboard.best()
    }

    /// Every recorded score, best first.
    pub fn scores(&self) -> &[ScoreEntry] {
        self.leaderboard.entries()
    }
}
