//! Score recording business logic layer.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::{DbError, Leaderboard, ScoreEntry, ScoreRepository, ScoreStore};

/// Outcome of [`ScoreService::record_and_refresh`].
#[derive(Debug, Clone)]
pub struct RecordedScore {
    /// The entry as stored, with its assigned id and timestamp.
    pub entry: ScoreEntry,
    /// Leaderboard read after the write completed.
    pub leaderboard: Result<Leaderboard, DbError>,
}

/// Service layer over a [`ScoreStore`].
///
/// Constructed once per process and handed to whoever records scores.
/// When the store could not be opened the service runs unavailable: every
/// call fails fast with the original open error and nothing is written.
#[derive(Debug, Clone)]
pub struct ScoreService {
    store: Result<Arc<dyn ScoreStore>, DbError>,
}

impl ScoreService {
    /// Opens the SQLite store at `db_path`.
    ///
    /// Never fails: an open error is logged and the service starts
    /// unavailable, so a game can still be played without persistence.
    #[instrument]
    pub fn open(db_path: &str) -> Self {
        match ScoreRepository::open(db_path.to_string()) {
            Ok(repo) => Self::with_store(Arc::new(repo)),
            Err(e) => {
                error!(error = %e, path = %db_path, "Score store unavailable; scores will not be saved");
                Self::unavailable(e)
            }
        }
    }

    /// Creates a service backed by `store`.
    #[instrument(skip(store))]
    pub fn with_store(store: Arc<dyn ScoreStore>) -> Self {
        info!("Creating ScoreService");
        Self { store: Ok(store) }
    }

    /// Creates a service that reports `reason` for every call.
    pub fn unavailable(reason: DbError) -> Self {
        Self { store: Err(reason) }
    }

    /// True when scores can be written.
    pub fn is_available(&self) -> bool {
        self.store.is_ok()
    }

    fn store(&self) -> Result<&Arc<dyn ScoreStore>, DbError> {
        self.store.as_ref().map_err(Clone::clone)
    }

    /// Records a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the store is unavailable or the write fails.
    #[instrument(skip(self))]
    pub async fn record(&self, name: &str, attempts: u32) -> Result<ScoreEntry, DbError> {
        let store = self.store()?;
        debug!("Recording score");
        store.persist(name, attempts).await
    }

    /// Returns every recorded score in store order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the store is unavailable or the read fails.
    #[instrument(skip(self))]
    pub async fn scores(&self) -> Result<Vec<ScoreEntry>, DbError> {
        self.store()?.list_all().await
    }

    /// Returns the current leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the store is unavailable or the read fails.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<Leaderboard, DbError> {
        self.scores().await.map(Leaderboard::from_entries)
    }

    /// Records a finished game, then reloads the leaderboard.
    ///
    /// The reload is issued only after the write has completed, so the
    /// returned leaderboard always contains the new entry. A failed write
    /// skips the reload.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the store is unavailable or the write fails.
    /// A failed reload is reported inside [`RecordedScore::leaderboard`].
    #[instrument(skip(self))]
    pub async fn record_and_refresh(
        &self,
        name: &str,
        attempts: u32,
    ) -> Result<RecordedScore, DbError> {
        let entry = self.record(name, attempts).await?;
        let leaderboard = self.leaderboard().await;
        if let Err(e) = &leaderboard {
            warn!(error = %e, score_id = entry.id(), "Score saved but leaderboard reload failed");
        }
        Ok(RecordedScore { entry, leaderboard })
    }
}
