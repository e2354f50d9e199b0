//! Asynchronous access to the score history.

use tracing::instrument;

use crate::db::{DbError, ScoreEntry, ScoreRepository};

/// A durable, append-only score history.
///
/// Operations are futures; a caller that needs to observe its own write
/// must await [`ScoreStore::persist`] before issuing [`ScoreStore::list_all`].
#[async_trait::async_trait]
pub trait ScoreStore: Send + Sync + std::fmt::Debug {
    /// Appends a score and returns the stored entry with its assigned id.
    async fn persist(&self, name: &str, attempts: u32) -> Result<ScoreEntry, DbError>;

    /// Returns every stored score. Order is not part of the contract.
    async fn list_all(&self) -> Result<Vec<ScoreEntry>, DbError>;
}

#[async_trait::async_trait]
impl ScoreStore for ScoreRepository {
    #[instrument(skip(self))]
    async fn persist(&self, name: &str, attempts: u32) -> Result<ScoreEntry, DbError> {
        let repo = self.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || repo.persist(&name, attempts)).await?
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<ScoreEntry>, DbError> {
        let repo = self.clone();
        tokio::task::spawn_blocking(move || repo.list_all()).await?
    }
}
