//! Leaderboard view derived from the score history.
//!
//! Nothing here is persisted: the view is rebuilt from a full scan of the
//! store whenever the scores change.

use serde::Serialize;
use tracing::instrument;

use crate::db::ScoreEntry;

/// Returns the entry with the fewest attempts.
///
/// Ties go to the entry that comes first in `entries`.
pub fn best_of(entries: &[ScoreEntry]) -> Option<&ScoreEntry> {
    // min_by_key keeps the first of equal minima.
    entries.iter().min_by_key(|e| *e.attempts())
}

/// All scores sorted ascending by attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Builds the view from an unordered scan.
    ///
    /// The sort is stable after ordering by id, so equal attempt counts are
    /// listed oldest first.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by_key(|e| (*e.attempts(), *e.id()));
        Self { entries }
    }

    /// The best score, if any game was recorded.
    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    /// Best score recorded under `name`.
    pub fn personal_best(&self, name: &str) -> Option<&ScoreEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Every score, best first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// The `n` best scores.
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of recorded scores.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no score was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
