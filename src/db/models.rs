//! Database models for recorded scores.

use chrono::{DateTime, SecondsFormat, Utc};
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{DbError, schema};

/// A completed game as stored in the `scores` table.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters, Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::scores)]
pub struct ScoreEntry {
    id: i32,
    name: String,
    attempts: i32,
    timestamp: String,
}

impl ScoreEntry {
    /// Parses the stored ISO-8601 timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored text is not an RFC 3339 instant.
    #[instrument(skip(self), fields(id = self.id, timestamp = %self.timestamp))]
    pub fn recorded_at(&self) -> Result<DateTime<Utc>, DbError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| DbError::new(format!("Invalid timestamp '{}': {}", self.timestamp, e)))
    }

    /// Date of the game as `MM/DD/YYYY`, or the raw text if it does not parse.
    pub fn display_date(&self) -> String {
        self.recorded_at()
            .map(|t| t.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}

/// Insertable score row.
///
/// The id is left to SQLite, which assigns it on insert.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::scores)]
pub struct NewScore {
    name: String,
    attempts: i32,
    timestamp: String,
}

impl NewScore {
    /// Builds a row stamped with the current instant.
    pub fn now(name: String, attempts: i32) -> Self {
        Self::new(name, attempts, iso_timestamp(Utc::now()))
    }
}

/// Formats an instant the way scores store it: `2024-05-01T12:00:00.000Z`.
pub(crate) fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
