//! Database repository for recorded scores.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, NewScore, ScoreEntry, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for the `scores` table.
///
/// Holds only the database path; every operation opens its own connection,
/// so the repository is cheap to clone and share across threads. SQLite
/// serializes concurrent writers and assigns ids atomically.
#[derive(Debug, Clone)]
pub struct ScoreRepository {
    db_path: String,
}

impl ScoreRepository {
    /// Opens the database at `db_path`, creating the file and the `scores`
    /// table if they do not exist yet.
    ///
    /// Opening an existing store is a no-op apart from the connection check,
    /// so this is safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Opening score store");
        let repo = Self { db_path };
        let mut conn = repo.connection()?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
        info!(applied = applied.len(), "Score store ready");

        Ok(repo)
    }

    /// Path of the underlying database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path).map_err(|e| {
            DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e))
        })?;
        // Wait for a concurrent writer instead of failing with SQLITE_BUSY.
        diesel::sql_query("PRAGMA busy_timeout = 5000").execute(&mut conn)?;
        Ok(conn)
    }

    /// Appends a new score row and returns it with its assigned id.
    ///
    /// Every call creates a new row, even for a name that already has scores.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the name is empty, `attempts` is below one, or
    /// a database error occurs.
    #[instrument(skip(self))]
    pub fn persist(&self, name: &str, attempts: u32) -> Result<ScoreEntry, DbError> {
        if name.is_empty() {
            return Err(DbError::new("Score name must not be empty"));
        }
        let attempts = i32::try_from(attempts)
            .ok()
            .filter(|a| *a >= 1)
            .ok_or_else(|| DbError::new(format!("Invalid attempt count: {}", attempts)))?;

        debug!("Recording score");
        let mut conn = self.connection()?;
        let row = NewScore::now(name.to_string(), attempts);

        let entry = diesel::insert_into(schema::scores::table)
            .values(&row)
            .returning(ScoreEntry::as_returning())
            .get_result(&mut conn)?;

        info!(
            score_id = entry.id(),
            name = %entry.name(),
            attempts = entry.attempts(),
            "Score recorded"
        );
        Ok(entry)
    }

    /// Loads every stored score in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<ScoreEntry>, DbError> {
        debug!("Listing all scores");
        let mut conn = self.connection()?;

        let scores = schema::scores::table
            .order(schema::scores::id.asc())
            .select(ScoreEntry::as_select())
            .load(&mut conn)?;

        info!(count = scores.len(), "Scores loaded");
        Ok(scores)
    }

    /// Loads every score recorded under `name`, best first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_by_name(&self, name: &str) -> Result<Vec<ScoreEntry>, DbError> {
        debug!("Listing scores for player");
        let mut conn = self.connection()?;

        let scores = schema::scores::table
            .filter(schema::scores::name.eq(name))
            .order((schema::scores::attempts.asc(), schema::scores::id.asc()))
            .select(ScoreEntry::as_select())
            .load(&mut conn)?;

        info!(name = %name, count = scores.len(), "Player scores loaded");
        Ok(scores)
    }
}
