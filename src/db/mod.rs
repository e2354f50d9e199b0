//! Durable score history backed by SQLite.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::DbError;
pub use models::{NewScore, ScoreEntry};
pub use repository::ScoreRepository;
pub use store::ScoreStore;
