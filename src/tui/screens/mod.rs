//! Screen implementations for the terminal game.

mod finished;
mod name_entry;
mod playing;

pub use finished::FinishedScreen;
pub use name_entry::NameEntryScreen;
pub use playing::PlayingScreen;
