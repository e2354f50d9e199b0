//! Command-line interface for strictly_guess.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strictly Guess - find the secret four-digit number
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Terminal number guessing game with a persistent score history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, default_value = "strictly_guess.toml")]
    pub config: PathBuf,

    /// Database file, overriding the config (created if it doesn't exist)
    #[arg(long)]
    pub db_path: Option<String>,

    /// Subcommand to run; plays the game when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the game in the terminal
    Play,

    /// Print the recorded scores, best first
    Scores {
        /// Maximum number of rows (defaults to the configured leaderboard size)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::parse_from(["strictly_guess"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("strictly_guess.toml"));
        assert!(cli.db_path.is_none());
    }

    #[test]
    fn test_scores_flags() {
        let cli = Cli::parse_from([
            "strictly_guess",
            "--db-path",
            "other.db",
            "scores",
            "--limit",
            "3",
            "--json",
        ]);
        assert_eq!(cli.db_path.as_deref(), Some("other.db"));
        assert_eq!(
            cli.command,
            Some(Command::Scores {
                limit: Some(3),
                json: true
            })
        );
    }
}
