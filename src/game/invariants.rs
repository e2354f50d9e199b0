//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every session
//! transition. They are checked in debug builds and can be tested
//! independently.

use tracing::{instrument, warn};

use super::code::CODE_LENGTH;
use super::feedback::evaluate;
use super::session::{GameSession, Phase};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Attempt counter equals the number of recorded guesses.
pub struct AttemptsMatchHistory;

impl Invariant<GameSession> for AttemptsMatchHistory {
    fn holds(session: &GameSession) -> bool {
        session.attempts() as usize == session.history().len()
    }

    fn description() -> &'static str {
        "Attempt count equals history length"
    }
}

/// Every recorded guess has distinct digits, and its feedback is what the
/// evaluator gives for the round's secret.
pub struct HistoryWellFormed;

impl Invariant<GameSession> for HistoryWellFormed {
    fn holds(session: &GameSession) -> bool {
        let Some(round) = session.round() else {
            return true;
        };
        round.history().iter().all(|record| {
            let d = record.guess().digits();
            let distinct = (0..CODE_LENGTH).all(|i| !d[..i].contains(&d[i]));
            distinct && *record.feedback() == evaluate(round.secret(), record.guess())
        })
    }

    fn description() -> &'static str {
        "Recorded guesses have distinct digits and matching feedback"
    }
}

/// Only the last guess of a finished round is solved.
///
/// This is what makes a score entry at most once per session: a round
/// reaches `Finished` exactly on its winning guess and accepts nothing after.
pub struct FinishedOnlyWhenSolved;

impl Invariant<GameSession> for FinishedOnlyWhenSolved {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let solved = history
            .iter()
            .map(|r| r.feedback().is_solved())
            .collect::<Vec<_>>();
        let earlier_solved = solved.iter().rev().skip(1).any(|s| *s);
        let last_solved = solved.last().copied().unwrap_or(false);

        !earlier_solved && (session.phase() == Phase::Finished) == last_solved
    }

    fn description() -> &'static str {
        "Round is finished exactly when its last guess is solved"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (AttemptsMatchHistory, HistoryWellFormed, FinishedOnlyWhenSolved);

/// Asserts that all session invariants hold (panic on violation in debug builds).
#[instrument(skip(session))]
pub fn assert_invariants(session: &GameSession) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(session)
    {
        for v in &violations {
            warn!(description = %v.description, "Session invariant violated");
        }
        panic!("Session invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::code::SecretCode;
    use crate::game::feedback::GuessRecord;
    use crate::game::guess::Guess;
    use crate::game::session::Round;

    fn record(secret: &SecretCode, text: &str) -> GuessRecord {
        GuessRecord::new(secret, Guess::parse(text).expect("valid guess"))
    }

    fn round(history: Vec<GuessRecord>, attempts: u32) -> Round {
        Round {
            player: "Ann".to_string(),
            secret: "1234".parse().expect("valid code"),
            history,
            attempts,
        }
    }

    #[test]
    fn test_invariant_set_holds_for_idle_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_during_play() {
        let mut session = GameSession::new();
        session
            .start_with_secret("Ann", "1234".parse().expect("valid code"))
            .expect("start");
        session.submit_guess("5678").expect("guess");
        session.submit_guess("1243").expect("guess");
        assert!(SessionInvariants::check_all(&session).is_ok());
        session.submit_guess("1234").expect("guess");
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_detects_attempt_drift() {
        let secret: SecretCode = "1234".parse().expect("valid code");
        let session =
            GameSession::from_round(Phase::Playing, round(vec![record(&secret, "5678")], 3));
        assert!(!AttemptsMatchHistory::holds(&session));
        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_detects_playing_after_solve() {
        let secret: SecretCode = "1234".parse().expect("valid code");
        let session =
            GameSession::from_round(Phase::Playing, round(vec![record(&secret, "1234")], 1));
        assert!(!FinishedOnlyWhenSolved::holds(&session));
    }

    #[test]
    fn test_detects_finished_without_solve() {
        let secret: SecretCode = "1234".parse().expect("valid code");
        let session =
            GameSession::from_round(Phase::Finished, round(vec![record(&secret, "4321")], 1));
        assert!(!FinishedOnlyWhenSolved::holds(&session));
    }

    #[test]
    fn test_detects_feedback_for_another_secret() {
        let other: SecretCode = "5678".parse().expect("valid code");
        let session =
            GameSession::from_round(Phase::Playing, round(vec![record(&other, "1243")], 1));
        assert!(!HistoryWellFormed::holds(&session));
    }
}
