//! Positional feedback for a guess.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::instrument;

use super::code::{CODE_LENGTH, SecretCode};
use super::guess::Guess;

/// Classification of one guessed digit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FeedbackMarker {
    /// Right digit, right position.
    Exact,
    /// Digit occurs in the secret at another position.
    Present,
    /// Digit does not occur in the secret.
    Absent,
}

impl FeedbackMarker {
    /// Single-character symbol used when rendering feedback.
    pub fn symbol(self) -> char {
        match self {
            Self::Exact => '+',
            Self::Present => '-',
            Self::Absent => '.',
        }
    }
}

/// Markers for all four positions of a guess, in position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    markers: [FeedbackMarker; CODE_LENGTH],
}

impl Feedback {
    /// Returns the markers in position order.
    pub fn markers(&self) -> &[FeedbackMarker; CODE_LENGTH] {
        &self.markers
    }

    /// Number of `Exact` markers.
    pub fn exact_count(&self) -> usize {
        self.count(FeedbackMarker::Exact)
    }

    /// Number of `Present` markers.
    pub fn present_count(&self) -> usize {
        self.count(FeedbackMarker::Present)
    }

    /// True when every position is `Exact`.
    pub fn is_solved(&self) -> bool {
        self.exact_count() == CODE_LENGTH
    }

    /// Symbols of the non-absent positions only, space separated.
    ///
    /// `1243` against `1234` renders as `+ + - -`; a guess sharing no digit
    /// with the secret renders as an empty string.
    pub fn compact(&self) -> String {
        self.markers
            .iter()
            .filter(|m| **m != FeedbackMarker::Absent)
            .map(|m| m.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn count(&self, marker: FeedbackMarker) -> usize {
        self.markers.iter().filter(|m| **m == marker).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.markers {
            write!(f, "{}", m.symbol())?;
        }
        Ok(())
    }
}

/// Compares `guess` against `secret`.
///
/// Both sides hold distinct digits, so a plain membership test is exact:
/// no digit can be counted twice.
#[instrument(skip_all, fields(guess = %guess))]
pub fn evaluate(secret: &SecretCode, guess: &Guess) -> Feedback {
    let mut markers = [FeedbackMarker::Absent; CODE_LENGTH];
    for (i, &digit) in guess.digits().iter().enumerate() {
        markers[i] = if secret.digits()[i] == digit {
            FeedbackMarker::Exact
        } else if secret.contains(digit) {
            FeedbackMarker::Present
        } else {
            FeedbackMarker::Absent
        };
    }
    Feedback { markers }
}

/// One accepted guess together with its feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    guess: Guess,
    feedback: Feedback,
}

impl GuessRecord {
    /// Evaluates `guess` against `secret` and pairs the result with it.
    pub fn new(secret: &SecretCode, guess: Guess) -> Self {
        Self {
            guess,
            feedback: evaluate(secret, &guess),
        }
    }

    /// The guess that was submitted.
    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Feedback computed for the guess.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use FeedbackMarker::{Absent, Exact, Present};

    fn code(s: &str) -> SecretCode {
        s.parse().expect("valid code")
    }

    fn guess(s: &str) -> Guess {
        Guess::parse(s).expect("valid guess")
    }

    #[test]
    fn test_swapped_tail_is_present() {
        let fb = evaluate(&code("1234"), &guess("1243"));
        assert_eq!(fb.markers(), &[Exact, Exact, Present, Present]);
        assert_eq!(fb.compact(), "+ + - -");
    }

    #[test]
    fn test_exact_match_is_solved() {
        let fb = evaluate(&code("5073"), &guess("5073"));
        assert_eq!(fb.markers(), &[Exact; CODE_LENGTH]);
        assert!(fb.is_solved());
        assert_eq!(fb.to_string(), "++++");
    }

    #[test]
    fn test_disjoint_digits_are_absent() {
        let fb = evaluate(&code("1234"), &guess("5678"));
        assert_eq!(fb.markers(), &[Absent; CODE_LENGTH]);
        assert_eq!(fb.compact(), "");
    }

    #[test]
    fn test_mixed_markers() {
        let fb = evaluate(&code("0913"), &guess("3910"));
        assert_eq!(fb.markers(), &[Present, Exact, Exact, Present]);
        assert_eq!(fb.exact_count(), 2);
        assert_eq!(fb.present_count(), 2);
        assert_eq!(fb.to_string(), "-++-");
    }

    #[test]
    fn test_markers_match_position_and_membership_rule() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let secret = SecretCode::generate(&mut rng);
            let g = SecretCode::generate(&mut rng);
            let g = guess(&g.to_string());
            let fb = evaluate(&secret, &g);

            for (i, marker) in fb.markers().iter().enumerate() {
                let digit = g.digits()[i];
                let expected = if secret.digits()[i] == digit {
                    Exact
                } else if secret.contains(digit) {
                    Present
                } else {
                    Absent
                };
                assert_eq!(*marker, expected);
            }

            let shared = g.digits().iter().filter(|d| secret.contains(**d)).count();
            assert_eq!(fb.exact_count() + fb.present_count(), shared);
            assert!(shared <= CODE_LENGTH);
            assert_eq!(fb, evaluate(&secret, &g));
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Exact.symbol(), '+');
        assert_eq!(Present.symbol(), '-');
        assert_eq!(Absent.symbol(), '.');
    }
}
