//! Guess parsing and validation.
//!
//! A guess is only accepted when its shape matches a secret code: exactly
//! four ASCII digits, none repeated. Everything downstream of [`Guess`]
//! relies on that, so the check happens once, here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::code::CODE_LENGTH;

/// Why a guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The input does not have exactly four characters.
    #[display("Guess must have exactly {} digits, got {}", CODE_LENGTH, _0)]
    WrongLength(usize),

    /// The input contains a character that is not a decimal digit.
    #[display("'{}' is not a digit", _0)]
    NotADigit(char),

    /// A digit occurs more than once.
    #[display("Digit '{}' is repeated", _0)]
    RepeatedDigit(char),

    /// A numeric digit value is outside `0..=9`.
    #[display("{} is not a single digit", _0)]
    DigitOutOfRange(u8),
}

impl std::error::Error for GuessError {}

/// Parses four distinct digits from `text`.
///
/// Surrounding whitespace is ignored.
#[instrument(skip(text), fields(len = text.len()))]
pub(crate) fn parse_digits(text: &str) -> Result<[u8; CODE_LENGTH], GuessError> {
    let text = text.trim();
    let len = text.chars().count();
    if len != CODE_LENGTH {
        return Err(GuessError::WrongLength(len));
    }

    let mut digits = [0u8; CODE_LENGTH];
    for (i, c) in text.chars().enumerate() {
        let d = c.to_digit(10).ok_or(GuessError::NotADigit(c))? as u8;
        if digits[..i].contains(&d) {
            return Err(GuessError::RepeatedDigit(c));
        }
        digits[i] = d;
    }
    Ok(digits)
}

/// A validated guess: four distinct digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    digits: [u8; CODE_LENGTH],
}

impl Guess {
    /// Parses and validates raw input.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        parse_digits(text).map(|digits| Self { digits })
    }

    /// Returns the digits in position order.
    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_four_distinct_digits() {
        let guess = Guess::parse("9071").expect("valid guess");
        assert_eq!(guess.digits(), &[9, 0, 7, 1]);
        assert_eq!(guess.to_string(), "9071");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert!(Guess::parse("  1234\n").is_ok());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(Guess::parse("123"), Err(GuessError::WrongLength(3)));
        assert_eq!(Guess::parse("12345"), Err(GuessError::WrongLength(5)));
        assert_eq!(Guess::parse(""), Err(GuessError::WrongLength(0)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert_eq!(Guess::parse("12é4"), Err(GuessError::NotADigit('é')));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(Guess::parse("12a4"), Err(GuessError::NotADigit('a')));
    }

    #[test]
    fn test_rejects_repeated_digits() {
        assert_eq!(Guess::parse("1213"), Err(GuessError::RepeatedDigit('1')));
    }
}
