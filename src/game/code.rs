//! Secret code generation.
//!
//! A secret code is a sequence of four distinct decimal digits. It is a
//! digit sequence, not a number, so a leading zero is a valid code.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::guess::{GuessError, parse_digits};

/// Number of digits in a secret code and in every guess.
pub const CODE_LENGTH: usize = 4;

/// The hidden target of one game.
///
/// Always holds [`CODE_LENGTH`] distinct digits in `0..=9`. The only ways to
/// build one are [`SecretCode::generate`] and the validating constructors, so
/// the invariant holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretCode {
    digits: [u8; CODE_LENGTH],
}

impl SecretCode {
    /// Generates a code by rejection sampling.
    ///
    /// Each digit is drawn uniformly from `0..=9` and redrawn while it is
    /// already part of the code.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        let mut filled = 0;
        let mut draws = 0u32;

        while filled < CODE_LENGTH {
            let digit: u8 = rng.random_range(0..10);
            draws += 1;
            if !digits[..filled].contains(&digit) {
                digits[filled] = digit;
                filled += 1;
            }
        }

        debug!(draws, "Secret code generated");
        Self { digits }
    }

    /// Generates a code from the thread-local RNG.
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Builds a code from explicit digits.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] if a value is not a single digit or a digit repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, GuessError> {
        for (i, &d) in digits.iter().enumerate() {
            if d > 9 {
                return Err(GuessError::DigitOutOfRange(d));
            }
            if digits[..i].contains(&d) {
                return Err(GuessError::RepeatedDigit(char::from(b'0' + d)));
            }
        }
        Ok(Self { digits })
    }

    /// Returns the digits in position order.
    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// Returns true if `digit` occurs anywhere in the code.
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

impl FromStr for SecretCode {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s).map(|digits| Self { digits })
    }
}

impl fmt::Display for SecretCode {
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
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_distinct(code: &SecretCode) -> bool {
        let d = code.digits();
        (0..CODE_LENGTH).all(|i| !d[..i].contains(&d[i]))
    }

    #[test]
    fn test_generated_codes_have_four_distinct_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let code = SecretCode::generate(&mut rng);
            assert_eq!(code.digits().len(), CODE_LENGTH);
            assert!(code.digits().iter().all(|&d| d <= 9));
            assert!(all_distinct(&code), "repeated digit in {}", code);
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let a = SecretCode::generate(&mut StdRng::seed_from_u64(42));
        let b = SecretCode::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_leading_zero_is_kept() {
        let code: SecretCode = "0123".parse().expect("valid code");
        assert_eq!(code.digits(), &[0, 1, 2, 3]);
        assert_eq!(code.to_string(), "0123");
    }

    #[test]
    fn test_from_digits_rejects_repeats() {
        assert_eq!(
            SecretCode::from_digits([1, 2, 1, 3]),
            Err(GuessError::RepeatedDigit('1'))
        );
    }

    #[test]
    fn test_from_digits_rejects_out_of_range() {
        assert_eq!(
            SecretCode::from_digits([1, 2, 3, 10]),
            Err(GuessError::DigitOutOfRange(10))
        );
    }
}
