//! Luhn (modulus 10) checksum.
//!
//! Digits are walked from the right. Position 0 is the check digit. Digits at
//! odd positions are doubled, with 9 subtracted when the result exceeds 9,
//! and the number is valid when the total is a multiple of ten.
//!
//! The doubled value is computed as `d / 5 + (2 * d) % 10`, which gives the
//! same result as "double, then subtract 9 if above 9" without a branch.
//!
//! The slice entry points take digit values. A value above 9 is reduced
//! modulo 10 before use, so no input can overflow or panic.
//!
//! An empty sequence has a total of zero and therefore passes. Callers that
//! need a non-empty number must check that separately; the facade in
//! [`crate::validate`] does so by requiring a detected network.

use crate::normalize::CanonicalNumber;

/// Doubles a digit and folds the result back to a single digit.
#[inline]
const fn double_digit(digit: u8) -> u64 {
    let digit = digit % 10;
    (digit / 5 + (2 * digit) % 10) as u64
}

/// The two partial sums of a Luhn pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LuhnSums {
    /// Sum of transformed digits at odd positions (1, 3, 5, ... from the right).
    pub odd: u64,
    /// Sum of untouched digits at even positions (0, 2, 4, ... from the right).
    pub even: u64,
}

impl LuhnSums {
    /// Combined checksum.
    #[inline]
    pub const fn total(&self) -> u64 {
        self.odd + self.even
    }

    /// True when the combined checksum is a multiple of ten.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.total() % 10 == 0
    }
}

/// Computes the odd and even partial sums for a sequence of digit values.
///
/// # Example
///
/// ```
/// use card_validator::luhn::checksum;
///
/// let sums = checksum(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
/// assert_eq!(sums.total() % 10, 0);
/// ```
pub fn checksum(digits: &[u8]) -> LuhnSums {
    sums_from_right(digits.iter().rev().copied())
}

fn sums_from_right(digits: impl Iterator<Item = u8>) -> LuhnSums {
    digits
        .enumerate()
        .fold(LuhnSums::default(), |mut sums, (position, digit)| {
            if position % 2 == 1 {
                sums.odd += double_digit(digit);
            } else {
                sums.even += (digit % 10) as u64;
            }
            sums
        })
}

/// Validates a sequence of digit values (0-9) with the Luhn algorithm.
///
/// # Example
///
/// ```
/// use card_validator::luhn::validate;
///
/// // Valid Visa test card
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// // Invalid card (changed last digit)
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
///
/// // Empty input sums to zero
/// assert!(validate(&[]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    checksum(digits).is_valid()
}

/// Validates a canonical number with the Luhn algorithm.
pub fn is_luhn_valid(canonical: &CanonicalNumber) -> bool {
    sums_from_right(canonical.digits().rev()).is_valid()
}

/// Generates the check digit for a partial card number.
///
/// Given the digits without their check digit, returns the digit that makes
/// the full number pass [`validate`].
///
/// # Example
///
/// ```
/// use card_validator::luhn::generate_check_digit;
///
/// // Visa test card without check digit
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a digit shifts every existing digit one position left, so
    // the current last digit lands on position 1 and gets doubled.
    let sum = digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |sum, (i, &digit)| {
            let value = if i % 2 == 0 {
                double_digit(digit) as u8
            } else {
                digit % 10
            };
            (sum + value) % 10
        });

    (10 - sum) % 10
}
