//! Input normalization.
//!
//! Card numbers arrive with whatever formatting the user typed: spaces,
//! dashes, dots, stray letters. [`normalize`] keeps the ASCII digits and
//! discards everything else, producing a [`CanonicalNumber`] that the
//! classifier and checksum operate on.
//!
//! # Security
//!
//! A canonical number is the full card number. Its `Debug` output is masked
//! and its buffer is zeroed on drop, the same way the rest of this crate
//! treats cardholder data.

use std::fmt;

use zeroize::Zeroize;

/// A card number reduced to its ASCII digits, in input order.
///
/// Kept as a string rather than an integer: 19 digits overflow `u64` for
/// some values and leading zeros are significant.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Returns the digits as a string slice.
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Never log it; use [`masked`](Self::masked).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the input contained no digits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the digits as values `0..=9`, left to right.
    #[inline]
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Collects the digit values into a vector.
    #[inline]
    pub fn to_digits(&self) -> Vec<u8> {
        self.digits().collect()
    }

    /// Returns the number with every digit but the last four replaced by `*`.
    ///
    /// Format: `****-****-****-1234`. Numbers of four digits or fewer are
    /// masked entirely.
    pub fn masked(&self) -> String {
        let len = self.len();
        if len <= 4 {
            return "*".repeat(len);
        }

        let masked_count = len - 4;
        let mut result = String::with_capacity(len + len / 4);

        for i in 0..masked_count {
            if i > 0 && i % 4 == 0 {
                result.push('-');
            }
            result.push('*');
        }

        if masked_count % 4 == 0 {
            result.push('-');
        }

        result.push_str(&self.0[masked_count..]);
        result
    }
}

impl fmt::Debug for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CanonicalNumber").field(&self.masked()).finish()
    }
}

impl AsRef<str> for CanonicalNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Drop for CanonicalNumber {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Strips every character that is not an ASCII digit.
///
/// Never fails. Input with no digits yields an empty [`CanonicalNumber`].
/// Digits from other scripts (Arabic-Indic, fullwidth, ...) are discarded,
/// not transliterated.
///
/// # Example
///
/// ```
/// use card_validator::normalize::normalize;
///
/// assert_eq!(normalize("4111 1111-1111.1111").as_str(), "4111111111111111");
/// assert!(normalize("no digits here").is_empty());
/// ```
pub fn normalize(raw: &str) -> CanonicalNumber {
    CanonicalNumber(raw.chars().filter(char::is_ascii_digit).collect())
}
