//! The public validation facade.
//!
//! [`CardValidator`] normalizes its input once and answers three questions
//! about it:
//!
//! - [`card_type`](CardValidator::card_type): which network the prefix belongs to
//! - [`is_valid`](CardValidator::is_valid): whether the number has a known
//!   network, an allowed length for that network, and a passing Luhn checksum
//! - [`is_valid_for`](CardValidator::is_valid_for): whether it is valid *and*
//!   belongs to a given network
//!
//! None of these fail. Anything that is not a valid card, including empty or
//! garbage input, simply comes back as `None` or `false`. Callers that want
//! to know why can ask for a [`verdict`](CardValidator::verdict).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::detect::classify;
use crate::error::ValidationError;
use crate::luhn::is_luhn_valid;
use crate::normalize::{normalize, CanonicalNumber};
use crate::CardNetwork;

/// A card number ready to be classified and checked.
///
/// Holds only the canonical digits; formatting characters from the raw input
/// are discarded on construction.
///
/// # Example
///
/// ```
/// use card_validator::{CardNetwork, CardValidator};
///
/// let card = CardValidator::new("3782 8224 6310 005");
/// assert_eq!(card.card_type(), Some(CardNetwork::Amex));
/// assert!(card.is_valid());
/// assert!(card.is_valid_for(CardNetwork::Amex));
/// assert!(!card.is_valid_for(CardNetwork::Visa));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardValidator {
    number: CanonicalNumber,
}

impl CardValidator {
    /// Creates a validator from a raw card number string.
    pub fn new(raw: &str) -> Self {
        Self {
            number: normalize(raw),
        }
    }

    /// Returns the detected network, or `None` if no prefix rule matches.
    ///
    /// Only the prefix is considered; the checksum and length are not checked.
    #[inline]
    pub fn card_type(&self) -> Option<CardNetwork> {
        classify(&self.number)
    }

    /// Returns true if the number belongs to a known network, has an allowed
    /// length for it, and passes the Luhn checksum.
    pub fn is_valid(&self) -> bool {
        match self.card_type() {
            Some(network) => self.is_valid_as(network),
            None => false,
        }
    }

    /// Returns true if the number is valid and belongs to `network`.
    ///
    /// A well-formed number for a different network is rejected.
    pub fn is_valid_for(&self, network: CardNetwork) -> bool {
        self.is_valid() && self.card_type() == Some(network)
    }

    /// Explains the outcome of [`is_valid`](Self::is_valid).
    ///
    /// Returns the network on success. When both the length and the checksum
    /// are wrong, the length is reported.
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::{CardNetwork, CardValidator, ValidationError};
    ///
    /// let card = CardValidator::new("4111 1111 1111 1112");
    /// assert_eq!(
    ///     card.verdict(),
    ///     Err(ValidationError::InvalidChecksum { network: CardNetwork::Visa })
    /// );
    /// ```
    pub fn verdict(&self) -> Result<CardNetwork, ValidationError> {
        if self.number.is_empty() {
            return Err(ValidationError::NoDigits);
        }

        let network = self.card_type().ok_or(ValidationError::UnknownNetwork)?;
        let length = self.number.len();

        if !network.is_valid_length(length) {
            return Err(ValidationError::InvalidLength {
                network,
                length,
                valid_lengths: network.valid_lengths(),
            });
        }

        if !is_luhn_valid(&self.number) {
            return Err(ValidationError::InvalidChecksum { network });
        }

        Ok(network)
    }

    /// Explains the outcome of [`is_valid_for`](Self::is_valid_for).
    pub fn verdict_for(&self, expected: CardNetwork) -> Result<CardNetwork, ValidationError> {
        let actual = self.verdict()?;
        if actual != expected {
            return Err(ValidationError::NetworkMismatch { expected, actual });
        }
        Ok(actual)
    }

    /// Returns true if the digits pass the Luhn checksum, regardless of
    /// network or length.
    #[inline]
    pub fn passes_luhn(&self) -> bool {
        is_luhn_valid(&self.number)
    }

    /// Returns true if a network was detected and the digit count is allowed
    /// for it.
    pub fn has_valid_length(&self) -> bool {
        self.card_type()
            .is_some_and(|network| network.is_valid_length(self.number.len()))
    }

    /// Returns the canonical digits.
    #[inline]
    pub fn number(&self) -> &CanonicalNumber {
        &self.number
    }

    /// Number of digits in the canonical number.
    #[inline]
    pub fn len(&self) -> usize {
        self.number.len()
    }

    /// True when the input contained no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }

    /// Returns the number masked for display: `****-****-****-1234`.
    #[inline]
    pub fn masked(&self) -> String {
        self.number.masked()
    }

    /// Collects every fact about the number into one value.
    pub fn report(&self) -> Report {
        self.build_report(self.verdict())
    }

    /// Like [`report`](Self::report), but the verdict requires the card to
    /// belong to `expected`.
    ///
    /// ```
    /// use card_validator::{CardNetwork, CardValidator};
    ///
    /// let report = CardValidator::new("4111 1111 1111 1111").report_for(CardNetwork::MasterCard);
    /// assert_eq!(report.network, Some(CardNetwork::Visa));
    /// assert!(!report.valid);
    /// ```
    pub fn report_for(&self, expected: CardNetwork) -> Report {
        self.build_report(self.verdict_for(expected))
    }

    fn build_report(&self, verdict: Result<CardNetwork, ValidationError>) -> Report {
        Report {
            network: self.card_type(),
            valid: verdict.is_ok(),
            length: self.len(),
            length_valid: self.has_valid_length(),
            luhn_valid: self.passes_luhn(),
            masked: self.masked(),
            error: verdict.err().map(|e| e.to_string()),
        }
    }

    // Length and checksum are both evaluated before combining.
    fn is_valid_as(&self, network: CardNetwork) -> bool {
        let length_ok = network.is_valid_length(self.number.len());
        let luhn_ok = is_luhn_valid(&self.number);
        length_ok & luhn_ok
    }
}

impl fmt::Debug for CardValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardValidator")
            .field("network", &self.card_type())
            .field("number", &self.masked())
            .field("length", &self.len())
            .finish()
    }
}

impl fmt::Display for CardValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card_type() {
            Some(network) => write!(f, "{} {}", network, self.masked()),
            None => write!(f, "Unknown {}", self.masked()),
        }
    }
}

impl From<&str> for CardValidator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl FromStr for CardValidator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Everything known about one card number, safe to print or serialize.
///
/// Carries the masked number only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Detected network, if any.
    pub network: Option<CardNetwork>,
    /// Overall verdict: [`CardValidator::is_valid`], or
    /// [`CardValidator::is_valid_for`] for [`CardValidator::report_for`].
    pub valid: bool,
    /// Number of digits after normalization.
    pub length: usize,
    /// Whether the length is allowed for the detected network.
    pub length_valid: bool,
    /// Whether the Luhn checksum passes.
    pub luhn_valid: bool,
    /// The number masked for display.
    pub masked: String,
    /// Why the number is invalid, when it is.
    pub error: Option<String>,
}

/// Returns the network of a raw card number string.
///
/// # Example
///
/// ```
/// use card_validator::{card_type, CardNetwork};
///
/// assert_eq!(card_type("6250 9470 0000 0014"), Some(CardNetwork::UnionPay));
/// assert_eq!(card_type(""), None);
/// ```
#[inline]
pub fn card_type(raw: &str) -> Option<CardNetwork> {
    CardValidator::new(raw).card_type()
}

/// Returns true if a raw card number string is a valid card.
///
/// # Example
///
/// ```
/// use card_validator::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    CardValidator::new(raw).is_valid()
}

/// Returns true if a raw card number string is a valid card of `network`.
#[inline]
pub fn is_valid_for(raw: &str, network: CardNetwork) -> bool {
    CardValidator::new(raw).is_valid_for(network)
}
