//! Batch processing for many card numbers at once.
//!
//! Every function here applies the [`CardValidator`] facade to each input
//! independently and returns results in input order. With the `parallel`
//! feature, rayon-backed variants spread the work across threads; since
//! validation holds no shared state, they return exactly what the
//! sequential versions return.

use crate::error::ValidationError;
use crate::validate::CardValidator;
use crate::CardNetwork;

/// Batch validator for processing multiple card numbers.
///
/// # Example
///
/// ```
/// use card_validator::BatchValidator;
///
/// let batch = BatchValidator::new();
/// let cards = ["4111111111111111", "5500000000000004", "invalid"];
///
/// assert_eq!(batch.validate_all(&cards), vec![true, true, false]);
/// assert_eq!(batch.valid_only(&cards), vec![0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchValidator {
    expected: Option<CardNetwork>,
}

/// Valid entries with their index and network, and rejected entries with
/// their index and reason.
pub type Partitioned = (Vec<(usize, CardNetwork)>, Vec<(usize, ValidationError)>);

impl BatchValidator {
    /// Creates a batch validator that accepts any network.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch validator that only accepts cards of `network`.
    #[inline]
    pub fn for_network(network: CardNetwork) -> Self {
        Self {
            expected: Some(network),
        }
    }

    /// Validates one card according to this validator's settings.
    #[inline]
    pub fn check(&self, card: &str) -> Result<CardNetwork, ValidationError> {
        let validator = CardValidator::new(card);
        match self.expected {
            Some(network) => validator.verdict_for(network),
            None => validator.verdict(),
        }
    }

    /// Returns one boolean per input, in input order.
    pub fn validate_all<S: AsRef<str>>(&self, cards: &[S]) -> Vec<bool> {
        cards.iter().map(|c| self.is_accepted(c.as_ref())).collect()
    }

    /// Returns the indices of the valid inputs.
    pub fn valid_only<S: AsRef<str>>(&self, cards: &[S]) -> Vec<usize> {
        cards
            .iter()
            .enumerate()
            .filter(|(_, c)| self.is_accepted(c.as_ref()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Splits the inputs into accepted and rejected entries.
    pub fn partitioned<S: AsRef<str>>(&self, cards: &[S]) -> Partitioned {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (i, card) in cards.iter().enumerate() {
            match self.check(card.as_ref()) {
                Ok(network) => valid.push((i, network)),
                Err(e) => invalid.push((i, e)),
            }
        }

        (valid, invalid)
    }

    /// Validates cards in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(&self, cards: &[S]) -> Vec<bool> {
        use rayon::prelude::*;
        cards
            .par_iter()
            .map(|c| self.is_accepted(c.as_ref()))
            .collect()
    }

    fn is_accepted(&self, card: &str) -> bool {
        let validator = CardValidator::new(card);
        match self.expected {
            Some(network) => validator.is_valid_for(network),
            None => validator.is_valid(),
        }
    }
}

/// Returns `is_valid` for each input.
///
/// # Example
///
/// ```
/// use card_validator::batch::validate_batch;
///
/// let cards = ["4111111111111111", "4111111111111112"];
/// assert_eq!(validate_batch(&cards), vec![true, false]);
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<bool> {
    BatchValidator::new().validate_all(cards)
}

/// Returns `card_type` for each input.
pub fn classify_batch<S: AsRef<str>>(cards: &[S]) -> Vec<Option<CardNetwork>> {
    cards
        .iter()
        .map(|c| CardValidator::new(c.as_ref()).card_type())
        .collect()
}

/// Returns the diagnostic verdict for each input.
pub fn verdict_batch<S: AsRef<str>>(cards: &[S]) -> Vec<Result<CardNetwork, ValidationError>> {
    cards
        .iter()
        .map(|c| CardValidator::new(c.as_ref()).verdict())
        .collect()
}

/// Counts valid and invalid cards in a batch.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use card_validator::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// assert_eq!(count_valid(&cards), (2, 1));
/// ```
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards
        .iter()
        .filter(|c| CardValidator::new(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}

/// Returns `is_valid` for each input, computed in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<bool> {
    BatchValidator::new().validate_parallel(cards)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = cards
        .par_iter()
        .filter(|c| CardValidator::new(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}
