//! Card number generation for testing purposes.
//!
//! Generated numbers carry a network prefix, a body, and a Luhn check digit,
//! so they classify as their network and pass validation. They are not
//! connected to real accounts and should only be used in tests.
//!
//! # Example
//!
//! ```
//! use card_validator::generate::generate_card_deterministic;
//! use card_validator::{is_valid_for, CardNetwork};
//!
//! let number = generate_card_deterministic(CardNetwork::Jcb);
//! assert!(number.starts_with("3528"));
//! assert!(is_valid_for(&number, CardNetwork::Jcb));
//! ```

use thiserror::Error;

#[cfg(feature = "generate")]
use rand::Rng;

use crate::luhn;
use crate::CardNetwork;

/// Rejected generator arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The prefix contained something other than ASCII digits.
    #[error("prefix must contain only digits, got '{0}'")]
    InvalidPrefix(String),

    /// The prefix leaves no room for the check digit.
    #[error("prefix of {prefix_len} digits does not fit a {length}-digit number")]
    PrefixTooLong {
        /// Digits in the prefix.
        prefix_len: usize,
        /// Requested total length.
        length: usize,
    },
}

/// Returns the prefix used when generating numbers for a network.
pub const fn prefix_for_network(network: CardNetwork) -> &'static str {
    match network {
        CardNetwork::Amex => "37",
        CardNetwork::Visa => "4",
        CardNetwork::MasterCard => "51",
        CardNetwork::DinersClub => "36",
        CardNetwork::Jcb => "3528",
        CardNetwork::Discover => "6011",
        CardNetwork::UnionPay => "62",
    }
}

/// Returns the length used when generating numbers for a network.
///
/// This is the shortest valid length for the network.
pub const fn default_length(network: CardNetwork) -> usize {
    network.valid_lengths()[0] as usize
}

/// Generates a valid card number deterministically (no randomness).
///
/// The body between prefix and check digit is filled with zeros, so the same
/// network always yields the same number.
pub fn generate_card_deterministic(network: CardNetwork) -> String {
    complete(
        prefix_digits(prefix_for_network(network)),
        default_length(network),
        || 0,
    )
}

/// Generates a valid card number deterministically with a custom prefix.
///
/// # Example
///
/// ```
/// use card_validator::generate::generate_card_deterministic_with_prefix;
///
/// let number = generate_card_deterministic_with_prefix("2720", 16).unwrap();
/// assert_eq!(number.len(), 16);
/// assert!(card_validator::is_valid(&number));
///
/// assert!(generate_card_deterministic_with_prefix("4x", 16).is_err());
/// ```
pub fn generate_card_deterministic_with_prefix(
    prefix: &str,
    length: usize,
) -> Result<String, GenerateError> {
    let digits = parse_prefix(prefix, length)?;
    Ok(complete(digits, length, || 0))
}

/// Generates a valid card number for the network using random digits.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card(network: CardNetwork) -> String {
    generate_card_for_network_with_rng(network, &mut rand::thread_rng())
}

/// Generates a random valid card number for the network from a provided RNG.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card_for_network_with_rng<R: Rng>(network: CardNetwork, rng: &mut R) -> String {
    complete(
        prefix_digits(prefix_for_network(network)),
        default_length(network),
        || rng.gen_range(0..10),
    )
}

/// Generates a random valid card number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use card_validator::generate::generate_card_with_prefix;
///
/// let number = generate_card_with_prefix("411111", 16).unwrap();
/// assert!(number.starts_with("411111"));
/// assert!(card_validator::is_valid(&number));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> Result<String, GenerateError> {
    generate_card_with_rng(prefix, length, &mut rand::thread_rng())
}

/// Generates a random valid card number using a provided RNG.
///
/// Useful for reproducible tests with a seeded RNG.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(
    prefix: &str,
    length: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let digits = parse_prefix(prefix, length)?;
    Ok(complete(digits, length, || rng.gen_range(0..10)))
}

fn parse_prefix(prefix: &str, length: usize) -> Result<Vec<u8>, GenerateError> {
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenerateError::InvalidPrefix(prefix.to_string()));
    }
    if prefix.len() >= length {
        return Err(GenerateError::PrefixTooLong {
            prefix_len: prefix.len(),
            length,
        });
    }
    Ok(prefix_digits(prefix))
}

fn prefix_digits(prefix: &str) -> Vec<u8> {
    prefix.bytes().map(|b| b - b'0').collect()
}

// Fills the body with `next_digit` and appends the check digit.
fn complete(mut digits: Vec<u8>, length: usize, mut next_digit: impl FnMut() -> u8) -> String {
    while digits.len() < length - 1 {
        digits.push(next_digit());
    }
    digits.push(luhn::generate_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardValidator;

    #[test]
    fn test_deterministic_cards_are_valid() {
        for network in CardNetwork::ALL {
            let number = generate_card_deterministic(network);
            let card = CardValidator::new(&number);
            assert!(card.is_valid_for(network), "{network}: {number}");
            assert_eq!(number.len(), default_length(network));
            assert!(number.starts_with(prefix_for_network(network)));
        }
    }

    #[test]
    fn test_deterministic_is_stable() {
        assert_eq!(
            generate_card_deterministic(CardNetwork::Visa),
            "4000000000000002"
        );
        assert_eq!(
            generate_card_deterministic(CardNetwork::Visa),
            generate_card_deterministic(CardNetwork::Visa)
        );
    }

    #[test]
    fn test_default_lengths() {
        assert_eq!(default_length(CardNetwork::Amex), 15);
        assert_eq!(default_length(CardNetwork::DinersClub), 14);
        assert_eq!(default_length(CardNetwork::Visa), 16);
    }

    #[test]
    fn test_custom_prefix() {
        let number = generate_card_deterministic_with_prefix("2221", 16).unwrap();
        assert!(number.starts_with("2221"));
        assert!(crate::is_valid_for(&number, CardNetwork::MasterCard));
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(
            generate_card_deterministic_with_prefix("41a", 16),
            Err(GenerateError::InvalidPrefix("41a".to_string()))
        );
        assert_eq!(
            generate_card_deterministic_with_prefix("4111", 4),
            Err(GenerateError::PrefixTooLong {
                prefix_len: 4,
                length: 4
            })
        );
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_cards_are_valid() {
        for network in CardNetwork::ALL {
            for _ in 0..50 {
                let number = generate_card(network);
                assert!(crate::is_valid_for(&number, network), "{network}: {number}");
            }
        }
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = generate_card_with_rng("6250", 19, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_card_with_rng("6250", 19, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!(crate::is_valid_for(&a, CardNetwork::UnionPay));
    }
}
