//! Reasons a card number fails validation.
//!
//! The predicates in [`crate::validate`] only answer yes or no. These errors
//! back the diagnostic [`verdict`](crate::CardValidator::verdict) methods for
//! callers that want to tell the user what is wrong.

use thiserror::Error;

use crate::CardNetwork;

/// Why a card number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input contained no digits.
    #[error("card number contains no digits")]
    NoDigits,

    /// No network's prefix rule matched the leading digits.
    #[error("unknown card network - check the card number prefix")]
    UnknownNetwork,

    /// The digit count is not allowed for the detected network.
    #[error("{network} cards must have {} digits, got {length}", join_lengths(.valid_lengths))]
    InvalidLength {
        /// The detected network.
        network: CardNetwork,
        /// The actual number of digits.
        length: usize,
        /// The valid lengths for this network.
        valid_lengths: &'static [u8],
    },

    /// The Luhn checksum failed.
    #[error("invalid checksum for {network} card (Luhn check failed)")]
    InvalidChecksum {
        /// The detected network.
        network: CardNetwork,
    },

    /// The number is valid, but for a different network than expected.
    #[error("expected {expected} card, got {actual}")]
    NetworkMismatch {
        /// The network the caller asked for.
        expected: CardNetwork,
        /// The network the number belongs to.
        actual: CardNetwork,
    },
}

fn join_lengths(lengths: &[u8]) -> String {
    let strings: Vec<String> = lengths.iter().map(u8::to_string).collect();
    strings.join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::NoDigits.to_string(),
            "card number contains no digits"
        );

        assert_eq!(
            ValidationError::InvalidLength {
                network: CardNetwork::Amex,
                length: 11,
                valid_lengths: CardNetwork::Amex.valid_lengths(),
            }
            .to_string(),
            "American Express cards must have 15 digits, got 11"
        );

        assert_eq!(
            ValidationError::InvalidLength {
                network: CardNetwork::Visa,
                length: 12,
                valid_lengths: CardNetwork::Visa.valid_lengths(),
            }
            .to_string(),
            "Visa cards must have 16 or 17 or 18 or 19 digits, got 12"
        );

        assert_eq!(
            ValidationError::InvalidChecksum {
                network: CardNetwork::Visa
            }
            .to_string(),
            "invalid checksum for Visa card (Luhn check failed)"
        );

        assert_eq!(
            ValidationError::NetworkMismatch {
                expected: CardNetwork::Amex,
                actual: CardNetwork::Visa,
            }
            .to_string(),
            "expected American Express card, got Visa"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
