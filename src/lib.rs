//! # card_validator
//!
//! Payment card network detection and checksum validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_validator::{CardNetwork, CardValidator};
//!
//! let card = CardValidator::new("4111 1111 1111 1111");
//! assert_eq!(card.card_type(), Some(CardNetwork::Visa));
//! assert!(card.is_valid());
//! assert!(card.is_valid_for(CardNetwork::Visa));
//!
//! // Safe for logging - never exposes the full card number
//! println!("Card: {}", card); // "Visa ****-****-****-1111"
//! ```
//!
//! Formatting characters are ignored. A number whose prefix identifies a
//! network but whose checksum or length is wrong still reports that network
//! from `card_type`, and is rejected by `is_valid`:
//!
//! ```rust
//! use card_validator::{card_type, is_valid, CardNetwork};
//!
//! assert_eq!(card_type("3782-8224-6310-006"), Some(CardNetwork::Amex));
//! assert!(!is_valid("3782-8224-6310-006"));
//! ```
//!
//! ## Diagnostics
//!
//! ```rust
//! use card_validator::{CardNetwork, CardValidator, ValidationError};
//!
//! let card = CardValidator::new("3715 6536 866");
//! assert!(matches!(
//!     card.verdict(),
//!     Err(ValidationError::InvalidLength { network: CardNetwork::Amex, length: 11, .. })
//! ));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use card_validator::batch;
//!
//! let cards = ["4111111111111111", "5500000000000004", "invalid"];
//! assert_eq!(batch::validate_batch(&cards), vec![true, true, false]);
//! assert_eq!(batch::count_valid(&cards), (2, 1));
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length |
//! |---------|--------|--------|
//! | American Express | 34, 37 | 15 |
//! | Visa | 4 | 16-19 |
//! | Mastercard | 51-55, 2221-2720 | 16 |
//! | Diners Club | 30, 36, 38, 39 | 14 |
//! | JCB | 3528-3589 | 16-19 |
//! | Discover | 6011, 644-649, 65 | 16-19 |
//! | UnionPay | 62 | 16-19 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize networks and reports |
//! | `generate` | Random test card generation |
//! | `parallel` | Rayon-based batch validation |
//! | `cli` | The `cardcheck` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod detect;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod network;
pub mod normalize;
pub mod validate;

pub use batch::BatchValidator;
pub use error::ValidationError;
pub use network::{CardNetwork, ParseNetworkError};
pub use normalize::{normalize, CanonicalNumber};
pub use validate::{card_type, is_valid, is_valid_for, CardValidator, Report};

#[cfg(test)]
mod tests {
    use super::*;

    const AMEX: &str = "3782 8224 6310 005";
    const VISA: &str = "4111 1111 1111 1111";
    const MASTERCARD: &str = "5500 0000 0000 0004";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3569 9900 1009 5841";
    const DISCOVER: &str = "6011 0000 0000 0004";
    const UNIONPAY: &str = "6250 9470 0000 0014";

    #[test]
    fn test_every_network_validates() {
        let cases = [
            (AMEX, CardNetwork::Amex),
            (VISA, CardNetwork::Visa),
            (MASTERCARD, CardNetwork::MasterCard),
            (DINERS, CardNetwork::DinersClub),
            (JCB, CardNetwork::Jcb),
            (DISCOVER, CardNetwork::Discover),
            (UNIONPAY, CardNetwork::UnionPay),
        ];

        for (raw, network) in cases {
            assert_eq!(card_type(raw), Some(network), "{raw}");
            assert!(is_valid(raw), "{raw}");
            assert!(is_valid_for(raw, network), "{raw}");
        }
    }

    #[test]
    fn test_formatted_input() {
        assert!(is_valid("4111-1111-1111-1111"));
        assert!(is_valid("4111 1111 1111 1111"));
        assert!(is_valid("4111-1111 1111-1111"));
        assert!(is_valid("  4111.1111.1111.1111  "));
    }

    #[test]
    fn test_invalid_checksum() {
        assert_eq!(card_type("4111 1111 1111 1112"), Some(CardNetwork::Visa));
        assert!(!is_valid("4111 1111 1111 1112"));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardValidator>();
        assert_send_sync::<CanonicalNumber>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<CardNetwork>();
        assert_send_sync::<BatchValidator>();
    }
}
