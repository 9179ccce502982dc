//! Fuzz target for the validation facade.
//!
//! Arbitrary input must never panic, and the predicates must stay
//! consistent with each other and with the diagnostic verdict.

#![no_main]

use card_validator::{normalize, CardNetwork, CardValidator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let card = CardValidator::new(data);
    let network = card.card_type();
    let valid = card.is_valid();

    assert_eq!(valid, card.verdict().is_ok());
    assert_eq!(card.number(), &normalize(card.number().as_str()));

    for candidate in CardNetwork::ALL {
        let valid_for = card.is_valid_for(candidate);
        assert_eq!(valid_for, valid && network == Some(candidate));
        assert_eq!(valid_for, card.verdict_for(candidate).is_ok());
    }

    if card.is_empty() {
        assert_eq!(network, None);
        assert!(!valid);
    }

    let _ = card.to_string();
    let _ = card.report();
});
