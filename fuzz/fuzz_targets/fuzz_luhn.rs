//! Fuzz target for the Luhn checksum.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_validator::{luhn, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let as_string: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(
        luhn::validate(&digits),
        luhn::is_luhn_valid(&normalize(&as_string)),
        "slice and canonical entry points disagree"
    );

    let sums = luhn::checksum(&digits);
    assert_eq!(sums.is_valid(), luhn::validate(&digits));

    if digits.len() <= 64 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
