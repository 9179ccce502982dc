//! Card network detection by leading-digit prefix.
//!
//! Each network owns a prefix rule: a constraint on the first one to four
//! digits, followed by any number of further digits. Rules are written as
//! slice patterns rather than regular expressions, so a rule can only match
//! once the number is long enough to contain its whole prefix.
//!
//! # Performance
//!
//! Classification tries at most seven patterns against the first four
//! digits. It never looks at the rest of the number.

use crate::normalize::CanonicalNumber;
use crate::CardNetwork;

impl CardNetwork {
    /// Returns true if `digits` start with this network's prefix.
    ///
    /// This tests one rule in isolation; it does not consider networks that
    /// come earlier in [`CardNetwork::ALL`].
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::CardNetwork;
    ///
    /// assert!(CardNetwork::MasterCard.matches_prefix(&[2, 2, 2, 1]));
    /// assert!(!CardNetwork::MasterCard.matches_prefix(&[2, 2, 2]));
    /// ```
    #[inline]
    pub fn matches_prefix(&self, digits: &[u8]) -> bool {
        match self {
            // 34, 37
            Self::Amex => matches!(digits, [3, 4 | 7, ..]),

            Self::Visa => matches!(digits, [4, ..]),

            Self::MasterCard => matches!(
                digits,
                [5, 1..=5, ..]             // 51-55
                    | [2, 2, 2, 1..=9, ..] // 2221-2229
                    | [2, 2, 3..=9, ..]    // 223-229
                    | [2, 3..=6, ..]       // 23-26
                    | [2, 7, 0..=1, _, ..] // 2700-2719
                    | [2, 7, 2, 0, ..]     // 2720
            ),

            // 30, 36, 38, 39
            Self::DinersClub => matches!(digits, [3, 0 | 6 | 8 | 9, ..]),

            Self::Jcb => matches!(
                digits,
                [3, 5, 2, 8..=9, ..]   // 3528-3529
                    | [3, 5, 3..=8, ..] // 353-358
            ),

            Self::Discover => matches!(
                digits,
                [6, 0, 1, 1, ..]       // 6011
                    | [6, 4, 4..=9, ..] // 644-649
                    | [6, 5, ..]        // 65
            ),

            Self::UnionPay => matches!(digits, [6, 2, ..]),
        }
    }
}

/// Detects the card network from a sequence of digit values.
///
/// Tries each network in [`CardNetwork::ALL`] order and returns the first
/// whose prefix matches. Returns `None` for empty input or when no rule
/// matches.
///
/// # Example
///
/// ```
/// use card_validator::detect::detect_network;
/// use card_validator::CardNetwork;
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(detect_network(&amex), Some(CardNetwork::Amex));
/// assert_eq!(detect_network(&[1, 2, 3]), None);
/// ```
#[inline]
pub fn detect_network(digits: &[u8]) -> Option<CardNetwork> {
    CardNetwork::ALL
        .into_iter()
        .find(|network| network.matches_prefix(digits))
}

/// Classifies a canonical number.
///
/// Only the leading digits are inspected; at most four digits are copied.
pub fn classify(canonical: &CanonicalNumber) -> Option<CardNetwork> {
    let mut head = [0u8; 4];
    let mut count = 0;
    for digit in canonical.digits().take(head.len()) {
        head[count] = digit;
        count += 1;
    }
    detect_network(&head[..count])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn detect(s: &str) -> Option<CardNetwork> {
        classify(&normalize(s))
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect("34"), Some(CardNetwork::Amex));
        assert_eq!(detect("378282246310005"), Some(CardNetwork::Amex));
        assert_eq!(detect("35"), None);
        assert_eq!(detect("3"), None);
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect("4"), Some(CardNetwork::Visa));
        assert_eq!(detect("4111111111111111"), Some(CardNetwork::Visa));
    }

    #[test]
    fn test_mastercard_detection() {
        for prefix in ["51", "55", "2221", "2229", "223", "2299", "23", "26", "2700", "2719", "2720"] {
            assert_eq!(detect(prefix), Some(CardNetwork::MasterCard), "{prefix}");
        }
        for prefix in ["50", "56", "2220", "222", "22", "2721", "2730", "27", "270", "28"] {
            assert_eq!(detect(prefix), None, "{prefix}");
        }
    }

    #[test]
    fn test_diners_club_detection() {
        for prefix in ["30", "36", "38", "39", "30569309025904"] {
            assert_eq!(detect(prefix), Some(CardNetwork::DinersClub), "{prefix}");
        }
        // 31, 32, 33 belong to nobody
        for prefix in ["31", "32", "33"] {
            assert_eq!(detect(prefix), None, "{prefix}");
        }
    }

    #[test]
    fn test_jcb_detection() {
        for prefix in ["3528", "3529", "353", "3589", "3569990010095841"] {
            assert_eq!(detect(prefix), Some(CardNetwork::Jcb), "{prefix}");
        }
        for prefix in ["3527", "359", "352", "35"] {
            assert_eq!(detect(prefix), None, "{prefix}");
        }
    }

    #[test]
    fn test_discover_detection() {
        for prefix in ["6011", "644", "649", "65", "6011000000000004"] {
            assert_eq!(detect(prefix), Some(CardNetwork::Discover), "{prefix}");
        }
        for prefix in ["6010", "601", "643", "64", "60"] {
            assert_eq!(detect(prefix), None, "{prefix}");
        }
    }

    #[test]
    fn test_unionpay_detection() {
        assert_eq!(detect("62"), Some(CardNetwork::UnionPay));
        assert_eq!(detect("6250947000000014"), Some(CardNetwork::UnionPay));
    }

    #[test]
    fn test_unknown_prefixes() {
        for prefix in ["0", "1", "5", "6", "7", "8", "9", "00000000", "1234567812345670"] {
            assert_eq!(detect(prefix), None, "{prefix}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_network(&[]), None);
        assert_eq!(detect(""), None);
        assert_eq!(detect("abc"), None);
    }

    #[test]
    fn test_formatting_is_ignored() {
        assert_eq!(detect("3-4"), Some(CardNetwork::Amex));
        assert_eq!(detect("x6x2"), Some(CardNetwork::UnionPay));
    }

    #[test]
    fn test_at_most_one_rule_matches() {
        // Every prefix up to four digits matches at most one rule,
        // so priority order never changes the outcome today.
        for len in 1..=4u32 {
            for n in 0..10u32.pow(len) {
                let digits: Vec<u8> = format!("{:0width$}", n, width = len as usize)
                    .bytes()
                    .map(|b| b - b'0')
                    .collect();
                let matching = CardNetwork::ALL
                    .iter()
                    .filter(|network| network.matches_prefix(&digits))
                    .count();
                assert!(matching <= 1, "{digits:?} matched {matching} rules");
            }
        }
    }

    #[test]
    fn test_classify_agrees_with_detect_network() {
        for s in ["4111111111111111", "5500000000000004", "2222410740360010", "62", "9"] {
            let number = normalize(s);
            assert_eq!(classify(&number), detect_network(&number.to_digits()), "{s}");
        }
    }
}
