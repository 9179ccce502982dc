//! Card networks and their per-network constants.
//!
//! Every [`CardNetwork`] carries two fixed facts: the prefix rule used by
//! [`crate::detect`] and the set of total digit counts a valid number may
//! have. Both are compiled in; nothing here is configurable at runtime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Supported card networks.
///
/// The set is closed. Classification tries the variants in the order given
/// by [`CardNetwork::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardNetwork {
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Visa - Prefix 4, length 16-19
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    MasterCard,
    /// Diners Club - Prefix 30, 36, 38, 39, length 14
    DinersClub,
    /// JCB - Prefix 3528-3589, length 16-19
    Jcb,
    /// Discover - Prefix 6011, 644-649, 65, length 16-19
    Discover,
    /// UnionPay - Prefix 62, length 16-19
    UnionPay,
}

const SIXTEEN_TO_NINETEEN: &[u8] = &[16, 17, 18, 19];

impl CardNetwork {
    /// All networks in classification priority order.
    ///
    /// When two prefix rules could both match, the earlier entry wins.
    pub const ALL: [CardNetwork; 7] = [
        Self::Amex,
        Self::Visa,
        Self::MasterCard,
        Self::DinersClub,
        Self::Jcb,
        Self::Discover,
        Self::UnionPay,
    ];

    /// Returns the valid total digit counts for this network.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Amex => &[15],
            Self::DinersClub => &[14],
            Self::MasterCard => &[16],
            Self::Visa | Self::Jcb | Self::Discover | Self::UnionPay => SIXTEEN_TO_NINETEEN,
        }
    }

    /// Returns true if a number with `length` digits may belong to this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Amex => "American Express",
            Self::Visa => "Visa",
            Self::MasterCard => "Mastercard",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Discover => "Discover",
            Self::UnionPay => "UnionPay",
        }
    }

    /// Returns the short lowercase identifier accepted by [`FromStr`].
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::Visa => "visa",
            Self::MasterCard => "mastercard",
            Self::DinersClub => "diners-club",
            Self::Jcb => "jcb",
            Self::Discover => "discover",
            Self::UnionPay => "unionpay",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card network '{0}'")]
pub struct ParseNetworkError(pub String);

impl FromStr for CardNetwork {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "amex" | "americanexpress" => Ok(Self::Amex),
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::MasterCard),
            "dinersclub" | "diners" => Ok(Self::DinersClub),
            "jcb" => Ok(Self::Jcb),
            "discover" => Ok(Self::Discover),
            "unionpay" => Ok(Self::UnionPay),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}
