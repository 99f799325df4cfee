//! Denomination table.
//!
//! The declaration order of [`Denomination`] is the canonical order: strictly
//! descending by value. `Ord` is derived from it, so any ordered collection
//! keyed by `Denomination` iterates largest unit first.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tally_shared::Amount;

/// A fixed monetary unit.
///
/// Adding or removing a variant changes every breakdown and is a breaking
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Denomination {
    /// $1,000,000
    AMillion,
    /// $50
    FiftyDollars,
    /// $20
    TwentyDollars,
    /// $10
    TenDollars,
    /// $5
    FiveDollars,
    /// $1.99, a bundled unit rather than $1 + 99¢
    DollarNinetyNine,
    /// $1
    ADollar,
    /// 25¢
    Quarter,
    /// 10¢
    Dime,
    /// 5¢
    Nickel,
    /// 1¢
    ACent,
}

/// Result of dividing an amount by a denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    /// Whole number of units that fit.
    pub quotient: u64,
    /// What is left, always below the unit value.
    pub remainder: Amount,
}

impl Denomination {
    /// Every denomination, largest first.
    pub const ALL: [Self; 11] = [
        Self::AMillion,
        Self::FiftyDollars,
        Self::TwentyDollars,
        Self::TenDollars,
        Self::FiveDollars,
        Self::DollarNinetyNine,
        Self::ADollar,
        Self::Quarter,
        Self::Dime,
        Self::Nickel,
        Self::ACent,
    ];

    /// Iterates the table in descending value order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// The minimum representable unit.
    #[must_use]
    pub const fn smallest() -> Self {
        Self::ACent
    }

    /// Value in whole cents.
    #[must_use]
    pub const fn cents(self) -> u32 {
        match self {
            Self::AMillion => 100_000_000,
            Self::FiftyDollars => 5_000,
            Self::TwentyDollars => 2_000,
            Self::TenDollars => 1_000,
            Self::FiveDollars => 500,
            Self::DollarNinetyNine => 199,
            Self::ADollar => 100,
            Self::Quarter => 25,
            Self::Dime => 10,
            Self::Nickel => 5,
            Self::ACent => 1,
        }
    }

    /// Exact value in dollars.
    #[must_use]
    pub fn value(self) -> Decimal {
        self.amount().value()
    }

    /// Value as a validated [`Amount`].
    #[must_use]
    pub fn amount(self) -> Amount {
        Amount::from_cents(self.cents())
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::AMillion => "$1 million",
            Self::FiftyDollars => "$50",
            Self::TwentyDollars => "$20",
            Self::TenDollars => "$10",
            Self::FiveDollars => "$5",
            Self::DollarNinetyNine => "$1.99",
            Self::ADollar => "$1",
            Self::Quarter => "25¢",
            Self::Dime => "10¢",
            Self::Nickel => "5¢",
            Self::ACent => "1¢",
        }
    }

    /// Constant-style identifier, also used as the serialized name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AMillion => "A_MILLION",
            Self::FiftyDollars => "FIFTY_DOLLARS",
            Self::TwentyDollars => "TWENTY_DOLLARS",
            Self::TenDollars => "TEN_DOLLARS",
            Self::FiveDollars => "FIVE_DOLLARS",
            Self::DollarNinetyNine => "DOLLAR_NINETY_NINE",
            Self::ADollar => "A_DOLLAR",
            Self::Quarter => "QUARTER",
            Self::Dime => "DIME",
            Self::Nickel => "NICKEL",
            Self::ACent => "A_CENT",
        }
    }

    /// Returns true if `amount` is at least one unit.
    #[must_use]
    pub fn can_cover(self, amount: Amount) -> bool {
        amount >= self.amount()
    }

    /// Integer division of `amount` by this unit.
    ///
    /// `remainder == amount - quotient * value` and `0 <= remainder < value`.
    #[must_use]
    pub fn divide(self, amount: Amount) -> Division {
        let unit = self.amount();
        let remainder = amount % unit;
        // exact: amount - remainder is a whole multiple of unit, and
        // Amount's upper bound keeps the quotient inside u64
        let quotient = ((amount.value() - remainder.value()) / unit.value())
            .to_u64()
            .unwrap_or(0);
        Division {
            quotient,
            remainder,
        }
    }

    /// Renders `"<count> x <display>"`.
    #[must_use]
    pub fn format_count(self, count: u64) -> String {
        format!("{count} x {}", self.display())
    }

    /// `count * value`.
    #[must_use]
    pub fn amount_of(self, count: u64) -> Decimal {
        self.value() * Decimal::from(count)
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

impl std::str::FromStr for Denomination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| format!("Unknown denomination: {s}"))
    }
}
