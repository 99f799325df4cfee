//! Validated monetary amount with cent precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal`; floats are only accepted at the
//! boundary and are quantised to whole cents before anything else sees them.

use std::fmt;
use std::ops::Rem;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fractional digits an amount may carry.
pub const CENT_SCALE: u32 = 2;

/// Amounts must stay below this many whole dollars (10^16), which keeps every
/// count of every denomination inside a `u64`.
const UPPER_BOUND: u64 = 10_000_000_000_000_000;

/// Significant digits a `Decimal` holds without rounding.
const MAX_SIGNIFICANT_DIGITS: usize = 28;

/// Errors raised while turning caller input into an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Amount is below zero.
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),

    /// Amount carries non-zero digits below one cent.
    #[error("Amount has precision below one cent: {0}")]
    SubCentPrecision(Decimal),

    /// Float input was NaN or infinite.
    #[error("Amount must be a finite number")]
    NonFinite,

    /// Amount does not fit in the supported range.
    #[error("Amount is outside the supported range")]
    OutOfRange,

    /// String input is not a number.
    #[error("Cannot parse amount: {0:?}")]
    Unparseable(String),
}

/// A non-negative monetary amount, exact to the cent.
///
/// The wrapped value is always rescaled to two fractional digits, so
/// `Amount` values compare, hash and print consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

impl Amount {
    /// Validates an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Negative`] for values below zero,
    /// [`AmountError::OutOfRange`] from ten quadrillion dollars up, and
    /// [`AmountError::SubCentPrecision`] when digits below one cent are
    /// non-zero (`1.280` is fine, `1.285` is not).
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }
        if value >= Decimal::from(UPPER_BOUND) {
            return Err(AmountError::OutOfRange);
        }
        if value.round_dp(CENT_SCALE) != value {
            return Err(AmountError::SubCentPrecision(value));
        }
        if value.is_zero() {
            return Ok(Self::zero());
        }
        let mut value = value;
        value.rescale(CENT_SCALE);
        Ok(Self(value))
    }

    /// Zero dollars.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::new(0, CENT_SCALE))
    }

    /// Builds an amount from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), CENT_SCALE))
    }

    /// The exact decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Rem for Amount {
    type Output = Self;

    /// Exact remainder; cent-exact operands always leave a cent-exact rest.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn rem(self, divisor: Self) -> Self {
        let mut rest = self.0 % divisor.0;
        rest.rescale(CENT_SCALE);
        Self(rest)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    /// Quantises a float to whole cents with banker's rounding.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite);
        }
        let exact = Decimal::from_f64(value).ok_or(AmountError::OutOfRange)?;
        if exact < Decimal::ZERO {
            return Err(AmountError::Negative(exact));
        }
        Self::new(exact.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointNearestEven))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses `"1.28"`, `"$19.48"` or `"$1,000,040.15"`.
    ///
    /// Thousands separators must group exactly three digits (`"1,2,3"` is
    /// rejected). Digits below one cent must be zero, however many there are.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || AmountError::Unparseable(s.to_string());

        let trimmed = s.trim();
        let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let (negative, unsigned) = match unsigned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, unsigned),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        let whole = whole_digits(whole).ok_or_else(unparseable)?;
        let fraction = match fraction {
            Some("") => return Err(unparseable()),
            Some(fraction) => fraction,
            None => "",
        };
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unparseable());
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(unparseable());
        }
        let whole = if whole.is_empty() { "0".to_string() } else { whole };
        let fraction = fraction.trim_end_matches('0');

        // checked on the text: rust_decimal rounds past 28 significant digits
        if !negative && fraction.len() > CENT_SCALE as usize {
            let shown = MAX_SIGNIFICANT_DIGITS
                .saturating_sub(whole.len())
                .max(CENT_SCALE as usize + 1)
                .min(fraction.len());
            let value = Decimal::from_str(&format!("{whole}.{}", &fraction[..shown]))
                .map_err(|_| unparseable())?;
            return Err(AmountError::SubCentPrecision(value));
        }

        let sign = if negative { "-" } else { "" };
        let literal = if fraction.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{fraction}")
        };
        let value = Decimal::from_str(&literal).map_err(|_| unparseable())?;
        Self::new(value)
    }
}

/// Strips well-formed thousands separators from the whole-dollar part.
fn whole_digits(whole: &str) -> Option<String> {
    if !whole.bytes().all(|b| b.is_ascii_digit() || b == b',') {
        return None;
    }
    if !whole.contains(',') {
        return Some(whole.to_string());
    }
    let mut groups = whole.split(',');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return None;
    }
    let mut digits = head.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
