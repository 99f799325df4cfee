//! Breakdown engine.
//!
//! Walks the denomination table once, largest unit first, consuming as many
//! of each unit as fit into the running remainder. Two walks are provided:
//! an iterative scan and an accumulator-passing recursion. They must agree
//! for every input.
//!
//! All arithmetic runs on [`Amount`], so no binary floating-point value ever
//! reaches a comparison or a division.

use rust_decimal::Decimal;
use tally_shared::{Amount, Strategy};

use super::error::BreakdownError;
use super::types::Breakdown;
use crate::denomination::{Denomination, Division};

/// Breaks `amount` down with an iterative left-to-right scan.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::{Denomination, breakdown_greedy};
/// use tally_shared::Amount;
///
/// let result = breakdown_greedy(Amount::new(dec!(100.75)).unwrap());
/// assert_eq!(result.get(Denomination::FiftyDollars), Some(2));
/// assert_eq!(result.get(Denomination::Quarter), Some(3));
/// assert_eq!(result.len(), 2);
/// ```
#[must_use]
pub fn breakdown_greedy(amount: Amount) -> Breakdown {
    let mut result = Breakdown::new();
    let mut remainder = amount;
    for denomination in Denomination::iter() {
        if remainder.is_zero() {
            break;
        }
        if !denomination.can_cover(remainder) {
            continue;
        }
        let Division {
            quotient,
            remainder: rest,
        } = denomination.divide(remainder);
        result.record(denomination, quotient);
        remainder = rest;
    }
    result
}

/// Breaks `amount` down by recursing over the table, carrying the remainder
/// and the partial result as accumulators.
#[must_use]
pub fn breakdown_recursive(amount: Amount) -> Breakdown {
    walk(&Denomination::ALL, amount, Breakdown::new())
}

fn walk(table: &[Denomination], remainder: Amount, mut acc: Breakdown) -> Breakdown {
    if remainder.is_zero() {
        return acc;
    }
    let Some((&denomination, rest)) = table.split_first() else {
        return acc;
    };
    let division = denomination.divide(remainder);
    acc.record(denomination, division.quotient);
    walk(rest, division.remainder, acc)
}

/// Breaks `amount` down with the chosen strategy.
#[must_use]
pub fn breakdown(amount: Amount, strategy: Strategy) -> Breakdown {
    match strategy {
        Strategy::Greedy => breakdown_greedy(amount),
        Strategy::Recursive => breakdown_recursive(amount),
    }
}

/// Validates an exact decimal, then breaks it down.
///
/// # Errors
///
/// Returns [`BreakdownError::InvalidAmount`] for negative, out-of-range or
/// sub-cent input.
pub fn breakdown_decimal(
    amount: Decimal,
    strategy: Strategy,
) -> Result<Breakdown, BreakdownError> {
    let amount = Amount::new(amount)?;
    Ok(breakdown(amount, strategy))
}

/// Renders a breakdown as `"<count> x <display>"` entries joined by `", "`.
#[must_use]
pub fn format(breakdown: &Breakdown) -> String {
    breakdown.to_string()
}

/// Sums a breakdown back into a value.
#[must_use]
pub fn sum(breakdown: &Breakdown) -> Decimal {
    breakdown.total()
}

/// Checks that `breakdown` sums exactly to `amount`.
///
/// # Errors
///
/// Returns [`BreakdownError::Mismatch`] if the sums differ.
pub fn verify(amount: Amount, breakdown: &Breakdown) -> Result<(), BreakdownError> {
    let actual = sum(breakdown);
    if actual == amount.value() {
        Ok(())
    } else {
        Err(BreakdownError::Mismatch {
            expected: amount.value(),
            actual,
        })
    }
}
