//! Property-based tests for the breakdown engine.
//!
//! - Round trip: sum(breakdown(a)) == a
//! - Positivity: no zero counts
//! - Greedy and recursive walks agree
//! - Canonical order of entries
//! - Each unit is used as often as it fits

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::Amount;

use super::engine::{breakdown_greedy, breakdown_recursive, format, sum, verify};
use super::types::Breakdown;
use crate::denomination::Denomination;

/// Strategy to generate amounts from 0.00 to 99,999,999.99.
fn any_amount() -> impl Strategy<Value = Amount> {
    (0i64..10_000_000_000i64).prop_map(|cents| Amount::new(Decimal::new(cents, 2)).unwrap())
}

/// Strategy to generate small amounts (0.00 to 99.99) where the bundled
/// $1.99 unit matters most.
fn small_amount() -> impl Strategy<Value = Amount> {
    (0u32..10_000u32).prop_map(Amount::from_cents)
}

/// Strategy to generate a caller-built breakdown.
fn any_counts() -> impl Strategy<Value = Vec<(Denomination, u64)>> {
    prop::collection::vec(
        (prop::sample::select(Denomination::ALL.to_vec()), 0u64..1_000),
        0..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* amount, the breakdown sums back to exactly that amount.
    #[test]
    fn prop_round_trip(amount in any_amount()) {
        let result = breakdown_greedy(amount);
        prop_assert_eq!(sum(&result), amount.value());
        prop_assert!(verify(amount, &result).is_ok());
    }

    /// *For any* amount, every count in the breakdown is positive.
    #[test]
    fn prop_counts_positive(amount in any_amount()) {
        for (denomination, count) in breakdown_greedy(amount).iter() {
            prop_assert!(count > 0, "{} has zero count", denomination.name());
        }
    }

    /// *For any* amount, both walks produce the same breakdown.
    #[test]
    fn prop_greedy_matches_recursive(amount in any_amount()) {
        prop_assert_eq!(breakdown_greedy(amount), breakdown_recursive(amount));
    }

    /// Same property, concentrated on the sub-$100 range.
    #[test]
    fn prop_greedy_matches_recursive_small(amount in small_amount()) {
        let greedy = breakdown_greedy(amount);
        prop_assert_eq!(&greedy, &breakdown_recursive(amount));
        prop_assert_eq!(sum(&greedy), amount.value());
    }

    /// *For any* amount, entries come out strictly descending by value.
    #[test]
    fn prop_canonical_order(amount in any_amount()) {
        let values: Vec<Decimal> = breakdown_greedy(amount)
            .denominations()
            .map(Denomination::value)
            .collect();
        for pair in values.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    /// *For any* amount, each denomination takes every piece it can: what
    /// is left after it is always smaller than its value.
    #[test]
    fn prop_greedy_is_maximal(amount in any_amount()) {
        let result = breakdown_greedy(amount);
        let mut remainder = amount.value();
        for denomination in Denomination::iter() {
            remainder -= denomination.amount_of(result.get(denomination).unwrap_or(0));
            prop_assert!(remainder >= Decimal::ZERO);
            prop_assert!(remainder < denomination.value());
        }
        prop_assert!(remainder.is_zero());
    }

    /// *For any* caller-built breakdown, sum is the weighted total and the
    /// formatted text has one entry per denomination.
    #[test]
    fn prop_caller_built_breakdown(counts in any_counts()) {
        let expected: Decimal = counts
            .iter()
            .map(|(denomination, count)| denomination.amount_of(*count))
            .sum();
        let built: Breakdown = counts.into_iter().collect();

        prop_assert_eq!(sum(&built), expected);
        let text = format(&built);
        let entries = if text.is_empty() { 0 } else { text.split(", ").count() };
        prop_assert_eq!(entries, built.len());
    }
}
