//! Scenario tests for the breakdown engine.
//!
//! Each case checks both walks against the expected breakdown and checks
//! that the expected breakdown sums back to the input.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_shared::Amount;

use super::engine::{breakdown_greedy, breakdown_recursive, format, sum};
use super::types::Breakdown;
use crate::denomination::Denomination::{
    ACent, ADollar, AMillion, Dime, DollarNinetyNine, FiftyDollars, FiveDollars, Nickel, Quarter,
    TenDollars, TwentyDollars,
};

#[rstest]
#[case::zero(dec!(0), Breakdown::new())]
#[case::one_cent(dec!(0.01), Breakdown::new().with(ACent, 1))]
#[case::dollar_quarter_cents(
    dec!(1.28),
    Breakdown::new().with(ADollar, 1).with(Quarter, 1).with(ACent, 3)
)]
#[case::bundled_units(
    dec!(19.48),
    Breakdown::new()
        .with(TenDollars, 1)
        .with(FiveDollars, 1)
        .with(DollarNinetyNine, 2)
        .with(Quarter, 2)
)]
#[case::fifties_and_quarters(
    dec!(100.75),
    Breakdown::new().with(FiftyDollars, 2).with(Quarter, 3)
)]
#[case::a_million_and_change(
    dec!(1000040.15),
    Breakdown::new()
        .with(AMillion, 1)
        .with(TwentyDollars, 2)
        .with(Dime, 1)
        .with(Nickel, 1)
)]
fn test_scenario(#[case] input: Decimal, #[case] expected: Breakdown) {
    let amount = Amount::new(input).unwrap();

    assert_eq!(breakdown_greedy(amount), expected, "greedy for {input}");
    assert_eq!(breakdown_recursive(amount), expected, "recursive for {input}");
    assert_eq!(sum(&expected), input, "sum for {input}");
}

#[rstest]
#[case(dec!(0), "")]
#[case(dec!(0.01), "1 x 1¢")]
#[case(dec!(19.48), "1 x $10, 1 x $5, 2 x $1.99, 2 x 25¢")]
#[case(dec!(1000040.15), "1 x $1 million, 2 x $20, 1 x 10¢, 1 x 5¢")]
fn test_scenario_format(#[case] input: Decimal, #[case] expected: &str) {
    let amount = Amount::new(input).unwrap();
    assert_eq!(format(&breakdown_greedy(amount)), expected);
}

#[rstest]
#[case(0.01)]
#[case(1.28)]
#[case(19.48)]
#[case(100.75)]
#[case(1_000_040.15)]
fn test_float_input_round_trips(#[case] input: f64) {
    let amount = Amount::try_from(input).unwrap();
    let result = breakdown_greedy(amount);
    assert_eq!(sum(&result), amount.value());
    assert_eq!(result, breakdown_recursive(amount));
}
