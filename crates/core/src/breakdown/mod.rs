//! Greedy decomposition of an amount into denominations.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;

pub use engine::{
    breakdown, breakdown_decimal, breakdown_greedy, breakdown_recursive, format, sum, verify,
};
pub use error::BreakdownError;
pub use types::Breakdown;
