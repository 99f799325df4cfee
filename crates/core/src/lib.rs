//! Core denomination logic for Tally.
//!
//! This crate contains pure computation with ZERO I/O, logging, or
//! configuration dependencies. All arithmetic is exact decimal.
//!
//! # Modules
//!
//! - `denomination` - The fixed, descending table of monetary units
//! - `breakdown` - Greedy decomposition of an amount into denominations

pub mod breakdown;
pub mod denomination;

pub use breakdown::{
    Breakdown, BreakdownError, breakdown, breakdown_decimal, breakdown_greedy,
    breakdown_recursive, format, sum, verify,
};
pub use denomination::{Denomination, Division};
