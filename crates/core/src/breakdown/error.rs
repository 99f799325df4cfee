//! Breakdown error types.

use rust_decimal::Decimal;
use tally_shared::AmountError;
use thiserror::Error;

/// Breakdown-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakdownError {
    /// Input could not be turned into a valid amount.
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    /// Breakdown does not sum back to the amount it was computed from.
    #[error("Breakdown sums to {actual}, expected {expected}")]
    Mismatch {
        /// Amount the breakdown was computed from.
        expected: Decimal,
        /// Sum of the breakdown.
        actual: Decimal,
    },
}
