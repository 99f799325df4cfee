//! Common types used across the application.

pub mod money;
pub mod strategy;

pub use money::{Amount, AmountError};
pub use strategy::Strategy;
