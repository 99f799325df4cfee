//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - A validated, cent-exact `Amount` type
//! - Application-wide error types
//! - Configuration management for the front ends

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{Amount, AmountError, Strategy};
