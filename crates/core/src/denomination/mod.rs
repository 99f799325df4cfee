//! The fixed universe of monetary units.

pub mod table;

pub use table::{Denomination, Division};
