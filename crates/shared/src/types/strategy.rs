//! Breakdown strategy selection.

use serde::{Deserialize, Serialize};

/// Which walk over the denomination table to run.
///
/// Both strategies produce identical breakdowns; the choice only affects
/// how the table is traversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Iterative left-to-right scan with a running remainder.
    #[default]
    Greedy,
    /// Accumulator-passing walk over the table.
    Recursive,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Recursive => write!(f, "recursive"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "recursive" => Ok(Self::Recursive),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}
