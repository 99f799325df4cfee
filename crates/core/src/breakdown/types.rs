//! Breakdown result type.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::money::CENT_SCALE;

use crate::denomination::Denomination;

/// Mapping from denomination to a strictly positive count.
///
/// Entries iterate in table order (largest unit first), never in insertion
/// order. A denomination with a zero count is absent, never stored as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Denomination, u64>", into = "BTreeMap<Denomination, u64>")]
pub struct Breakdown {
    counts: BTreeMap<Denomination, u64>,
}

impl Breakdown {
    /// Creates an empty breakdown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Merges a signed `delta` into the count for `denomination`.
    ///
    /// The entry is removed once its count drops to zero or below, so a
    /// caller can build or correct an expected breakdown incrementally.
    #[must_use]
    pub fn with(mut self, denomination: Denomination, delta: i64) -> Self {
        let current = self.counts.get(&denomination).copied().unwrap_or(0);
        let total = i128::from(current) + i128::from(delta);
        if total <= 0 {
            self.counts.remove(&denomination);
        } else {
            let count = u64::try_from(total).unwrap_or(u64::MAX);
            self.counts.insert(denomination, count);
        }
        self
    }

    /// Records `count` units; a zero count leaves the breakdown untouched.
    pub(crate) fn record(&mut self, denomination: Denomination, count: u64) {
        if count > 0 {
            self.counts.insert(denomination, count);
        }
    }

    /// Count for `denomination`, if present.
    #[must_use]
    pub fn get(&self, denomination: Denomination) -> Option<u64> {
        self.counts.get(&denomination).copied()
    }

    /// Iterates `(denomination, count)` pairs in table order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Denomination, u64)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }

    /// Denominations present, in table order.
    pub fn denominations(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.counts.keys().copied()
    }

    /// Number of distinct denominations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no denomination is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of physical pieces (sum of counts).
    #[must_use]
    pub fn pieces(&self) -> u64 {
        self.counts.values().fold(0, |acc, c| acc.saturating_add(*c))
    }

    /// Sum of `count * value` over every entry, at cent scale.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let mut total: Decimal = self
            .iter()
            .map(|(denomination, count)| denomination.amount_of(count))
            .sum();
        total.rescale(CENT_SCALE);
        total
    }
}

impl fmt::Display for Breakdown {
    /// Entries as `"<count> x <display>"` joined by `", "`; empty renders as `""`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (denomination, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&denomination.format_count(count))?;
        }
        Ok(())
    }
}

impl FromIterator<(Denomination, u64)> for Breakdown {
    /// Duplicate denominations are summed, zero counts dropped.
    fn from_iter<I: IntoIterator<Item = (Denomination, u64)>>(iter: I) -> Self {
        let mut breakdown = Self::new();
        for (denomination, count) in iter {
            let merged = breakdown
                .get(denomination)
                .unwrap_or(0)
                .saturating_add(count);
            breakdown.record(denomination, merged);
        }
        breakdown
    }
}

impl TryFrom<BTreeMap<Denomination, u64>> for Breakdown {
    type Error = String;

    fn try_from(counts: BTreeMap<Denomination, u64>) -> Result<Self, Self::Error> {
        if let Some((denomination, _)) = counts.iter().find(|(_, c)| **c == 0) {
            return Err(format!("Zero count for {}", denomination.name()));
        }
        Ok(Self { counts })
    }
}

impl From<Breakdown> for BTreeMap<Denomination, u64> {
    fn from(breakdown: Breakdown) -> Self {
        breakdown.counts
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = (&'a Denomination, &'a u64);
    type IntoIter = btree_map::Iter<'a, Denomination, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
