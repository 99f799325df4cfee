//! Text and JSON rendering of breakdowns and the denomination table.

use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{Breakdown, Denomination};
use tally_shared::config::OutputFormat;
use tally_shared::{Amount, Strategy};

/// One computed breakdown, ready to print.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Input amount.
    pub amount: Amount,
    /// Walk that produced the breakdown.
    pub strategy: Strategy,
    /// Denomination counts.
    pub breakdown: Breakdown,
    /// Number of pieces handed out.
    pub pieces: u64,
    /// Sum of the breakdown, at cent scale like `amount`.
    pub total: Decimal,
}

impl Report {
    /// Builds a report for `breakdown` of `amount`.
    pub fn new(amount: Amount, strategy: Strategy, breakdown: Breakdown) -> Self {
        Self {
            amount,
            strategy,
            pieces: breakdown.pieces(),
            total: breakdown.total(),
            breakdown,
        }
    }

    /// Renders a single line in the requested format.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(format!("{}: {}", self.amount, self.breakdown)),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

#[derive(Serialize)]
struct TableRow {
    name: &'static str,
    display: &'static str,
    value: Decimal,
}

/// Renders the denomination table, one unit per line, largest first.
pub fn render_table(format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(Denomination::iter()
            .map(|d| format!("{:<20}{:>12}{:>14}", d.name(), d.display(), d.value()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let rows: Vec<TableRow> = Denomination::iter()
                .map(|d| TableRow {
                    name: d.name(),
                    display: d.display(),
                    value: d.value(),
                })
                .collect();
            serde_json::to_string(&rows)
        }
    }
}
