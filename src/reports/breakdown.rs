//! Spending breakdown chart
//!
//! Turns the ledger's per-record slices into a proportional bar chart for
//! the terminal. Each slice's bar length is its share of the total.

use serde::Serialize;

use crate::display::{truncate, Locale};
use crate::ledger::Ledger;
use crate::models::Money;

/// Chart colors, reused cyclically
pub const PALETTE: [&str; 5] = ["#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6"];

/// Width of a 100% bar, in characters
const BAR_WIDTH: usize = 30;

/// Color of the slice at `index`
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One chart slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    /// Record description
    pub label: String,
    /// Record amount
    pub value: Money,
    /// Percentage of the ledger total (0.0 when the total is zero)
    pub share: f64,
    pub color: &'static str,
}

/// Breakdown of the whole ledger, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownReport {
    pub slices: Vec<BreakdownSlice>,
    pub total: Money,
}

impl BreakdownReport {
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            slices: ledger.breakdown(),
            total: ledger.total(),
        }
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self, locale: Locale) -> String {
        let mut output = String::new();

        output.push_str(locale.chart_heading());
        output.push('\n');
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.slices.is_empty() {
            output.push_str(locale.empty_message());
            output.push('\n');
            return output;
        }

        for slice in &self.slices {
            let filled = ((slice.share / 100.0) * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let bar = format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled));

            output.push_str(&format!(
                "{} {} {:<20} {:>5.1}% {:>14}\n",
                slice.color,
                bar,
                truncate(&slice.label, 20),
                slice.share,
                locale.format_money(slice.value)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<59} {:>12}\n",
            locale.total_label(),
            locale.format_money(self.total)
        ));

        output
    }
}
