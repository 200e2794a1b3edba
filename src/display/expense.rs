//! Expense display formatting
//!
//! Renders the history list and the total card for the terminal.

use super::{truncate, Locale};
use crate::ledger::Ledger;
use crate::models::ExpenseRecord;

/// Format a single record as a history row
///
/// ```text
/// exp-1a2b3c4d  Coffee                    Outros · Dinheiro      - R$ 12,00
/// ```
pub fn format_expense_row(record: &ExpenseRecord, locale: Locale) -> String {
    let detail = format!(
        "{} · {}",
        record.category,
        locale.payment_label(record.payment_method)
    );

    format!(
        "{}  {:<24} {:<22} - {:>12}",
        record.id,
        truncate(&record.description, 24),
        truncate(&detail, 22),
        locale.format_money(record.amount)
    )
}

/// Format the full history list, newest first
pub fn format_expense_list(ledger: &Ledger, locale: Locale) -> String {
    let mut output = String::new();
    output.push_str(locale.history_heading());
    output.push('\n');
    output.push_str(&"-".repeat(76));
    output.push('\n');

    if ledger.is_empty() {
        output.push_str(locale.empty_message());
        output.push('\n');
        return output;
    }

    for record in ledger.iter() {
        output.push_str(&format_expense_row(record, locale));
        output.push('\n');
    }

    output
}

/// Format the total card
pub fn format_total(ledger: &Ledger, locale: Locale) -> String {
    format!(
        "{}: {}\n",
        locale.total_label(),
        locale.format_money(ledger.total())
    )
}
