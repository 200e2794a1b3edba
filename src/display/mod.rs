//! Display formatting utilities
//!
//! Terminal rendering for the history list, the total and locale-aware
//! currency strings.

pub mod expense;
pub mod locale;

pub use expense::{format_expense_list, format_expense_row, format_total};
pub use locale::Locale;

/// Truncate a string to at most `max_len` characters, marking the cut
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
