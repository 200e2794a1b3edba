//! Raw form input for a new expense
//!
//! Holds the text exactly as the user typed it. Turning it into a record is
//! the job of [`Ledger::add_from_input`](super::Ledger::add_from_input).

use crate::display::Locale;
use crate::models::PaymentMethod;

/// Category given to every record entered through the shell
pub const DEFAULT_CATEGORY: &str = "Outros";

/// Unvalidated input collected by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub description: String,
    /// Amount text, parsed with
    /// [`Money::parse_localized`](crate::models::Money::parse_localized)
    pub amount: String,
    pub category: String,
    pub payment_method: PaymentMethod,
    /// Decides which separator in the amount text is the decimal point
    pub locale: Locale,
}

impl ExpenseInput {
    /// Create input with the default category
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: DEFAULT_CATEGORY.to_string(),
            payment_method,
            locale: Locale::default(),
        }
    }

    /// Read the amount text with this locale's separators
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Override the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// The shell's guard: both text fields must be filled in
    pub fn is_complete(&self) -> bool {
        !self.description.trim().is_empty() && !self.amount.trim().is_empty()
    }
}
