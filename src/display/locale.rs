//! Locale-dependent presentation strings
//!
//! Currency formatting and the handful of labels the shell shows. Only the
//! two locales below are supported; amounts are always in the one implied
//! currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Money, PaymentMethod};

/// Display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Brazilian Portuguese, `R$ 1.234,56`
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// US English, `$1,234.56`
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::PtBr => ',',
            Self::EnUs => '.',
        }
    }

    pub fn grouping_separator(&self) -> char {
        match self {
            Self::PtBr => '.',
            Self::EnUs => ',',
        }
    }

    /// Format an amount as a two-decimal currency string
    ///
    /// The sign goes before the currency symbol: `-R$ 5,50`, `-$5.50`.
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let digits = amount
            .abs()
            .format_grouped(self.decimal_separator(), self.grouping_separator());
        match self {
            Self::PtBr => format!("{}R$ {}", sign, digits),
            Self::EnUs => format!("{}${}", sign, digits),
        }
    }

    /// Localized label for a payment method
    pub fn payment_label(&self, method: PaymentMethod) -> &'static str {
        match (self, method) {
            (Self::PtBr, PaymentMethod::Credit) => "Crédito",
            (Self::PtBr, PaymentMethod::Debit) => "Débito",
            (Self::PtBr, PaymentMethod::Cash) => "Dinheiro",
            (Self::EnUs, PaymentMethod::Credit) => "Credit",
            (Self::EnUs, PaymentMethod::Debit) => "Debit",
            (Self::EnUs, PaymentMethod::Cash) => "Cash",
        }
    }

    pub fn total_label(&self) -> &'static str {
        match self {
            Self::PtBr => "Total Gasto",
            Self::EnUs => "Total Spent",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::PtBr => "Nenhuma conta cadastrada.",
            Self::EnUs => "No expenses recorded.",
        }
    }

    pub fn history_heading(&self) -> &'static str {
        match self {
            Self::PtBr => "Histórico de Contas",
            Self::EnUs => "Expense History",
        }
    }

    pub fn chart_heading(&self) -> &'static str {
        "Dashboard"
    }

    /// Greeting shown after login
    pub fn welcome(&self, user: Option<&str>) -> String {
        match (self, user) {
            (Self::PtBr, Some(user)) => format!("Bem-vindo, {}!", user),
            (Self::PtBr, None) => "Bem-vindo!".to_string(),
            (Self::EnUs, Some(user)) => format!("Welcome, {}!", user),
            (Self::EnUs, None) => "Welcome!".to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            other => Err(format!(
                "unsupported locale '{}' (expected pt-BR or en-US)",
                other
            )),
        }
    }
}
