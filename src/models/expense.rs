//! Expense record model
//!
//! A single expense entered by the user. Every field is fixed at creation;
//! the ledger only ever inserts or removes whole records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Credit,
    Debit,
    Cash,
}

impl PaymentMethod {
    /// Stable lowercase key, as used in settings and shell input
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "cash" => Ok(Self::Cash),
            other => Err(format!(
                "unknown payment method '{}' (expected credit, debit or cash)",
                other
            )),
        }
    }
}

/// One user expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// What was bought
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    /// When the record was created
    pub date: DateTime<Utc>,

    /// How it was paid
    pub payment_method: PaymentMethod,
}

impl ExpenseRecord {
    /// Create a record stamped with a fresh id and the current time
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category: category.into(),
            date: Utc::now(),
            payment_method,
        }
    }
}
