//! Core data models for the expense ledger
//!
//! This module contains the data structures of the expense domain: records,
//! their identifiers, payment methods and the fixed-point money type.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{ExpenseRecord, PaymentMethod};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
