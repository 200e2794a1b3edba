//! Expense Ledger - terminal expense tracker
//!
//! This library provides an in-memory expense ledger with its derived views
//! (total spent and a per-record breakdown for a proportional chart), plus
//! the thin shell the `expense-ledger` binary runs on top of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (expense records, ids, money)
//! - `ledger`: The ledger itself: add, remove, total, breakdown
//! - `reports`: The breakdown chart
//! - `display`: Locale-aware terminal formatting
//! - `audit`: In-memory audit trail of ledger mutations
//! - `config`: Configuration and path management
//! - `shell`: Login gate and dashboard command loop
//! - `logging`: tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::ledger::Ledger;
//! use expense_ledger::models::{Money, PaymentMethod};
//!
//! let mut ledger = Ledger::seeded();
//! ledger.add("Coffee", Money::from_cents(1200), "Outros", PaymentMethod::Cash)?;
//! assert_eq!(ledger.total(), Money::from_cents(71240));
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod shell;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
