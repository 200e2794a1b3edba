//! Audit trail for ledger mutations
//!
//! Every record added to or removed from the ledger produces an
//! [`AuditEntry`] holding a JSON snapshot of the record. Entries accumulate
//! in an in-memory [`AuditTrail`] owned by the ledger; nothing is written to
//! disk unless the caller asks for a JSONL dump.
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::ledger::Ledger;
//! use expense_ledger::models::{Money, PaymentMethod};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Coffee", Money::from_cents(1200), "Outros", PaymentMethod::Cash)?;
//!
//! let mut out = Vec::new();
//! ledger.audit().write_jsonl(&mut out)?;
//! assert_eq!(ledger.audit().len(), 1);
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

mod entry;
mod trail;

pub use entry::{AuditEntry, Operation};
pub use trail::AuditTrail;
