//! Reports derived from the ledger

pub mod breakdown;

pub use breakdown::{BreakdownReport, BreakdownSlice, PALETTE};
