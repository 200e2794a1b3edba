//! The expense ledger
//!
//! Owns the ordered set of expense records (newest first) and computes the
//! derived views the dashboard renders: the total spent and the per-record
//! breakdown for the proportional chart.
//!
//! The ledger is an ordinary owned value. The shell constructs it once and
//! drives it through [`Ledger::add_from_input`], [`Ledger::remove`],
//! [`Ledger::total`] and [`Ledger::breakdown`].
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::ledger::{ExpenseInput, Ledger};
//! use expense_ledger::models::{Money, PaymentMethod};
//!
//! let mut ledger = Ledger::seeded();
//! assert_eq!(ledger.total(), Money::from_cents(70040));
//!
//! let id = ledger
//!     .add_from_input(ExpenseInput::new("Coffee", "12.00", PaymentMethod::Cash))?
//!     .id;
//! assert_eq!(ledger.total(), Money::from_cents(71240));
//! assert_eq!(ledger.breakdown()[0].label, "Coffee");
//!
//! ledger.remove(id);
//! assert_eq!(ledger.total(), Money::from_cents(70040));
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

mod input;
mod seed;

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditTrail};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseId, ExpenseRecord, Money, PaymentMethod};
use crate::reports::breakdown::{palette_color, BreakdownSlice};

pub use input::{ExpenseInput, DEFAULT_CATEGORY};
pub use seed::seed_records;

/// In-memory collection of expense records, newest first
///
/// Invariant: no two records share an id.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: VecDeque<ExpenseRecord>,
    audit: AuditTrail,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding the three sample records
    pub fn seeded() -> Self {
        Self {
            records: seed_records().into(),
            audit: AuditTrail::new(),
        }
    }

    /// Add an already-parsed expense
    ///
    /// The new record gets a fresh id and the current timestamp and becomes
    /// the first record of the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] if the description is blank,
    /// the amount is not positive, or the new total would not fit in a
    /// [`Money`]. The ledger is left untouched.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> LedgerResult<&ExpenseRecord> {
        let description: String = description.into();
        let description = description.trim();

        if description.is_empty() {
            warn!("rejected expense with empty description");
            return Err(LedgerError::invalid_input("description must not be empty"));
        }
        if !amount.is_positive() {
            warn!(%amount, "rejected expense with non-positive amount");
            return Err(LedgerError::invalid_input(format!(
                "amount must be greater than zero, got {}",
                amount
            )));
        }

        if self.total().checked_add(amount).is_none() {
            warn!(%amount, "rejected expense that overflows the total");
            return Err(LedgerError::invalid_input(format!(
                "amount {} is too large for the ledger total",
                amount
            )));
        }

        let record = ExpenseRecord::new(description, amount, category, payment_method);
        debug!(id = %record.id, %amount, "expense added");

        self.audit.record(AuditEntry::create(&record));
        self.records.push_front(record);

        Ok(&self.records[0])
    }

    /// Add an expense from raw form text
    ///
    /// Empty description or amount text is rejected with
    /// [`LedgerError::InvalidInput`]; amount text that is not a number is
    /// rejected with [`LedgerError::Parse`]. No record is created in either
    /// case.
    pub fn add_from_input(&mut self, input: ExpenseInput) -> LedgerResult<&ExpenseRecord> {
        if !input.is_complete() {
            warn!("rejected incomplete expense form");
            return Err(LedgerError::invalid_input(
                "description and amount are both required",
            ));
        }

        let decimal_separator = input.locale.decimal_separator();
        let amount = Money::parse_localized(&input.amount, decimal_separator).map_err(|e| {
            warn!(input = %input.amount, "rejected unparseable amount");
            LedgerError::parse(input.amount.trim(), e)
        })?;

        self.add(
            input.description,
            amount,
            input.category,
            input.payment_method,
        )
    }

    /// Remove the record with the given id
    ///
    /// Unknown ids are ignored; the removed record is returned when there
    /// was one. The order of the remaining records is unchanged.
    pub fn remove(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let position = self.records.iter().position(|r| r.id == id);
        let Some(position) = position else {
            debug!(%id, "remove ignored, no such expense");
            return None;
        };

        let record = self.records.remove(position)?;
        debug!(%id, "expense removed");
        self.audit.record(AuditEntry::delete(&record));
        Some(record)
    }

    /// Resolve user-typed id text to a record id
    ///
    /// Accepts a full UUID or a unique short prefix (see
    /// [`ExpenseId::matches`]). Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] if the text matches more than
    /// one record.
    pub fn resolve_id(&self, text: &str) -> LedgerResult<Option<ExpenseId>> {
        if let Ok(id) = ExpenseId::parse(text.trim()) {
            return Ok(self.get(id).map(|r| r.id));
        }

        let mut matches = self.records.iter().filter(|r| r.id.matches(text));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(Some(record.id)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(LedgerError::invalid_input(format!(
                "'{}' matches more than one expense",
                text.trim()
            ))),
        }
    }

    /// Sum of all amounts; zero for an empty ledger
    ///
    /// `add` refuses any record that would overflow this sum.
    pub fn total(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// One chart slice per record, in ledger order
    ///
    /// No grouping is done: two records with the same description give two
    /// slices. Slice `i` is colored with `PALETTE[i % 5]`.
    pub fn breakdown(&self) -> Vec<BreakdownSlice> {
        let total = self.total();
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| BreakdownSlice {
                label: record.description.clone(),
                value: record.amount,
                share: record.amount.percentage_of(total),
                color: palette_color(i),
            })
            .collect()
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Iterate records newest first
    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mutations recorded since the ledger was created
    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::display::Locale;

    fn coffee() -> ExpenseInput {
        ExpenseInput::new("Coffee", "12.00", PaymentMethod::Cash)
    }

    #[test]
    fn test_seeded_total() {
        let ledger = Ledger::seeded();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.total(), Money::from_cents(70040));
        assert!(ledger.audit().is_empty());
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::zero());
        assert!(ledger.breakdown().is_empty());
    }

    #[test]
    fn test_add_prepends() {
        let mut ledger = Ledger::seeded();
        let record = ledger.add_from_input(coffee()).unwrap();
        assert_eq!(record.category, "Outros");
        assert_eq!(record.payment_method, PaymentMethod::Cash);

        assert_eq!(ledger.total(), Money::from_cents(71240));
        let breakdown = ledger.breakdown();
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].label, "Coffee");
        assert_eq!(breakdown[0].value, Money::from_cents(1200));
        assert_eq!(breakdown[1].label, "Conta de Luz");
    }

    #[test]
    fn test_newest_first() {
        let mut ledger = Ledger::new();
        for (name, amount) in [("A", "1"), ("B", "2"), ("C", "3")] {
            ledger
                .add_from_input(ExpenseInput::new(name, amount, PaymentMethod::Credit))
                .unwrap();
        }
        let labels: Vec<_> = ledger.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(labels, ["C", "B", "A"]);
    }

    #[test]
    fn test_remove_seed_record() {
        let mut ledger = Ledger::seeded();
        ledger.add_from_input(coffee()).unwrap();

        let luz = ledger
            .iter()
            .find(|r| r.description == "Conta de Luz")
            .map(|r| r.id)
            .unwrap();

        let removed = ledger.remove(luz).unwrap();
        assert_eq!(removed.amount, Money::from_cents(15050));
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.total(), Money::from_cents(56190));

        let labels: Vec<_> = ledger.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(labels, ["Coffee", "Internet Fibra", "Mercado Semanal"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut ledger = Ledger::seeded();
        let id = ledger.iter().nth(1).unwrap().id;

        assert!(ledger.remove(id).is_some());
        let after_first: Vec<_> = ledger.iter().cloned().collect();

        assert!(ledger.remove(id).is_none());
        let after_second: Vec<_> = ledger.iter().cloned().collect();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = Ledger::seeded();
        assert!(ledger.remove(ExpenseId::new()).is_none());
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.total(), Money::from_cents(70040));
        assert!(ledger.resolve_id("nonexistent-id").unwrap().is_none());
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut ledger = Ledger::seeded();

        let err = ledger
            .add_from_input(ExpenseInput::new("", "10", PaymentMethod::Cash))
            .unwrap_err();
        assert!(err.is_invalid_input());

        let err = ledger
            .add_from_input(ExpenseInput::new("Coffee", "", PaymentMethod::Cash))
            .unwrap_err();
        assert!(err.is_invalid_input());

        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_add_rejects_unparseable_amount() {
        let mut ledger = Ledger::seeded();
        let err = ledger
            .add_from_input(ExpenseInput::new("Coffee", "twelve", PaymentMethod::Cash))
            .unwrap_err();
        assert!(err.is_parse());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_add_rejects_out_of_range_amount() {
        let mut ledger = Ledger::seeded();
        let err = ledger
            .add_from_input(ExpenseInput::new(
                "Big",
                "92233720368547758",
                PaymentMethod::Cash,
            ))
            .unwrap_err();
        assert!(err.is_parse());
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.total(), Money::from_cents(70040));

        ledger
            .add_from_input(ExpenseInput::new(
                "Max",
                "999.999.999.999,99",
                PaymentMethod::Cash,
            ))
            .unwrap();
        assert_eq!(
            ledger.total(),
            Money::MAX_INPUT.checked_add(Money::from_cents(70040)).unwrap()
        );
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let mut ledger = Ledger::seeded();
        let err = ledger
            .add(
                "Big",
                Money::from_cents(i64::MAX - 100),
                "Outros",
                PaymentMethod::Cash,
            )
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger.len(), 3);
        assert!(ledger.audit().is_empty());
        assert_eq!(ledger.total(), Money::from_cents(70040));

        ledger
            .add(
                "Exact",
                Money::from_cents(i64::MAX - 70040),
                "Outros",
                PaymentMethod::Cash,
            )
            .unwrap();
        assert_eq!(ledger.total(), Money::from_cents(i64::MAX));
        assert!(ledger
            .add("One more", Money::from_cents(1), "Outros", PaymentMethod::Cash)
            .is_err());
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_amount_grouping_follows_locale() {
        let mut ledger = Ledger::new();

        let tv = ledger
            .add_from_input(
                ExpenseInput::new("TV", "1,234", PaymentMethod::Cash).with_locale(Locale::EnUs),
            )
            .unwrap();
        assert_eq!(tv.amount, Money::from_cents(123400));

        let sofa = ledger
            .add_from_input(
                ExpenseInput::new("Sofa", "1.234", PaymentMethod::Cash).with_locale(Locale::PtBr),
            )
            .unwrap();
        assert_eq!(sofa.amount, Money::from_cents(123400));

        let gum = ledger
            .add_from_input(
                ExpenseInput::new("Gum", "2,50", PaymentMethod::Cash).with_locale(Locale::PtBr),
            )
            .unwrap();
        assert_eq!(gum.amount, Money::from_cents(250));

        assert_eq!(ledger.total(), Money::from_cents(247050));
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let mut ledger = Ledger::new();
        assert!(ledger
            .add("Refund", Money::from_cents(-500), "Outros", PaymentMethod::Cash)
            .unwrap_err()
            .is_invalid_input());
        assert!(ledger
            .add("Nothing", Money::zero(), "Outros", PaymentMethod::Cash)
            .unwrap_err()
            .is_invalid_input());
        assert!(ledger
            .add("   ", Money::from_cents(100), "Outros", PaymentMethod::Cash)
            .unwrap_err()
            .is_invalid_input());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_total_matches_sum_of_adds() {
        let mut ledger = Ledger::new();
        let mut expected = Money::zero();
        for cents in [1, 10, 99, 1005, 12345, 33, 7] {
            let amount = Money::from_cents(cents);
            expected += amount;
            ledger
                .add("Item", amount, DEFAULT_CATEGORY, PaymentMethod::Debit)
                .unwrap();
        }
        assert_eq!(ledger.total(), expected);
        assert_eq!(ledger.breakdown().len(), ledger.len());
    }

    #[test]
    fn test_decimal_safe_accumulation() {
        let mut ledger = Ledger::new();
        for _ in 0..1000 {
            ledger
                .add_from_input(ExpenseInput::new("Bala", "0.10", PaymentMethod::Cash))
                .unwrap();
        }
        assert_eq!(ledger.total(), Money::from_cents(10000));
    }

    #[test]
    fn test_breakdown_palette_and_shares() {
        let mut ledger = Ledger::new();
        for _ in 0..6 {
            ledger
                .add("Same", Money::from_cents(100), "Outros", PaymentMethod::Cash)
                .unwrap();
        }
        let slices = ledger.breakdown();
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].color, "#10b981");
        assert_eq!(slices[4].color, "#8b5cf6");
        assert_eq!(slices[5].color, slices[0].color);

        let share_sum: f64 = slices.iter().map(|s| s.share).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_short_id() {
        let mut ledger = Ledger::seeded();
        let id = ledger.add_from_input(coffee()).unwrap().id;

        assert_eq!(ledger.resolve_id(&id.to_string()).unwrap(), Some(id));
        assert_eq!(
            ledger.resolve_id(&id.as_uuid().to_string()).unwrap(),
            Some(id)
        );
    }

    #[test]
    fn test_mutations_are_audited() {
        let mut ledger = Ledger::seeded();
        let id = ledger.add_from_input(coffee()).unwrap().id;
        ledger.remove(id);
        ledger.remove(id);

        let entries = ledger.audit().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[1].entity_id, id.as_uuid().to_string());
    }
}
