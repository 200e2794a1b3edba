//! Sample records present before any user action

use crate::models::{ExpenseRecord, Money, PaymentMethod};

/// The seed set, in ledger order (index 0 first)
pub fn seed_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new(
            "Conta de Luz",
            Money::from_units_cents(150, 50),
            "Moradia",
            PaymentMethod::Debit,
        ),
        ExpenseRecord::new(
            "Internet Fibra",
            Money::from_units_cents(99, 90),
            "Serviços",
            PaymentMethod::Credit,
        ),
        ExpenseRecord::new(
            "Mercado Semanal",
            Money::from_units_cents(450, 0),
            "Alimentação",
            PaymentMethod::Credit,
        ),
    ]
}
