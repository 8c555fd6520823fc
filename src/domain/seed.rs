//! Default transactions used when no persisted data is available.

use chrono::{NaiveDate, NaiveDateTime};

use super::transaction::{Transaction, TransactionKind};

const SEED: [(u64, TransactionKind, f64, &str, &str, u32); 6] = [
    (1, TransactionKind::Income, 5000.0, "Salário", "Salário mensal", 5),
    (2, TransactionKind::Income, 800.0, "Freelance", "Projeto freelance", 12),
    (3, TransactionKind::Expense, 1200.0, "Moradia", "Aluguel", 10),
    (4, TransactionKind::Expense, 450.0, "Alimentação", "Supermercado", 8),
    (5, TransactionKind::Expense, 200.0, "Transporte", "Combustível", 15),
    (6, TransactionKind::Expense, 150.0, "Lazer", "Cinema", 20),
];

const SEED_YEAR: i32 = 2024;
const SEED_MONTH: u32 = 3;

/// Returns the six canonical seed transactions, all dated March 2024.
pub fn default_transactions() -> Vec<Transaction> {
    SEED.iter()
        .map(|&(id, kind, amount, category, description, day)| {
            Transaction::new(id, kind, amount, category, description, seed_date(day))
                .expect("seed transactions are valid")
        })
        .collect()
}

fn seed_date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(SEED_YEAR, SEED_MONTH, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("seed dates are valid")
}
