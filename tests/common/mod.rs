#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use finance_core::{
    domain::{Transaction, TransactionKind},
    storage::{JsonStorage, PersistenceAdapter},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

const CATEGORIES: [&str; 5] = ["Moradia", "Alimentação", "Transporte", "Lazer", "Freelance"];
const DESCRIPTIONS: [&str; 4] = ["Aluguel", "Supermercado", "Uber", "Cinema"];

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a persistence facade backed by a unique temporary directory.
pub fn setup_test_env() -> (PersistenceAdapter, JsonStorage) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base)).expect("create json storage backend");
    let adapter = PersistenceAdapter::new(Box::new(storage.clone()));
    (adapter, storage)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

/// Deterministic pseudo-random collection spanning roughly two years.
///
/// Amounts are multiples of 0.25 so sums stay exact in floating point.
pub fn generated_transactions(count: usize, seed: u64) -> Vec<Transaction> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    let origin = at(2023, 1, 1, 0, 0, 0);
    (0..count)
        .map(|idx| {
            let kind = if next() % 3 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let amount = (next() % 4000) as f64 * 0.25;
            let category = CATEGORIES[(next() % CATEGORIES.len() as u64) as usize];
            let description = DESCRIPTIONS[(next() % DESCRIPTIONS.len() as u64) as usize];
            let when = origin + Duration::hours((next() % (24 * 730)) as i64);
            Transaction::new(idx as u64 + 1, kind, amount, category, description, when)
                .expect("generated transaction is valid")
        })
        .collect()
}
