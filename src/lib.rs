#![doc(test(attr(deny(warnings))))]

//! Finance Core is the analytics engine behind a personal income and expense
//! tracker: transaction entities, search and period filtering, summary
//! aggregations, and the persistence port the engine is fed through.
//!
//! Every engine operation is a pure function over a caller-owned slice of
//! [`domain::Transaction`] values.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::services::{FilterService, SummaryService, TransactionService};
pub use crate::domain::{FilterCriteria, Period, Transaction, TransactionKind};
pub use crate::errors::{Result, TrackerError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
