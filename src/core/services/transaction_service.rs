//! Business logic helpers for creating, replacing, and removing transactions.

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{Result, TrackerError};

/// Raw form values for a transaction that has not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Validates the draft into a transaction carrying `id`.
    pub fn into_transaction(self, id: u64) -> Result<Transaction> {
        Transaction::parse(
            id,
            self.kind,
            &self.amount,
            self.category,
            self.description,
            &self.date,
        )
    }
}

/// Mutations over a caller-owned collection. Every call returns a new collection.
pub struct TransactionService;

impl TransactionService {
    /// Next identifier: one past the largest existing id, or 1 when empty.
    pub fn next_id<T: Identifiable>(items: &[T]) -> u64 {
        items.iter().map(Identifiable::id).max().map_or(1, |max| max + 1)
    }

    /// Validates `draft` and appends it with a fresh id.
    pub fn add(mut txs: Vec<Transaction>, draft: TransactionDraft) -> Result<Vec<Transaction>> {
        let txn = draft.into_transaction(Self::next_id(&txs))?;
        tracing::debug!(transaction = %txn.display_label(), "adding transaction");
        txs.push(txn);
        Ok(txs)
    }

    /// Replaces the transaction identified by `id` with one built from `draft`.
    ///
    /// The replacement keeps the id and position; kind and every other field
    /// come from the draft.
    pub fn replace(
        mut txs: Vec<Transaction>,
        id: u64,
        draft: TransactionDraft,
    ) -> Result<Vec<Transaction>> {
        let position = txs
            .iter()
            .position(|txn| txn.id() == id)
            .ok_or(TrackerError::TransactionNotFound(id))?;
        let txn = draft.into_transaction(id)?;
        tracing::debug!(transaction = %txn.display_label(), "replacing transaction");
        txs[position] = txn;
        Ok(txs)
    }

    /// Removes the transaction identified by `id`.
    pub fn remove(mut txs: Vec<Transaction>, id: u64) -> Result<Vec<Transaction>> {
        let position = txs
            .iter()
            .position(|txn| txn.id() == id)
            .ok_or(TrackerError::TransactionNotFound(id))?;
        let removed = txs.remove(position);
        tracing::debug!(transaction = %removed.display_label(), "removed transaction");
        Ok(txs)
    }

    pub fn find(txs: &[Transaction], id: u64) -> Option<&Transaction> {
        txs.iter().find(|txn| txn.id() == id)
    }
}
