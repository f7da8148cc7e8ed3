//! Append-only transaction log, owned one-to-one by an account.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::amount::Amount;
use crate::transaction::TransactionKind;

/// One accepted transaction. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Amount,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Kind of the recorded transaction.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount the transaction carried.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Moment the entry was appended.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Ordered log of accepted transactions. Entries are only ever appended,
/// never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct TransactionHistory {
    entries: Vec<HistoryEntry>,
}

impl TransactionHistory {
    /// Append an entry stamped with the current time. Never fails.
    pub fn record(&mut self, kind: TransactionKind, amount: Amount) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            recorded_at: Utc::now(),
        });
    }

    /// Entries in insertion order, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
