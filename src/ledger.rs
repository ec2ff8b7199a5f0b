use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdraw,
}

/// One completed operation. `balance_after` is the settled balance right
/// after the entry was recorded; debt movements on credit accounts are not
/// reflected here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub kind: EntryKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
}

/// Append-only transaction log. Insertion order is chronological order, and
/// appending is the only mutation there is.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub(crate) fn record(&mut self, kind: EntryKind, amount: Decimal, balance_after: Decimal) {
        self.entries.push(Transaction {
            timestamp: Utc::now(),
            kind,
            amount,
            balance_after,
        });
    }

    /// Detached copy of the log, oldest entry first. Mutating the returned
    /// sequence has no effect on the ledger itself.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
