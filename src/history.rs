//! Append-only log of an account's committed transactions.

use crate::decimal::Money;
use crate::transaction::TxKind;
use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout used when rendering statements.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One committed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub kind: TxKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<10} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount
        )
    }
}

/// Chronological transaction log.
///
/// # Invariants
///
/// - Entries are only ever appended, never removed or edited
/// - Insertion order is chronological order
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Appends an entry stamped with the current local time.
    pub(crate) fn record(&mut self, kind: TxKind, amount: Money) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp: Local::now(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}
