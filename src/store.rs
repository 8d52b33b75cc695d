//! In-memory expense store
//!
//! The single mutable collection of recorded expenses, owned by the
//! application session. It grows only by append and is read by the query
//! engine through an immutable snapshot slice. Nothing is persisted; the
//! store lives and dies with the process.

use crate::models::ExpenseRecord;

/// The ordered collection of all recorded expenses
///
/// Insertion order is significant: it is the tie-break order the query
/// engine's stable sort preserves.
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing records, preserving their order
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Append a validated record
    ///
    /// This is the only way the collection grows; records are never edited
    /// or removed afterwards.
    pub fn append(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Snapshot of all records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
