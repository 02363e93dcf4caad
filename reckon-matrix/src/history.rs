//! Calculation history
//!
//! Session-scoped, newest first. Entries are write-once; the only way to
//! drop them is `clear`. Nothing persists across sessions.

use reckon_core::{Matrix, Value};
use serde::Serialize;

/// One successful operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub operation: String,
    pub operand_a: Matrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand_b: Option<Matrix>,
    pub result: Value,
}

/// Ordered log of past operations
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry and hand back a reference to it
    pub fn record(
        &mut self,
        operation: impl Into<String>,
        operand_a: Matrix,
        operand_b: Option<Matrix>,
        result: Value,
    ) -> &HistoryEntry {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            HistoryEntry {
                id,
                operation: operation.into(),
                operand_a,
                operand_b,
                result,
            },
        );
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
