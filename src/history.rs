//! Calculation history
//!
//! A bounded, most-recent-first log of completed computations. Entries are
//! `(expression, result)` pairs as reported by the engine; the presentation
//! layer records them after each successful compute and persists the log
//! between sessions.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of entries kept; older entries fall off the end.
pub const HISTORY_CAP: usize = 10;

/// A single completed computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as it stood before evaluation, e.g. `"2 + 3"`.
    pub expression: String,
    /// The canonical result text, e.g. `"5"`.
    pub result: String,
    /// Unix timestamp (seconds) of when the computation completed.
    pub timestamp: u64,
}

/// Bounded most-recent-first history of computations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed computation at the front of the log, dropping the
    /// oldest entry once the cap is exceeded.
    pub fn record(&mut self, expression: String, result: String) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        self.entries.insert(
            0,
            HistoryEntry {
                expression,
                result,
                timestamp,
            },
        );
        self.entries.truncate(HISTORY_CAP);
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
