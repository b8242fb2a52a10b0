//! Linear undo/redo history over parameter snapshots.
//!
//! ## Model
//!
//! - [`HistoryState`]: ordered snapshots plus a cursor. Undo and redo only
//!   move the cursor; a new commit truncates everything past the cursor first.
//! - [`HistoryController`]: owns the state and a [`Debouncer`], so a burst of
//!   edits (slider drags) lands in history as a single entry.
//!
//! Adjacent entries are never structurally equal, and the history is bounded
//! by [`HistoryConfig::capacity`]; the oldest entry is evicted when full.

pub mod controller;
pub mod debounce;

pub use controller::HistoryController;
pub use debounce::{Debouncer, TimerHandle};

use serde::{Deserialize, Serialize};

/// Default quiet window before a pending edit is committed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default maximum number of history entries.
pub const DEFAULT_CAPACITY: usize = 100;

/// Tuning for the history controller.
///
/// Deserializes from partial objects; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Quiet window in milliseconds
    pub debounce_ms: u64,
    /// Maximum number of entries kept (at least 1)
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Snapshot sequence plus the index of the live entry.
///
/// Never empty: it is created with its first snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryState<T> {
    entries: Vec<T>,
    index: usize,
}

impl<T: Clone + PartialEq> HistoryState<T> {
    /// Create a history seeded with a single entry.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The live snapshot.
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries. A seeded history never does.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Append `snapshot` after the cursor, discarding any redo entries.
    ///
    /// Returns `false` without touching the state when `snapshot` equals the
    /// live entry. When the history exceeds `capacity` the oldest entry is
    /// dropped.
    pub fn push(&mut self, snapshot: T, capacity: usize) -> bool {
        if *self.current() == snapshot {
            return false;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);

        let capacity = capacity.max(1);
        if self.entries.len() > capacity {
            let overflow = self.entries.len() - capacity;
            self.entries.drain(..overflow);
            tracing::debug!(evicted = overflow, capacity, "history capacity reached");
        }

        self.index = self.entries.len() - 1;
        true
    }

    /// Move the cursor back one entry, returning the restored snapshot.
    pub fn step_back(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Move the cursor forward one entry, returning the restored snapshot.
    pub fn step_forward(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
