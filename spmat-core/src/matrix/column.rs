//! Per-row column index

use alloc::collections::BTreeMap;

use crate::index::OrderedIndex;

/// Ordered index of the populated columns of one row
///
/// Holds `(column, value)` entries keyed by column number. A column index
/// is owned by exactly one row entry and is never shared; cloning it
/// duplicates every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex<T> {
    entries: BTreeMap<usize, T>,
}

impl<T> ColumnIndex<T> {
    /// Create an empty column index
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a column index holding a single entry
    pub fn with_entry(col: usize, value: T) -> Self {
        let mut index = Self::new();
        index.set(col, value);
        index
    }

    /// Get the value stored for `col`
    pub fn get(&self, col: usize) -> Option<&T> {
        self.entries.find(&col)
    }

    /// Check if `col` has a stored entry
    pub fn contains(&self, col: usize) -> bool {
        self.get(col).is_some()
    }

    /// Store `value` for `col`, updating an existing entry in place
    pub fn set(&mut self, col: usize, value: T) {
        match self.entries.find_mut(&col) {
            Some(slot) => *slot = value,
            None => {
                self.entries.upsert(col, value);
            }
        }
    }

    /// Remove the entry for `col`, returning its value if it was stored
    pub fn erase(&mut self, col: usize) -> Option<T> {
        self.entries.take(&col)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        OrderedIndex::len(&self.entries)
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        OrderedIndex::is_empty(&self.entries)
    }
}

impl<T> Default for ColumnIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
