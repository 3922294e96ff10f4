//! Row index: populated rows and the column index each one owns

use alloc::collections::BTreeMap;

use super::column::ColumnIndex;
use crate::index::OrderedIndex;

/// Ordered index mapping populated row numbers to their column index
///
/// Every row entry exclusively owns its [`ColumnIndex`]. A row entry is
/// present iff its column index is non-empty: [`RowIndex::store`] creates
/// rows on their first entry and [`RowIndex::elide`] reclaims them with
/// their last one. Nothing else adds or removes rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIndex<T> {
    rows: BTreeMap<usize, ColumnIndex<T>>,
}

impl<T> RowIndex<T> {
    /// Create an empty row index
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Get the column index of a populated row
    pub fn get(&self, row: usize) -> Option<&ColumnIndex<T>> {
        self.rows.find(&row)
    }

    /// Get the value stored at `(row, col)`, if any
    pub fn lookup(&self, row: usize, col: usize) -> Option<&T> {
        self.get(row)?.get(col)
    }

    /// Store a value at `(row, col)`
    ///
    /// Updates an existing entry in place, inserts into an existing row, or
    /// creates the row with a fresh column index holding this one entry.
    pub fn store(&mut self, row: usize, col: usize, value: T) {
        match self.rows.find_mut(&row) {
            Some(columns) => columns.set(col, value),
            None => {
                self.rows.upsert(row, ColumnIndex::with_entry(col, value));
            }
        }
    }

    /// Remove the value at `(row, col)`, reclaiming the row if it empties
    ///
    /// Returns the removed value. Absent rows and columns are a no-op.
    pub fn elide(&mut self, row: usize, col: usize) -> Option<T> {
        let columns = self.rows.find_mut(&row)?;
        let removed = columns.erase(col);

        if columns.is_empty() {
            self.rows.take(&row);
        }

        removed
    }

    /// Number of populated rows
    pub fn row_count(&self) -> usize {
        OrderedIndex::len(&self.rows)
    }

    /// Total number of stored entries across all rows
    pub fn entry_count(&self) -> usize {
        self.rows.values().map(ColumnIndex::len).sum()
    }

    /// Whether no rows are populated
    pub fn is_empty(&self) -> bool {
        OrderedIndex::is_empty(&self.rows)
    }

    /// Drop every row and its column index
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<T> Default for RowIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
