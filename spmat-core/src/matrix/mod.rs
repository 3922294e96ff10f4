//! Tree-indexed sparse matrix
//!
//! Storage is two levels of ordered indices: a [`RowIndex`] keyed by row
//! number whose entries each own a [`ColumnIndex`] keyed by column number.
//! Only values that differ from the matrix default are stored, so the
//! footprint follows the number of distinct non-default writes rather than
//! the logical dimensions.
//!
//! Cells are addressed through lightweight proxies ([`Cell`], [`CellMut`])
//! that carry a borrow of the matrix plus a coordinate and resolve on every
//! read or write.

pub mod cell;
pub mod column;
pub mod row;

pub use cell::{Cell, CellMut, Row, RowMut};
pub use column::ColumnIndex;
pub use row::RowIndex;

use crate::traits::{MatrixElement, SparseAccess};
use crate::validation::bounds::{check_bounds, Dimensions};
use crate::Result;

/// Sparse matrix storing only non-default values
///
/// The matrix is logically unbounded unless built with
/// [`SparseMatrix::with_dimensions`]; even then, bounds are only enforced
/// by the checked accessors [`SparseMatrix::try_at`] and
/// [`SparseMatrix::try_at_mut`].
///
/// Cloning performs a deep copy of both index levels. A write through one
/// copy is never visible through the other.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    rows: RowIndex<T>,
    default: T,
    bounds: Option<Dimensions>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an unbounded matrix where every cell reads as `default`
    pub const fn new(default: T) -> Self {
        Self {
            rows: RowIndex::new(),
            default,
            bounds: None,
        }
    }

    /// Create a matrix with fixed dimensions for checked addressing
    pub fn with_dimensions(default: T, dimensions: impl Into<Dimensions>) -> Self {
        Self {
            rows: RowIndex::new(),
            default,
            bounds: Some(dimensions.into()),
        }
    }

    /// The value every unstored cell reads as
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Fixed dimensions, if any were configured
    pub fn bounds(&self) -> Option<Dimensions> {
        self.bounds
    }

    /// Address a cell for reading
    ///
    /// Never touches storage and accepts any coordinate.
    pub fn at(&self, row: usize, col: usize) -> Cell<'_, T> {
        Cell::new(self, row, col)
    }

    /// Address a cell for reading and writing
    ///
    /// Never touches storage and accepts any coordinate.
    pub fn at_mut(&mut self, row: usize, col: usize) -> CellMut<'_, T> {
        CellMut::new(self, row, col)
    }

    /// Address a cell for reading, checking configured bounds
    pub fn try_at(&self, row: usize, col: usize) -> Result<Cell<'_, T>> {
        check_bounds(self.bounds, row, col)?;
        Ok(self.at(row, col))
    }

    /// Address a cell for writing, checking configured bounds
    pub fn try_at_mut(&mut self, row: usize, col: usize) -> Result<CellMut<'_, T>> {
        check_bounds(self.bounds, row, col)?;
        Ok(self.at_mut(row, col))
    }

    /// Address a row for chained `row(r).col(c)` reads
    pub fn row(&self, row: usize) -> Row<'_, T> {
        Row::new(self, row)
    }

    /// Address a row for chained `row_mut(r).col(c)` writes
    pub fn row_mut(&mut self, row: usize) -> RowMut<'_, T> {
        RowMut::new(self, row)
    }

    /// Read the value at `(row, col)`
    ///
    /// Returns an owned copy; an unstored cell yields a copy of the default.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows
            .lookup(row, col)
            .unwrap_or(&self.default)
            .clone()
    }

    /// Write `value` at `(row, col)`
    ///
    /// Writing the default elides the entry, reclaiming the row when it was
    /// the row's last entry. Any other value is inserted or updated in place.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_default(&self.default) {
            self.rows.elide(row, col);
        } else {
            self.rows.store(row, col, value);
        }
    }

    /// Reset `(row, col)` to the default value
    pub fn erase(&mut self, row: usize, col: usize) {
        self.rows.elide(row, col);
    }

    /// Check if a non-default value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.lookup(row, col).is_some()
    }

    /// Number of stored (non-default) entries
    pub fn nnz(&self) -> usize {
        self.rows.entry_count()
    }

    /// Number of rows holding at least one stored entry
    pub fn populated_rows(&self) -> usize {
        self.rows.row_count()
    }

    /// Number of stored entries in one row
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, ColumnIndex::len)
    }

    /// Whether every cell reads as the default
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reset every cell to the default, releasing all storage
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<T: MatrixElement + Default> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.rows.lookup(row, col).cloned()
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.bounds.map(|dims| dims.as_tuple())
    }

    fn nnz(&self) -> usize {
        self.rows.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpmatError;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_default_read() {
        let matrix = SparseMatrix::new(7);

        for &(r, c) in &[(0, 0), (3, 5), (usize::MAX, usize::MAX), (1_000_000_000, 2)] {
            assert_eq!(matrix.at(r, c).read(), 7);
        }
        assert!(matrix.is_empty());
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_scenario_write_read_erase() {
        let mut m = SparseMatrix::new(0);

        m.at_mut(3, 5).write(42);
        assert_eq!(m.at(3, 5).read(), 42);
        assert_eq!(m.at(3, 6).read(), 0);

        m.at_mut(3, 5).write(0);
        assert_eq!(m.at(3, 5).read(), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_elision_reclaims_row() {
        let mut m = SparseMatrix::new(0);
        m.set(1, 1, 10);
        let before = m.clone();

        m.set(2, 7, 99);
        assert_eq!(m.populated_rows(), 2);

        m.set(2, 7, 0);
        assert_eq!(m.populated_rows(), 1);
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.row_len(2), 0);
        // Structural round trip, not just value equality
        assert_eq!(m, before);
    }

    #[test]
    fn test_elision_keeps_row_with_other_entries() {
        let mut m = SparseMatrix::new(0);
        m.set(4, 1, 1);
        m.set(4, 2, 2);

        m.set(4, 1, 0);
        assert_eq!(m.populated_rows(), 1);
        assert_eq!(m.row_len(4), 1);
        assert_eq!(m.get(4, 2), 2);
    }

    #[test]
    fn test_writing_default_to_absent_cell_is_noop() {
        let mut m = SparseMatrix::new(0);
        m.set(9, 9, 0);
        assert!(m.is_empty());

        m.set(9, 1, 5);
        m.set(9, 2, 0);
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.populated_rows(), 1);
    }

    #[test]
    fn test_row_and_column_independence() {
        let mut m = SparseMatrix::new(0);
        m.set(1, 5, 10);
        assert_eq!(m.get(2, 5), 0);
        assert_eq!(m.get(1, 6), 0);

        m.set(2, 5, 20);
        m.set(1, 6, 30);
        assert_eq!(m.get(1, 5), 10);
        assert_eq!(m.get(2, 5), 20);
        assert_eq!(m.get(1, 6), 30);
    }

    #[test]
    fn test_idempotent_overwrite() {
        let mut once = SparseMatrix::new(0);
        once.set(3, 3, 8);

        let mut twice = SparseMatrix::new(0);
        twice.set(3, 3, 8);
        twice.set(3, 3, 8);

        assert_eq!(once, twice);
        assert_eq!(twice.nnz(), 1);
    }

    #[test]
    fn test_update_in_place() {
        let mut m = SparseMatrix::new(0);
        m.set(3, 3, 8);
        m.set(3, 3, 9);
        assert_eq!(m.get(3, 3), 9);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_copy_isolation() {
        let mut m1 = SparseMatrix::new(0);
        m1.set(1, 1, 11);
        m1.set(1, 2, 12);

        let mut m2 = m1.clone();
        m2.set(1, 1, 99);
        m2.set(1, 2, 0);
        m2.set(5, 5, 55);

        assert_eq!(m1.get(1, 1), 11);
        assert_eq!(m1.get(1, 2), 12);
        assert_eq!(m1.get(5, 5), 0);
        assert_eq!(m1.nnz(), 2);

        // And the other direction
        m1.clear();
        assert_eq!(m2.get(1, 1), 99);
        assert_eq!(m2.get(5, 5), 55);
    }

    #[test]
    fn test_sparse_footprint() {
        let mut m = SparseMatrix::new(0u8);
        let coords = [(0, 0), (1_000_000_000, 3), (42, 1_000_000_000), (usize::MAX, usize::MAX)];

        for (i, &(r, c)) in coords.iter().enumerate() {
            m.set(r, c, i as u8 + 1);
        }

        assert_eq!(m.populated_rows(), coords.len());
        assert_eq!(m.nnz(), coords.len());
        assert_eq!(m.get(1_000_000_000, 3), 2);
    }

    #[test]
    fn test_non_copy_elements() {
        let mut m = SparseMatrix::new(String::new());
        m.set(0, 1, String::from("hello"));

        let mut read = m.get(0, 1);
        read.push_str(" world");

        // Reads hand out copies
        assert_eq!(m.get(0, 1), "hello");
        let mut default = m.get(0, 0);
        default.push('x');
        assert_eq!(m.default_value(), "");
    }

    #[test]
    fn test_bounded_addressing() {
        let mut m = SparseMatrix::with_dimensions(0, (1000, 1000));

        assert!(m.try_at_mut(999, 999).is_ok());
        assert_eq!(
            m.try_at_mut(1000, 0).err(),
            Some(SpmatError::IndexOutOfBounds { row: 1000, col: 0 })
        );
        assert_eq!(
            m.try_at(0, 1000).err(),
            Some(SpmatError::IndexOutOfBounds { row: 0, col: 1000 })
        );

        // Unchecked addressing stays bounds-free
        m.at_mut(5000, 5000).write(1);
        assert_eq!(m.get(5000, 5000), 1);
        assert_eq!(m.dimensions(), Some((1000, 1000)));
    }

    #[test]
    fn test_unbounded_try_at_never_fails() {
        let mut m = SparseMatrix::new(0);
        assert!(m.try_at(usize::MAX, 0).is_ok());
        assert!(m.try_at_mut(0, usize::MAX).is_ok());
        assert_eq!(m.dimensions(), None);
    }

    #[test]
    fn test_sparse_access_trait() {
        let mut m = SparseMatrix::new(-1);
        m.set(2, 3, 4);

        assert_eq!(m.get_element(2, 3), Some(4));
        assert_eq!(m.get_element(2, 4), None);
        assert_eq!(SparseAccess::nnz(&m), 1);
    }

    #[test]
    fn test_matches_reference_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut m = SparseMatrix::new(0i32);
        let mut model: BTreeMap<(usize, usize), i32> = BTreeMap::new();

        for _ in 0..5_000 {
            let r = rng.gen_range(0..16);
            let c = rng.gen_range(0..16);
            // Bias towards the default so elision paths get exercised
            let v = if rng.gen_bool(0.4) { 0 } else { rng.gen_range(-3..=3) };

            m.set(r, c, v);
            if v == 0 {
                model.remove(&(r, c));
            } else {
                model.insert((r, c), v);
            }

            assert_eq!(m.get(r, c), v);
        }

        assert_eq!(m.nnz(), model.len());
        let mut distinct: Vec<usize> = model.keys().map(|&(r, _)| r).collect();
        distinct.dedup();
        assert_eq!(m.populated_rows(), distinct.len());

        for r in 0..16 {
            for c in 0..16 {
                assert_eq!(m.get(r, c), model.get(&(r, c)).copied().unwrap_or(0));
            }
        }
    }
}
