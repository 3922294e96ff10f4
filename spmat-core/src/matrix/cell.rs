//! Position proxies for addressing matrix cells
//!
//! A proxy is a coordinate plus a borrow of its matrix. It is never stored
//! in the matrix and owns nothing: every `read` walks the row index and the
//! column index again, and every `write` runs the full store/elide protocol.
//! The borrow keeps a proxy from outliving its matrix, and a writing proxy
//! holds the matrix exclusively for as long as it exists.

use core::fmt;

use super::SparseMatrix;
use crate::traits::MatrixElement;

/// Read-only handle to the cell at `(row, col)`
///
/// Any number of `Cell`s may refer to the same coordinate.
#[derive(Debug)]
pub struct Cell<'a, T> {
    matrix: &'a SparseMatrix<T>,
    row: usize,
    col: usize,
}

// Manual impls: a proxy is copyable whether or not `T` is
impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<'a, T: MatrixElement> Cell<'a, T> {
    pub(super) fn new(matrix: &'a SparseMatrix<T>, row: usize, col: usize) -> Self {
        Self { matrix, row, col }
    }

    /// Row of the addressed cell
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the addressed cell
    pub fn col(&self) -> usize {
        self.col
    }

    /// Read the current value, or the default if nothing is stored
    pub fn read(&self) -> T {
        self.matrix.get(self.row, self.col)
    }

    /// Check if a non-default value is stored here
    pub fn is_stored(&self) -> bool {
        self.matrix.contains(self.row, self.col)
    }
}

impl<T: MatrixElement + fmt::Display> fmt::Display for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.read())
    }
}

/// Read-write handle to the cell at `(row, col)`
#[derive(Debug)]
pub struct CellMut<'a, T> {
    matrix: &'a mut SparseMatrix<T>,
    row: usize,
    col: usize,
}

impl<'a, T: MatrixElement> CellMut<'a, T> {
    pub(super) fn new(matrix: &'a mut SparseMatrix<T>, row: usize, col: usize) -> Self {
        Self { matrix, row, col }
    }

    /// Row of the addressed cell
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the addressed cell
    pub fn col(&self) -> usize {
        self.col
    }

    /// Read the current value, or the default if nothing is stored
    pub fn read(&self) -> T {
        self.matrix.get(self.row, self.col)
    }

    /// Check if a non-default value is stored here
    pub fn is_stored(&self) -> bool {
        self.matrix.contains(self.row, self.col)
    }

    /// Write a value into the cell
    ///
    /// Writing the matrix default removes the stored entry (and the row, if
    /// this was its last entry). Returns the proxy so writes can be chained.
    pub fn write(&mut self, value: T) -> &mut Self {
        self.matrix.set(self.row, self.col, value);
        self
    }

    /// Reset the cell to the matrix default
    pub fn erase(&mut self) -> &mut Self {
        self.matrix.erase(self.row, self.col);
        self
    }

    /// Reborrow as a read-only proxy
    pub fn as_cell(&self) -> Cell<'_, T> {
        Cell::new(&*self.matrix, self.row, self.col)
    }
}

impl<T: MatrixElement + fmt::Display> fmt::Display for CellMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.read())
    }
}

/// Read-only handle to one row, for `matrix.row(r).col(c)` addressing
#[derive(Debug)]
pub struct Row<'a, T> {
    matrix: &'a SparseMatrix<T>,
    row: usize,
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<'a, T: MatrixElement> Row<'a, T> {
    pub(super) fn new(matrix: &'a SparseMatrix<T>, row: usize) -> Self {
        Self { matrix, row }
    }

    /// Row number
    pub fn index(&self) -> usize {
        self.row
    }

    /// Address a cell in this row
    pub fn col(&self, col: usize) -> Cell<'a, T> {
        Cell::new(self.matrix, self.row, col)
    }

    /// Number of stored entries in this row
    pub fn len(&self) -> usize {
        self.matrix.row_len(self.row)
    }

    /// Whether every cell of this row reads as the default
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-write handle to one row, for `matrix.row_mut(r).col(c)` addressing
#[derive(Debug)]
pub struct RowMut<'a, T> {
    matrix: &'a mut SparseMatrix<T>,
    row: usize,
}

impl<'a, T: MatrixElement> RowMut<'a, T> {
    pub(super) fn new(matrix: &'a mut SparseMatrix<T>, row: usize) -> Self {
        Self { matrix, row }
    }

    /// Row number
    pub fn index(&self) -> usize {
        self.row
    }

    /// Address a cell in this row
    pub fn col(&mut self, col: usize) -> CellMut<'_, T> {
        CellMut::new(&mut *self.matrix, self.row, col)
    }

    /// Number of stored entries in this row
    pub fn len(&self) -> usize {
        self.matrix.row_len(self.row)
    }

    /// Whether every cell of this row reads as the default
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
