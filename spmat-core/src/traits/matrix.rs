//! Core matrix abstraction traits
//!
//! This module defines the format-agnostic access trait that matrix
//! implementations satisfy.

use super::element::MatrixElement;

/// Format-agnostic read access to a sparse matrix
///
/// This trait provides the minimal interface shared by sparse matrix
/// implementations regardless of storage layout.
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get a stored element at the specified position
    ///
    /// Returns `None` if the position holds the default value (not stored).
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    ///
    /// Returns `None` for a logically unbounded matrix.
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get number of non-default elements stored
    fn nnz(&self) -> usize;
}
