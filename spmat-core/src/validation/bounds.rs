//! Dimension bounds for the fixed-capacity addressing mode
//!
//! A matrix is logically unbounded unless it is built with [`Dimensions`].
//! Bounds are only consulted by the checked accessors; storage never
//! depends on them.

use crate::{Result, SpmatError};

/// Fixed matrix extent as (rows, cols)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of addressable rows
    pub rows: usize,
    /// Number of addressable columns
    pub cols: usize,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Check if a coordinate falls inside these dimensions
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Validate a coordinate against these dimensions
    pub const fn check(&self, row: usize, col: usize) -> Result<()> {
        if !self.contains(row, col) {
            return Err(SpmatError::IndexOutOfBounds { row, col });
        }
        Ok(())
    }

    /// Get dimensions as a (rows, cols) tuple
    pub const fn as_tuple(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// Validate a coordinate against optional dimensions
///
/// `None` means the matrix is unbounded and every coordinate is valid.
pub const fn check_bounds(bounds: Option<Dimensions>, row: usize, col: usize) -> Result<()> {
    match bounds {
        Some(dims) => dims.check(row, col),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let dims = Dimensions::new(1000, 1000);

        assert!(dims.contains(0, 0));
        assert!(dims.contains(999, 999));
        assert!(!dims.contains(1000, 0));
        assert!(!dims.contains(0, 1000));

        // Zero-sized dimensions contain nothing
        assert!(!Dimensions::new(0, 5).contains(0, 0));
    }

    #[test]
    fn test_check_bounds() {
        let dims = Dimensions::from((10, 20));

        assert_eq!(check_bounds(Some(dims), 9, 19), Ok(()));
        assert_eq!(
            check_bounds(Some(dims), 10, 3),
            Err(SpmatError::IndexOutOfBounds { row: 10, col: 3 })
        );
        assert_eq!(check_bounds(None, usize::MAX, usize::MAX), Ok(()));
    }
}
