//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

/// Trait for types that can be stored as matrix elements
///
/// Elements must be:
/// - Clone: reads hand out owned copies, never aliases into the matrix
/// - PartialEq: writes compare against the default value to decide
///   whether an entry is stored or elided
///
/// Every type meeting both bounds is an element.
pub trait MatrixElement: Clone + PartialEq {
    /// Whether this value would be elided in a matrix with `default`
    fn is_default(&self, default: &Self) -> bool {
        self == default
    }
}

impl<T: Clone + PartialEq> MatrixElement for T {}
