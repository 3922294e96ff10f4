//! Abstract interfaces for sparse matrix access
//!
//! This module defines the element constraint and the access trait that
//! concrete matrices implement.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseAccess;
