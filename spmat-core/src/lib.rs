#![no_std]

//! spmat Core - Tree-Indexed Sparse Matrix Storage
//!
//! This crate provides the storage engine, addressing proxies and command
//! grammar for sparse matrices that keep only non-default values. It has no
//! I/O and only needs `alloc`.
//!
//! ```rust
//! use spmat_core::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::new(0);
//! matrix.at_mut(3, 5).write(42);
//!
//! assert_eq!(matrix.at(3, 5).read(), 42);
//! assert_eq!(matrix.at(1_000_000_000, 5).read(), 0);
//! assert_eq!(matrix.nnz(), 1);
//! ```

extern crate alloc;

pub mod error;
pub mod index;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::*;
pub use index::OrderedIndex;
pub use matrix::{Cell, CellMut, ColumnIndex, Row, RowIndex, RowMut, SparseMatrix};
pub use traits::{MatrixElement, SparseAccess};
pub use validation::{parse_command, Command, Dimensions};
