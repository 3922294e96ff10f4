//! spmat - Interactive Tree-Indexed Sparse Matrix
//!
//! This library wraps the `spmat-core` storage engine in a line-oriented
//! shell with configuration and logging.
//!
//! ## Architecture
//!
//! spmat keeps the data structure and the front end apart:
//!
//! - **spmat-core**: storage engine, cell proxies and command grammar (no I/O)
//! - **spmat**: interactive shell, configuration, logging and the binary
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{Shell, ShellConfig};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut shell = Shell::new(&ShellConfig::default().quiet())?;
//!     let mut out: Vec<u8> = Vec::new();
//!     let mut err: Vec<u8> = Vec::new();
//!
//!     shell.run("3,5=42\np 3,5\n".as_bytes(), &mut out, &mut err)?;
//!     assert_eq!(out, b"42\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Storage and proxies
    Cell, CellMut, Row, RowMut, SparseMatrix,
    // Traits
    MatrixElement, OrderedIndex, SparseAccess,
    // Addressing and grammar
    Command, Dimensions,
    // Error handling
    ErrorCategory, SpmatError,
};

pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use logging::init_logging;
pub use shell::{Outcome, Shell};
