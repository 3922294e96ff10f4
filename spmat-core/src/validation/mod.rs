//! Input validation for sparse matrix addressing and commands
//!
//! This module contains pure validation and parsing functions with no I/O
//! dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::Dimensions;
pub use parsing::{parse_command, parse_usize, Command};
