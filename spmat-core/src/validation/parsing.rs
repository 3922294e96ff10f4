//! Parsing utilities for interactive matrix commands
//!
//! This module provides pure parsing functions for the line-oriented
//! command grammar with no I/O dependencies:
//!
//! - `row,col=value` sets a cell
//! - `p row,col` or `print row,col` reads a cell
//! - `q`, `quit` or `exit` ends the session
//!
//! Keywords are case-insensitive and whitespace is allowed around every
//! token. Parsing always completes before a command touches a matrix, so
//! malformed input can never leave a partial write behind.

use core::str::FromStr;

use crate::{Result, SpmatError};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<V> {
    /// Write `value` at `(row, col)`
    Set { row: usize, col: usize, value: V },
    /// Read and display the value at `(row, col)`
    Print { row: usize, col: usize },
    /// End the session
    Quit,
    /// Line contained only whitespace
    Blank,
}

/// Parse one input line into a [`Command`]
///
/// Lines that do not have the shape of any command fail with
/// [`SpmatError::InvalidCommand`]. Lines with the right shape but a bad
/// numeric token fail with [`SpmatError::InvalidNumber`] or
/// [`SpmatError::NumberOverflow`].
pub fn parse_command<V: FromStr>(line: &str) -> Result<Command<V>> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(Command::Blank);
    }

    if ["q", "quit", "exit"]
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
    {
        return Ok(Command::Quit);
    }

    if let Some((coords, value)) = line.split_once('=') {
        let (row, col) = parse_coordinates(coords)?;
        let value = parse_value(value)?;
        return Ok(Command::Set { row, col, value });
    }

    if let Some(rest) = strip_print_keyword(line) {
        let (row, col) = parse_coordinates(rest)?;
        return Ok(Command::Print { row, col });
    }

    Err(SpmatError::InvalidCommand)
}

/// Strip a leading `print` or `p` keyword
///
/// The keyword must be followed by whitespace or directly by the row
/// number, so words that merely start with `p` are not accepted.
fn strip_print_keyword(line: &str) -> Option<&str> {
    for keyword in ["print", "p"] {
        let Some(prefix) = line.get(..keyword.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(keyword) {
            continue;
        }

        let rest = &line[keyword.len()..];
        if rest
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace() || c.is_ascii_digit())
        {
            return Some(rest);
        }
    }
    None
}

/// Parse a `row,col` coordinate pair
fn parse_coordinates(s: &str) -> Result<(usize, usize)> {
    let (row, col) = s.split_once(',').ok_or(SpmatError::InvalidCommand)?;

    let row = parse_usize(row.trim())?;
    let col = parse_usize(col.trim())?;

    Ok((row, col))
}

/// Parse the value token of a set command
fn parse_value<V: FromStr>(s: &str) -> Result<V> {
    let s = s.trim();

    if s.is_empty() {
        return Err(SpmatError::InvalidCommand);
    }

    s.parse().map_err(|_| SpmatError::InvalidNumber)
}

/// Parse a usize from a string with error handling
///
/// Accepts ASCII digits only; signs and embedded whitespace are rejected.
pub fn parse_usize(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(SpmatError::InvalidNumber);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SpmatError::InvalidNumber);
        }

        let digit = (byte - b'0') as usize;

        // Check for overflow
        if result > (usize::MAX - digit) / 10 {
            return Err(SpmatError::NumberOverflow);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}
