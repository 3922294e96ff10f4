//! Line-oriented interactive shell over a sparse matrix
//!
//! The shell reads one command per line, applies it to its matrix and
//! reports input errors without ending the session. It is generic over its
//! input and output streams so sessions can be driven from memory.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use spmat_core::{parse_command, Command, MatrixElement, SparseMatrix};
use tracing::{debug, info, trace, warn};

use crate::config::ShellConfig;
use crate::error::Result;

const BANNER: &str = "\
Interactive Sparse Matrix

n,m=x          : Set (N,M) to be X
p|print n,m    : Print (N,M) out
q|quit|exit    : Quit

Have fun!
";

/// What the session should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands
    Continue,
    /// End the session
    Quit,
}

/// Interactive session owning one matrix
#[derive(Debug)]
pub struct Shell<T> {
    matrix: SparseMatrix<T>,
    show_banner: bool,
    show_prompt: bool,
}

impl<T> Shell<T>
where
    T: MatrixElement + FromStr + Display,
{
    /// Create a session with an empty matrix built from `config`
    pub fn new(config: &ShellConfig<T>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            matrix: config.build_matrix(),
            show_banner: config.show_banner,
            show_prompt: config.show_prompt,
        })
    }

    /// The session's matrix
    pub fn matrix(&self) -> &SparseMatrix<T> {
        &self.matrix
    }

    /// Prompt shown before each line
    pub fn prompt(&self) -> String {
        match self.matrix.bounds() {
            Some(dims) => format!("matrix ({}, {})> ", dims.rows, dims.cols),
            None => "matrix> ".to_string(),
        }
    }

    /// Parse and apply one input line
    ///
    /// Printed values go to `out`. Parsing finishes before the matrix is
    /// touched, so an `Err` never leaves a partial write behind.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        match parse_command::<T>(line)? {
            Command::Set { row, col, value } => {
                let mut cell = self.matrix.try_at_mut(row, col)?;
                let stored = cell.is_stored();
                cell.write(value);
                debug!(
                    row,
                    col,
                    was_stored = stored,
                    is_stored = cell.is_stored(),
                    "cell written"
                );
            }
            Command::Print { row, col } => {
                let cell = self.matrix.try_at(row, col)?;
                trace!(row, col, "cell read");
                writeln!(out, "{cell}")?;
            }
            Command::Quit => return Ok(Outcome::Quit),
            Command::Blank => {}
        }
        Ok(Outcome::Continue)
    }

    /// Run the session until `quit` or end of input
    ///
    /// Recoverable errors are reported on `err` as `Err: <message>` and the
    /// session continues; I/O failures end it.
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.show_banner {
            writeln!(out, "{BANNER}")?;
        }

        let mut lines = input.lines();
        loop {
            if self.show_prompt {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute(&line, out) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Err(e) if e.is_recoverable() => {
                    warn!(input = %line.trim(), error = %e, "command rejected");
                    writeln!(err, "Err: {e}")?;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            nnz = self.matrix.nnz(),
            rows = self.matrix.populated_rows(),
            "session ended"
        );
        Ok(())
    }
}

impl<T> Shell<T> {
    /// Take the matrix out of a finished session
    pub fn into_matrix(self) -> SparseMatrix<T> {
        self.matrix
    }
}
