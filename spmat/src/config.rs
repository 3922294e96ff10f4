//! Shell configuration

use spmat_core::{Dimensions, MatrixElement, SparseMatrix};

use crate::error::{Result, ShellError};

/// Configuration for an interactive matrix session
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig<T = i64> {
    /// Value every unwritten cell reads as
    pub default_value: T,
    /// Fixed dimensions; `None` leaves the matrix unbounded
    pub dimensions: Option<Dimensions>,
    /// Print the usage banner when the session starts
    pub show_banner: bool,
    /// Print a prompt before reading each line
    pub show_prompt: bool,
}

impl<T: MatrixElement> ShellConfig<T> {
    /// Create config for an unbounded matrix with the given default
    pub fn new(default_value: T) -> Self {
        Self {
            default_value,
            dimensions: None,
            show_banner: true,
            show_prompt: true,
        }
    }

    /// Set fixed dimensions
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.dimensions = Some(Dimensions::new(rows, cols));
        self
    }

    /// Enable or disable the startup banner
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Enable or disable the prompt
    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    /// Disable both banner and prompt, for scripted input
    pub fn quiet(self) -> Self {
        self.with_banner(false).with_prompt(false)
    }

    /// Reject configurations that cannot address any cell
    pub fn validate(&self) -> Result<()> {
        if let Some(dims) = self.dimensions {
            if dims.rows == 0 || dims.cols == 0 {
                return Err(ShellError::Config(format!(
                    "dimensions must be non-zero, got {} x {}",
                    dims.rows, dims.cols
                )));
            }
        }
        Ok(())
    }

    /// Build the empty matrix this configuration describes
    pub fn build_matrix(&self) -> SparseMatrix<T> {
        match self.dimensions {
            Some(dims) => SparseMatrix::with_dimensions(self.default_value.clone(), dims),
            None => SparseMatrix::new(self.default_value.clone()),
        }
    }
}

impl Default for ShellConfig<i64> {
    fn default() -> Self {
        Self::new(0)
    }
}
