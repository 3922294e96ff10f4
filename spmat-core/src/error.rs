//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
///
/// The storage engine itself is total: reads and writes through the
/// unchecked addressing API never produce an error. These variants cover
/// the bounded addressing mode, the ordered index contract, and the shell
/// command grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Coordinate lies outside the configured dimensions
    IndexOutOfBounds { row: usize, col: usize },
    /// Insert into an ordered index whose key is already present
    DuplicateKey,
    /// Update or removal of a key that is not present
    MissingKey,
    /// Input line does not match any known command
    InvalidCommand,
    /// Numeric token is empty or contains non-digit characters
    InvalidNumber,
    /// Numeric token does not fit the target type
    NumberOverflow,
}

/// Broad classification of a [`SpmatError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bounded addressing rejected a coordinate
    Addressing,
    /// Ordered index contract violation
    Index,
    /// Malformed user input
    Input,
}

impl SpmatError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::IndexOutOfBounds { .. } => ErrorCategory::Addressing,
            SpmatError::DuplicateKey | SpmatError::MissingKey => ErrorCategory::Index,
            SpmatError::InvalidCommand
            | SpmatError::InvalidNumber
            | SpmatError::NumberOverflow => ErrorCategory::Input,
        }
    }

    /// Whether an interactive session may continue after this error
    ///
    /// Index contract violations indicate a broken write path; everything
    /// else is reported to the user and leaves the matrix untouched.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self.category(), ErrorCategory::Index)
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::IndexOutOfBounds { row, col } => {
                write!(f, "Index ({row}, {col}) out of bounds")
            }
            SpmatError::DuplicateKey => write!(f, "Key already present in index"),
            SpmatError::MissingKey => write!(f, "Key not present in index"),
            SpmatError::InvalidCommand => write!(f, "Invalid command"),
            SpmatError::InvalidNumber => write!(f, "Invalid number"),
            SpmatError::NumberOverflow => write!(f, "Number out of range"),
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
