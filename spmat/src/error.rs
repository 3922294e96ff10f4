//! Error types for the interactive shell

use spmat_core::SpmatError;
use thiserror::Error;

/// Errors raised while running a shell session
#[derive(Debug, Error)]
pub enum ShellError {
    /// Matrix addressing or command parsing failed
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Shell configuration was rejected before the session started
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl ShellError {
    /// Whether the session may report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        match self {
            ShellError::Matrix(err) => err.is_recoverable(),
            ShellError::Io(_) | ShellError::Config(_) | ShellError::Logging(_) => false,
        }
    }
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(ShellError::from(SpmatError::InvalidCommand).is_recoverable());
        assert!(ShellError::from(SpmatError::IndexOutOfBounds { row: 1, col: 2 }).is_recoverable());
        assert!(!ShellError::from(SpmatError::MissingKey).is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!ShellError::from(io).is_recoverable());
    }

    #[test]
    fn test_display_passes_through() {
        let err = ShellError::from(SpmatError::IndexOutOfBounds { row: 3, col: 4 });
        assert_eq!(err.to_string(), "Index (3, 4) out of bounds");
    }
}
