//! Error types for console and filesystem helpers.

use thiserror::Error;

/// Errors from token collection, prompting, and destination negotiation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`ConsoleError`].
pub type Result<T> = std::result::Result<T, ConsoleError>;
