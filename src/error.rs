//! Error types for thema.

use thiserror::Error;

/// Result type for thema operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for thema operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Backing parse data for a corpus instance could not be located.
    #[error("Missing parse data: {0}")]
    MissingParse(String),

    /// Dependency parsing failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input provided by a collaborator.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Record sink rejected a record.
    #[error("Sink error: {0}")]
    Sink(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing-parse error.
    pub fn missing_parse(msg: impl Into<String>) -> Self {
        Error::MissingParse(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a sink error.
    pub fn sink(msg: impl Into<String>) -> Self {
        Error::Sink(msg.into())
    }
}
