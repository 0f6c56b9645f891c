//! Error types for the stagetrack crate.
//!
//! Step outcomes are never errors: an `Error` or `Canceled` step is recorded
//! as data on the stage. The types here only cover the surfaces around the
//! core model: parsing statuses from text, installing the logging
//! subscriber and serializing summaries.

use thiserror::Error;

/// Convenience result alias for fallible stagetrack operations.
pub type Result<T> = std::result::Result<T, StagetrackError>;

/// The main error type for stagetrack operations.
#[derive(Debug, Error)]
pub enum StagetrackError {
    /// A status name could not be parsed.
    #[error("{0}")]
    StatusParse(#[from] StatusParseError),

    /// The logging subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StagetrackError {
    /// Creates a logging error.
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

/// Error raised when text does not name a known status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown status '{input}'")]
pub struct StatusParseError {
    /// The rejected input.
    pub input: String,
}

impl StatusParseError {
    /// Creates a new status parse error.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
