//! Error types for tba.

use thiserror::Error;

/// Errors that can occur while loading events.
///
/// Classification itself never fails; these only come out of ingestion.
#[derive(Error, Debug)]
pub enum TbaError {
    #[error("Invalid value for field '{0}'")]
    InvalidField(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tba operations.
pub type TbaResult<T> = Result<T, TbaError>;
