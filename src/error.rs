//! Error types for YIN pitch detection

use thiserror::Error;

/// Errors raised while building a detector or running a detection.
///
/// "No pitch found" is not an error: it is reported through
/// [`Pitch::unpitched`](crate::Pitch::unpitched).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YinError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Buffer too short: expected at least {expected} samples, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

/// Result type for YIN operations
pub type Result<T> = std::result::Result<T, YinError>;
