//! Error types for EQ Match

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum EqmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid band at index {index}: {reason}")]
    InvalidBand { index: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type EqmResult<T> = Result<T, EqmError>;
