//! Error types for daylabel-core

use thiserror::Error;

/// Main error type for the daylabel-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timestamp could not be interpreted as an instant
    #[error("cannot parse {input:?} as a timestamp: {message}")]
    Parse { input: String, message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for daylabel-core
pub type Result<T> = std::result::Result<T, Error>;
