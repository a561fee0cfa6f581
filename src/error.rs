//! Strand error types
//!
//! Covers startup and configuration paths. The HTTP surface reports
//! failures through the serializable [`crate::strings::ApiError`] envelope
//! instead.

use thiserror::Error;

/// Strand error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for strand operations
pub type Result<T> = std::result::Result<T, Error>;
