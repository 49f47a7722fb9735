//! Error types for seglock-core
//!
//! Lock rejections are not errors of the engine: they are returned as
//! [`crate::AcquireError`] and [`crate::ReleaseError`] from the lock manager.
//! This type covers the ambient failures around it (configuration I/O and
//! parsing).

use thiserror::Error;

/// Core error type for seglock operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Configuration values out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed TOML or JSON input
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File system errors
    #[error("IO error: {0}")]
    IoError(String),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }
}

/// Result type alias for seglock-core operations
pub type Result<T> = std::result::Result<T, Error>;
