//! Error types for the anima core library.

use thiserror::Error;

/// Top-level error type for anima operations.
///
/// Every variant is a construction-time failure. Once an engine exists,
/// its runtime operations are total and never return an error.
#[derive(Error, Debug)]
pub enum AnimaError {
    /// A fixed table is malformed or the configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two personas in the table share a name.
    #[error("Duplicate persona name: {0}")]
    DuplicatePersona(String),

    /// A table references a persona that is not registered.
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, AnimaError>;
