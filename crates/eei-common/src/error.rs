//! Error types shared across EEI components

use thiserror::Error;

/// Result type alias for EEI operations
pub type Result<T> = std::result::Result<T, EeiError>;

/// Main error type for EEI components
#[derive(Error, Debug)]
pub enum EeiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
