//! Error types for AMP

use thiserror::Error;

/// Result type alias for AMP operations
pub type Result<T> = std::result::Result<T, AmpError>;

/// Main error type for AMP
#[derive(Error, Debug)]
pub enum AmpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
