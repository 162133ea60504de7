//! Error types for psitab

use thiserror::Error;

/// Result type alias for psitab operations
pub type Result<T> = std::result::Result<T, PsitabError>;

/// Main error type for psitab
#[derive(Error, Debug)]
pub enum PsitabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed XML: {0}")]
    Xml(String),

    #[error("No open element named: {0}")]
    NotOpen(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
