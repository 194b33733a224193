//! Error types for kvcollection
//!
//! Container operations themselves never fail: absence is reported through
//! `Option`. Errors only arise at the boundaries (export, configuration,
//! entry input read by the CLI).

use thiserror::Error;

/// Result type alias using CollectionError
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Unified error type for kvcollection operations
#[derive(Debug, Error)]
pub enum CollectionError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid entry on line {line}: {reason}")]
    InvalidEntry { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CollectionError {
    fn from(e: serde_json::Error) -> Self {
        CollectionError::Serialization(format!("json: {}", e))
    }
}

impl From<bincode::Error> for CollectionError {
    fn from(e: bincode::Error) -> Self {
        CollectionError::Serialization(format!("bincode: {}", e))
    }
}
