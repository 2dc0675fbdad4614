//! Error types for dream-insight
//!
//! Only interpretation input is ever rejected. Corpus analysis never fails;
//! it degrades to empty aggregates instead.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, DreamError>;

/// Errors that can occur while interpreting dreams or loading engine inputs
#[derive(Error, Debug)]
pub enum DreamError {
    /// Dream text was empty or whitespace-only
    #[error("Dream text is empty")]
    EmptyText,

    /// IO error while reading configuration or journals
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid engine configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl DreamError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DreamError::InvalidConfig {
            message: message.into(),
        }
    }

    /// True when the error is the input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DreamError::EmptyText)
    }
}
