//! Error types for dream-lexicon

use thiserror::Error;

/// Errors raised while loading or validating lexicon data
#[derive(Error, Debug)]
pub enum LexiconError {
    /// I/O error while reading a lexicon file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed lexicon JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A theme map must contain at least one theme
    #[error("Theme map is empty")]
    EmptyThemeMap,

    /// The fallback theme label must not be blank
    #[error("Default theme label is empty")]
    EmptyDefaultTheme,
}

/// Result type alias for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;
