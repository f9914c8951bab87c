//! Error types for tagset

use thiserror::Error;

/// Main error type for the tagset library
#[derive(Debug, Error)]
pub enum TagSetError {
    /// The input string is not a parseable, recognized tag. Carries the
    /// original input so callers can report exactly what was rejected.
    #[error("\"{0}\" is not a valid tag")]
    InvalidTag(String),
}

/// Result type using TagSetError
pub type Result<T> = std::result::Result<T, TagSetError>;
