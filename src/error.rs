//! Error types for textkit
//!
//! Uses `thiserror` for library errors. Only random generation can fail;
//! every other helper is total.

use thiserror::Error;

/// Result type alias for textkit operations
pub type TextkitResult<T> = Result<T, TextkitError>;

/// Main error type for textkit operations
#[derive(Error, Debug)]
pub enum TextkitError {
    /// The secure random source could not produce a value
    #[error("secure random source failed: {0}")]
    RandomSource(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TextkitError {
    /// Wrap an error raised by a random source.
    pub fn random_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RandomSource(Box::new(err))
    }
}
