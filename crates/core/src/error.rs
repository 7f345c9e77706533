//! Error types for presence containers
//!
//! Extraction from an absent container is the only fallible read in this crate.
//! Constructing a container from a value the caller claimed was present, but
//! which turned out to be absent, is the only fallible construction.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Message carried by an [`ExtractionError`] when the caller supplies none.
pub const DEFAULT_EXTRACTION_MESSAGE: &str = "Called `extract()` on an absent value.";

/// Result type alias for presence operations
pub type Result<T> = std::result::Result<T, Error>;

/// Raised when the held value is extracted from an absent container
///
/// `Display` prints the message verbatim so a caller-supplied explanation
/// surfaces unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractionError {
    message: String,
}

impl ExtractionError {
    /// Create an extraction error with an explicit message
    pub fn new(message: impl Into<String>) -> Self {
        ExtractionError {
            message: message.into(),
        }
    }

    /// The message explaining why extraction was expected to succeed
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ExtractionError {
    fn default() -> Self {
        ExtractionError::new(DEFAULT_EXTRACTION_MESSAGE)
    }
}

/// Error types for presence containers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Extraction from an absent container
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// `from_required` was handed an absent input
    #[error("Cannot create a present value from an absent input. Use `empty()` instead.")]
    RequiredValueAbsent,
}
