//! Error types for page-outline.
//!
//! Only total failure to obtain or parse a document is a hard error. Everything
//! below that level (bad JSON-LD, unresolvable links, empty containers) is
//! skipped or defaulted and never surfaces here.

/// Error type for scrape and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL string supplied by the caller is empty or unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The fetch collaborator failed to return markup.
    #[error("Extraction failed: {reason}")]
    ExtractionFailed {
        /// Human-readable cause, mapped from the fetch failure.
        reason: String,
    },

    /// The markup could not be turned into a document tree.
    #[error("HTML parsing failed: {0}")]
    ParseFailed(String),
}

impl Error {
    /// Whether a caller may reasonably retry the operation.
    ///
    /// Only fetch-layer failures are transient; bad input and unparseable
    /// markup fail the same way every time.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::ExtractionFailed { .. })
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
