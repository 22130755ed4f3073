//! Fetch collaborator interface.
//!
//! The crate performs no network I/O itself. Callers plug in a [`Fetcher`]
//! that turns a [`FetchRequest`] into markup.

use std::time::Duration;

use thiserror::Error;

use crate::options::Options;

/// A single page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Normalized absolute URL.
    pub url: String,
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl FetchRequest {
    /// Build a request for `url` using the fetch settings in `options`.
    #[must_use]
    pub fn new(url: impl Into<String>, options: &Options) -> Self {
        Self {
            url: url.into(),
            timeout: options.timeout,
            max_redirects: options.max_redirects,
            user_agent: options.user_agent.clone(),
        }
    }
}

/// Fetch failure categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("connection refused")]
    ConnectionRefused,

    #[error("request timed out")]
    Timeout,

    #[error("domain not found")]
    DomainNotFound,

    #[error("HTTP status {0}")]
    HttpError(u16),
}

/// Source of page markup.
pub trait Fetcher {
    /// Fetch the document at `request.url`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no markup could be obtained.
    fn fetch(&self, request: &FetchRequest) -> std::result::Result<String, FetchError>;
}

impl<F> Fetcher for F
where
    F: Fn(&FetchRequest) -> std::result::Result<String, FetchError>,
{
    fn fetch(&self, request: &FetchRequest) -> std::result::Result<String, FetchError> {
        self(request)
    }
}
