//! Configuration options for scraping and extraction.
//!
//! The `Options` struct carries the page URL used for link resolution, the
//! traversal guard, and the request parameters handed to the fetch
//! collaborator.

use std::time::Duration;

/// Default guard limit for the outline sibling scan.
pub const DEFAULT_SIBLING_GUARD: usize = 120;

/// Default user agent sent with fetch requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; page-outline/0.1; +https://crates.io/crates/page-outline)";

/// Configuration options for scraping and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_outline::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     url: Some("https://example.com/".to_string()),
///     timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Absolute URL of the page, used as the base for link and image
    /// resolution.
    ///
    /// When `None`, relative references are kept as written (unless the
    /// document declares an absolute `<base href>`).
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Maximum number of sibling elements visited per heading during the
    /// outline scan.
    ///
    /// Default: `120`
    pub sibling_guard: usize,

    /// Timeout handed to the fetch collaborator.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Maximum redirects the fetch collaborator may follow.
    ///
    /// Default: `5`
    pub max_redirects: usize,

    /// User agent handed to the fetch collaborator.
    pub user_agent: String,

    /// Return the unbounded raw extraction alongside the refined document.
    ///
    /// Default: `false`
    pub keep_raw: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            sibling_guard: DEFAULT_SIBLING_GUARD,
            timeout: Duration::from_secs(30),
            max_redirects: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            keep_raw: false,
        }
    }
}
