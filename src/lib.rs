//! # page-outline
//!
//! Structured content extraction for web pages.
//!
//! Given a page's markup, this library builds a heading outline, a flat list
//! of content sections, links, images, metadata and aggregate statistics, then
//! condenses that raw extraction into a size-capped document suitable for
//! storage and for comparing successive scrapes of the same page.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_outline::{extract, refine};
//!
//! let html = "<h1>Intro</h1><p>Hello there friend</p><h2>Sub</h2><p>More info</p>";
//!
//! let raw = extract(html)?;
//! assert_eq!(raw.outline[0].title, "Intro");
//! assert_eq!(raw.outline[0].sub_sections[0].title, "Sub");
//!
//! let refined = refine(raw);
//! println!("{}", serde_json::to_string_pretty(&refined).unwrap_or_default());
//! # Ok::<(), page_outline::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Outline**: `h1`–`h3` nesting with the content that follows each heading
//! - **Sections**: container blocks with tone, accent colour and call-to-action hints
//! - **Metadata**: well-known meta tags, Open Graph, Twitter cards and JSON-LD
//! - **Refinement**: storage caps, fallback outline/section synthesis, text blocks
//! - **Scraping**: URL normalization around a pluggable [`Fetcher`]
//!
//! Malformed input degrades to empty fields; only blank markup, a blank URL
//! or a failed fetch is reported as an [`Error`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Read-only document tree trait and its `dom_query` adapter.
pub mod dom;

/// Text sanitizing and truncation.
pub mod text;

/// URL normalization and resolution.
pub mod url_utils;

/// Link and image collection.
pub mod collect;

/// Metadata extraction (meta tags, Open Graph, Twitter, JSON-LD).
pub mod metadata;

/// Heading outline construction.
pub mod outline;

/// Section block extraction.
pub mod sections;

/// Aggregate statistics.
pub mod stats;

/// Size-capped refinement with fallback synthesis.
pub mod refine;

/// Comparison of refined documents across scrapes.
pub mod diff;

/// Fetch collaborator interface.
pub mod fetch;

/// Charset sniffing and decoding.
pub mod encoding;

// Public API - re-exports
pub use diff::{diff, FieldChange};
pub use error::{Error, Result};
pub use extract::{extract_from_root, scrape};
pub use fetch::{FetchError, FetchRequest, Fetcher};
pub use options::{Options, DEFAULT_SIBLING_GUARD};
pub use refine::refine;
pub use result::{
    ExtractionStats, Headings, ImageRef, LinkRef, MetadataMap, OutlineNode, RawExtraction,
    RefinedDocument, ScrapeOutcome, SectionBlock, TextBlock, Tone,
};

/// Extracts the raw structure of an HTML document using default options.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] when the markup is blank.
///
/// # Example
///
/// ```rust
/// use page_outline::extract;
///
/// let raw = extract("<section><h2>Pricing</h2><p>Plans start free.</p></section>")?;
/// assert_eq!(raw.sections[0].heading, "Pricing");
/// # Ok::<(), page_outline::Error>(())
/// ```
pub fn extract(html: &str) -> Result<RawExtraction> {
    extract_with_options(html, &Options::default())
}

/// Extracts the raw structure of an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] when the markup is blank.
///
/// # Example
///
/// ```rust
/// use page_outline::{extract_with_options, Options};
///
/// let options = Options {
///     url: Some("https://example.com/blog/".to_string()),
///     ..Options::default()
/// };
/// let raw = extract_with_options(r#"<a href="post-1">First post</a>"#, &options)?;
/// assert_eq!(raw.links[0].href, "https://example.com/blog/post-1");
/// # Ok::<(), page_outline::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<RawExtraction> {
    extract::extract_document(html, options)
}

/// Extracts from raw bytes, decoding the declared charset first.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] when the decoded markup is blank.
///
/// # Example
///
/// ```rust
/// use page_outline::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let raw = extract_bytes(html)?;
/// assert_eq!(raw.text, "Café");
/// # Ok::<(), page_outline::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<RawExtraction> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts from raw bytes with custom options.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] when the decoded markup is blank.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<RawExtraction> {
    let decoded = encoding::decode_document(html);
    extract::extract_document(&decoded, options)
}
