//! Metadata extraction module.
//!
//! Gathers meta tags, Open Graph and Twitter properties and JSON-LD blocks,
//! and derives the page title, description and keyword list from them.

pub mod json_ld;
pub mod meta_tags;

use serde_json::Value;
use url::Url;

use crate::dom::DomNode;
use crate::result::MetadataMap;
use crate::text::sanitize;

pub use json_ld::extract_json_ld;
pub use meta_tags::{examine_meta, parse_keyword_list};

/// Keys preferred when the metadata map is capped for storage.
pub const ALLOWED_KEYS: &[&str] = &[
    "title",
    "description",
    "keywords",
    "canonical",
    "robots",
    "viewport",
    "charset",
    "lang",
    "generator",
    "theme-color",
    "author",
    "og:title",
    "og:description",
    "og:image",
    "og:url",
    "og:type",
    "og:site_name",
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

/// Metadata gathered from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub map: MetadataMap,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub structured_data: Vec<Value>,
}

/// Extract all metadata from a document.
///
/// Title falls back `<title>` → `og:title` → `twitter:title` → JSON-LD
/// `headline`/`name` → first `h1`. Description falls back `description` →
/// `og:description` → `twitter:description` → JSON-LD `description`.
#[must_use]
pub fn extract_metadata<N: DomNode>(root: &N, base: Option<&Url>) -> PageMetadata {
    let map = examine_meta(root, base);
    let structured_data = extract_json_ld(root);

    let from_map = |keys: &[&str]| {
        keys.iter()
            .find_map(|key| map.get(key).filter(|v| !v.is_empty()))
            .map(str::to_string)
    };

    let title = from_map(&["title", "og:title", "twitter:title"])
        .or_else(|| json_ld::article_field(&structured_data, &["headline", "name"]))
        .or_else(|| {
            root.select("h1")
                .iter()
                .map(|h| sanitize(&h.text()))
                .find(|t| !t.is_empty())
        })
        .unwrap_or_default();

    let description = from_map(&["description", "og:description", "twitter:description"])
        .or_else(|| json_ld::article_field(&structured_data, &["description"]))
        .unwrap_or_default();

    let keywords = map.get("keywords").map(parse_keyword_list).unwrap_or_default();

    PageMetadata {
        map,
        title,
        description,
        keywords,
        structured_data,
    }
}

/// Whether `key` is on the storage allow-list.
#[must_use]
pub fn is_allowed_key(key: &str) -> bool {
    ALLOWED_KEYS.contains(&key)
}
