//! HTML Meta Tag Extraction
//!
//! Collects well-known `<meta>`/`<link>` values plus every Open Graph and
//! Twitter card property into an ordered [`MetadataMap`].

use url::Url;

use crate::dom::DomNode;
use crate::result::MetadataMap;
use crate::text::collapse_whitespace;
use crate::url_utils::resolve;

/// `<meta name=…>` values stored under their own name.
const NAMED_META: &[&str] = &[
    "description",
    "keywords",
    "robots",
    "viewport",
    "generator",
    "theme-color",
    "author",
];

/// Examine meta tags and related head elements.
///
/// Well-known keys are stored first in a fixed order (`title`,
/// `description`, `keywords`, `canonical`, `robots`, `viewport`, `charset`,
/// `lang`, `generator`, `theme-color`, `author`), followed by `og:*` and
/// `twitter:*` properties in document order. The first non-empty value for a
/// key wins.
#[must_use]
pub fn examine_meta<N: DomNode>(root: &N, base: Option<&Url>) -> MetadataMap {
    let mut named: Vec<(String, String)> = Vec::new();
    let mut social: Vec<(String, String)> = Vec::new();
    let mut charset: Option<String> = None;

    for meta in root.select("meta") {
        if charset.is_none() {
            charset = meta_charset(&meta);
        }

        let name = meta
            .attr("name")
            .or_else(|| meta.attr("property"))
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let content = meta.attr("content").unwrap_or_default();

        if name.is_empty() || content.trim().is_empty() {
            continue;
        }

        if name.starts_with("og:") || name.starts_with("twitter:") {
            social.push((name, collapse_whitespace(&content)));
        } else if NAMED_META.contains(&name.as_str()) {
            named.push((name, collapse_whitespace(&content)));
        }
    }

    let lookup = |key: &str| {
        named
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
    };

    let mut map = MetadataMap::new();

    if let Some(title) = root.select_first("title") {
        map.insert_first("title", collapse_whitespace(&title.text()));
    }
    for key in ["description", "keywords"] {
        if let Some(value) = lookup(key) {
            map.insert_first(key, value);
        }
    }
    if let Some(canonical) = canonical_href(root) {
        map.insert_first("canonical", resolve(&canonical, base));
    }
    for key in ["robots", "viewport"] {
        if let Some(value) = lookup(key) {
            map.insert_first(key, value);
        }
    }
    if let Some(charset) = charset {
        map.insert_first("charset", charset);
    }
    if let Some(lang) = root.attr("lang") {
        map.insert_first("lang", lang);
    }
    for key in ["generator", "theme-color", "author"] {
        if let Some(value) = lookup(key) {
            map.insert_first(key, value);
        }
    }

    for (key, value) in social {
        map.insert_first(key, value);
    }

    map
}

/// Charset declared by `<meta charset>` or `<meta http-equiv=content-type>`.
fn meta_charset<N: DomNode>(meta: &N) -> Option<String> {
    if let Some(charset) = meta.attr("charset").filter(|c| !c.trim().is_empty()) {
        return Some(charset.trim().to_lowercase());
    }

    let is_content_type = meta
        .attr("http-equiv")
        .is_some_and(|h| h.eq_ignore_ascii_case("content-type"));
    if !is_content_type {
        return None;
    }

    let content = meta.attr("content")?.to_lowercase();
    let (_, charset) = content.split_once("charset=")?;
    let charset = charset.trim().trim_matches(['"', '\'', ';']).trim();
    if charset.is_empty() {
        None
    } else {
        Some(charset.to_string())
    }
}

/// `href` of the first `<link rel="canonical">`.
fn canonical_href<N: DomNode>(root: &N) -> Option<String> {
    root.select("link[rel][href]")
        .into_iter()
        .find(|link| {
            link.attr("rel")
                .is_some_and(|rel| rel.split_whitespace().any(|r| r.eq_ignore_ascii_case("canonical")))
        })
        .and_then(|link| link.attr("href"))
        .filter(|href| !href.trim().is_empty())
}

/// Split a comma or semicolon-separated keyword list, dropping blanks and
/// case-insensitive duplicates.
#[must_use]
pub fn parse_keyword_list(content: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    content
        .split([',', ';'])
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}
