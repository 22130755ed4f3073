//! Text sanitizing and bounded truncation.
//!
//! Everything here is pure and total: no input produces an error, and the
//! same input always yields the same output.

use std::collections::HashSet;
use std::hash::Hash;

use crate::patterns::{IFRAME_TOKEN, URL_TOKEN, WHITESPACE_NORMALIZE, WORD_CHAR};

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Clean a raw text fragment.
///
/// Removes embedded absolute URLs and the `iframe` token, collapses whitespace
/// runs to single spaces and trims. Text left without any word character is
/// returned as an empty string, which callers treat as "drop".
///
/// # Examples
///
/// ```
/// use page_outline::text::sanitize;
///
/// assert_eq!(sanitize("  Read   more at http://evil.com  "), "Read more at");
/// assert_eq!(sanitize("IFRAME embed"), "embed");
/// assert_eq!(sanitize(" -- | -- "), "");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    let without_urls = URL_TOKEN.replace_all(text, " ");
    let without_embeds = IFRAME_TOKEN.replace_all(&without_urls, " ");
    let collapsed = WHITESPACE_NORMALIZE.replace_all(&without_embeds, " ");
    let trimmed = collapsed.trim();

    if WORD_CHAR.is_match(trimmed) {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// Sanitize, returning `None` when nothing meaningful is left.
#[must_use]
pub fn sanitize_non_empty(text: &str) -> Option<String> {
    let cleaned = sanitize(text);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Collapse whitespace runs and trim, without any other cleaning.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Bound `text` to `limit` characters.
///
/// Text of at most `limit` characters is returned unchanged. Longer text is
/// cut to its first `limit` characters, trimmed, and suffixed with `…`.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((byte_idx, _)) => {
            let mut out = text[..byte_idx].trim().to_string();
            out.push(ELLIPSIS);
            out
        }
    }
}

/// Bound `text` to at most `limit` characters, ellipsis included.
///
/// Unlike [`truncate`], the result never exceeds `limit`: longer text keeps
/// its first `limit - 1` characters and ends in `…`.
#[must_use]
pub fn cap(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }
    truncate(text, limit - 1)
}

/// Count whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep the first item for each key, preserving first-seen order.
pub fn dedupe_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
