//! Result types for extraction output.
//!
//! [`RawExtraction`] is the unbounded output of one extraction pass;
//! [`RefinedDocument`] is its capped, persistence-ready condensation. Both
//! serialize to JSON with camelCase keys.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A hyperlink with its visible text and (when resolvable) absolute target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub text: String,
    pub href: String,
}

/// An image reference with its alt text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// A heading-anchored outline entry.
///
/// Children in `sub_sections` always have a strictly greater `level` and
/// appear in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    pub id: String,
    pub title: String,
    /// Heading level, 1–3.
    pub level: u8,
    /// First paragraph under the heading, or empty.
    pub summary: String,
    pub paragraphs: Vec<String>,
    /// One group per list encountered under the heading.
    pub bullets: Vec<Vec<String>>,
    pub links: Vec<LinkRef>,
    pub images: Vec<ImageRef>,
    pub word_count: usize,
    pub sub_sections: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.sub_sections.iter().map(OutlineNode::subtree_len).sum::<usize>()
    }
}

/// Inferred semantic category of a section, from its styling hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// A container-anchored content record, independent of the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    pub id: String,
    /// 1-based position in the section list.
    pub order: usize,
    pub heading: String,
    pub subheading: String,
    pub summary: String,
    pub paragraphs: Vec<String>,
    pub list_items: Vec<String>,
    pub links: Vec<LinkRef>,
    pub images: Vec<ImageRef>,
    pub has_call_to_action: bool,
    pub tag: String,
    pub classes: Vec<String>,
    pub body: String,
    pub tone: Option<Tone>,
    pub accent_color: Option<String>,
}

/// Flattened text of one persisted section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub id: String,
    pub heading: String,
    pub body: String,
}

/// Ordered key/value metadata; the first value stored for a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataMap {
    entries: Vec<(String, String)>,
}

impl MetadataMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair unless the key is already present or the value is blank.
    ///
    /// Returns whether the pair was stored.
    pub fn insert_first(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        let value = value.trim();
        if key.is_empty() || value.is_empty() || self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value.to_string()));
        true
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Whether any key starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.starts_with(prefix))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for MetadataMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MetadataMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut map = MetadataMap::new();
        for (k, v) in raw {
            if let serde_json::Value::String(s) = v {
                map.insert_first(k, s);
            }
        }
        Ok(map)
    }
}

/// Aggregate counts and feature flags over one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractionStats {
    /// Heading counts for `h1`..`h6`, index 0 is `h1`.
    pub heading_counts: [usize; 6],
    pub heading_count: usize,
    pub link_count: usize,
    pub navigation_link_count: usize,
    pub image_count: usize,
    pub keyword_count: usize,
    pub section_count: usize,
    pub outline_count: usize,
    pub paragraph_count: usize,
    pub structured_data_count: usize,
    pub text_length: usize,
    pub word_count: usize,
    pub reading_time_minutes: usize,
    pub unique_link_hosts: usize,
    pub has_title: bool,
    pub has_description: bool,
    pub has_open_graph: bool,
    pub has_twitter_card: bool,
    pub has_structured_data: bool,
    pub has_canonical: bool,
    pub has_viewport: bool,
    pub has_lang: bool,
    pub has_robots: bool,
}

/// Flat heading texts per level, as found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

impl Headings {
    /// Counts per level, `h1` first.
    #[must_use]
    pub fn counts(&self) -> [usize; 6] {
        [
            self.h1.len(),
            self.h2.len(),
            self.h3.len(),
            self.h4.len(),
            self.h5.len(),
            self.h6.len(),
        ]
    }
}

/// Unbounded result of a single extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtraction {
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub metadata: MetadataMap,
    pub headings: Headings,
    pub outline: Vec<OutlineNode>,
    pub sections: Vec<SectionBlock>,
    pub links: Vec<LinkRef>,
    pub navigation: Vec<LinkRef>,
    pub images: Vec<ImageRef>,
    pub structured_data: Vec<serde_json::Value>,
    /// Sanitized visible text of the page body.
    pub text: String,
    pub stats: ExtractionStats,
}

/// Capped, persistence-ready condensation of a [`RawExtraction`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedDocument {
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub metadata: MetadataMap,
    pub headings: Headings,
    pub outline: Vec<OutlineNode>,
    pub sections: Vec<SectionBlock>,
    pub text_blocks: Vec<TextBlock>,
    pub navigation: Vec<LinkRef>,
    pub links: Vec<LinkRef>,
    pub images: Vec<ImageRef>,
    pub structured_data: Vec<serde_json::Value>,
    pub text_preview: String,
    pub full_text: String,
    pub stats: ExtractionStats,
    pub scraped_at: DateTime<Utc>,
}

/// Output of a scrape: the refined document, plus the raw extraction when
/// requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeOutcome {
    pub refined: RefinedDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawExtraction>,
}
