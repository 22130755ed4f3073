//! Aggregate statistics over an extraction.

use std::collections::HashSet;

use crate::dom::DomNode;
use crate::result::{ExtractionStats, OutlineNode, RawExtraction};
use crate::text::{sanitize_non_empty, word_count};
use crate::url_utils::extract_hostname;

/// Words per minute used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Compute statistics for a raw extraction.
///
/// Everything except the paragraph count is derived from the extraction
/// itself; paragraphs are counted on the document so the count does not
/// depend on outline or section caps.
#[must_use]
pub fn compute_stats<N: DomNode>(root: &N, raw: &RawExtraction) -> ExtractionStats {
    let heading_counts = raw.headings.counts();
    let words = word_count(&raw.text);

    let paragraph_count = root
        .select("p")
        .iter()
        .filter(|p| sanitize_non_empty(&p.text()).is_some())
        .count();

    let unique_link_hosts = raw
        .links
        .iter()
        .filter_map(|link| extract_hostname(&link.href))
        .collect::<HashSet<_>>()
        .len();

    let meta = &raw.metadata;

    ExtractionStats {
        heading_counts,
        heading_count: heading_counts.iter().sum(),
        link_count: raw.links.len(),
        navigation_link_count: raw.navigation.len(),
        image_count: raw.images.len(),
        keyword_count: raw.keywords.len(),
        section_count: raw.sections.len(),
        outline_count: raw.outline.iter().map(OutlineNode::subtree_len).sum(),
        paragraph_count,
        structured_data_count: raw.structured_data.len(),
        text_length: raw.text.chars().count(),
        word_count: words,
        reading_time_minutes: reading_time_minutes(words),
        unique_link_hosts,
        has_title: !raw.title.is_empty(),
        has_description: !raw.description.is_empty(),
        has_open_graph: meta.has_prefix("og:"),
        has_twitter_card: meta.has_prefix("twitter:"),
        has_structured_data: !raw.structured_data.is_empty(),
        has_canonical: meta.contains_key("canonical"),
        has_viewport: meta.contains_key("viewport"),
        has_lang: meta.contains_key("lang"),
        has_robots: meta.contains_key("robots"),
    }
}

/// `max(1, round(words / 200))`, rounding halves up.
#[must_use]
pub fn reading_time_minutes(words: usize) -> usize {
    ((words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::result::{Headings, LinkRef, MetadataMap};
    use dom_query::Document;

    fn link(href: &str) -> LinkRef {
        LinkRef {
            text: "x".into(),
            href: href.into(),
        }
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(0), 1);
        assert_eq!(reading_time_minutes(99), 1);
        assert_eq!(reading_time_minutes(299), 1);
        assert_eq!(reading_time_minutes(300), 2);
        assert_eq!(reading_time_minutes(1000), 5);
    }

    #[test]
    fn test_counts_and_flags() {
        let doc = Document::from("<p>One</p><p> </p><div><p>Two</p></div>");
        let Ok(root) = dom::root(&doc) else { panic!("no root") };

        let mut metadata = MetadataMap::new();
        metadata.insert_first("og:title", "T");
        metadata.insert_first("canonical", "https://example.com/");
        metadata.insert_first("lang", "en");

        let raw = RawExtraction {
            title: "Title".into(),
            metadata,
            headings: Headings {
                h1: vec!["a".into()],
                h2: vec!["b".into(), "c".into()],
                h5: vec!["d".into()],
                ..Headings::default()
            },
            outline: vec![OutlineNode {
                sub_sections: vec![OutlineNode::default()],
                ..OutlineNode::default()
            }],
            links: vec![
                link("https://Example.com/a"),
                link("https://example.com/b"),
                link("https://other.org/"),
                link("/relative"),
                link("mailto:me@example.com"),
            ],
            text: "Hello there friend".into(),
            ..RawExtraction::default()
        };

        let stats = compute_stats(&root, &raw);
        assert_eq!(stats.heading_counts, [1, 2, 0, 0, 1, 0]);
        assert_eq!(stats.heading_count, 4);
        assert_eq!(stats.link_count, 5);
        assert_eq!(stats.unique_link_hosts, 2);
        assert_eq!(stats.outline_count, 2);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.text_length, 18);
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.reading_time_minutes, 1);
        assert!(stats.has_title);
        assert!(!stats.has_description);
        assert!(stats.has_open_graph);
        assert!(!stats.has_twitter_card);
        assert!(stats.has_canonical);
        assert!(stats.has_lang);
        assert!(!stats.has_viewport);
        assert!(!stats.has_robots);
        assert!(!stats.has_structured_data);
    }
}
