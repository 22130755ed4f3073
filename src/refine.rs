//! Condensation of a raw extraction into a size-capped document.
//!
//! Every collection is capped and every long string cut to at most its
//! limit, ellipsis included, so the result has a bounded storage footprint. When structural extraction found
//! nothing, a minimal outline is synthesized from the flat heading lists and
//! minimal sections from the outline.

use chrono::{DateTime, Utc};

use crate::metadata::is_allowed_key;
use crate::result::{
    Headings, ImageRef, LinkRef, MetadataMap, OutlineNode, RawExtraction, RefinedDocument,
    SectionBlock, TextBlock,
};
pub use crate::outline::MAX_OUTLINE_ROOTS;
pub use crate::sections::MAX_SECTIONS;
use crate::text::cap;

pub const SECTION_PARAGRAPH_LIMIT: usize = 700;
pub const SECTION_LIST_ITEM_LIMIT: usize = 400;
pub const MAX_NAVIGATION: usize = 40;
pub const NAVIGATION_TEXT_LIMIT: usize = 160;
pub const MAX_LINKS: usize = 20;
pub const LINK_TEXT_LIMIT: usize = 100;
pub const MAX_IMAGES: usize = 5;
pub const IMAGE_ALT_LIMIT: usize = 200;
pub const TEXT_PREVIEW_LIMIT: usize = 2000;
pub const FULL_TEXT_LIMIT: usize = 20_000;
pub const MAX_METADATA_KEYS: usize = 20;
pub const MAX_STRUCTURED_DATA: usize = 5;
pub const MAX_TEXT_BLOCKS: usize = 18;
pub const TEXT_BLOCK_BODY_LIMIT: usize = 5000;
pub const MAX_KEYWORDS: usize = 30;
pub const MAX_HEADINGS_PER_LEVEL: usize = 20;

/// Fallback outline limits.
pub const FALLBACK_MAX_H1: usize = 5;
pub const FALLBACK_MAX_H2: usize = 8;
pub const FALLBACK_MAX_SECTIONS: usize = 6;

/// Refine a raw extraction, stamping it with the current time.
#[must_use]
pub fn refine(raw: RawExtraction) -> RefinedDocument {
    refine_at(raw, Utc::now())
}

/// Refine a raw extraction with an explicit timestamp.
#[must_use]
pub fn refine_at(raw: RawExtraction, scraped_at: DateTime<Utc>) -> RefinedDocument {
    let mut outline = raw.outline;
    outline.truncate(MAX_OUTLINE_ROOTS);
    if outline.is_empty() {
        outline = fallback_outline(&raw.headings);
    }

    let mut sections: Vec<SectionBlock> = raw
        .sections
        .into_iter()
        .take(MAX_SECTIONS)
        .map(cap_section)
        .collect();
    if sections.is_empty() && !outline.is_empty() {
        sections = fallback_sections(&outline);
    }

    let text_blocks = text_blocks(&sections);

    let mut keywords = raw.keywords;
    keywords.truncate(MAX_KEYWORDS);

    let mut structured_data = raw.structured_data;
    structured_data.truncate(MAX_STRUCTURED_DATA);

    tracing::debug!(
        outline = outline.len(),
        sections = sections.len(),
        text_blocks = text_blocks.len(),
        "refined extraction"
    );

    RefinedDocument {
        url: raw.url,
        title: raw.title,
        description: raw.description,
        keywords,
        metadata: cap_metadata(&raw.metadata),
        headings: cap_headings(raw.headings),
        outline,
        sections,
        text_blocks,
        navigation: cap_links(raw.navigation, MAX_NAVIGATION, NAVIGATION_TEXT_LIMIT),
        links: cap_links(raw.links, MAX_LINKS, LINK_TEXT_LIMIT),
        images: cap_images(raw.images),
        structured_data,
        text_preview: cap(&raw.text, TEXT_PREVIEW_LIMIT),
        full_text: cap(&raw.text, FULL_TEXT_LIMIT),
        stats: raw.stats,
        scraped_at,
    }
}

fn cap_section(mut section: SectionBlock) -> SectionBlock {
    for paragraph in &mut section.paragraphs {
        *paragraph = cap(paragraph, SECTION_PARAGRAPH_LIMIT);
    }
    for item in &mut section.list_items {
        *item = cap(item, SECTION_LIST_ITEM_LIMIT);
    }
    section.summary = cap(&section.summary, SECTION_PARAGRAPH_LIMIT);
    section
}

fn cap_links(links: Vec<LinkRef>, max: usize, text_limit: usize) -> Vec<LinkRef> {
    links
        .into_iter()
        .take(max)
        .map(|link| LinkRef {
            text: cap(&link.text, text_limit),
            href: link.href,
        })
        .collect()
}

fn cap_images(images: Vec<ImageRef>) -> Vec<ImageRef> {
    images
        .into_iter()
        .take(MAX_IMAGES)
        .map(|image| ImageRef {
            src: image.src,
            alt: cap(&image.alt, IMAGE_ALT_LIMIT),
        })
        .collect()
}

fn cap_headings(mut headings: Headings) -> Headings {
    for level in [
        &mut headings.h1,
        &mut headings.h2,
        &mut headings.h3,
        &mut headings.h4,
        &mut headings.h5,
        &mut headings.h6,
    ] {
        level.truncate(MAX_HEADINGS_PER_LEVEL);
    }
    headings
}

/// Keep at most [`MAX_METADATA_KEYS`] pairs: allow-listed keys first, then
/// any remaining pairs, each group in insertion order.
#[must_use]
pub fn cap_metadata(metadata: &MetadataMap) -> MetadataMap {
    let (allowed, rest): (Vec<_>, Vec<_>) = metadata.iter().partition(|(key, _)| is_allowed_key(key));

    let mut capped = MetadataMap::new();
    for (key, value) in allowed.into_iter().chain(rest) {
        if capped.len() == MAX_METADATA_KEYS {
            break;
        }
        capped.insert_first(key, value);
    }
    capped
}

/// Minimal outline from flat heading lists.
///
/// With `h1` headings present: up to five level-1 roots, and up to eight
/// `h2` entries nested under the first root only. Without `h1`: up to eight
/// level-2 roots.
#[must_use]
pub fn fallback_outline(headings: &Headings) -> Vec<OutlineNode> {
    let mut next_id = 0usize;
    let mut node = |title: &str, level: u8| {
        next_id += 1;
        OutlineNode {
            id: format!("outline-{next_id}"),
            title: title.to_string(),
            level,
            ..OutlineNode::default()
        }
    };

    if headings.h1.is_empty() {
        return headings
            .h2
            .iter()
            .take(FALLBACK_MAX_H2)
            .map(|title| node(title.as_str(), 2))
            .collect();
    }

    let mut roots: Vec<OutlineNode> = Vec::new();
    for (index, title) in headings.h1.iter().take(FALLBACK_MAX_H1).enumerate() {
        let mut root = node(title.as_str(), 1);
        if index == 0 {
            root.sub_sections = headings
                .h2
                .iter()
                .take(FALLBACK_MAX_H2)
                .map(|title| node(title.as_str(), 2))
                .collect();
        }
        roots.push(root);
    }
    roots
}

/// Minimal sections from the first outline nodes in pre-order.
#[must_use]
pub fn fallback_sections(outline: &[OutlineNode]) -> Vec<SectionBlock> {
    fn preorder<'a>(nodes: &'a [OutlineNode], out: &mut Vec<&'a OutlineNode>) {
        for node in nodes {
            if out.len() == FALLBACK_MAX_SECTIONS {
                return;
            }
            out.push(node);
            preorder(&node.sub_sections, out);
        }
    }

    let mut nodes = Vec::new();
    preorder(outline, &mut nodes);

    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            cap_section(SectionBlock {
                id: node.id.clone(),
                order: index + 1,
                heading: node.title.clone(),
                summary: node.summary.clone(),
                paragraphs: node.paragraphs.clone(),
                list_items: node.bullets.iter().flatten().cloned().collect(),
                links: node.links.clone(),
                images: node.images.clone(),
                tag: format!("h{}", node.level),
                ..SectionBlock::default()
            })
        })
        .collect()
}

/// One text block per section: paragraphs then list items, newline-joined.
#[must_use]
pub fn text_blocks(sections: &[SectionBlock]) -> Vec<TextBlock> {
    sections
        .iter()
        .take(MAX_TEXT_BLOCKS)
        .map(|section| {
            let body = section
                .paragraphs
                .iter()
                .chain(&section.list_items)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n");
            TextBlock {
                id: section.id.clone(),
                heading: section.heading.clone(),
                body: cap(&body, TEXT_BLOCK_BODY_LIMIT),
            }
        })
        .collect()
}
