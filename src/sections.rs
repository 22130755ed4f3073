//! Container-anchored section blocks.
//!
//! Independent of the outline: each `section`/`article`/region-like
//! container yields one flat record with its own heading, content sample,
//! styling tone and accent colour.

use regex::Regex;
use url::Url;

use crate::collect::{collect_images, collect_links};
use crate::dom::DomNode;
use crate::patterns::{
    COLOR_TOKEN, CTA_SELECTOR, NAMED_COLOR, SECTION_SELECTOR, STYLE_COLOR_DECL, TONE_DANGER,
    TONE_INFO, TONE_NEUTRAL, TONE_SUCCESS, TONE_WARNING,
};
use crate::result::{SectionBlock, Tone};
use crate::text::{sanitize, sanitize_non_empty, truncate};

pub const MAX_SECTIONS: usize = 20;
pub const MAX_SECTION_PARAGRAPHS: usize = 10;
pub const MAX_SECTION_LIST_ITEMS: usize = 20;
pub const MAX_SECTION_LINKS: usize = 14;
pub const MAX_SECTION_IMAGES: usize = 8;
pub const SECTION_BODY_LIMIT: usize = 5000;

/// Subtrees left out of a section body.
const BODY_SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template", "svg"];

/// Attributes holding an explicit section identifier.
const ID_ATTRS: &[&str] = &["id", "data-section-id", "data-id"];

/// Attributes, besides `class`, scanned for tone keywords.
const TONE_HINT_ATTRS: &[&str] = &["style", "data-tone", "data-theme", "data-variant"];

/// Attributes holding an explicit colour.
const COLOR_ATTRS: &[&str] = &["data-accent", "data-color", "color", "bgcolor"];

/// CSS words that look like colour names but are not colours.
const NON_COLOR_WORDS: &[&str] = &[
    "none", "transparent", "inherit", "initial", "unset", "revert", "currentcolor", "solid",
    "dashed", "dotted", "double", "groove", "ridge", "inset", "outset", "hidden", "thin",
    "medium", "thick", "auto", "url", "repeat", "center", "cover", "contain", "fixed",
];

/// Tone rules in priority order; the first matching family wins.
fn tone_rules() -> [(Tone, &'static Regex); 5] {
    [
        (Tone::Success, &*TONE_SUCCESS),
        (Tone::Warning, &*TONE_WARNING),
        (Tone::Danger, &*TONE_DANGER),
        (Tone::Info, &*TONE_INFO),
        (Tone::Neutral, &*TONE_NEUTRAL),
    ]
}

/// Extract section blocks in document order.
///
/// Containers with no heading, paragraph, list item or image are dropped.
/// At most [`MAX_SECTIONS`] are returned and `order` is 1-based over the
/// kept sections.
#[must_use]
pub fn extract_sections<N: DomNode>(root: &N, base: Option<&Url>) -> Vec<SectionBlock> {
    let mut sections = Vec::new();

    for container in root.select(SECTION_SELECTOR) {
        if sections.len() == MAX_SECTIONS {
            break;
        }
        if let Some(block) = section_block(&container, base, sections.len() + 1) {
            sections.push(block);
        }
    }

    sections
}

fn section_block<N: DomNode>(container: &N, base: Option<&Url>, order: usize) -> Option<SectionBlock> {
    let (heading, subheading) = headings_of(container);

    let paragraphs: Vec<String> = container
        .select("p")
        .iter()
        .filter_map(|p| sanitize_non_empty(&p.text()))
        .take(MAX_SECTION_PARAGRAPHS)
        .collect();
    let list_items: Vec<String> = container
        .select("li")
        .iter()
        .filter_map(|li| sanitize_non_empty(&li.text()))
        .take(MAX_SECTION_LIST_ITEMS)
        .collect();
    let images = collect_images(&container.select("img"), base, MAX_SECTION_IMAGES);

    if heading.is_empty() && paragraphs.is_empty() && list_items.is_empty() && images.is_empty() {
        return None;
    }

    let tag = container.tag_name().unwrap_or_default();
    let id = ID_ATTRS
        .iter()
        .filter_map(|attr| container.attr(attr))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| format!("{tag}-{order}"));

    let summary = paragraphs
        .first()
        .or_else(|| list_items.first())
        .cloned()
        .unwrap_or_default();

    Some(SectionBlock {
        id,
        order,
        heading,
        subheading,
        summary,
        links: collect_links(&container.select("a[href]"), base, MAX_SECTION_LINKS),
        images,
        has_call_to_action: has_call_to_action(container),
        classes: container.classes(),
        body: truncate(&sanitize(&container.visible_text(BODY_SKIP_TAGS)), SECTION_BODY_LIMIT),
        tone: infer_tone(container),
        accent_color: infer_accent_color(container),
        tag,
        paragraphs,
        list_items,
    })
}

/// Heading and subheading of a container.
///
/// The heading is the first heading of the highest level present; the
/// subheading is the first heading of any deeper level.
fn headings_of<N: DomNode>(container: &N) -> (String, String) {
    let labelled: Vec<(u8, String)> = container
        .select("h1, h2, h3, h4, h5, h6")
        .iter()
        .filter_map(|h| Some((h.heading_level()?, sanitize_non_empty(&h.text())?)))
        .collect();

    let Some(top) = labelled.iter().map(|(level, _)| *level).min() else {
        return (String::new(), String::new());
    };

    let heading = labelled.iter().find(|(level, _)| *level == top);
    let subheading = labelled.iter().find(|(level, _)| *level > top);

    (
        heading.map(|(_, text)| text.clone()).unwrap_or_default(),
        subheading.map(|(_, text)| text.clone()).unwrap_or_default(),
    )
}

/// Whether the container holds a button-like element.
#[must_use]
pub fn has_call_to_action<N: DomNode>(container: &N) -> bool {
    container.select_first(CTA_SELECTOR).is_some()
}

/// Tone from the container's class list and styling attributes.
#[must_use]
pub fn infer_tone<N: DomNode>(container: &N) -> Option<Tone> {
    let mut hints = container.classes().join(" ");
    for attr in TONE_HINT_ATTRS {
        if let Some(value) = container.attr(attr) {
            hints.push(' ');
            hints.push_str(&value);
        }
    }
    if hints.trim().is_empty() {
        return None;
    }

    tone_rules()
        .into_iter()
        .find(|(_, pattern)| pattern.is_match(&hints))
        .map(|(tone, _)| tone)
}

/// Accent colour from inline background/border style, else a colour attribute.
#[must_use]
pub fn infer_accent_color<N: DomNode>(container: &N) -> Option<String> {
    if let Some(style) = container.attr("style") {
        let from_style = STYLE_COLOR_DECL
            .captures_iter(&style)
            .filter_map(|caps| caps.get(1))
            .find_map(|value| color_in(value.as_str()));
        if from_style.is_some() {
            return from_style;
        }
    }

    COLOR_ATTRS
        .iter()
        .filter_map(|attr| container.attr(attr))
        .find_map(|value| color_in(&value))
}

/// First colour token in a CSS value: hex, functional or a named colour word.
fn color_in(value: &str) -> Option<String> {
    if let Some(token) = COLOR_TOKEN.find(value) {
        return Some(token.as_str().to_lowercase());
    }

    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|word| word.trim().trim_end_matches("!important").to_lowercase())
        .find(|word| NAMED_COLOR.is_match(word) && !NON_COLOR_WORDS.contains(&word.as_str()))
}
