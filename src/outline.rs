//! Heading-based content outline.
//!
//! Headings `h1`–`h3` are walked in document order against a stack of open
//! nodes. Content under each heading is gathered by a forward scan over its
//! following siblings, bounded by a guard limit so flat documents with
//! thousands of siblings stay cheap.

use url::Url;

use crate::collect::{collect_images, collect_links, images_within, links_within};
use crate::dom::DomNode;
use crate::options::DEFAULT_SIBLING_GUARD;
use crate::patterns::OUTLINE_HEADING_SELECTOR;
use crate::result::{ImageRef, LinkRef, OutlineNode};
use crate::text::{sanitize, sanitize_non_empty, truncate, word_count};

/// Maximum number of top-level outline entries.
pub const MAX_OUTLINE_ROOTS: usize = 25;
pub const MAX_NODE_PARAGRAPHS: usize = 8;
pub const PARAGRAPH_CHAR_LIMIT: usize = 650;
pub const BULLET_CHAR_LIMIT: usize = 280;
pub const MAX_BULLETS_PER_GROUP: usize = 6;
pub const MAX_BULLET_GROUPS: usize = 6;
pub const MAX_NODE_LINKS: usize = 12;
pub const MAX_NODE_IMAGES: usize = 6;

/// Deepest heading level that opens an outline node.
const MAX_OUTLINE_LEVEL: u8 = 3;

/// Content gathered under one heading.
#[derive(Debug, Default)]
pub(crate) struct SiblingScan {
    pub paragraphs: Vec<String>,
    pub bullets: Vec<Vec<String>>,
    pub links: Vec<LinkRef>,
    pub images: Vec<ImageRef>,
    pub word_count: usize,
    /// Sibling elements visited before the scan stopped.
    pub visited: usize,
}

/// Builds the outline forest for a document.
#[derive(Debug, Clone)]
pub struct OutlineBuilder<'u> {
    base: Option<&'u Url>,
    sibling_guard: usize,
}

impl Default for OutlineBuilder<'_> {
    fn default() -> Self {
        Self {
            base: None,
            sibling_guard: DEFAULT_SIBLING_GUARD,
        }
    }
}

impl<'u> OutlineBuilder<'u> {
    /// Create a builder resolving links against `base`.
    #[must_use]
    pub fn new(base: Option<&'u Url>, sibling_guard: usize) -> Self {
        Self { base, sibling_guard }
    }

    /// Build the outline forest.
    ///
    /// Every node's children have a strictly greater level, and a pre-order
    /// walk of the forest reproduces the document's heading order. Headings
    /// without text are skipped and never open a node.
    #[must_use]
    pub fn build<N: DomNode>(&self, root: &N) -> Vec<OutlineNode> {
        let mut nodes: Vec<OutlineNode> = Vec::new();
        let mut parents: Vec<Option<usize>> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut root_count = 0usize;

        for heading in root.select(OUTLINE_HEADING_SELECTOR) {
            let Some(level) = heading.heading_level() else {
                continue;
            };
            let title = sanitize(&heading.text());
            if title.is_empty() {
                continue;
            }

            while open.last().is_some_and(|&top| nodes[top].level >= level) {
                open.pop();
            }

            let parent = open.last().copied();
            if parent.is_none() {
                if root_count == MAX_OUTLINE_ROOTS {
                    break;
                }
                root_count += 1;
            }

            let scan = self.scan_siblings(&heading, level);
            let id = heading
                .attr("id")
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| format!("outline-{}", nodes.len() + 1));

            nodes.push(OutlineNode {
                id,
                title,
                level,
                summary: scan.paragraphs.first().cloned().unwrap_or_default(),
                paragraphs: scan.paragraphs,
                bullets: scan.bullets,
                links: scan.links,
                images: scan.images,
                word_count: scan.word_count,
                sub_sections: Vec::new(),
            });
            parents.push(parent);
            open.push(nodes.len() - 1);
        }

        assemble(nodes, &parents)
    }

    /// Walk the siblings following `heading`, stopping at the next outline
    /// heading or once the guard limit of visited siblings is reached.
    pub(crate) fn scan_siblings<N: DomNode>(&self, heading: &N, level: u8) -> SiblingScan {
        let mut scan = SiblingScan::default();
        let mut anchors: Vec<N> = Vec::new();
        let mut images: Vec<N> = Vec::new();

        let mut current = heading.next_element_sibling();
        while let Some(sibling) = current {
            if scan.visited >= self.sibling_guard {
                tracing::debug!(
                    level,
                    guard = self.sibling_guard,
                    "sibling scan stopped at guard limit"
                );
                break;
            }
            // Any outline heading ends the scan: shallower or equal ones close
            // this node, deeper ones open a child that owns what follows.
            if sibling.heading_level().is_some_and(|l| l <= MAX_OUTLINE_LEVEL) {
                break;
            }
            scan.visited += 1;

            match sibling.tag_name().as_deref() {
                Some("p") => {
                    if let Some(text) = sanitize_non_empty(&sibling.text()) {
                        scan.word_count += word_count(&text);
                        if scan.paragraphs.len() < MAX_NODE_PARAGRAPHS {
                            scan.paragraphs.push(truncate(&text, PARAGRAPH_CHAR_LIMIT));
                        }
                    }
                }
                Some("ul" | "ol") => {
                    if scan.bullets.len() < MAX_BULLET_GROUPS {
                        let group: Vec<String> = sibling
                            .select("li")
                            .iter()
                            .filter_map(|li| sanitize_non_empty(&li.text()))
                            .take(MAX_BULLETS_PER_GROUP)
                            .map(|item| truncate(&item, BULLET_CHAR_LIMIT))
                            .collect();
                        if !group.is_empty() {
                            scan.bullets.push(group);
                        }
                    }
                }
                _ => {}
            }

            anchors.extend(links_within(&sibling));
            images.extend(images_within(&sibling));
            current = sibling.next_element_sibling();
        }

        scan.links = collect_links(&anchors, self.base, MAX_NODE_LINKS);
        scan.images = collect_images(&images, self.base, MAX_NODE_IMAGES);
        scan
    }
}

/// Turn the flat node list plus parent indices into an owned forest.
///
/// A parent always precedes its children, so walking backwards lets every
/// subtree be complete before it is moved into its parent.
fn assemble(nodes: Vec<OutlineNode>, parents: &[Option<usize>]) -> Vec<OutlineNode> {
    let mut children: Vec<Vec<OutlineNode>> = vec![Vec::new(); nodes.len()];
    let mut roots = Vec::new();

    for (index, mut node) in nodes.into_iter().enumerate().rev() {
        node.sub_sections = std::mem::take(&mut children[index]);
        node.sub_sections.reverse();
        match parents[index] {
            Some(parent) => children[parent].push(node),
            None => roots.push(node),
        }
    }

    roots.reverse();
    roots
}
