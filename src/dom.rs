//! Read-only document tree interface.
//!
//! Extraction code only ever sees the [`DomNode`] trait: selector lookup,
//! text, attributes, element children and the next element sibling. The
//! adapter for `dom_query` lives here as well, so swapping the HTML parser
//! means implementing one trait.

use dom_query::{Document, NodeRef, Selection};

use crate::error::{Error, Result};

/// Inline tags whose text flows into the surrounding text without a break.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "i", "kbd", "label",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// A node of a parsed HTML tree.
///
/// Implementations must be cheap to clone (handles, not owned subtrees) and
/// must return query results in document order.
pub trait DomNode: Clone {
    /// Lowercase tag name; `None` for non-element nodes.
    fn tag_name(&self) -> Option<String>;

    /// Attribute value, if present.
    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text of the node and all descendants.
    fn text(&self) -> String;

    /// Text of the node with the subtrees of `skip_tags` left out.
    fn visible_text(&self, skip_tags: &[&str]) -> String;

    /// Descendants matching a CSS selector, in document order.
    fn select(&self, selector: &str) -> Vec<Self>;

    /// Direct element children.
    fn element_children(&self) -> Vec<Self>;

    /// The next sibling that is an element, skipping text and comments.
    fn next_element_sibling(&self) -> Option<Self>;

    /// Heading level for `h1`–`h6`.
    fn heading_level(&self) -> Option<u8> {
        match self.tag_name()?.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    /// Whether the node is an element with the given tag name.
    fn is_tag(&self, tag: &str) -> bool {
        self.tag_name().is_some_and(|t| t == tag)
    }

    /// Whitespace-separated tokens of the `class` attribute.
    fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// First descendant matching `selector`.
    fn select_first(&self, selector: &str) -> Option<Self> {
        self.select(selector).into_iter().next()
    }
}

/// [`DomNode`] adapter over a `dom_query` node.
#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(NodeRef<'a>);

impl<'a> HtmlNode<'a> {
    /// Wrap a `dom_query` node.
    #[must_use]
    pub fn new(node: NodeRef<'a>) -> Self {
        Self(node)
    }

    fn selection(&self) -> Selection<'a> {
        Selection::from(self.0)
    }
}

impl DomNode for HtmlNode<'_> {
    fn tag_name(&self) -> Option<String> {
        if !self.0.is_element() {
            return None;
        }
        self.0.node_name().map(|t| t.to_ascii_lowercase())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.selection().attr(name).map(|s| s.to_string())
    }

    fn text(&self) -> String {
        self.selection().text().to_string()
    }

    fn visible_text(&self, skip_tags: &[&str]) -> String {
        enum Step<'a> {
            Visit(NodeRef<'a>),
            Break,
        }

        let mut out = String::new();
        let mut stack = vec![Step::Visit(self.0)];

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Break => {
                    out.push(' ');
                    continue;
                }
                Step::Visit(node) => node,
            };

            if node.is_text() {
                out.push_str(&node.text());
                continue;
            }

            let tag = HtmlNode(node).tag_name();
            if tag.as_deref().is_some_and(|t| skip_tags.contains(&t)) {
                continue;
            }
            let is_block = tag.as_deref().is_some_and(|t| !INLINE_TAGS.contains(&t));

            let mut children = Vec::new();
            let mut child = node.first_child();
            while let Some(c) = child {
                child = c.next_sibling();
                children.push(c);
            }

            if is_block {
                stack.push(Step::Break);
            }
            stack.extend(children.into_iter().rev().map(Step::Visit));
            if is_block {
                stack.push(Step::Break);
            }
        }

        out
    }

    fn select(&self, selector: &str) -> Vec<Self> {
        self.selection()
            .select(selector)
            .nodes()
            .iter()
            .map(|n| HtmlNode(*n))
            .collect()
    }

    fn element_children(&self) -> Vec<Self> {
        self.selection()
            .children()
            .nodes()
            .iter()
            .map(|n| HtmlNode(*n))
            .collect()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        let mut sibling = self.0.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(HtmlNode(s));
            }
            sibling = s.next_sibling();
        }
        None
    }
}

/// Parse markup into a document.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] when the markup is blank; the HTML5 parser
/// itself recovers from any malformed input.
pub fn parse(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(Error::ParseFailed("document is empty".to_string()));
    }
    Ok(Document::from(html))
}

/// The `<html>` element of a parsed document.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] if the tree has no root element.
pub fn root(doc: &Document) -> Result<HtmlNode<'_>> {
    doc.select("html")
        .nodes()
        .first()
        .map(|n| HtmlNode(*n))
        .ok_or_else(|| Error::ParseFailed("document has no root element".to_string()))
}
