//! Field-level comparison of two refined documents.

use serde::{Deserialize, Serialize};

use crate::result::RefinedDocument;

/// One changed field between a previous and a current scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub previous: String,
    pub current: String,
}

/// Compare two refined documents.
///
/// Checks title, description, keyword count, section count, link count,
/// image count and text length, in that order, and returns only the fields
/// whose values differ.
#[must_use]
pub fn diff(previous: &RefinedDocument, current: &RefinedDocument) -> Vec<FieldChange> {
    let fields: [(&str, String, String); 7] = [
        ("title", previous.title.clone(), current.title.clone()),
        ("description", previous.description.clone(), current.description.clone()),
        (
            "keywordCount",
            previous.keywords.len().to_string(),
            current.keywords.len().to_string(),
        ),
        (
            "sectionCount",
            previous.sections.len().to_string(),
            current.sections.len().to_string(),
        ),
        (
            "linkCount",
            previous.links.len().to_string(),
            current.links.len().to_string(),
        ),
        (
            "imageCount",
            previous.images.len().to_string(),
            current.images.len().to_string(),
        ),
        (
            "textLength",
            previous.full_text.chars().count().to_string(),
            current.full_text.chars().count().to_string(),
        ),
    ];

    fields
        .into_iter()
        .filter(|(_, before, after)| before != after)
        .map(|(field, previous, current)| FieldChange {
            field: field.to_string(),
            previous,
            current,
        })
        .collect()
}
