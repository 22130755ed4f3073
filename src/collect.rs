//! Link and image collection.
//!
//! References are resolved against the document base, deduplicated by their
//! resolved target (first occurrence wins, order preserved) and capped at the
//! call site's limit.

use url::Url;

use crate::dom::DomNode;
use crate::result::{ImageRef, LinkRef};
use crate::text::{dedupe_by_key, sanitize};
use crate::url_utils::resolve;

/// Link cap for the whole-page pass.
pub const MAX_PAGE_LINKS: usize = 100;

/// Image cap for the whole-page pass.
pub const MAX_PAGE_IMAGES: usize = 50;

/// Attributes checked, in order, for an image source.
const IMAGE_SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src", "data-original"];

/// Build deduplicated link references from anchor nodes.
///
/// Anchors without an `href` (or with a blank one) are skipped. Link text
/// falls back to `aria-label` and `title` when the anchor has no text.
pub fn collect_links<N: DomNode>(anchors: &[N], base: Option<&Url>, cap: usize) -> Vec<LinkRef> {
    let links = anchors.iter().filter_map(|anchor| {
        let href = anchor.attr("href")?;
        if href.trim().is_empty() {
            return None;
        }
        let text = [Some(anchor.text()), anchor.attr("aria-label"), anchor.attr("title")]
            .into_iter()
            .flatten()
            .map(|t| sanitize(&t))
            .find(|t| !t.is_empty())
            .unwrap_or_default();
        Some(LinkRef {
            text,
            href: resolve(&href, base),
        })
    });
    dedupe_links(links, cap)
}

/// Build deduplicated image references from `img` nodes.
pub fn collect_images<N: DomNode>(images: &[N], base: Option<&Url>, cap: usize) -> Vec<ImageRef> {
    let refs = images.iter().filter_map(|img| {
        let src = IMAGE_SOURCE_ATTRS
            .iter()
            .filter_map(|attr| img.attr(attr))
            .find(|s| !s.trim().is_empty())?;
        let alt = img.attr("alt").map(|a| sanitize(&a)).unwrap_or_default();
        Some(ImageRef {
            src: resolve(&src, base),
            alt,
        })
    });
    dedupe_images(refs, cap)
}

/// Links found in `node` itself (when it is an anchor) and its descendants.
pub fn links_within<N: DomNode>(node: &N) -> Vec<N> {
    let mut anchors = Vec::new();
    if node.is_tag("a") {
        anchors.push(node.clone());
    }
    anchors.extend(node.select("a[href]"));
    anchors
}

/// Images found in `node` itself (when it is an `img`) and its descendants.
pub fn images_within<N: DomNode>(node: &N) -> Vec<N> {
    let mut images = Vec::new();
    if node.is_tag("img") {
        images.push(node.clone());
    }
    images.extend(node.select("img"));
    images
}

/// Deduplicate by `href`, keeping the first occurrence, then cap.
pub fn dedupe_links(links: impl IntoIterator<Item = LinkRef>, cap: usize) -> Vec<LinkRef> {
    let mut deduped = dedupe_by_key(links, |l| l.href.clone());
    deduped.truncate(cap);
    deduped
}

/// Deduplicate by `src`, keeping the first occurrence, then cap.
pub fn dedupe_images(images: impl IntoIterator<Item = ImageRef>, cap: usize) -> Vec<ImageRef> {
    let mut deduped = dedupe_by_key(images, |i| i.src.clone());
    deduped.truncate(cap);
    deduped
}
