//! Extraction and scrape orchestration.
//!
//! [`extract_document`] runs every extraction component over one parsed
//! document and assembles the [`RawExtraction`]. [`scrape`] adds URL
//! normalization, the fetch collaborator and refinement around it.

use crate::collect::{collect_images, collect_links, MAX_PAGE_IMAGES, MAX_PAGE_LINKS};
use crate::dom::{self, DomNode};
use crate::error::{Error, Result};
use crate::fetch::{FetchRequest, Fetcher};
use crate::metadata;
use crate::options::Options;
use crate::outline::OutlineBuilder;
use crate::patterns::{NAVIGATION_LINK_SELECTOR, NOISE_TAGS};
use crate::refine::refine;
use crate::result::{Headings, RawExtraction, ScrapeOutcome};
use crate::sections::extract_sections;
use crate::stats::compute_stats;
use crate::text::{sanitize, sanitize_non_empty};
use crate::url_utils::{normalize_input_url, resolution_base};

/// Parse markup and extract it.
pub(crate) fn extract_document(html: &str, options: &Options) -> Result<RawExtraction> {
    let document = dom::parse(html)?;
    let root = dom::root(&document)?;
    Ok(extract_from_root(&root, options))
}

/// Run every extraction component over an already parsed tree.
///
/// Never fails: missing headings, metadata or containers simply produce
/// empty fields.
#[must_use]
pub fn extract_from_root<N: DomNode>(root: &N, options: &Options) -> RawExtraction {
    let base_href = root.select_first("base[href]").and_then(|base| base.attr("href"));
    let base = resolution_base(options.url.as_deref(), base_href.as_deref());
    let base = base.as_ref();

    let page_meta = metadata::extract_metadata(root, base);
    let outline = OutlineBuilder::new(base, options.sibling_guard).build(root);
    let sections = extract_sections(root, base);

    let links = collect_links(&root.select("a[href]"), base, MAX_PAGE_LINKS);
    let navigation = collect_links(&root.select(NAVIGATION_LINK_SELECTOR), base, MAX_PAGE_LINKS);
    let images = collect_images(&root.select("img"), base, MAX_PAGE_IMAGES);

    let text = root
        .select_first("body")
        .map(|body| sanitize(&body.visible_text(NOISE_TAGS)))
        .unwrap_or_default();

    let mut raw = RawExtraction {
        url: options.url.clone(),
        title: page_meta.title,
        description: page_meta.description,
        keywords: page_meta.keywords,
        metadata: page_meta.map,
        headings: collect_headings(root),
        outline,
        sections,
        links,
        navigation,
        images,
        structured_data: page_meta.structured_data,
        text,
        ..RawExtraction::default()
    };
    raw.stats = compute_stats(root, &raw);

    tracing::debug!(
        outline = raw.outline.len(),
        sections = raw.sections.len(),
        links = raw.links.len(),
        words = raw.stats.word_count,
        "extracted document"
    );

    raw
}

/// Sanitized text of every `h1`–`h6`, per level, in document order.
fn collect_headings<N: DomNode>(root: &N) -> Headings {
    let mut headings = Headings::default();

    for heading in root.select("h1, h2, h3, h4, h5, h6") {
        let Some(text) = sanitize_non_empty(&heading.text()) else {
            continue;
        };
        let level = match heading.heading_level() {
            Some(1) => &mut headings.h1,
            Some(2) => &mut headings.h2,
            Some(3) => &mut headings.h3,
            Some(4) => &mut headings.h4,
            Some(5) => &mut headings.h5,
            Some(6) => &mut headings.h6,
            _ => continue,
        };
        level.push(text);
    }

    headings
}

/// Normalize, fetch, extract and refine one page.
///
/// The normalized URL becomes the page URL for link resolution, overriding
/// `options.url`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] when `raw_url` is blank.
/// - [`Error::ExtractionFailed`] when the fetcher fails.
/// - [`Error::ParseFailed`] when the fetched markup is blank.
pub fn scrape<F>(raw_url: &str, fetcher: &F, options: &Options) -> Result<ScrapeOutcome>
where
    F: Fetcher + ?Sized,
{
    let url = normalize_input_url(raw_url)?;
    let request = FetchRequest::new(url.clone(), options);

    let html = fetcher.fetch(&request).map_err(|err| {
        tracing::warn!(url = %request.url, error = %err, "fetch failed");
        Error::ExtractionFailed {
            reason: err.to_string(),
        }
    })?;

    let page_options = Options {
        url: Some(url),
        ..options.clone()
    };
    let raw = extract_document(&html, &page_options)?;

    let (refined, raw) = if options.keep_raw {
        (refine(raw.clone()), Some(raw))
    } else {
        (refine(raw), None)
    };

    tracing::info!(
        url = %request.url,
        outline = refined.outline.len(),
        sections = refined.sections.len(),
        links = refined.links.len(),
        "scrape complete"
    );

    Ok(ScrapeOutcome { refined, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;

    fn extract_ok(html: &str, options: &Options) -> RawExtraction {
        match extract_document(html, options) {
            Ok(raw) => raw,
            Err(err) => panic!("extraction failed: {err}"),
        }
    }

    #[test]
    fn test_blank_markup_is_parse_error() {
        let result = extract_document("  ", &Options::default());
        assert!(matches!(result, Err(Error::ParseFailed(_))));
    }

    #[test]
    fn test_intro_sub_document() {
        let raw = extract_ok(
            "<h1>Intro</h1><p>Hello there friend</p><h2>Sub</h2><p>More info</p>",
            &Options::default(),
        );

        assert_eq!(raw.outline.len(), 1);
        assert_eq!(raw.outline[0].title, "Intro");
        assert_eq!(raw.outline[0].sub_sections[0].title, "Sub");
        assert_eq!(raw.headings.h1, vec!["Intro".to_string()]);
        assert_eq!(raw.headings.h2, vec!["Sub".to_string()]);
        assert_eq!(raw.title, "Intro");
        assert_eq!(raw.stats.heading_count, 2);
        assert_eq!(raw.stats.paragraph_count, 2);
        assert_eq!(raw.stats.outline_count, 2);
    }

    #[test]
    fn test_main_text_excludes_noise() {
        let html = r#"<html><body>
            <header><a href="/">Home</a></header>
            <nav><a href="/about">About</a></nav>
            <main><p>Body text here.</p><script>var tracking = 1;</script></main>
            <footer>Copyright</footer>
        </body></html>"#;
        let raw = extract_ok(html, &Options::default());

        assert_eq!(raw.text, "Body text here.");
        assert_eq!(raw.navigation.len(), 2);
        assert_eq!(raw.links.len(), 2);
    }

    #[test]
    fn test_base_href_used_for_resolution() {
        let html = r#"<html><head><base href="/docs/"></head>
            <body><a href="intro">Intro</a><img src="logo.png" alt="Logo"></body></html>"#;
        let options = Options {
            url: Some("https://example.com/index.html".into()),
            ..Options::default()
        };
        let raw = extract_ok(html, &options);

        assert_eq!(raw.links[0].href, "https://example.com/docs/intro");
        assert_eq!(raw.images[0].src, "https://example.com/docs/logo.png");
        assert_eq!(raw.url.as_deref(), Some("https://example.com/index.html"));
    }

    #[test]
    fn test_headings_skip_empty_text() {
        let raw = extract_ok("<h2> </h2><h2>Real</h2><h6>Tiny</h6>", &Options::default());
        assert_eq!(raw.headings.h2, vec!["Real".to_string()]);
        assert_eq!(raw.headings.h6, vec!["Tiny".to_string()]);
        assert_eq!(raw.stats.heading_counts, [0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_scrape_normalizes_and_refines() {
        let fetcher = |request: &FetchRequest| -> std::result::Result<String, FetchError> {
            assert_eq!(request.url, "https://example.com");
            Ok(r#"<html><head><title>Example</title></head>
                <body><h1>Welcome</h1><p>Text</p><a href="/next">Next</a></body></html>"#
                .to_string())
        };

        let outcome = match scrape("  example.com/ ", &fetcher, &Options::default()) {
            Ok(outcome) => outcome,
            Err(err) => panic!("scrape failed: {err}"),
        };
        assert_eq!(outcome.refined.title, "Example");
        assert_eq!(outcome.refined.url.as_deref(), Some("https://example.com"));
        assert_eq!(outcome.refined.links[0].href, "https://example.com/next");
        assert!(outcome.raw.is_none());
    }

    #[test]
    fn test_scrape_keeps_raw_when_asked() {
        let fetcher =
            |_: &FetchRequest| -> std::result::Result<String, FetchError> { Ok("<p>hi</p>".into()) };
        let options = Options {
            keep_raw: true,
            ..Options::default()
        };
        let outcome = match scrape("https://example.com/", &fetcher, &options) {
            Ok(outcome) => outcome,
            Err(err) => panic!("scrape failed: {err}"),
        };
        let Some(raw) = outcome.raw else { panic!("raw extraction missing") };
        assert_eq!(raw.text, "hi");
    }

    #[test]
    fn test_scrape_maps_fetch_failure() {
        let fetcher =
            |_: &FetchRequest| -> std::result::Result<String, FetchError> { Err(FetchError::Timeout) };

        let err = match scrape("example.com", &fetcher, &Options::default()) {
            Ok(_) => panic!("expected a fetch failure"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::ExtractionFailed { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_scrape_rejects_blank_url_before_fetching() {
        let fetcher = |_: &FetchRequest| -> std::result::Result<String, FetchError> {
            panic!("fetcher must not be called")
        };
        let result = scrape(" // ", &fetcher, &Options::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
