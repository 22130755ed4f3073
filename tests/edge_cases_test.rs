//! Edge case integration tests
//!
//! Unusual inputs and graceful degradation: nothing below a blank document
//! should ever surface as an error.

use page_outline::{extract, refine, Error};

#[test]
fn test_blank_markup_is_an_error() {
    for html in ["", "   ", "\n\t"] {
        match extract(html) {
            Err(Error::ParseFailed(_)) => {}
            other => panic!("expected ParseFailed for {html:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_document_without_structure() {
    match extract("<html><body></body></html>") {
        Ok(raw) => {
            assert!(raw.outline.is_empty());
            assert!(raw.sections.is_empty());
            assert!(raw.links.is_empty());
            assert!(raw.title.is_empty());
            assert!(raw.text.is_empty());
            assert_eq!(raw.stats.reading_time_minutes, 1);

            let doc = refine(raw);
            assert!(doc.outline.is_empty());
            assert!(doc.sections.is_empty());
            assert!(doc.text_blocks.is_empty());
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_head_only_document() {
    match extract("<html><head><title>No Body</title></head></html>") {
        Ok(raw) => {
            assert_eq!(raw.title, "No Body");
            assert!(raw.text.is_empty());
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_malformed_markup_degrades() {
    let html = "<h1>Unclosed <b>bold<h2>Next<p>para<ul><li>item";

    match extract(html) {
        Ok(raw) => {
            assert!(!raw.outline.is_empty());
            assert!(raw.headings.h1.iter().any(|h| h.starts_with("Unclosed")));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_headings_without_text_are_ignored() {
    match extract("<h1>   </h1><h1><img src='/logo.png'></h1><h2>Real</h2>") {
        Ok(raw) => {
            assert_eq!(raw.outline.len(), 1);
            assert_eq!(raw.outline[0].title, "Real");
            assert_eq!(raw.outline[0].level, 2);
            assert!(raw.headings.h1.is_empty());
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_unresolvable_links_kept_as_written() {
    let html = r#"<a href="javascript:void(0)">JS</a><a href="mailto:hi@example.com">Mail</a>"#;
    let options = page_outline::Options {
        url: Some("https://example.com/".into()),
        ..page_outline::Options::default()
    };

    match page_outline::extract_with_options(html, &options) {
        Ok(raw) => {
            let hrefs: Vec<&str> = raw.links.iter().map(|l| l.href.as_str()).collect();
            assert_eq!(hrefs, vec!["javascript:void(0)", "mailto:hi@example.com"]);
            assert_eq!(raw.stats.unique_link_hosts, 0);
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_every_json_ld_block_malformed() {
    let html = r#"<html><head>
        <script type="application/ld+json">{</script>
        <script type="application/ld+json">[1, 2,</script>
        <title>Survives</title>
    </head></html>"#;

    match extract(html) {
        Ok(raw) => {
            assert!(raw.structured_data.is_empty());
            assert!(!raw.stats.has_structured_data);
            assert_eq!(raw.title, "Survives");
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_unicode_content() {
    let html = "<h1>日本語のタイトル</h1><p>これは日本語の段落です。</p><p>Ελληνικά κείμενο</p>";

    match extract(html) {
        Ok(raw) => {
            assert_eq!(raw.outline[0].title, "日本語のタイトル");
            assert_eq!(raw.outline[0].paragraphs.len(), 2);
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_deeply_nested_sections() {
    let mut html = String::new();
    for i in 0..40 {
        html.push_str(&format!("<section><h3>Level {i}</h3>"));
    }
    html.push_str("<p>Bottom</p>");
    for _ in 0..40 {
        html.push_str("</section>");
    }

    match extract(&html) {
        Ok(raw) => {
            assert_eq!(raw.sections.len(), 20);
            assert!(raw.sections.iter().enumerate().all(|(i, s)| s.order == i + 1));
            assert_eq!(raw.sections[0].heading, "Level 0");
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}
