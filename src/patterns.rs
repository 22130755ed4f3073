//! Compiled regex patterns and CSS selectors for outline and section extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches whitespace runs for collapsing.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches absolute URLs embedded in text (`http(s)://…` and `www.…` tokens).
pub static URL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|\bwww\.)\S+").expect("URL_TOKEN regex")
});

/// Matches leaked embed-widget markup names.
pub static IFRAME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)iframe").expect("IFRAME_TOKEN regex")
});

/// Matches any word character; text without one is dropped.
pub static WORD_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w").expect("WORD_CHAR regex")
});

// =============================================================================
// URL Normalization Patterns
// =============================================================================

/// Matches `http://` or `https://` at the start of the input.
pub static HTTP_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://").expect("HTTP_SCHEME regex")
});

/// Matches loopback/local hosts with optional port and path.
pub static LOCAL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:localhost|127(?:\.\d{1,3}){3}|0\.0\.0\.0|\[::1\])(?::\d{1,5})?(?:[/?#].*)?$",
    )
    .expect("LOCAL_HOST regex")
});

// =============================================================================
// Charset Sniffing Patterns
// =============================================================================

/// Captures the label of a `<meta charset=…>` declaration.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("CHARSET_META regex")
});

/// Captures the charset label inside a `http-equiv="Content-Type"` content value.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("CONTENT_TYPE_CHARSET regex")
});

// =============================================================================
// Section Styling Hints
// =============================================================================

/// Tone keyword families, checked in this order; the first match wins.
pub static TONE_SUCCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:success|successful|positive|green|emerald|ok|confirm(?:ed)?)\b")
        .expect("TONE_SUCCESS regex")
});

pub static TONE_WARNING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:warning|warn|caution|attention|amber|yellow|orange)\b")
        .expect("TONE_WARNING regex")
});

pub static TONE_DANGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:danger|error|critical|destructive|red|fail(?:ed|ure)?)\b")
        .expect("TONE_DANGER regex")
});

pub static TONE_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:info|information|notice|note|tip|hint|blue|primary)\b")
        .expect("TONE_INFO regex")
});

pub static TONE_NEUTRAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:neutral|muted|secondary|default|gray|grey|slate|plain)\b")
        .expect("TONE_NEUTRAL regex")
});

/// Captures the value of a background or border declaration in inline style.
pub static STYLE_COLOR_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|;)\s*(?:background(?:-color)?|border(?:-(?:top|right|bottom|left))?(?:-color)?)\s*:\s*([^;]+)",
    )
    .expect("STYLE_COLOR_DECL regex")
});

/// Matches a functional or hex colour token.
pub static COLOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#[0-9a-f]{3,8}\b|(?:rgba?|hsla?)\([^)]*\)")
        .expect("COLOR_TOKEN regex")
});

/// Matches a value that is a single named colour word.
pub static NAMED_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]{3,20}$").expect("NAMED_COLOR regex")
});

// =============================================================================
// CSS Selectors (as strings for use with dom_query)
// =============================================================================

/// Headings that open outline nodes.
pub const OUTLINE_HEADING_SELECTOR: &str = "h1, h2, h3";

/// Containers treated as section blocks.
pub const SECTION_SELECTOR: &str = "section, article, [role='region'], [data-section], \
     div[class*='section'], div[id*='section']";

/// Elements that mark a container as carrying a call to action.
pub const CTA_SELECTOR: &str = "button, [role='button'], input[type='submit'], \
     input[type='button'], a[class*='btn'], a[class*='button'], a[class*='cta']";

/// Anchors that belong to site navigation.
pub const NAVIGATION_LINK_SELECTOR: &str =
    "nav a[href], header a[href], [role='navigation'] a[href]";

/// Subtrees excluded from the page's main text.
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "iframe", "nav", "header", "footer",
];
