//! URL Utility Functions
//!
//! Normalization of user-supplied URL strings into fetchable absolute URLs,
//! plus resolution of relative references found in page markup.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::{HTTP_SCHEME, LOCAL_HOST};

/// Turn a user-supplied string into an absolute, fetchable URL.
///
/// * `http://…` / `https://…` input is returned trimmed, as-is.
/// * `//host/…` gets an `https:` prefix.
/// * Loopback hosts (`localhost`, `127.x.x.x`, `0.0.0.0`, `[::1]`) get `http://`.
/// * Everything else gets `https://`, including single-label hosts such as
///   `intranet`; no domain validation happens here.
///
/// Leading/trailing whitespace and slashes are removed before prefixing.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when nothing is left after trimming.
/// Callers must not retry on this error.
///
/// # Examples
///
/// ```
/// use page_outline::url_utils::normalize_input_url;
///
/// assert_eq!(normalize_input_url("example.com")?, "https://example.com");
/// assert_eq!(normalize_input_url("//example.com")?, "https://example.com");
/// assert_eq!(normalize_input_url("localhost:3000/x")?, "http://localhost:3000/x");
/// assert_eq!(normalize_input_url("https://a.com")?, "https://a.com");
/// # Ok::<(), page_outline::Error>(())
/// ```
pub fn normalize_input_url(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("URL is empty".to_string()));
    }

    if HTTP_SCHEME.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    let bare = trimmed.trim_matches('/').trim();
    if bare.is_empty() {
        return Err(Error::InvalidInput(format!("URL has no host: {trimmed:?}")));
    }

    if trimmed.starts_with("//") {
        return Ok(format!("https://{bare}"));
    }
    if LOCAL_HOST.is_match(bare) {
        return Ok(format!("http://{bare}"));
    }
    Ok(format!("https://{bare}"))
}

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !HTTP_SCHEME.is_match(s) {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Convert a relative or absolute reference to absolute form.
///
/// Special schemes (`data:`, `javascript:`, `mailto:`, `tel:`) and
/// references that fail to resolve are returned unchanged.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Resolve `reference` against an optional base.
///
/// Without a base the trimmed reference is returned as written.
#[must_use]
pub fn resolve(reference: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => create_absolute_url(reference, base),
        None => reference.trim().to_string(),
    }
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// Extract the hostname of an absolute http(s) URL.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    parse_url(url_str)
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .filter(|host| !host.is_empty())
}

/// Determine the base for resolving references in a document.
///
/// A `<base href>` value wins when it resolves to an absolute URL (against
/// the page URL when relative); otherwise the page URL itself is used.
#[must_use]
pub fn resolution_base(page_url: Option<&str>, base_href: Option<&str>) -> Option<Url> {
    let page = page_url.and_then(parse_url);

    if let Some(href) = base_href.map(str::trim).filter(|h| !h.is_empty()) {
        let candidate = match page.as_ref() {
            Some(page) => create_absolute_url(href, page),
            None => href.to_string(),
        };
        if let Some(base) = parse_url(&candidate) {
            return Some(base);
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap_or_else(|e| panic!("bad base {s}: {e}"))
    }

    #[test]
    fn test_normalize_bare_domain() {
        assert_eq!(normalize_input_url("example.com").ok(), Some("https://example.com".into()));
        assert_eq!(
            normalize_input_url("  docs.example.co.uk/guide/ ").ok(),
            Some("https://docs.example.co.uk/guide".into())
        );
    }

    #[test]
    fn test_normalize_protocol_relative() {
        assert_eq!(normalize_input_url("//example.com").ok(), Some("https://example.com".into()));
        assert_eq!(
            normalize_input_url("//cdn.example.com/a.js").ok(),
            Some("https://cdn.example.com/a.js".into())
        );
    }

    #[test]
    fn test_normalize_local_hosts_use_http() {
        assert_eq!(
            normalize_input_url("localhost:3000/x").ok(),
            Some("http://localhost:3000/x".into())
        );
        assert_eq!(normalize_input_url("127.0.0.1:8080").ok(), Some("http://127.0.0.1:8080".into()));
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(normalize_input_url("https://a.com").ok(), Some("https://a.com".into()));
        assert_eq!(normalize_input_url(" http://a.com/x ").ok(), Some("http://a.com/x".into()));
        assert_eq!(normalize_input_url("HTTPS://A.com").ok(), Some("HTTPS://A.com".into()));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["example.com", "//example.com", "localhost:3000/x", "https://a.com"] {
            let Ok(once) = normalize_input_url(input) else { panic!("{input} failed") };
            assert_eq!(normalize_input_url(&once).ok(), Some(once.clone()));
        }
    }

    #[test]
    fn test_normalize_defaults_to_https() {
        assert_eq!(normalize_input_url("intranet").ok(), Some("https://intranet".into()));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_input_url(""), Err(Error::InvalidInput(_))));
        assert!(matches!(normalize_input_url("   "), Err(Error::InvalidInput(_))));
        assert!(matches!(normalize_input_url(" // "), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/path").0);
        assert!(is_absolute_url("  http://example.com  ").0);
        assert!(!is_absolute_url("/relative/path").0);
        assert!(!is_absolute_url("example.com").0);
        assert!(!is_absolute_url("ftp://example.com").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn test_create_absolute_url_relative() {
        let b = base("https://example.com/articles/");
        assert_eq!(create_absolute_url("page.html", &b), "https://example.com/articles/page.html");
        assert_eq!(create_absolute_url("/root/page.html", &b), "https://example.com/root/page.html");
        assert_eq!(create_absolute_url("../other/page.html", &b), "https://example.com/other/page.html");
    }

    #[test]
    fn test_create_absolute_url_special_schemes() {
        let b = base("https://example.com/");
        assert_eq!(create_absolute_url("mailto:test@example.com", &b), "mailto:test@example.com");
        assert_eq!(create_absolute_url("javascript:void(0)", &b), "javascript:void(0)");
        assert_eq!(create_absolute_url("https://other.com/page", &b), "https://other.com/page");
    }

    #[test]
    fn test_resolve_without_base_keeps_reference() {
        assert_eq!(resolve(" /about ", None), "/about");
        let b = base("https://example.com/");
        assert_eq!(resolve("/about", Some(&b)), "https://example.com/about");
    }

    #[test]
    fn test_extract_hostname() {
        assert_eq!(extract_hostname("https://WWW.Example.com/page"), Some("www.example.com".into()));
        assert_eq!(extract_hostname("/relative"), None);
        assert_eq!(extract_hostname("not a url"), None);
    }

    #[test]
    fn test_resolution_base_prefers_base_href() {
        let b = resolution_base(Some("https://example.com/a/b"), Some("/static/"));
        assert_eq!(b.map(|u| u.to_string()), Some("https://example.com/static/".into()));

        let b = resolution_base(Some("https://example.com/a/b"), None);
        assert_eq!(b.map(|u| u.to_string()), Some("https://example.com/a/b".into()));

        let b = resolution_base(None, Some("https://cdn.example.com/"));
        assert_eq!(b.map(|u| u.to_string()), Some("https://cdn.example.com/".into()));

        assert!(resolution_base(None, Some("/relative/")).is_none());
    }
}
