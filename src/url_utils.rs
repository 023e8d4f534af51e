//! URL Utility Functions
//!
//! Normalization of loosely typed user input into absolute URLs, plus the
//! hostname lookup the fallback record is built from.

use url::Url;

use crate::error::{Error, Result};

/// Coerce user input into an absolute URL string.
///
/// Trims whitespace, keeps an existing `http://` or `https://` prefix and
/// otherwise prepends `https://`. Inputs starting with `www.`, bare domains
/// and single tokens are all treated the same way.
///
/// Never fails; well-formedness is checked separately by [`parse_normalized`].
///
/// # Example
///
/// ```rust
/// use linkshelf::url_utils::normalize;
///
/// assert_eq!(normalize("  example.com/page "), "https://example.com/page");
/// assert_eq!(normalize("http://example.com"), "http://example.com");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();

    if has_http_scheme(trimmed) {
        return trimmed.to_string();
    }

    format!("https://{trimmed}")
}

/// Normalize `input` and verify the result parses as an absolute URL with a host.
///
/// # Errors
/// Returns [`Error::InvalidUrl`] carrying the original input when the
/// normalized string is not a well-formed URL.
pub fn parse_normalized(input: &str) -> Result<(String, Url)> {
    let normalized = normalize(input);

    match is_absolute_url(&normalized) {
        (true, Some(url)) => Ok((normalized, url)),
        _ => Err(Error::InvalidUrl(input.to_string())),
    }
}

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() || !has_http_scheme(s) {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => (true, Some(url)),
        _ => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// `data:` URIs and URLs that are already absolute are returned unchanged;
/// anything that cannot be resolved against `base` is returned as given.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || url_str.starts_with("data:") || is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

fn has_http_scheme(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(normalize("https://example.com"), "https://example.com");
        assert_eq!(normalize("http://example.com/a?b=c"), "http://example.com/a?b=c");
    }

    #[test]
    fn test_normalize_prefixes_https() {
        assert_eq!(normalize("www.example.com"), "https://www.example.com");
        assert_eq!(normalize("example.com"), "https://example.com");
        assert_eq!(normalize("localhost"), "https://localhost");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("\t youtu.be/dQw4w9WgXcQ \n"), "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(normalize("  https://example.com  "), "https://example.com");
    }

    #[test]
    fn test_normalize_scheme_is_case_sensitive() {
        // Only lower-case prefixes count as already normalized.
        assert_eq!(normalize("HTTP://example.com"), "https://HTTP://example.com");
    }

    #[test]
    fn test_parse_normalized_rejects_blank() {
        match parse_normalized("   ") {
            Err(Error::InvalidUrl(raw)) => assert_eq!(raw, "   "),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_normalized_rejects_space_in_host() {
        assert!(matches!(parse_normalized("not a url"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_normalized_accepts_bare_domain() {
        let (normalized, url) = parse_normalized("example.com/page").expect("valid");
        assert_eq!(normalized, "https://example.com/page");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com").0);
        assert!(!is_absolute_url("/relative/path").0);
        assert!(!is_absolute_url("ftp://example.com").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn test_create_absolute_url() {
        let base = Url::parse("https://example.com/blog/post").expect("base");
        assert_eq!(create_absolute_url("/img/a.png", &base), "https://example.com/img/a.png");
        assert_eq!(create_absolute_url("a.png", &base), "https://example.com/blog/a.png");
        assert_eq!(create_absolute_url("//cdn.example.com/a.png", &base), "https://cdn.example.com/a.png");
        assert_eq!(create_absolute_url("https://other.com/a.png", &base), "https://other.com/a.png");
        assert_eq!(create_absolute_url("data:image/png;base64,AAA", &base), "data:image/png;base64,AAA");
        assert_eq!(create_absolute_url("", &base), "");
    }
}
