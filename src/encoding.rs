//! Character encoding detection and transcoding.
//!
//! Route bodies arrive as raw bytes. The charset is taken from the response
//! `Content-Type` header when present, then from HTML meta tags, and defaults
//! to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Detect character encoding of a response body.
///
/// Looks for a charset in the following order:
/// 1. The `Content-Type` header value
/// 2. `<meta charset="...">` or `<meta http-equiv=... content="...; charset=...">`
///    within the first 1024 bytes
/// 3. Defaults to UTF-8
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
    {
        return encoding;
    }

    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(encoding) = meta_charset(&head_str).and_then(|c| Encoding::for_label(c.as_bytes())) {
        return encoding;
    }

    UTF_8
}

fn header_charset(content_type: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn meta_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// ```
/// use linkshelf::encoding::decode_body;
///
/// let body = b"<title>Caf\xE9</title>";
/// assert_eq!(decode_body(body, Some("text/html; charset=ISO-8859-1")), "<title>Café</title>");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
