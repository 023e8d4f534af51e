//! HTML Meta Tag Sources
//!
//! Each metadata field is read from a fixed, priority-ordered list of
//! sources. The first source whose element is present wins, even when its
//! value is empty.

use dom_query::Document;

use crate::dom;

/// One place in a document a metadata value can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaSource {
    /// `<meta property="..." content="...">` (Open Graph style).
    Property(&'static str),
    /// `<meta name="..." content="...">` (Twitter card and plain meta).
    Name(&'static str),
    /// Text of the first `<title>` element.
    TitleElement,
}

/// Title sources: og:title, twitter:title, `<title>`.
pub const TITLE_SOURCES: &[MetaSource] = &[
    MetaSource::Property("og:title"),
    MetaSource::Name("twitter:title"),
    MetaSource::TitleElement,
];

/// Description sources: og:description, twitter:description, description.
pub const DESCRIPTION_SOURCES: &[MetaSource] = &[
    MetaSource::Property("og:description"),
    MetaSource::Name("twitter:description"),
    MetaSource::Name("description"),
];

/// Image sources: og:image, twitter:image. There is no generic fallback.
pub const IMAGE_SOURCES: &[MetaSource] = &[
    MetaSource::Property("og:image"),
    MetaSource::Name("twitter:image"),
];

impl MetaSource {
    /// Look this source up in `doc`.
    ///
    /// Returns `None` when the element is absent and `Some("")` when it is
    /// present without a value.
    #[must_use]
    pub fn lookup(self, doc: &Document) -> Option<String> {
        match self {
            Self::Property(key) => meta_content(doc, &format!(r#"meta[property="{key}"]"#)),
            Self::Name(key) => meta_content(doc, &format!(r#"meta[name="{key}"]"#)),
            Self::TitleElement => {
                dom::select_first(doc, "title").map(|title| dom::text_content(&title).to_string())
            }
        }
    }
}

fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    dom::select_first(doc, selector).map(|meta| dom::get_attribute(&meta, "content").unwrap_or_default())
}

/// Value of the first present source, trimmed. Empty when none is present.
#[must_use]
pub fn first_present(doc: &Document, sources: &[MetaSource]) -> String {
    sources
        .iter()
        .find_map(|source| source.lookup(doc))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
