//! Metadata extraction module.
//!
//! Reads title, description and preview image from fetched markup using the
//! priority-ordered sources in [`meta_tags`]. Fallback substitution is left to
//! the resolver.

pub mod meta_tags;

use crate::dom;
use crate::result::PartialMetadata;

pub use meta_tags::{first_present, MetaSource, DESCRIPTION_SOURCES, IMAGE_SOURCES, TITLE_SOURCES};

/// Extract partial metadata from markup.
///
/// Sources per field, highest priority first:
/// 1. Title: `og:title` property, `twitter:title` name, `<title>` element
/// 2. Description: `og:description` property, `twitter:description` name, `description` name
/// 3. Image: `og:image` property, `twitter:image` name
///
/// # Example
///
/// ```rust
/// use linkshelf::metadata::extract;
///
/// let html = r#"<head><meta property="og:title" content="OG"><title>Plain</title></head>"#;
/// assert_eq!(extract(html).title, "OG");
/// ```
#[must_use]
pub fn extract(content: &str) -> PartialMetadata {
    let doc = dom::parse(content);

    PartialMetadata {
        title: first_present(&doc, TITLE_SOURCES),
        description: first_present(&doc, DESCRIPTION_SOURCES),
        image: first_present(&doc, IMAGE_SOURCES),
    }
}
