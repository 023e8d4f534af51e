//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by metadata extraction.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse markup into a document. Never fails; malformed markup is repaired
/// by the HTML5 tree builder.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get text content of the selection and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// First element matching `selector`, or `None` when nothing matches.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let found = doc.select(selector);
    found.nodes().first().map(|node| Selection::from(*node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_first_returns_document_order() {
        let doc = parse(r#"<meta name="a" content="one"><meta name="a" content="two">"#);
        let first = select_first(&doc, r#"meta[name="a"]"#).expect("match");
        assert_eq!(get_attribute(&first, "content").as_deref(), Some("one"));
    }

    #[test]
    fn test_select_first_none() {
        let doc = parse("<html><body></body></html>");
        assert!(select_first(&doc, "title").is_none());
    }

    #[test]
    fn test_text_content() {
        let doc = parse("<html><head><title>  Hello World </title></head></html>");
        let title = select_first(&doc, "title").expect("title");
        assert_eq!(text_content(&title).trim(), "Hello World");
    }
}
