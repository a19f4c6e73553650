//! Heading records read out of a document's content region.
//!
//! A heading record is the flat view the tree builder consumes: a rank, a label and a handle
//! back to the heading element so the excerpt extractor can find the section body. Records are
//! ephemeral and only live for one map build.

use crate::dom::{Document, NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading element encountered in document order.
pub struct HeadingRecord {
    /// Heading rank, 1 for `h1` through 6 for `h6`.
    pub level: u8,
    /// Visible label text.
    pub label: String,
    /// The source heading element.
    pub element: NodeId,
}

#[must_use]
/// Locates the designated content region.
///
/// An empty `content_id` starts from the document root; an empty `content_class` stops there.
/// Returns `None` when a requested id or class is absent.
pub fn content_region(doc: &Document, content_id: &str, content_class: &str) -> Option<NodeId> {
    let scope = if content_id.is_empty() {
        doc.root()
    } else {
        doc.find_by_id(content_id)?
    };
    if content_class.is_empty() {
        Some(scope)
    } else {
        doc.find_by_class(scope, content_class)
    }
}

#[must_use]
/// Label for the root node: the text of `root_label_id`, else the page `<title>`, else empty.
pub fn root_label(doc: &Document, root_label_id: &str) -> String {
    let labelled = if root_label_id.is_empty() {
        None
    } else {
        doc.find_by_id(root_label_id)
    };
    labelled
        .or_else(|| doc.find_by_tag(doc.root(), "title"))
        .map(|node| doc.text_content(node).trim().to_string())
        .unwrap_or_default()
}

#[must_use]
/// Visible text of a heading.
///
/// With a `label_class`, the text of the first sub-element carrying that class, or an empty
/// string when there is none. Without one, the whole heading's text.
pub fn heading_label(doc: &Document, heading: NodeId, label_class: &str) -> String {
    let text = if label_class.is_empty() {
        doc.text_content(heading)
    } else {
        doc.find_by_class(heading, label_class)
            .map(|label| doc.text_content(label))
            .unwrap_or_default()
    };
    text.trim().to_string()
}

#[must_use]
/// Every `h1`..`h6` strictly inside `region`, in document order.
pub fn headings(doc: &Document, region: NodeId, label_class: &str) -> Vec<HeadingRecord> {
    doc.descendants(region)
        .skip(1)
        .filter_map(|element| {
            let level = doc.heading_level(element)?;
            Some(HeadingRecord {
                level,
                label: heading_label(doc, element, label_class),
                element,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
