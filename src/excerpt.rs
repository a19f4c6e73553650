//! Bounded previews of a section's own content.
//!
//! A section's body is whatever follows its heading up to the next heading of any rank. In flat
//! documents that is a run of siblings. Pages also wrap subsections in containers (`<section>`,
//! `<div class="mw-heading">` and the like); taking such a container whole would swallow the
//! subsection, so the walk steps into it instead and carries on through its children. The
//! collected elements are serialised into owned fragments and trimmed to a character budget
//! without ever cutting an element in half.

use crate::dom::{Document, NodeId};
use serde::{Serialize, Serializer};

/// Default character budget for a preview.
pub const DEFAULT_BUDGET: usize = 2000;

/// Marker appended in place of dropped fragments.
pub const ELLIPSIS: &str = "...";

const CONTAINER_STYLE: &str = "font-size: 12px; max-width: 50vw; max-height: 50vh";
const HEADING_STYLE: &str = "margin-top: 0; text-align: center";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One cloned element of an excerpt.
pub struct Fragment {
    /// Serialised markup of the element and its subtree.
    pub html: String,
    /// Text content of the same subtree.
    pub text: String,
}

impl Fragment {
    fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Clone, Debug, Default)]
/// Untruncated excerpt: the heading clone followed by the section's body elements.
pub struct Excerpt {
    fragments: Vec<Fragment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Finished, budgeted preview attached to a graph node.
///
/// Serialises as its `html` markup string, which becomes the node's `title`. vis-network shows
/// string titles as plain text, so a page must parse the markup into an element (for example
/// through a `<template>`) and put that element in `title` before handing nodes to the renderer.
pub struct Preview {
    /// Markup for the hover tooltip, wrapped in a styled `<div>`.
    pub html: String,
    /// Plain-text rendering of the kept fragments, for terminals.
    pub text: String,
    /// Whether fragments were dropped to respect the budget.
    pub truncated: bool,
}

impl Serialize for Preview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.html)
    }
}

#[must_use]
/// Collects the content belonging to `heading`, excluding its subsections.
///
/// With a non-empty `label_class`, only the labelled sub-element of the heading is kept inside
/// the heading clone (edit links and similar decorations are dropped).
pub fn extract(doc: &Document, heading: NodeId, label_class: &str) -> Excerpt {
    let mut fragments = vec![heading_clone(doc, heading, label_class)];

    let mut cursor = doc.next_element_sibling(heading);
    while let Some(node) = cursor {
        if doc.heading_level(node).is_some() {
            break;
        }
        if doc.contains_heading(node) {
            cursor = doc.first_element_child(node);
            continue;
        }
        fragments.push(Fragment {
            html: doc.outer_html(node),
            text: doc.text_content(node),
        });
        cursor = doc.next_element_sibling(node);
    }

    Excerpt { fragments }
}

fn heading_clone(doc: &Document, heading: NodeId, label_class: &str) -> Fragment {
    let name = doc.element_name(heading).unwrap_or("h1");
    let label = if label_class.is_empty() {
        None
    } else {
        doc.find_by_class(heading, label_class)
    };
    let (inner, text) = match label {
        Some(label) => (doc.outer_html_without_ids(label), doc.text_content(label)),
        None => (doc.inner_html_without_ids(heading), doc.text_content(heading)),
    };
    Fragment {
        html: format!("<{name} style=\"{HEADING_STYLE}\">{inner}</{name}>"),
        text,
    }
}

impl Excerpt {
    /// Cloned fragments in order, the heading clone first.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Total characters of text across all fragments.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.fragments.iter().map(Fragment::text_len).sum()
    }

    /// Applies the budget and wraps the kept fragments for display.
    ///
    /// Fragments are kept whole while the running text length stays within `budget`; the first
    /// one to exceed it, and everything after, is replaced by [`ELLIPSIS`].
    #[must_use]
    pub fn into_preview(self, budget: usize) -> Preview {
        let mut html = format!("<div style=\"{CONTAINER_STYLE}\">");
        let mut texts = Vec::new();
        let mut running = 0;
        let mut truncated = false;

        for fragment in self.fragments {
            running += fragment.text_len();
            if running > budget {
                html.push_str(ELLIPSIS);
                texts.push(ELLIPSIS.to_string());
                truncated = true;
                break;
            }
            html.push_str(&fragment.html);
            let text = fragment.text.trim();
            if !text.is_empty() {
                texts.push(text.to_string());
            }
        }

        html.push_str("</div>");
        Preview {
            html,
            text: texts.join("\n\n"),
            truncated,
        }
    }
}

#[cfg(test)]
#[path = "tests/excerpt.rs"]
mod tests;
