//! HTML format implementation using tree-sitter-html.
//!
//! tree-sitter-html drops inter-token whitespace and splits character data into `text` and
//! `entity` tokens. Lowering stitches those back together from the source bytes so the element
//! tree carries the same text a browser would: one decoded run between any two tags.

use crate::dom::{Document, NodeData, NodeId};
use crate::formats::{child_of_kind, node_source, Format};
use tree_sitter::Node;

/// Parses HTML pages and fragments.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &'static str {
        "html"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["html", "htm", "xhtml"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_html::LANGUAGE.into()
    }

    fn lower(&self, tree: &tree_sitter::Tree, source: &str) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        lower_content(&mut doc, tree.root_node(), root, source);
        doc
    }
}

/// An element body being lowered: its remaining syntax children and the open text run.
struct Frame<'t> {
    children: std::vec::IntoIter<Node<'t>>,
    parent: NodeId,
    /// End of the last consumed child, where the next gap of character data starts.
    pos: usize,
    /// Where the content ends, just before any end tag.
    end: usize,
    /// Start of the pending character-data run, if one is open.
    run: Option<usize>,
}

impl<'t> Frame<'t> {
    fn open(node: Node<'t>, parent: NodeId) -> Self {
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
        let pos = children
            .iter()
            .find(|c| c.kind() == "start_tag")
            .map_or(node.start_byte(), Node::end_byte);
        let end = children
            .iter()
            .find(|c| c.kind() == "end_tag")
            .map_or(node.end_byte(), Node::start_byte);
        Self {
            children: children.into_iter(),
            parent,
            pos,
            end,
            run: None,
        }
    }
}

/// Lowers the content of `node` into `parent`.
///
/// Nesting is tracked on an explicit stack of frames, never on the call stack. A frame for an
/// element's body is pushed above its parent's frame and finished first, so arena order matches
/// document order.
fn lower_content(doc: &mut Document, node: Node<'_>, parent: NodeId, source: &str) {
    let mut stack = vec![Frame::open(node, parent)];

    while let Some(frame) = stack.last_mut() {
        let Some(child) = frame.children.next() else {
            if let Some(done) = stack.pop() {
                flush_text(doc, done.parent, source, done.run.unwrap_or(done.pos), done.end);
            }
            continue;
        };

        match child.kind() {
            "start_tag" | "self_closing_tag" | "end_tag" => {}
            "text" | "entity" => {
                frame.run.get_or_insert(frame.pos);
                frame.pos = child.end_byte();
            }
            kind => {
                let start = frame.run.take().unwrap_or(frame.pos);
                flush_text(doc, frame.parent, source, start, child.start_byte());
                frame.pos = child.end_byte();
                let parent = frame.parent;
                match kind {
                    "element" | "script_element" | "style_element" => {
                        if let Some(body) = open_element(doc, child, parent, source) {
                            stack.push(body);
                        }
                    }
                    "raw_text" => doc.append_text(parent, node_source(child, source)),
                    "comment" => {
                        let body = node_source(child, source);
                        let body = body
                            .strip_prefix("<!--")
                            .and_then(|b| b.strip_suffix("-->"))
                            .unwrap_or(body);
                        doc.append(parent, NodeData::Comment(body.to_string()));
                    }
                    "ERROR" => stack.push(Frame::open(child, parent)),
                    _ => {}
                }
            }
        }
    }
}

fn flush_text(doc: &mut Document, parent: NodeId, source: &str, start: usize, end: usize) {
    if start >= end {
        return;
    }
    if let Some(raw) = source.get(start..end) {
        doc.append_text(parent, &html_escape::decode_html_entities(raw));
    }
}

/// Appends the element for `node` and returns the frame for its body, if it has one.
///
/// Elements without a start tag (recovered fragments) are transparent: their content lands
/// directly in `parent`.
fn open_element<'t>(
    doc: &mut Document,
    node: Node<'t>,
    parent: NodeId,
    source: &str,
) -> Option<Frame<'t>> {
    let (tag, self_closing) = match child_of_kind(node, "start_tag") {
        Some(tag) => (tag, false),
        None => match child_of_kind(node, "self_closing_tag") {
            Some(tag) => (tag, true),
            None => return Some(Frame::open(node, parent)),
        },
    };

    let name = child_of_kind(tag, "tag_name").map_or("", |n| node_source(n, source));
    let mut cursor = tag.walk();
    let attrs = tag
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "attribute")
        .filter_map(|attr| lower_attribute(attr, source))
        .collect();

    let id = doc.append_element(parent, name, attrs);
    (!self_closing).then(|| Frame::open(node, id))
}

fn lower_attribute(attr: Node<'_>, source: &str) -> Option<(String, String)> {
    let name = node_source(child_of_kind(attr, "attribute_name")?, source).to_ascii_lowercase();
    let value = if let Some(value) = child_of_kind(attr, "attribute_value") {
        node_source(value, source)
    } else if let Some(quoted) = child_of_kind(attr, "quoted_attribute_value") {
        child_of_kind(quoted, "attribute_value").map_or("", |v| node_source(v, source))
    } else {
        ""
    };
    Some((name, html_escape::decode_html_entities(value).into_owned()))
}
