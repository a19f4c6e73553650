//! An owned element tree that every input format is lowered into.
//!
//! tree-sitter hands back a concrete syntax tree that borrows the source and mixes tags, tokens
//! and whitespace. The map only needs what a browser DOM offers: elements with attributes, text
//! runs, sibling and child traversal, and a way to copy a subtree out as markup. Nodes live in a
//! single arena and refer to each other by [`NodeId`], so traversals borrow the document and
//! clones are plain `String`s.

use std::fmt::Write;

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text is emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Handle to a node in a [`Document`] arena.
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// What a node in the tree holds.
pub enum NodeData {
    /// The single root of the arena.
    Document,
    /// A tag with its attributes in source order.
    Element {
        /// Lowercase tag name.
        name: String,
        /// Attribute name/value pairs, names lowercased and values entity-decoded.
        attrs: Vec<(String, String)>,
    },
    /// Decoded character data.
    Text(String),
    /// Comment body without the delimiters.
    Comment(String),
}

#[derive(Clone, Debug)]
/// A single arena entry.
pub struct Node {
    /// Containing node, `None` only for the document root.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Position among the parent's children.
    pub sibling_index: usize,
    /// Payload of this node.
    pub data: NodeData,
}

#[derive(Clone, Debug)]
/// Arena-allocated document tree with a [`NodeData::Document`] root.
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only its root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                sibling_index: 0,
                data: NodeData::Document,
            }],
        }
    }

    /// The document root.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Appends a node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        let sibling_index = self.nodes[parent.0].children.len();
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            sibling_index,
            data,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends an element with the given tag name and attributes.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        name: &str,
        attrs: Vec<(String, String)>,
    ) -> NodeId {
        self.append(
            parent,
            NodeData::Element {
                name: name.to_ascii_lowercase(),
                attrs,
            },
        )
    }

    /// Appends text, merging into a preceding text sibling like a DOM would.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(&last) = self.nodes[parent.0].children.last() {
            if let NodeData::Text(existing) = &mut self.nodes[last.0].data {
                existing.push_str(text);
                return;
            }
        }
        self.append(parent, NodeData::Text(text.to_string()));
    }

    /// Borrows a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Children of a node in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Tag name when the node is an element.
    #[must_use]
    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Value of an attribute on an element.
    #[must_use]
    pub fn attr(&self, id: NodeId, attr: &str) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(name, _)| name == attr)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Whether the element's `class` attribute lists `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Heading rank for `h1`..`h6` elements.
    #[must_use]
    pub fn heading_level(&self, id: NodeId) -> Option<u8> {
        let name = self.element_name(id)?;
        let rank = name.strip_prefix('h')?;
        match rank.parse::<u8>() {
            Ok(level @ 1..=6) => Some(level),
            _ => None,
        }
    }

    /// Preorder walk over `id` and everything beneath it.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.nodes[next.0].children.iter().rev());
            Some(next)
        })
    }

    /// Whether any node strictly below `id` is a heading.
    #[must_use]
    pub fn contains_heading(&self, id: NodeId) -> bool {
        self.descendants(id)
            .skip(1)
            .any(|node| self.heading_level(node).is_some())
    }

    /// The next sibling that is an element, skipping text and comments.
    #[must_use]
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        let siblings = &self.nodes[node.parent?.0].children;
        siblings[node.sibling_index + 1..]
            .iter()
            .copied()
            .find(|&s| self.element_name(s).is_some())
    }

    /// The first child that is an element.
    #[must_use]
    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .find(|&c| self.element_name(c).is_some())
    }

    /// First element in the document whose `id` attribute equals `value`.
    #[must_use]
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&node| self.attr(node, "id") == Some(value))
    }

    /// First element strictly below `scope` carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(scope)
            .skip(1)
            .find(|&node| self.has_class(node, class))
    }

    /// First element strictly below `scope` with the given tag name.
    #[must_use]
    pub fn find_by_tag(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(scope)
            .skip(1)
            .find(|&node| self.element_name(node) == Some(tag))
    }

    /// Concatenated text of every text node beneath `id`, comments excluded.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let NodeData::Text(text) = &self.nodes[node.0].data {
                out.push_str(text);
            }
        }
        out
    }

    /// Serialises `id` and its subtree as markup.
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out, false);
        out
    }

    /// Serialises the children of `id`, dropping every `id` attribute.
    ///
    /// Used for clones that end up next to the original in the same page.
    #[must_use]
    pub fn inner_html_without_ids(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in &self.nodes[id.0].children {
            self.write_html(child, &mut out, true);
        }
        out
    }

    /// Serialises `id` and its subtree, dropping every `id` attribute.
    #[must_use]
    pub fn outer_html_without_ids(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out, true);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String, strip_ids: bool) {
        let mut stack = vec![Step::Open { id, raw: false }];
        while let Some(step) = stack.pop() {
            let (id, raw) = match step {
                Step::Close(name) => {
                    let _ = write!(out, "</{name}>");
                    continue;
                }
                Step::Open { id, raw } => (id, raw),
            };
            let node = &self.nodes[id.0];
            match &node.data {
                NodeData::Document => {
                    stack.extend(
                        node.children
                            .iter()
                            .rev()
                            .map(|&child| Step::Open { id: child, raw: false }),
                    );
                }
                NodeData::Text(text) => {
                    if raw {
                        out.push_str(text);
                    } else {
                        out.push_str(&html_escape::encode_text(text));
                    }
                }
                NodeData::Comment(body) => {
                    let _ = write!(out, "<!--{body}-->");
                }
                NodeData::Element { name, attrs } => {
                    out.push('<');
                    out.push_str(name);
                    for (attr, value) in attrs {
                        if strip_ids && attr == "id" {
                            continue;
                        }
                        let _ = write!(
                            out,
                            " {attr}=\"{}\"",
                            html_escape::encode_double_quoted_attribute(value)
                        );
                    }
                    out.push('>');
                    if VOID_ELEMENTS.contains(&name.as_str()) {
                        continue;
                    }
                    let raw_children = RAW_TEXT_ELEMENTS.contains(&name.as_str());
                    stack.push(Step::Close(name));
                    stack.extend(node.children.iter().rev().map(|&child| Step::Open {
                        id: child,
                        raw: raw_children,
                    }));
                }
            }
        }
    }
}

/// Pending serialisation work; closing tags are queued behind their children.
enum Step<'d> {
    Open { id: NodeId, raw: bool },
    Close(&'d str),
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
