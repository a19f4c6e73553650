//! Markdown format implementation using tree-sitter-md.
//!
//! The block grammar already nests `section` nodes by heading depth, which maps neatly onto
//! `<section>` wrappers. Headings (ATX `#` style and setext underlines) become `<hN>` elements;
//! every other block becomes a single leaf element holding its source text.

use crate::dom::{Document, NodeId};
use crate::formats::{child_of_kind, node_source, Format};
use tree_sitter::Node;

/// Parses Markdown with tree-sitter-md's block grammar.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["md", "markdown"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn lower(&self, tree: &tree_sitter::Tree, source: &str) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        lower_blocks(&mut doc, tree.root_node(), root, source);
        doc
    }
}

fn lower_blocks(doc: &mut Document, node: Node<'_>, parent: NodeId, source: &str) {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();

    for child in children {
        match child.kind() {
            "section" => {
                let section = doc.append_element(parent, "section", Vec::new());
                lower_blocks(doc, child, section, source);
            }
            "atx_heading" => {
                let level = atx_level(child);
                append_heading(doc, parent, level, heading_text(child, source));
            }
            "setext_heading" => {
                let level = if child_of_kind(child, "setext_h1_underline").is_some() {
                    1
                } else {
                    2
                };
                append_heading(doc, parent, level, heading_text(child, source));
            }
            "block_continuation" | "minus_metadata" | "plus_metadata" => {}
            "thematic_break" => {
                doc.append_element(parent, "hr", Vec::new());
            }
            kind => {
                let leaf = doc.append_element(parent, leaf_tag(kind), Vec::new());
                doc.append_text(leaf, node_source(child, source).trim_end());
            }
        }
    }
}

fn atx_level(heading: Node<'_>) -> u8 {
    let mut cursor = heading.walk();
    let marker = heading
        .named_children(&mut cursor)
        .find_map(|c| {
            c.kind()
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|rank| rank.parse::<u8>().ok())
        });
    marker.unwrap_or(1)
}

fn heading_text<'s>(heading: Node<'_>, source: &'s str) -> &'s str {
    heading
        .child_by_field_name("heading_content")
        .map_or("", |content| node_source(content, source).trim())
}

fn append_heading(doc: &mut Document, parent: NodeId, level: u8, text: &str) {
    let heading = doc.append_element(parent, &format!("h{level}"), Vec::new());
    doc.append_text(heading, text);
}

fn leaf_tag(kind: &str) -> &'static str {
    match kind {
        "paragraph" => "p",
        "fenced_code_block" | "indented_code_block" => "pre",
        "list" => "ul",
        "block_quote" => "blockquote",
        "pipe_table" => "table",
        _ => "div",
    }
}
