//! Format trait and implementations for the document types a map can be drawn from.
//!
//! Each format names a tree-sitter grammar and knows how to lower the resulting syntax tree
//! into the shared [`Document`] element tree. Everything downstream (heading discovery, the
//! tree builder, excerpting) only ever sees that element tree.

pub mod html;
pub mod markdown;

use crate::dom::Document;
use crate::error::{MapError, Result};
use std::path::Path;

/// A parseable document type.
pub trait Format {
    /// Short human-readable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// File suffixes (without the dot) this format claims.
    fn file_extensions(&self) -> &'static [&'static str];

    /// The tree-sitter grammar for this format.
    fn language(&self) -> tree_sitter::Language;

    /// Converts a parsed syntax tree into an element tree.
    fn lower(&self, tree: &tree_sitter::Tree, source: &str) -> Document;

    /// Parses `source` and lowers it.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or tree-sitter produces no tree.
    fn parse(&self, source: &str, path: &Path) -> Result<Document> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.language())?;
        let tree = parser.parse(source, None).ok_or_else(|| MapError::Parse {
            path: path.to_path_buf(),
        })?;
        Ok(self.lower(&tree, source))
    }
}

const FORMATS: &[&dyn Format] = &[&html::HtmlFormat, &markdown::MarkdownFormat];

#[must_use]
/// Picks the format claiming the path's extension, ignoring case.
pub fn for_path(path: &Path) -> Option<&'static dyn Format> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    FORMATS
        .iter()
        .copied()
        .find(|format| format.file_extensions().contains(&ext.as_str()))
}

/// Slice of `source` covered by a syntax node, empty if the range is not on char boundaries.
pub(crate) fn node_source<'s>(node: tree_sitter::Node<'_>, source: &'s str) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// First named child of `node` with the given kind.
pub(crate) fn child_of_kind<'t>(
    node: tree_sitter::Node<'t>,
    kind: &str,
) -> Option<tree_sitter::Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
