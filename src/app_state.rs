//! The state machine behind the terminal map browser.
//!
//! The browser plays the part a graph renderer plays in a web page: it shows every node, tracks
//! which one is under the cursor (the "hovered" node whose preview is displayed) and turns Enter
//! into a click signal. Clicks go through the same navigation glue a page would use, against an
//! in-memory location, so the last jump target can be reported when the browser closes.

use crate::graph::{Graph, GraphNode};
use crate::navigation::{self, HistoryLocation};

/// Bridges the section graph and the terminal view, maintaining session state.
pub struct AppState {
    /// The graph being browsed.
    pub graph: Graph,
    /// Name of the mapped document, shown in the list title.
    pub document_name: String,
    /// Index into `graph.nodes` of the node under the cursor.
    pub current_node_index: usize,
    /// Whether the preview pane is shown.
    pub show_preview: bool,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Location state receiving navigation from clicks.
    pub location: HistoryLocation,
}

impl AppState {
    #[must_use]
    /// Starts browsing at the root node with the preview pane open.
    pub fn new(graph: Graph, document_name: String) -> Self {
        Self {
            graph,
            document_name,
            current_node_index: 0,
            show_preview: true,
            message: None,
            location: HistoryLocation::default(),
        }
    }

    #[must_use]
    /// The node under the cursor.
    pub fn current_node(&self) -> Option<&GraphNode> {
        self.graph.nodes.get(self.current_node_index)
    }

    fn current_id(&self) -> usize {
        self.current_node_index + 1
    }

    fn index_of(id: usize) -> usize {
        id - 1
    }

    /// Moves the cursor to `index` if it names a node.
    pub fn select(&mut self, index: Option<usize>) {
        if let Some(index) = index.filter(|&i| i < self.graph.len()) {
            self.current_node_index = index;
            self.message = None;
        }
    }

    #[must_use]
    /// Returns the following node index for sequential navigation.
    pub fn find_next_node(&self) -> Option<usize> {
        (self.current_node_index + 1 < self.graph.len()).then_some(self.current_node_index + 1)
    }

    #[must_use]
    /// Returns the preceding node index for reverse navigation.
    pub fn find_prev_node(&self) -> Option<usize> {
        self.current_node_index.checked_sub(1)
    }

    #[must_use]
    /// Moves to the containing section in the hierarchy.
    pub fn navigate_to_parent(&self) -> Option<usize> {
        self.graph.parent_of(self.current_id()).map(Self::index_of)
    }

    #[must_use]
    /// Descends to the first subsection.
    pub fn navigate_to_first_child(&self) -> Option<usize> {
        self.graph
            .children_of(self.current_id())
            .next()
            .map(Self::index_of)
    }

    fn siblings(&self) -> Vec<usize> {
        match self.graph.parent_of(self.current_id()) {
            Some(parent) => self.graph.children_of(parent).collect(),
            None => vec![self.current_id()],
        }
    }

    #[must_use]
    /// Finds the next section sharing the same parent.
    pub fn navigate_to_next_sibling(&self) -> Option<usize> {
        let siblings = self.siblings();
        let position = siblings.iter().position(|&id| id == self.current_id())?;
        siblings.get(position + 1).copied().map(Self::index_of)
    }

    #[must_use]
    /// Finds the previous section sharing the same parent.
    pub fn navigate_to_prev_sibling(&self) -> Option<usize> {
        let siblings = self.siblings();
        let position = siblings.iter().position(|&id| id == self.current_id())?;
        position
            .checked_sub(1)
            .map(|p| siblings[p])
            .map(Self::index_of)
    }

    #[must_use]
    /// Jumps to the root.
    pub fn navigate_to_first(&self) -> Option<usize> {
        (!self.graph.is_empty()).then_some(0)
    }

    #[must_use]
    /// Jumps to the last section in the document.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.graph.len().checked_sub(1)
    }

    /// Clicks the node under the cursor, navigating to its section anchor.
    pub fn click_current(&mut self) -> Option<String> {
        let anchor = navigation::navigate(&self.graph, Some(self.current_id()), &mut self.location);
        self.message = Some(match &anchor {
            Some(anchor) => format!(
                "Jumped to #{anchor} ({} navigations)",
                self.location.navigations().len()
            ),
            None => "Nothing to jump to".to_string(),
        });
        anchor
    }

    /// Shows or hides the preview pane.
    pub fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
    }

    #[must_use]
    /// The most recent navigation target, if any click landed.
    pub fn last_navigation(&self) -> Option<&str> {
        self.location.navigations().last().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
