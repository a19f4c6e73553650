//! Reconstructs the section tree from a flat run of heading levels.
//!
//! Headings arrive in document order with nothing but a rank, and documents skip ranks freely
//! (an `h1` followed directly by an `h4`). The builder keeps a frontier of the most recent node
//! seen at each level; a new heading's parent is the nearest filled slot above its own level.
//! After every insert the frontier is cut back to the new heading's level, so a shallow heading
//! forgets the deeper branch it closes and a later deep heading cannot attach to it.

use crate::excerpt::Preview;
use crate::palette::{color_for_group, Rgb};
use serde::Serialize;
use std::collections::HashMap;

/// Id of the synthetic root node.
pub const ROOT_ID: usize = 1;

#[derive(Clone, Debug, Serialize)]
/// A node in the section graph, serialised in the shape vis-network expects.
pub struct GraphNode {
    /// 1-based id in encounter order; the root is always [`ROOT_ID`].
    pub id: usize,
    /// Visible heading text.
    pub label: String,
    /// Colour of the node's group.
    pub color: Rgb,
    /// Hover preview of the section body, absent for the root.
    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
    /// Colour group index before palette wrapping.
    #[serde(skip)]
    pub group: usize,
    /// Parent node id, `None` for the root.
    #[serde(skip)]
    pub parent: Option<usize>,
    /// Distance from the root in edges.
    #[serde(skip)]
    pub depth: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Directed parent-to-child link.
pub struct GraphEdge {
    /// Parent node id.
    pub from: usize,
    /// Child node id.
    pub to: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
/// Finished node and edge lists forming a single rooted tree.
pub struct Graph {
    /// Nodes ordered by id.
    pub nodes: Vec<GraphNode>,
    /// One edge per non-root node, in creation order.
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    #[must_use]
    /// Looks a node up by id.
    pub fn node(&self, id: usize) -> Option<&GraphNode> {
        id.checked_sub(1).and_then(|index| self.nodes.get(index))
    }

    #[must_use]
    /// Parent id of a node, `None` for the root or unknown ids.
    pub fn parent_of(&self, id: usize) -> Option<usize> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Ids of the direct children of a node, in document order.
    pub fn children_of(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.from == id)
            .map(|edge| edge.to)
    }

    #[must_use]
    /// Number of nodes including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Whether the graph has no nodes at all (never true once built).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Single-pass tree builder fed with headings in document order.
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    /// Index is heading level, value is the most recent node id at that level.
    frontier: Vec<Option<usize>>,
    /// Parent id to the colour group its children share.
    groups: HashMap<usize, usize>,
}

impl GraphBuilder {
    /// Starts a graph whose root carries `root_label` and colour group 0.
    pub fn new(root_label: impl Into<String>) -> Self {
        let root = GraphNode {
            id: ROOT_ID,
            label: root_label.into(),
            color: color_for_group(0),
            preview: None,
            group: 0,
            parent: None,
            depth: 0,
        };
        Self {
            nodes: vec![root],
            edges: Vec::new(),
            frontier: Vec::new(),
            groups: HashMap::new(),
        }
    }

    /// Adds the next heading and returns its node id.
    pub fn push(&mut self, level: u8, label: impl Into<String>, preview: Option<Preview>) -> usize {
        let id = self.nodes.len() + 1;
        let level = usize::from(level);

        let parent = self
            .frontier
            .iter()
            .take(level)
            .rev()
            .find_map(|slot| *slot)
            .unwrap_or(ROOT_ID);

        let next_group = self.groups.len() + 1;
        let group = *self.groups.entry(parent).or_insert(next_group);
        let depth = self.nodes[parent - 1].depth + 1;

        self.nodes.push(GraphNode {
            id,
            label: label.into(),
            color: color_for_group(group),
            preview,
            group,
            parent: Some(parent),
            depth,
        });
        self.edges.push(GraphEdge { from: parent, to: id });

        if self.frontier.len() <= level {
            self.frontier.resize(level + 1, None);
        }
        self.frontier[level] = Some(id);
        self.frontier.truncate(level + 1);

        id
    }

    #[must_use]
    /// Hands over the finished graph.
    pub fn finish(self) -> Graph {
        tracing::debug!(
            nodes = self.nodes.len(),
            groups = self.groups.len(),
            "built section graph"
        );
        Graph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

#[cfg(test)]
#[path = "tests/graph.rs"]
mod tests;
