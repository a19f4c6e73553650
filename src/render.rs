//! Layout and interaction settings handed to the browser graph renderer.
//!
//! These mirror vis-network's `Options` object (camelCase keys) and only cover what the map
//! sets. Narrow viewports lay the tree out left-to-right with tighter node spacing.

use crate::graph::Graph;
use serde::Serialize;

/// Viewports wider than this (in CSS pixels) get the top-down layout.
pub const WIDE_VIEWPORT: u32 = 768;

/// Hint shown beneath the map.
pub const CLICK_HINT: &str = "Click a node to jump to its section.";

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Top-level renderer options.
pub struct NetworkOptions {
    /// Resize with the container.
    pub auto_resize: bool,
    /// Require a click before the canvas captures input.
    pub click_to_use: bool,
    /// Pointer interaction toggles.
    pub interaction: Interaction,
    /// Node appearance.
    pub nodes: NodeOptions,
    /// Edge appearance.
    pub edges: EdgeOptions,
    /// Layout engine settings.
    pub layout: Layout,
    /// Physics engine settings.
    pub physics: Physics,
    /// CSS height of the canvas.
    pub height: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Pointer interaction toggles.
pub struct Interaction {
    /// Highlight nodes under the pointer and show their titles.
    pub hover: bool,
    /// Allow dragging nodes.
    pub drag_nodes: bool,
    /// Allow panning.
    pub drag_view: bool,
    /// Allow zooming.
    pub zoom_view: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Node appearance.
pub struct NodeOptions {
    /// Node shape name.
    pub shape: String,
    /// Width limits for labels.
    pub width_constraint: WidthConstraint,
    /// Padding inside the node box.
    pub margin: Margin,
    /// Embolden the label on hover or selection.
    pub label_highlight_bold: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
/// Width limits for labels.
pub struct WidthConstraint {
    /// Maximum width in pixels.
    pub maximum: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
/// Padding inside the node box, in pixels.
pub struct Margin {
    /// Top padding.
    pub top: u32,
    /// Right padding.
    pub right: u32,
    /// Bottom padding.
    pub bottom: u32,
    /// Left padding.
    pub left: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
/// Edge appearance.
pub struct EdgeOptions {
    /// Stroke width.
    pub width: f64,
    /// Arrowheads.
    pub arrows: Arrows,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
/// Arrowheads per edge end.
pub struct Arrows {
    /// Arrowhead at the child end.
    pub to: ArrowEnd,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
/// A single arrowhead toggle.
pub struct ArrowEnd {
    /// Whether the arrowhead is drawn.
    pub enabled: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
/// Layout engine settings.
pub struct Layout {
    /// Hierarchical layout settings.
    pub hierarchical: Hierarchical,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Hierarchical layout settings.
pub struct Hierarchical {
    /// Use the hierarchical layout.
    pub enabled: bool,
    /// `UD` (top-down) or `LR` (left-right).
    pub direction: String,
    /// How levels are assigned.
    pub sort_method: String,
    /// Distance between nodes on the same level.
    pub node_spacing: u32,
    /// Distance between levels.
    pub level_separation: u32,
    /// Which end of the tree leaves are pulled towards.
    pub shake_towards: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Physics engine settings.
pub struct Physics {
    /// Repulsion used by the hierarchical solver.
    pub hierarchical_repulsion: HierarchicalRepulsion,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Repulsion used by the hierarchical solver.
pub struct HierarchicalRepulsion {
    /// Minimum distance between nodes.
    pub node_distance: u32,
}

impl NetworkOptions {
    #[must_use]
    /// Options for a viewport `width` CSS pixels wide.
    pub fn for_viewport(width: u32) -> Self {
        let wide = width > WIDE_VIEWPORT;
        Self {
            auto_resize: true,
            click_to_use: true,
            interaction: Interaction {
                hover: true,
                drag_nodes: false,
                drag_view: false,
                zoom_view: false,
            },
            nodes: NodeOptions {
                shape: "box".to_string(),
                width_constraint: WidthConstraint { maximum: 200 },
                margin: Margin {
                    top: 10,
                    right: 10,
                    bottom: 10,
                    left: 10,
                },
                label_highlight_bold: true,
            },
            edges: EdgeOptions {
                width: 1.0,
                arrows: Arrows {
                    to: ArrowEnd { enabled: true },
                },
            },
            layout: Layout {
                hierarchical: Hierarchical {
                    enabled: true,
                    direction: if wide { "UD" } else { "LR" }.to_string(),
                    sort_method: "directed".to_string(),
                    node_spacing: if wide { 200 } else { 40 },
                    level_separation: if wide { 80 } else { 140 },
                    shake_towards: "roots".to_string(),
                },
            },
            physics: Physics {
                hierarchical_repulsion: HierarchicalRepulsion { node_distance: 150 },
            },
            height: "400px".to_string(),
        }
    }
}

#[derive(Serialize)]
/// Everything a browser needs to draw one map.
pub struct Payload<'g> {
    /// Source document, present when several maps are emitted together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Graph nodes. Each `title` is preview markup that must be turned into an element
    /// before the nodes reach vis-network; see [`crate::excerpt::Preview`].
    pub nodes: &'g [crate::graph::GraphNode],
    /// Graph edges.
    pub edges: &'g [crate::graph::GraphEdge],
    /// Renderer options.
    pub options: NetworkOptions,
    /// Text to show beneath the map.
    pub hint: &'static str,
}

impl<'g> Payload<'g> {
    #[must_use]
    /// Bundles a graph with options for the given viewport width.
    pub fn new(graph: &'g Graph, viewport_width: u32, path: Option<String>) -> Self {
        Self {
            path,
            nodes: &graph.nodes,
            edges: &graph.edges,
            options: NetworkOptions::for_viewport(viewport_width),
            hint: CLICK_HINT,
        }
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
