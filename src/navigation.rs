//! Turns node clicks into jumps to the matching section anchor.
//!
//! Hosts only scroll when their location actually changes, so setting the same hash twice is a
//! silent no-op. Every click therefore clears the hash before setting it, which makes a second
//! click on the same node scroll again.

use crate::graph::Graph;

/// Addressable location state of the host (a URL fragment in a browser).
pub trait Location {
    /// Replaces the current fragment; `""` clears it.
    fn set_hash(&mut self, hash: &str);
}

#[must_use]
/// Anchor identifier for a section label: spaces become underscores.
pub fn anchor_for(label: &str) -> String {
    label.replace(' ', "_")
}

/// Handles a click signal from the renderer.
///
/// Returns the anchor navigated to, or `None` when the click carried no node, the id is unknown
/// or the node has an empty label.
pub fn navigate<L: Location + ?Sized>(
    graph: &Graph,
    clicked: Option<usize>,
    location: &mut L,
) -> Option<String> {
    let label = clicked
        .and_then(|id| graph.node(id))
        .map(|node| node.label.as_str())
        .filter(|label| !label.is_empty())?;

    let anchor = anchor_for(label);
    location.set_hash("");
    location.set_hash(&format!("#{anchor}"));
    tracing::debug!(%anchor, "navigated to section");
    Some(anchor)
}

#[derive(Clone, Debug, Default)]
/// In-memory location with browser `hashchange` semantics.
///
/// A navigation is recorded only when the hash changes to a non-empty value.
pub struct HistoryLocation {
    current: String,
    navigations: Vec<String>,
}

impl HistoryLocation {
    #[must_use]
    /// The current fragment, `""` when cleared.
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    /// Every fragment navigated to, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}

impl Location for HistoryLocation {
    fn set_hash(&mut self, hash: &str) {
        if self.current == hash {
            return;
        }
        hash.clone_into(&mut self.current);
        if !hash.is_empty() {
            self.navigations.push(hash.to_string());
        }
    }
}

#[cfg(test)]
#[path = "tests/navigation.rs"]
mod tests;
