//! The explicit entry point that turns a loaded document into a section graph.

use crate::config::Config;
use crate::dom::Document;
use crate::excerpt::{self, DEFAULT_BUDGET};
use crate::graph::{Graph, GraphBuilder};
use crate::section;

#[derive(Clone, Debug)]
/// Where to look in the document and how to label and excerpt what is found.
pub struct MapOptions {
    /// Id of the element enclosing the mapped content; empty for the whole document.
    pub content_id: String,
    /// Class of the content element below `content_id`; empty to use `content_id` itself.
    pub content_class: String,
    /// Explicit root label, taking precedence over `root_label_id`.
    pub root_label: Option<String>,
    /// Id of the element whose text labels the root.
    pub root_label_id: String,
    /// Class of the heading sub-element holding the label; empty for the heading's own text.
    pub label_class: String,
    /// Character budget for previews.
    pub excerpt_budget: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            content_id: String::new(),
            content_class: String::new(),
            root_label: None,
            root_label_id: "firstHeading".to_string(),
            label_class: String::new(),
            excerpt_budget: DEFAULT_BUDGET,
        }
    }
}

impl From<&Config> for MapOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            content_id: cfg.content_id.clone(),
            content_class: cfg.content_class.clone(),
            root_label: None,
            root_label_id: cfg.root_label_id.clone(),
            label_class: cfg.label_class.clone(),
            excerpt_budget: cfg.excerpt_budget,
        }
    }
}

#[must_use]
/// Builds the section graph for `doc`.
///
/// Returns `None`, with a diagnostic, when the content region is missing: the map simply does
/// not activate for such documents.
pub fn build_map(doc: &Document, opts: &MapOptions) -> Option<Graph> {
    let Some(region) = section::content_region(doc, &opts.content_id, &opts.content_class)
    else {
        tracing::info!(
            content_id = %opts.content_id,
            content_class = %opts.content_class,
            "no content region, skipping section map"
        );
        return None;
    };

    let root_label = opts
        .root_label
        .clone()
        .unwrap_or_else(|| section::root_label(doc, &opts.root_label_id));
    let mut builder = GraphBuilder::new(root_label);

    let headings = section::headings(doc, region, &opts.label_class);
    tracing::debug!(headings = headings.len(), "collected headings");

    for heading in headings {
        let preview = excerpt::extract(doc, heading.element, &opts.label_class)
            .into_preview(opts.excerpt_budget);
        builder.push(heading.level, heading.label, Some(preview));
    }

    Some(builder.finish())
}

#[cfg(test)]
#[path = "tests/map.rs"]
mod tests;
