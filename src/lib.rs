//! sectionmap turns a headed document into a clickable concept map.
//!
//! Every `h1`..`h6` becomes a node, nesting becomes a parent-to-child edge, nodes are coloured by
//! the branch they hang from, and each node carries a bounded preview of its section's own
//! content. The result is a node and edge list for a browser graph renderer, or a tree to browse
//! in the terminal. Clicking a node jumps to the section's anchor.
//!
//! ```
//! use sectionmap::dom::Document;
//! use sectionmap::formats::{html::HtmlFormat, Format};
//! use sectionmap::map::{build_map, MapOptions};
//! use std::path::Path;
//!
//! let html = "<h1>Intro</h1><p>Hello</p><h2>Details</h2><p>More</p>";
//! let doc: Document = HtmlFormat.parse(html, Path::new("page.html")).unwrap();
//! let graph = build_map(&doc, &MapOptions::default()).unwrap();
//!
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.parent_of(3), Some(2));
//! ```

pub mod app_state;
pub mod config;
pub mod dom;
pub mod error;
pub mod excerpt;
pub mod formats;
pub mod graph;
pub mod input;
pub mod map;
pub mod navigation;
pub mod palette;
pub mod render;
pub mod section;
pub mod ui;
