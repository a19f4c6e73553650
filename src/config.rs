//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a sectionmap.toml, and if present we load settings from there.
//! This provides the content region, labelling, excerpt budget and file extension preferences.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "sectionmap.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from sectionmap.toml or falling back to defaults.
pub struct Config {
    #[facet(default = crate::excerpt::DEFAULT_BUDGET)]
    /// Character budget for section previews.
    pub excerpt_budget: usize,
    #[facet(default = String::new())]
    /// Id of the element enclosing the mapped content (empty: whole document).
    pub content_id: String,
    #[facet(default = String::new())]
    /// Class of the content element inside `content_id` (empty: `content_id` itself).
    pub content_class: String,
    #[facet(default = "firstHeading".to_string())]
    /// Id of the element whose text labels the root node.
    pub root_label_id: String,
    #[facet(default = String::new())]
    /// Class of the heading sub-element holding the label (empty: whole heading text).
    pub label_class: String,
    #[facet(default = 1024)]
    /// Viewport width, in CSS pixels, the layout is chosen for.
    pub viewport_width: u32,
    #[facet(default = vec!["html".to_string(), "htm".to_string(), "md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excerpt_budget: crate::excerpt::DEFAULT_BUDGET,
            content_id: String::new(),
            content_class: String::new(),
            root_label_id: "firstHeading".to_string(),
            label_class: String::new(),
            viewport_width: 1024,
            file_extensions: vec!["html".to_string(), "htm".to_string(), "md".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from sectionmap.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            tracing::warn!(path = %path.display(), "ignoring unparseable config");
            Self::default()
        })
    }

    #[must_use]
    /// Parse TOML settings, unspecified keys taking their defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
