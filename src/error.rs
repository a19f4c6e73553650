//! Error types for loading documents and emitting maps.
//!
//! Almost nothing in the transform itself can fail: absent regions and labels degrade to
//! empty output. What remains are the edges of the program, reading files, choosing a grammar,
//! handing the source to tree-sitter and writing JSON.

use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias for sectionmap operations.
pub type Result<T> = std::result::Result<T, MapError>;

/// Failures that stop a single document from being mapped.
#[derive(Debug, ThisError)]
pub enum MapError {
    /// Reading an input path failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No format claims the file's extension.
    #[error("Unsupported document format: {}", path.display())]
    UnsupportedFormat {
        /// The offending file.
        path: PathBuf,
    },

    /// The grammar could not be loaded into the parser.
    #[error("Language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter returned no tree for the source.
    #[error("Parse error in {}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
    },

    /// Serialising the graph payload failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
