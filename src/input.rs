//! Resolving input paths into documents.
//!
//! Paths may name files directly or directories to scan. Directory scans only pick up files
//! whose extension is listed in the configuration; explicit files are always taken, and their
//! extension later decides the parser.

use crate::dom::Document;
use crate::error::{MapError, Result};
use crate::formats;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expands `paths` into a sorted, de-duplicated list of document files.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            scan_dir(&path, extensions, &mut found)?;
        } else if path.is_file() {
            found.push(path);
        } else {
            tracing::warn!(path = %path.display(), "no such file or directory");
        }
    }
    found.sort();
    found.dedup();
    Ok(found)
}

fn scan_dir(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_dir(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Reads and parses a single document with the format matching its extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, no format claims it, or parsing fails.
pub fn load_document(path: &Path) -> Result<Document> {
    let format = formats::for_path(path).ok_or_else(|| MapError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let source = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), format = format.name(), "parsing document");
    format.parse(&source, path)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
