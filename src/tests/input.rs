use super::{find_documents, load_document};
use crate::error::MapError;
use std::fs;
use tempfile::TempDir;

fn exts() -> Vec<String> {
    vec!["html".to_string(), "md".to_string()]
}

#[test]
fn test_directories_are_scanned_recursively_by_extension() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("a.html"), "<h1>A</h1>").unwrap();
    fs::write(dir.path().join("nested/b.MD"), "# B").unwrap();
    fs::write(dir.path().join("c.txt"), "nope").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &exts()).unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.html", "b.MD"]);
}

#[test]
fn test_explicit_files_are_kept_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "x").unwrap();

    let found = find_documents(vec![file.clone(), file.clone()], &exts()).unwrap();
    assert_eq!(found, vec![file]);
}

#[test]
fn test_missing_paths_are_skipped() {
    let found = find_documents(vec!["/no/such/place".into()], &exts()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_load_document_by_extension() {
    let dir = TempDir::new().unwrap();
    let html = dir.path().join("page.html");
    fs::write(&html, "<h1>Title</h1><p>Body</p>").unwrap();
    let doc = load_document(&html).unwrap();
    assert!(doc.find_by_tag(doc.root(), "h1").is_some());

    let md = dir.path().join("page.md");
    fs::write(&md, "# Title\n\nBody\n").unwrap();
    let doc = load_document(&md).unwrap();
    assert!(doc.find_by_tag(doc.root(), "h1").is_some());
}

#[test]
fn test_load_document_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "# not parsed").unwrap();
    assert!(matches!(
        load_document(&file),
        Err(MapError::UnsupportedFormat { .. })
    ));
}
