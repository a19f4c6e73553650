use super::html::HtmlFormat;
use super::markdown::MarkdownFormat;
use super::{for_path, Format};
use crate::dom::{Document, NodeData, NodeId};
use std::path::Path;

fn html(source: &str) -> Document {
    HtmlFormat.parse(source, Path::new("test.html")).unwrap()
}

fn markdown(source: &str) -> Document {
    MarkdownFormat.parse(source, Path::new("test.md")).unwrap()
}

fn first_tag(doc: &Document, tag: &str) -> NodeId {
    doc.find_by_tag(doc.root(), tag)
        .unwrap_or_else(|| panic!("no <{tag}> in document"))
}

fn heading_labels(doc: &Document) -> Vec<(u8, String)> {
    doc.descendants(doc.root())
        .filter_map(|n| Some((doc.heading_level(n)?, doc.text_content(n))))
        .collect()
}

#[test]
fn test_format_chosen_by_extension() {
    assert_eq!(for_path(Path::new("page.html")).unwrap().name(), "html");
    assert_eq!(for_path(Path::new("PAGE.HTM")).unwrap().name(), "html");
    assert_eq!(for_path(Path::new("notes.md")).unwrap().name(), "markdown");
    assert!(for_path(Path::new("notes.txt")).is_none());
    assert!(for_path(Path::new("Makefile")).is_none());
}

#[test]
fn test_html_entities_are_decoded() {
    let doc = html("<h1>Fish &amp; Chips</h1>");
    let h1 = first_tag(&doc, "h1");
    assert_eq!(doc.text_content(h1), "Fish & Chips");
}

#[test]
fn test_html_whitespace_between_inline_elements_is_kept() {
    let doc = html("<p>one <b>two</b> three</p>");
    let p = first_tag(&doc, "p");
    assert_eq!(doc.text_content(p), "one two three");
}

#[test]
fn test_html_attributes() {
    let doc = html(r#"<div id="main" class='x y' data-n=3 hidden>text</div>"#);
    let div = doc.find_by_id("main").unwrap();
    assert!(doc.has_class(div, "x"));
    assert!(doc.has_class(div, "y"));
    assert_eq!(doc.attr(div, "data-n"), Some("3"));
    assert_eq!(doc.attr(div, "hidden"), Some(""));
}

#[test]
fn test_html_nesting_and_void_elements() {
    let doc = html("<section><h2>T</h2><p>a<br>b</p></section>");
    let section = first_tag(&doc, "section");
    let h2 = doc.first_element_child(section).unwrap();
    let p = doc.next_element_sibling(h2).unwrap();
    assert_eq!(doc.element_name(h2), Some("h2"));
    assert_eq!(doc.element_name(p), Some("p"));
    assert!(doc.find_by_tag(p, "br").is_some());
    assert_eq!(doc.text_content(p), "ab");
    assert!(doc.contains_heading(section));
}

#[test]
fn test_html_comments_are_kept_out_of_text() {
    let doc = html("<div><!-- hidden --><p>shown</p></div>");
    let div = first_tag(&doc, "div");
    assert_eq!(doc.text_content(div), "shown");
    let has_comment = doc
        .descendants(div)
        .any(|n| doc.node(n).data == NodeData::Comment(" hidden ".to_string()));
    assert!(has_comment);
}

#[test]
fn test_html_script_body_is_raw() {
    let doc = html("<div><script>if (a < b) { go(); }</script></div>");
    let script = first_tag(&doc, "script");
    assert_eq!(doc.text_content(script), "if (a < b) { go(); }");
    assert_eq!(doc.outer_html(script), "<script>if (a < b) { go(); }</script>");
}

#[test]
fn test_html_full_page() {
    let doc = html(
        "<!DOCTYPE html>\n<html><head><title>Guide</title></head>\n\
         <body><h1 id=\"firstHeading\">Guide</h1><h2>Setup</h2><h3>Install</h3></body></html>",
    );
    assert_eq!(
        heading_labels(&doc),
        vec![
            (1, "Guide".to_string()),
            (2, "Setup".to_string()),
            (3, "Install".to_string())
        ]
    );
    assert!(doc.find_by_id("firstHeading").is_some());
}

#[test]
fn test_markdown_headings_and_sections() {
    let doc = markdown("# A\n\nintro\n\n## B\n\nbody\n\n### C\n\ntext\n");
    assert_eq!(
        heading_labels(&doc),
        vec![
            (1, "A".to_string()),
            (2, "B".to_string()),
            (3, "C".to_string())
        ]
    );

    // The h2 sits in its own section, nested in the h1's section.
    let h2 = doc
        .descendants(doc.root())
        .find(|&n| doc.heading_level(n) == Some(2))
        .unwrap();
    let inner = doc.node(h2).parent.unwrap();
    let outer = doc.node(inner).parent.unwrap();
    assert_eq!(doc.element_name(inner), Some("section"));
    assert_eq!(doc.element_name(outer), Some("section"));
    assert_eq!(doc.heading_level(doc.first_element_child(outer).unwrap()), Some(1));
}

#[test]
fn test_markdown_blocks_become_leaf_elements() {
    let doc = markdown("# A\n\nSome *text* here.\n\n```\ncode < 1\n```\n");
    let p = first_tag(&doc, "p");
    assert_eq!(doc.text_content(p), "Some *text* here.");
    let pre = first_tag(&doc, "pre");
    assert!(doc.text_content(pre).contains("code < 1"));
    assert!(doc.outer_html(pre).contains("code &lt; 1"));
}

#[test]
fn test_markdown_setext_heading() {
    let doc = markdown("Title\n=====\n\nbody\n");
    assert_eq!(heading_labels(&doc), vec![(1, "Title".to_string())]);
}

#[test]
fn test_html_deep_nesting_is_lowered() {
    let depth = 20_000;
    let source = format!("<h1>A</h1>{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let doc = html(&source);

    assert_eq!(heading_labels(&doc), vec![(1, "A".to_string())]);
    assert!(doc.text_content(doc.root()).contains('x'));
    let divs = doc
        .descendants(doc.root())
        .filter(|&n| doc.element_name(n) == Some("div"))
        .count();
    assert!(divs > 0);
}

#[test]
fn test_html_lowering_keeps_document_order() {
    let doc = html("<div><p>one <b>two</b> three</p><p>four</p></div>tail");
    let div = first_tag(&doc, "div");
    let first = doc.first_element_child(div).unwrap();
    let second = doc.next_element_sibling(first).unwrap();
    assert_eq!(doc.text_content(first), "one two three");
    assert_eq!(doc.text_content(second), "four");
    assert_eq!(doc.text_content(doc.root()), "one two threefourtail");
}
