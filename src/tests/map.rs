use super::{build_map, MapOptions};
use crate::config::Config;
use crate::formats::{html::HtmlFormat, markdown::MarkdownFormat, Format};
use crate::render::Payload;
use std::path::Path;

const PAGE: &str = r#"<html><head><title>Notes</title></head><body>
<h1 id="firstHeading">Biology</h1>
<main id="content">
<h1>Cells</h1><p>Units of life.</p>
<h2>Organelles</h2><p>Parts.</p>
<h3>Mitochondria</h3><p>Power.</p>
<h2>Division</h2><p>Mitosis.</p>
</main>
</body></html>"#;

fn options() -> MapOptions {
    MapOptions {
        content_id: "content".to_string(),
        ..MapOptions::default()
    }
}

#[test]
fn test_builds_tree_from_region() {
    let doc = HtmlFormat.parse(PAGE, Path::new("bio.html")).unwrap();
    let graph = build_map(&doc, &options()).unwrap();

    let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Biology", "Cells", "Organelles", "Mitochondria", "Division"]
    );
    assert_eq!(graph.parent_of(5), Some(2), "Division hangs off Cells");
    assert!(graph.nodes[0].preview.is_none());

    let organelles = graph.node(3).unwrap().preview.as_ref().unwrap();
    assert!(organelles.html.contains("Parts."));
    assert!(!organelles.html.contains("Power."));
}

#[test]
fn test_missing_region_disables_map() {
    let doc = HtmlFormat.parse(PAGE, Path::new("bio.html")).unwrap();
    let opts = MapOptions {
        content_id: "mw-content-text".to_string(),
        ..MapOptions::default()
    };
    assert!(build_map(&doc, &opts).is_none());
}

#[test]
fn test_explicit_root_label_wins() {
    let doc = HtmlFormat.parse(PAGE, Path::new("bio.html")).unwrap();
    let opts = MapOptions {
        root_label: Some("Custom".to_string()),
        ..options()
    };
    let graph = build_map(&doc, &opts).unwrap();
    assert_eq!(graph.nodes[0].label, "Custom");
}

#[test]
fn test_budget_is_applied() {
    let doc = HtmlFormat.parse(PAGE, Path::new("bio.html")).unwrap();
    let opts = MapOptions {
        excerpt_budget: 3,
        ..options()
    };
    let graph = build_map(&doc, &opts).unwrap();
    assert!(graph.nodes[1..]
        .iter()
        .all(|n| n.preview.as_ref().is_some_and(|p| p.truncated)));
}

#[test]
fn test_markdown_document_maps_by_sections() {
    let source = "# Cells\n\nUnits.\n\n## Organelles\n\nParts.\n\n### Mitochondria\n\nPower.\n\n## Division\n\nMitosis.\n";
    let doc = MarkdownFormat.parse(source, Path::new("bio.md")).unwrap();
    let opts = MapOptions {
        root_label: Some("bio".to_string()),
        ..MapOptions::default()
    };
    let graph = build_map(&doc, &opts).unwrap();

    assert_eq!(graph.len(), 5);
    assert_eq!(graph.parent_of(3), Some(2));
    assert_eq!(graph.parent_of(4), Some(3));
    assert_eq!(graph.parent_of(5), Some(2));

    let cells = graph.node(2).unwrap().preview.as_ref().unwrap();
    assert!(cells.text.contains("Units."));
    assert!(!cells.text.contains("Parts."));
}

#[test]
fn test_options_from_config() {
    let cfg = Config {
        content_id: "c".to_string(),
        label_class: "mw-headline".to_string(),
        excerpt_budget: 10,
        ..Config::default()
    };
    let opts = MapOptions::from(&cfg);
    assert_eq!(opts.content_id, "c");
    assert_eq!(opts.label_class, "mw-headline");
    assert_eq!(opts.excerpt_budget, 10);
    assert_eq!(opts.root_label, None);
}

#[test]
fn test_deeply_nested_page_maps_and_serialises() {
    let depth = 20_000;
    let source = format!("<h1>A</h1>{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let doc = HtmlFormat.parse(&source, Path::new("deep.html")).unwrap();
    let graph = build_map(&doc, &MapOptions::default()).unwrap();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.node(2).unwrap().label, "A");
    let preview = graph.node(2).unwrap().preview.as_ref().unwrap();
    assert!(preview.text.contains('x'));

    let json = serde_json::to_string(&Payload::new(&graph, 1024, None)).unwrap();
    assert!(json.contains("\"label\":\"A\""));
}
