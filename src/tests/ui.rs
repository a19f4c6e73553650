use super::{draw, get_tree_prefix, last_at_level};
use crate::app_state::AppState;
use crate::excerpt::Preview;
use crate::graph::GraphBuilder;
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_tree_prefix() {
    assert_eq!(get_tree_prefix(0, true, &[]), "");
    assert_eq!(get_tree_prefix(1, false, &[]), "├── ");
    assert_eq!(get_tree_prefix(2, true, &[true]), "│   └── ");
    assert_eq!(get_tree_prefix(3, false, &[false, true]), "    │   ├── ");
}

#[test]
fn test_last_at_level() {
    // Root, A, A1, A2, B
    let depths = [0, 1, 2, 2, 1];
    assert_eq!(last_at_level(&depths), vec![true, false, false, true, true]);
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_draw_shows_tree_and_preview() {
    let mut builder = GraphBuilder::new("Root");
    let preview = Preview {
        html: String::new(),
        text: "Section body".to_string(),
        truncated: false,
    };
    builder.push(1, "Alpha", Some(preview));
    builder.push(1, "Beta", None);
    let mut app = AppState::new(builder.finish(), "doc.html".to_string());
    app.select(Some(1));

    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal.draw(|f| draw(f, &app)).unwrap();
    let text = screen_text(&terminal);

    assert!(text.contains("doc.html (2 sections)"));
    assert!(text.contains("Alpha"));
    assert!(text.contains("Beta"));
    assert!(text.contains("Section body"));
}
