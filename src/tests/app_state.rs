use super::AppState;
use crate::graph::GraphBuilder;

/// Root, then A { A1 { A1a }, A2 }, B.
fn app() -> AppState {
    let mut builder = GraphBuilder::new("Root");
    builder.push(1, "A", None);
    builder.push(2, "A1", None);
    builder.push(3, "A1a", None);
    builder.push(2, "A2", None);
    builder.push(1, "B", None);
    AppState::new(builder.finish(), "test.html".to_string())
}

fn label(app: &AppState) -> &str {
    &app.current_node().unwrap().label
}

#[test]
fn test_sequential_navigation() {
    let mut app = app();
    assert_eq!(label(&app), "Root");
    assert_eq!(app.find_prev_node(), None);

    app.select(app.find_next_node());
    assert_eq!(label(&app), "A");

    app.select(app.navigate_to_last());
    assert_eq!(label(&app), "B");
    assert_eq!(app.find_next_node(), None);

    app.select(app.navigate_to_first());
    assert_eq!(label(&app), "Root");
}

#[test]
fn test_hierarchy_navigation() {
    let mut app = app();
    app.select(app.navigate_to_first_child());
    assert_eq!(label(&app), "A");
    app.select(app.navigate_to_first_child());
    assert_eq!(label(&app), "A1");
    app.select(app.navigate_to_next_sibling());
    assert_eq!(label(&app), "A2");
    assert_eq!(app.navigate_to_next_sibling(), None);
    assert_eq!(app.navigate_to_first_child(), None);
    app.select(app.navigate_to_prev_sibling());
    assert_eq!(label(&app), "A1");
    assert_eq!(app.navigate_to_prev_sibling(), None);
    app.select(app.navigate_to_parent());
    assert_eq!(label(&app), "A");
    app.select(app.navigate_to_next_sibling());
    assert_eq!(label(&app), "B");
    app.select(app.navigate_to_parent());
    assert_eq!(label(&app), "Root");
    assert_eq!(app.navigate_to_parent(), None);
    assert_eq!(app.navigate_to_next_sibling(), None);
}

#[test]
fn test_select_ignores_out_of_range() {
    let mut app = app();
    app.select(Some(99));
    assert_eq!(app.current_node_index, 0);
    app.select(None);
    assert_eq!(app.current_node_index, 0);
}

#[test]
fn test_click_records_navigation_each_time() {
    let mut app = app();
    app.select(Some(2));
    assert_eq!(app.click_current().as_deref(), Some("A1"));
    assert_eq!(app.click_current().as_deref(), Some("A1"));
    assert_eq!(app.location.navigations().len(), 2);
    assert_eq!(app.last_navigation(), Some("#A1"));
    assert!(app.message.as_deref().unwrap().contains("#A1"));

    // Moving the cursor clears the status message.
    app.select(Some(0));
    assert!(app.message.is_none());
}

#[test]
fn test_toggle_preview() {
    let mut app = app();
    assert!(app.show_preview);
    app.toggle_preview();
    assert!(!app.show_preview);
}
