//! The UI renders the section graph as a coloured tree beside the hovered node's preview.
//!
//! Node ids follow document order and every parent precedes its children, so the node list is
//! already a preorder walk and can be drawn with box-drawing prefixes straight from depths.

use crate::app_state::AppState;
use crate::palette::Rgb;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Renders the browser for the current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    if app.show_preview {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[0]);
        draw_tree(f, app, columns[0]);
        draw_preview(f, app, columns[1]);
    } else {
        draw_tree(f, app, rows[0]);
    }

    let help = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Navigate | ←/→: Parent/Child | PgUp/PgDn: Siblings | Enter: Jump | p: Preview | q: Quit"
            .to_string()
    });
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, rows[1]);
}

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(level: usize, is_last: bool, parent_states: &[bool]) -> String {
    if level == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    for i in 0..level.saturating_sub(1) {
        if parent_states.get(i).copied().unwrap_or(false) {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

/// Whether each node is the last among its siblings, indexed like `depths`.
fn last_at_level(depths: &[usize]) -> Vec<bool> {
    depths
        .iter()
        .enumerate()
        .map(|(i, &depth)| {
            !depths[i + 1..]
                .iter()
                .take_while(|&&d| d >= depth)
                .any(|&d| d == depth)
        })
        .collect()
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn draw_tree(f: &mut Frame, app: &AppState, area: Rect) {
    let depths: Vec<usize> = app.graph.nodes.iter().map(|node| node.depth).collect();
    let is_last = last_at_level(&depths);

    // Track which ancestor levels still have siblings coming
    let mut parent_has_siblings: Vec<bool> = Vec::new();

    let items: Vec<ListItem> = app
        .graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            parent_has_siblings.truncate(node.depth);
            while parent_has_siblings.len() < node.depth {
                parent_has_siblings.push(false);
            }
            let prefix = get_tree_prefix(node.depth, is_last[i], &parent_has_siblings);
            if let Some(slot) = node.depth.checked_sub(1) {
                parent_has_siblings[slot] = !is_last[i];
            }

            let label = if node.label.is_empty() {
                "(untitled)".to_string()
            } else {
                node.label.clone()
            };
            let line = Line::from(vec![
                Span::raw(prefix),
                Span::styled("■ ", Style::default().fg(to_color(node.color))),
                Span::raw(label),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!(
        "{} ({} sections)",
        app.document_name,
        app.graph.len().saturating_sub(1)
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.current_node_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(f: &mut Frame, app: &AppState, area: Rect) {
    let (title, body, border) = match app.current_node() {
        Some(node) => {
            let body = node
                .preview
                .as_ref()
                .map_or_else(|| node.label.clone(), |preview| preview.text.clone());
            (node.label.clone(), body, to_color(node.color))
        }
        None => (String::new(), String::new(), Color::Reset),
    };

    let preview = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title),
        );
    f.render_widget(preview, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
