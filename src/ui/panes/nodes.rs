//! Node list rendering

use super::utils::{highlight_style, node_name, pane_block};
use crate::graph::Visualization;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Render the list of node records with `selected` highlighted
pub fn render_nodes_pane(
    frame: &mut Frame,
    area: Rect,
    visualization: &Visualization,
    selected: usize,
    is_focused: bool,
) {
    let items: Vec<ListItem> = visualization
        .nodes()
        .iter()
        .map(|node| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", node_name(node.id)),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    node.type_name().to_string(),
                    Style::default().fg(DEFAULT_THEME.type_name),
                ),
            ]))
        })
        .collect();

    let title = format!(" Nodes ({}) ", visualization.nodes().len());
    let list = List::new(items)
        .block(pane_block(title, is_focused))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
