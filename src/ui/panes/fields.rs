//! Field list rendering for the selected node

use super::utils::{address_name, highlight_style, node_name, pane_block};
use crate::constants::NULL_MARKER;
use crate::graph::{Address, Field, NodeId, Visualization};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

fn field_line(field: &Field, target: Option<Address>) -> Line<'static> {
    let label_style = if field.is_null {
        Style::default().fg(DEFAULT_THEME.comment)
    } else if field.port == 0 {
        Style::default().fg(DEFAULT_THEME.type_name)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut spans = vec![
        Span::styled(
            format!("<{}> ", field.port),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(field.label.clone(), label_style),
    ];
    if let Some(value) = &field.value {
        spans.push(Span::raw(": "));
        spans.push(Span::styled(
            value.clone(),
            Style::default().fg(DEFAULT_THEME.number),
        ));
    }
    if field.is_null {
        spans.push(Span::styled(
            format!(" {}", NULL_MARKER),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    if let Some(target) = target {
        spans.push(Span::styled(
            format!("  -> {}", address_name(target)),
            Style::default().fg(DEFAULT_THEME.edge),
        ));
    }
    Line::from(spans)
}

/// Render the fields of `node`. Fields with an outgoing edge show its target.
pub fn render_fields_pane(
    frame: &mut Frame,
    area: Rect,
    visualization: &Visualization,
    node: NodeId,
    selected: usize,
    is_focused: bool,
) {
    let Some(record) = visualization.node(node) else {
        frame.render_widget(pane_block(" Fields ".to_string(), is_focused), area);
        return;
    };

    let items: Vec<ListItem> = record
        .fields()
        .iter()
        .map(|field| {
            ListItem::new(field_line(
                field,
                visualization.outgoing(node, field.port),
            ))
        })
        .collect();

    let title = format!(" {} ", node_name(node));
    let list = List::new(items)
        .block(pane_block(title, is_focused))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
