use crate::constants::NODE_PREFIX;
use crate::graph::{Address, NodeId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

pub(super) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub(super) fn highlight_style() -> Style {
    Style::default()
        .bg(DEFAULT_THEME.selection_bg)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn node_name(node: NodeId) -> String {
    format!("{}{}", NODE_PREFIX, node)
}

pub(super) fn address_name(address: Address) -> String {
    match address.port {
        Some(port) => format!("{}:{}", node_name(address.node), port),
        None => node_name(address.node),
    }
}
