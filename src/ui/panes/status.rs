//! Status bar rendering with graph counts and keybindings

use crate::graph::Visualization;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    visualization: &Visualization,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let diagnostics = visualization.diagnostics().len();
    let diagnostics_style = if diagnostics == 0 {
        Style::default().fg(DEFAULT_THEME.success)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    };

    let left = Line::from(vec![
        Span::styled(
            format!(
                " {} | {} nodes, {} edges | ",
                visualization.root_type(),
                visualization.nodes().len(),
                visualization.edges().len()
            ),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(format!("{} diagnostics", diagnostics), diagnostics_style),
        Span::styled(
            format!(" | {}", message),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), layout[0]);

    let right = Line::from(Span::styled(
        "Tab pane | ↑↓ move | Enter follow | Bksp back | q quit ",
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        layout[1],
    );
}
