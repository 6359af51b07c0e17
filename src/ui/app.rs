//! Main TUI application state and logic

use crate::graph::{NodeId, Visualization};
use crate::ui::panes;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Nodes,
    Fields,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Nodes => FocusedPane::Fields,
            FocusedPane::Fields => FocusedPane::Nodes,
        }
    }
}

/// The main application state
pub struct App {
    /// The graph being browsed
    pub visualization: Visualization,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Node shown in the fields pane
    pub selected_node: NodeId,

    /// Port highlighted in the fields pane
    pub selected_field: usize,

    /// `(node, field)` positions to return to with Backspace
    pub history: Vec<(NodeId, usize)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(visualization: Visualization) -> Self {
        App {
            visualization,
            focused_pane: FocusedPane::Nodes,
            selected_node: 0,
            selected_field: 0,
            history: Vec::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Two panes side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(main_chunks[0]);

        panes::render_nodes_pane(
            frame,
            columns[0],
            &self.visualization,
            self.selected_node,
            self.focused_pane == FocusedPane::Nodes,
        );

        panes::render_fields_pane(
            frame,
            columns[1],
            &self.visualization,
            self.selected_node,
            self.selected_field,
            self.focused_pane == FocusedPane::Fields,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.visualization,
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.follow_edge(),
            KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    fn field_count(&self) -> usize {
        self.visualization
            .node(self.selected_node)
            .map_or(0, |node| node.fields().len())
    }

    fn move_selection(&mut self, delta: isize) {
        match self.focused_pane {
            FocusedPane::Nodes => {
                let count = self.visualization.nodes().len();
                if let Some(next) = step(self.selected_node, delta, count) {
                    self.selected_node = next;
                    self.selected_field = 0;
                }
            }
            FocusedPane::Fields => {
                if let Some(next) = step(self.selected_field, delta, self.field_count()) {
                    self.selected_field = next;
                }
            }
        }
    }

    /// Jump to the node the selected field points at
    pub fn follow_edge(&mut self) {
        match self
            .visualization
            .outgoing(self.selected_node, self.selected_field)
        {
            Some(target) => {
                self.history.push((self.selected_node, self.selected_field));
                self.selected_node = target.node;
                self.selected_field = target.port.unwrap_or(0);
                self.focused_pane = FocusedPane::Fields;
                self.status_message = format!("Followed edge to struct{}", target.node);
            }
            None => {
                self.status_message = "No edge from this field".to_string();
            }
        }
    }

    pub fn go_back(&mut self) {
        match self.history.pop() {
            Some((node, field)) => {
                self.selected_node = node;
                self.selected_field = field;
                self.status_message = format!("Back to struct{}", node);
            }
            None => {
                self.status_message = "Already at the start".to_string();
            }
        }
    }
}

fn step(current: usize, delta: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = current.checked_add_signed(delta)?;
    (next < count).then_some(next)
}
