//! Terminal graph browser built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: browser state, keyboard event loop, pane focus, edge history
//! - **[`panes`]**: stateless render functions for the node list, the field
//!   list and the status bar
//! - **[`theme`]**: color palette used by all panes
//!
//! Construct an [`App`] from a finished [`Visualization`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Visualization`]: crate::graph::Visualization
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
