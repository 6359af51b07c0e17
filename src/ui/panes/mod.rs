//! TUI pane rendering modules
//!
//! - [`nodes`]: every node record as `structN  TypeName`
//! - [`fields`]: the selected node's fields with the target of any edge
//!   leaving them
//! - [`status`]: counts, diagnostics and keybindings
//! - `utils`: shared block, highlight and address formatting helpers

mod utils;

pub mod fields;
pub mod nodes;
pub mod status;

pub use fields::render_fields_pane;
pub use nodes::render_nodes_pane;
pub use status::render_status_bar;
