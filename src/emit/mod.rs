//! # Dot
//!
//! Renders a [`Visualization`] as a [GraphViz](https://graphviz.org/) document
//! made of record-shaped nodes. Each node field is a port, and edges leave
//! from the port of the member that holds the reference:
//!
//! ```text
//! // created 2024-01-01 12:00:00 by objgraph 0.1.0
//! digraph Node {
//!   rankdir=TB;
//!   node [fontname="Helvetica", fontsize=10];
//!   struct0 [shape=record, label="{ <0> Node | <1> value | <2> next }"];
//!   struct1 [shape=record, label="{ <0> Node | <1> value | <2> next (∅) }"];
//!   struct0:2 -> struct1;
//! }
//! ```
//!
//! Output is deterministic for a fixed timestamp and a fixed walk order.

pub mod sink;

use chrono::{Local, NaiveDateTime};

use crate::constants::{NODE_PREFIX, TOOL_NAME};
use crate::graph::{Address, EdgeRecord, NodeRecord, Visualization};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotEmitter {
    tool_name: String,
    rankdir: String,
    /// Header timestamp; the current local time when unset
    timestamp: Option<NaiveDateTime>,
}

impl Default for DotEmitter {
    fn default() -> Self {
        DotEmitter {
            tool_name: TOOL_NAME.to_string(),
            rankdir: "TB".to_string(),
            timestamp: None,
        }
    }
}

impl DotEmitter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool_name<S: Into<String>>(mut self, name: S) -> Self {
        self.tool_name = name.into();
        self
    }

    /// Layout direction (`TB`, `LR`, ...)
    pub fn rankdir<S: Into<String>>(mut self, rankdir: S) -> Self {
        self.rankdir = rankdir.into();
        self
    }

    /// Fix the header timestamp, for reproducible output
    pub fn timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn emit(&self, visualization: &Visualization) -> String {
        self.emit_records(
            visualization.nodes(),
            visualization.edges(),
            visualization.root_type(),
        )
    }

    /// Header, graph declaration, style, all nodes, all edges, closing brace
    pub fn emit_records(
        &self,
        nodes: &[NodeRecord],
        edges: &[EdgeRecord],
        root_type: &str,
    ) -> String {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local())
            .format("%Y-%m-%d %H:%M:%S");

        let mut lines = Vec::with_capacity(nodes.len() + edges.len() + 5);
        lines.push(format!("// created {} by {}", timestamp, self.tool_name));
        lines.push(format!("digraph {} {{", graph_name(root_type)));
        lines.push(format!("  rankdir={};", self.rankdir));
        lines.push("  node [fontname=\"Helvetica\", fontsize=10];".to_string());
        lines.extend(nodes.iter().map(render_node));
        lines.extend(edges.iter().map(render_edge));
        lines.push("}".to_string());

        let mut document = lines.join("\n");
        document.push('\n');
        document
    }
}

fn render_node(node: &NodeRecord) -> String {
    let fields = node
        .fields()
        .iter()
        .map(|field| format!("<{}> {}", field.port, escape_label(&field.text())))
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "  {}{} [shape=record, label=\"{{ {} }}\"];",
        NODE_PREFIX, node.id, fields
    )
}

fn render_edge(edge: &EdgeRecord) -> String {
    format!("  {} -> {};", endpoint(edge.from), endpoint(edge.to))
}

fn endpoint(address: Address) -> String {
    match address.port {
        Some(port) => format!("{}{}:{}", NODE_PREFIX, address.node, port),
        None => format!("{}{}", NODE_PREFIX, address.node),
    }
}

/// Escape characters reserved inside a record label
pub fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' | '}' | '|' | '<' | '>' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turn a type name into a graph identifier: runs of characters outside
/// `[A-Za-z0-9_]` become a single `_`, `Vec<Node<i32>>` becomes `Vec_Node_i32`
pub fn graph_name(type_name: &str) -> String {
    let mut name = String::with_capacity(type_name.len());
    for c in type_name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
        } else if !name.ends_with('_') {
            name.push('_');
        }
    }

    let name = name.trim_matches('_');
    if name.is_empty() {
        "graph".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
