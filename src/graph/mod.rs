//! Graph records and the walker entry point
//!
//! This module holds the data the walker produces:
//! - [`NodeRecord`]: one per distinct object identity, a list of addressable
//!   [`Field`]s (ports)
//! - [`EdgeRecord`]: one per traversed reference, from a field port to a node
//! - [`Visualization`]: both buffers plus diagnostics, returned by [`visualize`]
//!
//! # Ports
//!
//! Port 0 of every node is its header (the short type name). Member and
//! element fields start at port 1:
//!
//! ```text
//! struct0 [shape=record, label="{ <0> Node | <1> value | <2> next }"];
//! struct0:2 -> struct1;
//! ```
//!
//! Node ids and ports are allocation-order artifacts, not stable identifiers.

pub mod builder;
pub mod policy;
pub mod session;
pub mod tracker;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::{DOCUMENT_EXTENSION, NULL_MARKER};
use crate::emit::{self, DotEmitter};
use crate::errors::{Diagnostic, VisualizeError};
use crate::inspect::Inspect;
use session::Session;

pub type NodeId = usize;
pub type Port = usize;

/// A node, or one field of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub node: NodeId,
    pub port: Option<Port>,
}

impl Address {
    /// The whole node
    pub fn node(node: NodeId) -> Self {
        Address { node, port: None }
    }

    /// One field of a node
    pub fn port(node: NodeId, port: Port) -> Self {
        Address {
            node,
            port: Some(port),
        }
    }
}

/// One field of a node record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub port: Port,
    pub label: String,
    pub value: Option<String>,
    pub is_null: bool,
}

impl Field {
    /// Display text: `label`, `label: value` or `label (∅)`
    pub fn text(&self) -> String {
        if self.is_null {
            if self.label.is_empty() {
                NULL_MARKER.to_string()
            } else {
                format!("{} {}", self.label, NULL_MARKER)
            }
        } else {
            match &self.value {
                Some(value) => format!("{}: {}", self.label, value),
                None => self.label.clone(),
            }
        }
    }
}

/// Fields of one visited object, sealed once its direct members are classified
#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub id: NodeId,
    fields: Vec<Field>,
    sealed: bool,
}

impl NodeRecord {
    pub fn new(id: NodeId, type_name: impl Into<String>) -> Self {
        NodeRecord {
            id,
            fields: vec![Field {
                port: 0,
                label: type_name.into(),
                value: None,
                is_null: false,
            }],
            sealed: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, port: Port) -> Option<&Field> {
        self.fields.get(port)
    }

    pub fn type_name(&self) -> &str {
        &self.fields[0].label
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Field with a name and no value
    pub fn push_name(&mut self, label: impl Into<String>) -> Port {
        self.push(label.into(), None, false)
    }

    /// Field rendered as `label: value`
    pub fn push_value(&mut self, label: impl Into<String>, value: impl Into<String>) -> Port {
        self.push(label.into(), Some(value.into()), false)
    }

    /// Field rendered as `label (∅)`
    pub fn push_null(&mut self, label: impl Into<String>) -> Port {
        self.push(label.into(), None, true)
    }

    /// Attach a value to the header; used for a bare scalar root
    pub fn set_header_value(&mut self, value: impl Into<String>) {
        debug_assert!(!self.sealed, "record already sealed");
        self.fields[0].value = Some(value.into());
    }

    fn push(&mut self, label: String, value: Option<String>, is_null: bool) -> Port {
        debug_assert!(!self.sealed, "record already sealed");
        let port = self.fields.len();
        self.fields.push(Field {
            port,
            label,
            value,
            is_null,
        });
        port
    }
}

/// `from` is always a field; `to` is a whole node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: Address,
    pub to: Address,
}

impl EdgeRecord {
    pub fn new(from: Address, to: Address) -> Self {
        EdgeRecord { from, to }
    }
}

/// Result of one walk
#[derive(Debug, Clone)]
pub struct Visualization {
    pub(crate) root_type: String,
    pub(crate) nodes: Vec<NodeRecord>,
    pub(crate) edges: Vec<EdgeRecord>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Visualization {
    /// Short type name of the root value
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Graph identifier derived from the root type
    pub fn graph_name(&self) -> String {
        emit::graph_name(&self.root_type)
    }

    /// Conventional file name: `<GraphName>.dot`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.graph_name(), DOCUMENT_EXTENSION)
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Recovered member access failures, in discovery order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Target of the edge leaving `node:port`
    pub fn outgoing(&self, node: NodeId, port: Port) -> Option<Address> {
        let from = Address::port(node, port);
        self.edges.iter().find(|e| e.from == from).map(|e| e.to)
    }

    /// Render with the default emitter (current local time in the header)
    pub fn to_document(&self) -> String {
        DotEmitter::default().emit(self)
    }

    /// Render and write atomically; nothing is left behind on failure
    pub fn write_to(&self, path: &Path) -> Result<(), VisualizeError> {
        emit::sink::write_document(path, &self.to_document())
    }

    /// Write `<GraphName>.dot` into `dir` and return the full path
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf, VisualizeError> {
        let path = dir.join(self.file_name());
        self.write_to(&path)?;
        Ok(path)
    }
}

/// Walk `root` and collect its node and edge records.
///
/// A fresh [`Session`] is created for the call and consumed by it.
pub fn visualize(root: &dyn Inspect, config: &Config) -> Result<Visualization, VisualizeError> {
    Session::new(config).run(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text() {
        let mut record = NodeRecord::new(0, "Node");
        record.push_name("left");
        record.push_value("value", "7");
        record.push_null("right");
        record.push_null("");

        let texts: Vec<String> = record.fields().iter().map(Field::text).collect();
        assert_eq!(texts, vec!["Node", "left", "value: 7", "right (∅)", "(∅)"]);
    }

    #[test]
    fn test_ports_are_sequential() {
        let mut record = NodeRecord::new(3, "Vec<i32>");
        assert_eq!(record.push_name("1"), 1);
        assert_eq!(record.push_name("2"), 2);
        assert_eq!(record.field(2).map(|f| f.port), Some(2));
        assert_eq!(record.type_name(), "Vec<i32>");
    }
}
