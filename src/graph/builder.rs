//! The two-phase recursive visit
//!
//! For a value reached from field `src`:
//!
//! 1. already tracked → edge `src -> existing node`, done
//! 2. allocate a node id, register the identity, open the record, edge
//!    `src -> node`
//! 3. phase 1: classify every member or element and append its field; values
//!    that need their own node are queued with the port that refers to them
//! 4. seal the record
//! 5. phase 2: visit the queued values in declaration order
//!
//! Children are never visited while the parent's field list is still open, so
//! the first member to reach a shared object gets the real node and later ones
//! only get an edge. Every identity is expanded at most once, which makes any
//! graph with finitely many objects terminate regardless of cycles.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::policy::Visibility;
use super::session::Session;
use super::{Address, EdgeRecord, NodeId, NodeRecord, Port};
use crate::errors::{AccessError, VisualizeError};
use crate::inspect::{Element, Inspect, Member, Probe, Shape};

/// A value waiting for phase 2
struct Pending<'a> {
    port: Port,
    segment: String,
    value: &'a dyn Inspect,
    expand: bool,
}

impl Session {
    /// Visit a composite or container. `expand` only matters for containers.
    pub(super) fn visit(
        &mut self,
        value: &dyn Inspect,
        src: Option<Address>,
        expand: bool,
    ) -> Result<(), VisualizeError> {
        if let Some(src) = src {
            if let Some(existing) = self.tracker.resolve(value) {
                trace!(path = %self.path_string(), node = existing.node, "already visited");
                self.edges.push(EdgeRecord::new(src, existing));
                return Ok(());
            }
        }

        self.check_limits()?;
        let id = self.nodes.len();
        let address = Address::node(id);
        self.tracker.register(value, address);
        self.nodes.push(NodeRecord::new(id, value.type_name()));
        if let Some(src) = src {
            self.edges.push(EdgeRecord::new(src, address));
        }
        debug!(node = id, path = %self.path_string(), "allocated node");

        let mut outcome = Ok(());
        let mut described = false;
        let access = value.inspect(&mut |shape: Shape<'_>| {
            described = true;
            outcome = self.expand(id, shape, expand);
        });

        match access {
            Ok(()) if !described => {
                self.diagnose(None, AccessError::new("value produced no shape"));
            }
            Ok(()) => {}
            Err(e) => self.diagnose(None, e),
        }
        self.nodes[id].seal();
        outcome
    }

    fn expand(&mut self, id: NodeId, shape: Shape<'_>, expand: bool) -> Result<(), VisualizeError> {
        let mut pending = Vec::new();

        match shape {
            // Only reachable through a misbehaving impl; Null is handled by
            // the parent in phase 1
            Shape::Null => {
                self.nodes[id].push_null("");
            }
            Shape::Scalar(text) => self.nodes[id].set_header_value(text),
            Shape::Container(elements) if expand => {
                self.classify_elements(id, elements, &mut pending);
            }
            Shape::Container(elements) => {
                self.nodes[id].push_value("count", elements.len().to_string());
            }
            Shape::Composite(members) => self.classify_members(id, members, &mut pending),
        }

        self.nodes[id].seal();

        for item in pending {
            self.path.push(item.segment);
            let result = self.visit(item.value, Some(Address::port(id, item.port)), item.expand);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    fn classify_members<'a>(
        &mut self,
        id: NodeId,
        members: Vec<Member<'a>>,
        pending: &mut Vec<Pending<'a>>,
    ) {
        let mut seen = FxHashSet::default();

        for member in members {
            let name = member.name().to_string();
            if !seen.insert(name.clone()) {
                trace!(member = %name, "duplicate member name dropped");
                continue;
            }
            if member.is_behavior() {
                trace!(member = %name, "behavior member ignored");
                continue;
            }

            let visibility = self.policy.classify(&name);
            if visibility == Visibility::Skip {
                trace!(member = %name, "member hidden by policy");
                continue;
            }

            let value = match member.read() {
                Ok(value) => value,
                Err(e) => {
                    self.diagnose(Some(name.as_str()), e);
                    continue;
                }
            };
            let probe = match value.probe() {
                Ok(probe) => probe,
                Err(e) => {
                    self.diagnose(Some(name.as_str()), e);
                    continue;
                }
            };

            let expand = match probe {
                Probe::Container(_) => {
                    visibility == Visibility::NameAndValue || self.expand_containers
                }
                _ => false,
            };

            let record = &mut self.nodes[id];
            match probe {
                Probe::Null => {
                    record.push_null(name);
                }
                Probe::Scalar(text) if visibility == Visibility::NameAndValue => {
                    record.push_value(name, text);
                }
                Probe::Scalar(_) => {
                    record.push_name(name);
                }
                Probe::Composite | Probe::Container(_) => {
                    let port = record.push_name(name.clone());
                    pending.push(Pending {
                        port,
                        segment: name,
                        value,
                        expand,
                    });
                }
            }
        }
    }

    fn classify_elements<'a>(
        &mut self,
        id: NodeId,
        elements: Vec<Element<'a>>,
        pending: &mut Vec<Pending<'a>>,
    ) {
        for (index, element) in elements.into_iter().enumerate() {
            let key = element.key.map(key_label);
            let segment = key.clone().unwrap_or_else(|| format!("[{}]", index));

            let probe = match element.value.probe() {
                Ok(probe) => probe,
                Err(e) => {
                    self.diagnose(Some(segment.as_str()), e);
                    continue;
                }
            };

            let record = &mut self.nodes[id];
            match probe {
                Probe::Null => {
                    record.push_null(key.unwrap_or_default());
                }
                Probe::Scalar(text) => match key {
                    Some(key) => {
                        record.push_value(key, text);
                    }
                    None => {
                        record.push_name(text);
                    }
                },
                Probe::Composite | Probe::Container(_) => {
                    let port = record.push_name(segment.clone());
                    // Nested containers inherit the expansion of the one
                    // holding them
                    pending.push(Pending {
                        port,
                        segment,
                        value: element.value,
                        expand: true,
                    });
                }
            }
        }
    }
}

/// Label for a map key: its scalar text, or its type name for complex keys
fn key_label(key: &dyn Inspect) -> String {
    match key.probe() {
        Ok(Probe::Scalar(text)) => text,
        Ok(_) => key.type_name().into_owned(),
        Err(_) => String::from("?"),
    }
}
