//! Per-call walker state
//!
//! A [`Session`] owns everything a walk mutates: the visit policy, the
//! identity tracker, the node and edge buffers, diagnostics and the current
//! member path. [`Session::run`] consumes it, so a session can never be reused
//! or shared between calls.

use tracing::debug;

use super::policy::VisitPolicy;
use super::tracker::IdentityTracker;
use super::{EdgeRecord, NodeRecord, Visualization};
use crate::config::Config;
use crate::errors::{AccessError, Diagnostic, Limit, VisualizeError};
use crate::inspect::{Inspect, Probe};

pub struct Session {
    pub(super) policy: VisitPolicy,
    pub(super) tracker: IdentityTracker,
    pub(super) nodes: Vec<NodeRecord>,
    pub(super) edges: Vec<EdgeRecord>,
    pub(super) diagnostics: Vec<Diagnostic>,
    /// Member path from the root to the value being visited
    pub(super) path: Vec<String>,
    pub(super) expand_containers: bool,
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            policy: config.policy(),
            tracker: IdentityTracker::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            diagnostics: Vec::new(),
            path: Vec::new(),
            expand_containers: config.expands_containers(),
            max_depth: config.depth_limit(),
            max_nodes: config.node_limit(),
        }
    }

    /// Walk `root` to completion and hand back the collected records
    pub fn run(mut self, root: &dyn Inspect) -> Result<Visualization, VisualizeError> {
        match root.probe() {
            Err(e) => return Err(VisualizeError::RootAccess(e)),
            Ok(Probe::Null) => return Err(VisualizeError::InvalidInput),
            Ok(_) => {}
        }

        let root_type = root.type_name().into_owned();
        debug!(root = %root_type, "starting walk");
        self.visit(root, None, true)?;
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            diagnostics = self.diagnostics.len(),
            "walk complete"
        );

        Ok(Visualization {
            root_type,
            nodes: self.nodes,
            edges: self.edges,
            diagnostics: self.diagnostics,
        })
    }

    /// Dotted path of the value being visited, `root` for the root itself
    pub(super) fn path_string(&self) -> String {
        let mut path = String::from("root");
        for segment in &self.path {
            if !segment.starts_with('[') {
                path.push('.');
            }
            path.push_str(segment);
        }
        path
    }

    /// Called before a new node id is allocated
    pub(super) fn check_limits(&self) -> Result<(), VisualizeError> {
        if let Some(max) = self.max_nodes {
            if self.nodes.len() >= max {
                return Err(VisualizeError::LimitExceeded {
                    limit: Limit::Nodes(max),
                    path: self.path_string(),
                });
            }
        }
        if let Some(max) = self.max_depth {
            if self.path.len() > max {
                return Err(VisualizeError::LimitExceeded {
                    limit: Limit::Depth(max),
                    path: self.path_string(),
                });
            }
        }
        Ok(())
    }

    /// Record a recovered failure; `segment` names the member below the
    /// current path, if any
    pub(super) fn diagnose(&mut self, segment: Option<&str>, error: AccessError) {
        let mut path = self.path_string();
        if let Some(segment) = segment {
            if !segment.starts_with('[') {
                path.push('.');
            }
            path.push_str(segment);
        }
        tracing::warn!(%path, reason = %error, "skipping unreadable member");
        self.diagnostics.push(Diagnostic {
            path,
            reason: error.reason,
        });
    }
}
