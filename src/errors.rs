//! Error types for the object graph walker
//!
//! Two layers of failure exist:
//!
//! - [`AccessError`]: a single member could not be read. The walker recovers by
//!   skipping the member and recording a [`Diagnostic`].
//! - [`VisualizeError`]: the whole call failed. Nothing is written when this is
//!   returned.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A member getter failed or the value could not be borrowed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AccessError {
    pub reason: String,
}

impl AccessError {
    pub fn new(reason: impl Into<String>) -> Self {
        AccessError {
            reason: reason.into(),
        }
    }
}

/// Which work ceiling was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Depth(usize),
    Nodes(usize),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Depth(max) => write!(f, "depth limit of {}", max),
            Limit::Nodes(max) => write!(f, "node limit of {}", max),
        }
    }
}

/// Errors that abort a visualization call
#[derive(Debug, Error)]
pub enum VisualizeError {
    /// The root value is absent (`None`, dangling `Weak`, ...)
    #[error("root value is absent")]
    InvalidInput,

    /// The root value exists but cannot be read
    #[error("root value could not be read: {0}")]
    RootAccess(#[source] AccessError),

    /// A caller-imposed work ceiling was exceeded
    #[error("exceeded {limit} at '{path}'")]
    LimitExceeded { limit: Limit, path: String },

    /// The output document could not be written
    #[error("failed to write graph document to {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A recovered member access failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Dotted member path from the root, e.g. `root.left.value`
    pub path: String,
    pub reason: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}
