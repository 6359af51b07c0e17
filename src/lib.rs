//! # Introduction
//!
//! objgraph walks an in-memory object graph through the [`inspect::Inspect`]
//! trait and emits a [GraphViz](https://graphviz.org/) document with one
//! record-shaped node per distinct object and one edge per reference. It is a
//! debugging aid: the output is meant for eyes, not for deserialization.
//!
//! ## Pipeline
//!
//! ```text
//! Value → Inspect → Session (policy, tracker, buffers) → Visualization → DOT
//! ```
//!
//! 1. [`inspect`]: the introspection trait, std impls and registration macros.
//! 2. [`graph`]: the cycle-safe two-phase walker and its records.
//! 3. [`emit`]: DOT rendering and the atomic file sink.
//! 4. [`samples`]: trees, lists and a skip list used as walker inputs.
//! 5. [`ui`]: ratatui browser for a finished walk; not part of the stable
//!    library API.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use objgraph::{inspect_struct, visualize, Config};
//!
//! struct Link {
//!     name: String,
//!     next: RefCell<Option<Rc<Link>>>,
//! }
//! inspect_struct!(Link { name, next });
//!
//! let a = Rc::new(Link { name: "a".into(), next: RefCell::new(None) });
//! let b = Rc::new(Link { name: "b".into(), next: RefCell::new(Some(Rc::clone(&a))) });
//! *a.next.borrow_mut() = Some(Rc::clone(&b));
//!
//! let graph = visualize(&a, &Config::new().whitelist(["name"])).unwrap();
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.edges().len(), 2);
//! # a.next.borrow_mut().take();
//! ```

pub mod config;
pub mod constants;
pub mod emit;
pub mod errors;
pub mod graph;
pub mod inspect;
pub mod samples;
pub mod ui;

pub use config::Config;
pub use emit::DotEmitter;
pub use errors::{AccessError, Diagnostic, VisualizeError};
pub use graph::{visualize, Visualization};
pub use inspect::Inspect;
