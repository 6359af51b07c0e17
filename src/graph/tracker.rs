// Identity → address map that closes cycles and shared references

use rustc_hash::FxHashMap;

use super::Address;
use crate::inspect::{Identity, Inspect};

/// Only composites and containers are registered; scalars are inlined into
/// their owner's record and never looked up.
#[derive(Debug, Default)]
pub struct IdentityTracker {
    seen: FxHashMap<Identity, Address>,
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the node already assigned to this object, if any
    pub fn resolve(&self, value: &dyn Inspect) -> Option<Address> {
        self.seen.get(&value.identity()).copied()
    }

    /// Must be called right after the node id is allocated and before the
    /// value's members are visited
    pub fn register(&mut self, value: &dyn Inspect, address: Address) {
        let previous = self.seen.insert(value.identity(), address);
        debug_assert!(previous.is_none(), "identity registered twice");
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
