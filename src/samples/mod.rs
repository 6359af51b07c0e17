//! Sample data structures used as walker inputs
//!
//! - [`bst`]: unbalanced binary search tree (owned boxes, a pure tree)
//! - [`avl`]: self-balancing AVL tree
//! - [`skip_list`]: skip list with `Rc<RefCell<_>>` nodes shared across levels
//! - [`linked_list`]: singly linked list and doubly linked list with `Weak`
//!   back links
//! - [`Ring`]: a cycle of `Rc` nodes
//!
//! [`SampleKind::build`] creates any of them filled with `1..=size`.

pub mod avl;
pub mod bst;
pub mod linked_list;
pub mod skip_list;

use std::cell::RefCell;
use std::rc::Rc;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::inspect::Inspect;
use crate::inspect_struct;
use avl::AvlTree;
use bst::BinarySearchTree;
use linked_list::{DoublyLinkedList, SinglyLinkedList};
use skip_list::SkipList;

/// Skip list height used by the samples
pub const SKIP_LIST_MAX_LEVEL: usize = 4;

#[derive(Debug)]
pub struct RingNode {
    label: String,
    next: RefCell<Option<Rc<RingNode>>>,
}

/// Nodes linked in a circle. Dropping the ring breaks the cycle.
#[derive(Debug)]
pub struct Ring {
    entry: Option<Rc<RingNode>>,
    size: usize,
}

inspect_struct!(RingNode { label, next });
inspect_struct!(Ring { entry, size });

impl Ring {
    /// Nodes `n0 -> n1 -> ... -> n{size-1} -> n0`
    pub fn new(size: usize) -> Self {
        let nodes: Vec<Rc<RingNode>> = (0..size)
            .map(|i| {
                Rc::new(RingNode {
                    label: format!("n{}", i),
                    next: RefCell::new(None),
                })
            })
            .collect();
        for (i, node) in nodes.iter().enumerate() {
            *node.next.borrow_mut() = Some(Rc::clone(&nodes[(i + 1) % size]));
        }
        Ring {
            entry: nodes.first().cloned(),
            size,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Labels in ring order starting from the entry node
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.size);
        let mut current = self.entry.clone();
        while let Some(node) = current {
            if labels.len() == self.size {
                break;
            }
            labels.push(node.label.clone());
            current = node.next.borrow().clone();
        }
        labels
    }
}

impl Drop for Ring {
    fn drop(&mut self) {
        if let Some(entry) = &self.entry {
            entry.next.borrow_mut().take();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Bst,
    Avl,
    SkipList,
    LinkedList,
    DoublyLinkedList,
    Ring,
}

impl SampleKind {
    /// Build the sample holding `1..=size`. Trees and the skip list insert in
    /// an order shuffled by `seed`.
    pub fn build(self, size: usize, seed: u64) -> Box<dyn Inspect> {
        let mut values: Vec<i32> = (1..=size as i32).collect();
        let mut rng = StdRng::seed_from_u64(seed);

        match self {
            SampleKind::Bst => {
                values.shuffle(&mut rng);
                let mut tree = BinarySearchTree::new();
                for v in values {
                    tree.insert(v);
                }
                Box::new(tree)
            }
            SampleKind::Avl => {
                values.shuffle(&mut rng);
                let mut tree = AvlTree::new();
                for v in values {
                    tree.insert(v);
                }
                Box::new(tree)
            }
            SampleKind::SkipList => {
                values.shuffle(&mut rng);
                let mut list = SkipList::new(SKIP_LIST_MAX_LEVEL, seed);
                for v in values {
                    list.insert(v);
                }
                Box::new(list)
            }
            SampleKind::LinkedList => {
                let mut list = SinglyLinkedList::new();
                for v in values {
                    list.push_back(v);
                }
                Box::new(list)
            }
            SampleKind::DoublyLinkedList => {
                let mut list = DoublyLinkedList::new();
                for v in values {
                    list.push_back(v);
                }
                Box::new(list)
            }
            SampleKind::Ring => Box::new(Ring::new(size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Probe;

    #[test]
    fn test_ring_links_back_to_entry() {
        let ring = Ring::new(3);
        assert_eq!(ring.labels(), vec!["n0", "n1", "n2"]);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn test_empty_ring() {
        let ring = Ring::new(0);
        assert!(ring.is_empty());
        assert!(ring.labels().is_empty());
    }

    #[test]
    fn test_every_sample_is_composite() {
        for kind in SampleKind::value_variants() {
            let sample = kind.build(5, 1);
            assert_eq!(sample.probe(), Ok(Probe::Composite), "{:?}", kind);
        }
    }
}
