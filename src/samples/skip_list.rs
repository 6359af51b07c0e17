//! Skip list with shared, reference-counted nodes
//!
//! Every node is reachable from several forward pointers at once (one per
//! level it participates in), which makes it a good shared-reference input
//! for the walker.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::inspect::Inspect;
use crate::inspect_struct;

type Link<T> = Option<Rc<RefCell<SkipNode<T>>>>;

#[derive(Debug)]
pub struct SkipNode<T> {
    /// `None` only for the head sentinel
    value: Option<T>,
    forward: Vec<Link<T>>,
}

#[derive(Debug)]
pub struct SkipList<T> {
    head: Rc<RefCell<SkipNode<T>>>,
    level: usize,
    size: usize,
    max_level: usize,
    rng: StdRng,
}

inspect_struct!(impl [T: Inspect] SkipNode<T> { value, forward });
inspect_struct!(impl [T: Inspect] SkipList<T> { head, level, size });

impl<T: Ord> SkipList<T> {
    /// `max_level` is clamped to at least 1; `seed` drives level selection
    pub fn new(max_level: usize, seed: u64) -> Self {
        let max_level = max_level.max(1);
        SkipList {
            head: Rc::new(RefCell::new(SkipNode {
                value: None,
                forward: vec![None; max_level],
            })),
            level: 1,
            size: 0,
            max_level,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Insert a value; returns false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        let mut update = vec![Rc::clone(&self.head); self.max_level];
        let mut current = Rc::clone(&self.head);

        for level in (0..self.level).rev() {
            loop {
                let next = current.borrow().forward[level].clone();
                match next {
                    Some(node) if node.borrow().value.as_ref().is_some_and(|v| *v < value) => {
                        current = node;
                    }
                    _ => break,
                }
            }
            update[level] = Rc::clone(&current);
        }

        let candidate = current.borrow().forward[0].clone();
        if let Some(node) = candidate {
            if node.borrow().value.as_ref() == Some(&value) {
                return false;
            }
        }

        let new_level = self.random_level();
        if new_level > self.level {
            for slot in update.iter_mut().take(new_level).skip(self.level) {
                *slot = Rc::clone(&self.head);
            }
            self.level = new_level;
        }

        let node = Rc::new(RefCell::new(SkipNode {
            value: Some(value),
            forward: vec![None; new_level],
        }));
        for (level, prev) in update.iter().enumerate().take(new_level) {
            let mut prev = prev.borrow_mut();
            node.borrow_mut().forward[level] = prev.forward[level].take();
            prev.forward[level] = Some(Rc::clone(&node));
        }

        self.size += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = Rc::clone(&self.head);
        for level in (0..self.level).rev() {
            loop {
                let next = current.borrow().forward[level].clone();
                match next {
                    Some(node) if node.borrow().value.as_ref().is_some_and(|v| v < value) => {
                        current = node;
                    }
                    _ => break,
                }
            }
        }
        let candidate = current.borrow().forward[0].clone();
        match candidate {
            Some(node) => {
                let node = node.borrow();
                node.value.as_ref() == Some(value)
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of levels currently in use
    pub fn levels(&self) -> usize {
        self.level
    }

    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen_bool(0.5) {
            level += 1;
        }
        level
    }
}

impl<T: Ord + Clone> SkipList<T> {
    /// Values on the bottom level, in order
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        let mut next = self.head.borrow().forward[0].clone();
        while let Some(node) = next {
            let node = node.borrow();
            if let Some(value) = &node.value {
                out.push(value.clone());
            }
            next = node.forward[0].clone();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut list = SkipList::new(4, 7);
        for v in [9, 2, 7, 4, 1, 8] {
            assert!(list.insert(v));
        }
        assert!(!list.insert(7));
        assert_eq!(list.len(), 6);
        assert_eq!(list.to_vec(), vec![1, 2, 4, 7, 8, 9]);
        assert!(list.contains(&4));
        assert!(!list.contains(&5));
        assert!(list.levels() >= 1 && list.levels() <= 4);
    }

    #[test]
    fn test_same_seed_same_shape() {
        let build = || {
            let mut list = SkipList::new(6, 42);
            for v in 0..32 {
                list.insert(v);
            }
            list.levels()
        };
        assert_eq!(build(), build());
    }
}
