//! Unbalanced binary search tree with boxed children

use std::cmp::Ordering;

use crate::inspect::Inspect;
use crate::inspect_struct;

type Link<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug)]
pub struct TreeNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    size: usize,
}

inspect_struct!(impl [T: Inspect] TreeNode<T> { value, left, right });
inspect_struct!(impl [T: Inspect] BinarySearchTree<T> { root, size });

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            size: 0,
        }
    }

    /// Insert a value; returns false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = insert_at(&mut self.root, value);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        fn height<T>(link: &Link<T>) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
        }
        height(&self.root)
    }

    /// Values in ascending order
    pub fn in_order(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(&node.value);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.size);
        walk(&self.root, &mut out);
        out
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_at<T: Ord>(slot: &mut Link<T>, value: T) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(TreeNode {
                value,
                left: None,
                right: None,
            }));
            true
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_at(&mut node.left, value),
            Ordering::Greater => insert_at(&mut node.right, value),
            Ordering::Equal => false,
        },
    }
}
