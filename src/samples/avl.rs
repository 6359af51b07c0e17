//! AVL tree: a binary search tree rebalanced by rotations after every insert

use std::cmp::Ordering;

use crate::inspect::Inspect;
use crate::inspect_struct;

type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug)]
pub struct AvlNode<T> {
    value: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

#[derive(Debug)]
pub struct AvlTree<T> {
    root: Link<T>,
    size: usize,
}

inspect_struct!(impl [T: Inspect] AvlNode<T> { value, height, left, right });
inspect_struct!(impl [T: Inspect] AvlTree<T> { root, size });

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        AvlTree {
            root: None,
            size: 0,
        }
    }

    /// Insert a value; returns false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(insert_node(self.root.take(), value, &mut inserted));
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

    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Check the AVL invariant and the cached heights of every node
    pub fn is_balanced(&self) -> bool {
        fn check<T>(link: &Link<T>) -> Option<i32> {
            match link {
                None => Some(0),
                Some(node) => {
                    let left = check(&node.left)?;
                    let right = check(&node.right)?;
                    let h = 1 + left.max(right);
                    ((left - right).abs() <= 1 && node.height == h).then_some(h)
                }
            }
        }
        check(&self.root).is_some()
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

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn update_height<T>(node: &mut AvlNode<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn balance_factor<T>(node: &AvlNode<T>) -> i32 {
    height(&node.left) - height(&node.right)
}

fn rotate_right<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rotate_left<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rebalance<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    update_height(&mut node);
    let balance = balance_factor(&node);

    if balance > 1 {
        if node.left.as_ref().is_some_and(|left| balance_factor(left) < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if node.right.as_ref().is_some_and(|right| balance_factor(right) > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn insert_node<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Box<AvlNode<T>> {
    let Some(mut node) = link else {
        *inserted = true;
        return Box::new(AvlNode {
            value,
            height: 1,
            left: None,
            right: None,
        });
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), value, inserted)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), value, inserted)),
        Ordering::Equal => return node,
    }
    rebalance(node)
}
