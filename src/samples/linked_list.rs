//! Singly linked list (boxed, owned chain) and doubly linked list
//! (`Rc` forward links, `Weak` back links, shared tail)

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::inspect::Inspect;
use crate::inspect_struct;

#[derive(Debug)]
pub struct ListNode<T> {
    value: T,
    next: Option<Box<ListNode<T>>>,
}

#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    size: usize,
}

inspect_struct!(impl [T: Inspect] ListNode<T> { value, next });
inspect_struct!(impl [T: Inspect] SinglyLinkedList<T> { head, size });

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.size += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(ListNode { value, next: None }));
        self.size += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.size -= 1;
            node.value
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Long chains would otherwise drop recursively
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

type DLink<T> = Option<Rc<RefCell<DNode<T>>>>;

#[derive(Debug)]
pub struct DNode<T> {
    value: T,
    prev: Option<Weak<RefCell<DNode<T>>>>,
    next: DLink<T>,
}

#[derive(Debug)]
pub struct DoublyLinkedList<T> {
    head: DLink<T>,
    tail: DLink<T>,
    size: usize,
}

inspect_struct!(impl [T: Inspect] DNode<T> { value, prev, next });
inspect_struct!(impl [T: Inspect] DoublyLinkedList<T> { head, tail, size });

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        DoublyLinkedList {
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn push_back(&mut self, value: T) {
        let node = Rc::new(RefCell::new(DNode {
            value,
            prev: None,
            next: None,
        }));
        match self.tail.take() {
            Some(old) => {
                node.borrow_mut().prev = Some(Rc::downgrade(&old));
                old.borrow_mut().next = Some(Rc::clone(&node));
            }
            None => self.head = Some(Rc::clone(&node)),
        }
        self.tail = Some(node);
        self.size += 1;
    }

    pub fn push_front(&mut self, value: T) {
        let node = Rc::new(RefCell::new(DNode {
            value,
            prev: None,
            next: None,
        }));
        match self.head.take() {
            Some(old) => {
                old.borrow_mut().prev = Some(Rc::downgrade(&node));
                node.borrow_mut().next = Some(old);
            }
            None => self.tail = Some(Rc::clone(&node)),
        }
        self.head = Some(node);
        self.size += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let old = self.head.take()?;
        let next = old.borrow_mut().next.take();
        match next {
            Some(next) => {
                next.borrow_mut().prev = None;
                self.head = Some(next);
            }
            None => self.tail = None,
        }
        self.size -= 1;
        Rc::try_unwrap(old).ok().map(|cell| cell.into_inner().value)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Values from head to tail, following `next`
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        let mut current = self.head.clone();
        while let Some(node) = current {
            let node = node.borrow();
            out.push(node.value.clone());
            current = node.next.clone();
        }
        out
    }

    /// Values from tail to head, following `prev`
    pub fn to_vec_rev(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size);
        let mut current = self.tail.clone();
        while let Some(node) = current {
            let node = node.borrow();
            out.push(node.value.clone());
            current = node.prev.as_ref().and_then(Weak::upgrade);
        }
        out
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.tail.take();
        let mut next = self.head.take();
        while let Some(node) = next {
            next = node.borrow_mut().next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singly_push_and_pop() {
        let mut list = SinglyLinkedList::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_doubly_links_both_ways() {
        let mut list = DoublyLinkedList::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.to_vec_rev(), vec![3, 2, 1]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.to_vec_rev(), vec![3, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_long_chain_drops() {
        let mut list = SinglyLinkedList::new();
        for v in 0..100_000 {
            list.push_front(v);
        }
        drop(list);
    }
}
