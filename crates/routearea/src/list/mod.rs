//! Ordered container: a doubly linked sequence with in-place bubble sorts.
//!
//! Purpose
//! - Hold records in traversal order, append at the tail, and reorder them in
//!   place with stable bubble sorts (by natural order, by an explicit
//!   comparator, or by a `Driver` sort key).
//!
//! Layout
//! - Nodes live in a `Vec` arena and link to each other through `NodeId`
//!   indices (`next`/`prev`). The list owns every node; links are plain
//!   indices, never owning pointers.
//! - Links are written only by `append`. Every sort exchanges payloads between
//!   adjacent nodes instead of relinking, so the forward and backward chains
//!   always describe the same sequence and node ids stay put.
//!
//! Invariants
//! - `head`/`tail` are both `None` iff the list is empty.
//! - Walking `next` from `head` reaches `tail` in `size()` steps; walking
//!   `prev` from `tail` reaches `head` in `size()` steps, visiting the same
//!   payloads in reverse.
//!
//! Code cross-refs: `drivers` (Driver-specific search and sorts), `order::Direction`

mod drivers;
mod node;

pub use drivers::DriverList;
pub use node::{Node, NodeId};

use std::cmp::Ordering;
use std::fmt;

use crate::order::Direction;

/// Doubly linked sequence over an index arena.
#[derive(Clone, Debug)]
pub struct OrderedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Append at the tail; the first append sets both head and tail.
    pub fn append(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, self.tail));
        match self.tail {
            Some(tail) => self.nodes[tail.0].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Number of payloads, counted by walking the forward chain (O(n)).
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// First payload in traversal order.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id.0].payload)
    }

    /// Last payload in traversal order.
    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id.0].payload)
    }

    /// Forward traversal (head → tail).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Backward traversal (tail → head) along the `prev` chain.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            list: self,
            cursor: self.tail,
        }
    }

    /// First payload (in current order) satisfying `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| pred(value))
    }

    /// In-place bubble sort by `compare` in the given direction.
    ///
    /// Only strictly out-of-order neighbours are exchanged, so equal payloads
    /// keep their relative order. Passes repeat until one makes no swap.
    /// Returns the number of exchanges performed.
    pub fn sort_by<F>(&mut self, direction: Direction, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.bubble(|a, b| direction.wants_swap(compare(a, b)))
    }

    /// Check that every adjacent pair satisfies `compare` in `direction`.
    pub fn is_sorted_by<F>(&self, direction: Direction, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut it = self.iter();
        let Some(mut prev) = it.next() else {
            return true;
        };
        for cur in it {
            if !direction.is_ordered(compare(prev, cur)) {
                return false;
            }
            prev = cur;
        }
        true
    }

    fn bubble<F>(&mut self, mut out_of_order: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let Some(head) = self.head else {
            return 0;
        };
        let mut swaps = 0usize;
        // First node of the already-settled suffix.
        let mut settled: Option<NodeId> = None;
        loop {
            let mut swapped = false;
            let mut cur = head;
            while let Some(next) = self.nodes[cur.0].next {
                if Some(next) == settled {
                    break;
                }
                if out_of_order(&self.nodes[cur.0].payload, &self.nodes[next.0].payload) {
                    self.swap_payloads(cur, next);
                    swapped = true;
                    swaps += 1;
                }
                cur = next;
            }
            settled = Some(cur);
            if !swapped {
                return swaps;
            }
        }
    }

    fn swap_payloads(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (left, right) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut left[lo].payload, &mut right[0].payload);
    }
}

impl<T: Ord> OrderedList<T> {
    /// Bubble sort by the payload's natural order, smallest first.
    pub fn sort_ascending(&mut self) -> usize {
        self.sort_by(Direction::Asc, Ord::cmp)
    }

    /// Bubble sort by the payload's natural order, largest first.
    pub fn sort_descending(&mut self) -> usize {
        self.sort_by(Direction::Dsc, Ord::cmp)
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One payload per line, in traversal order.
impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = &list.nodes[self.cursor?.0];
        self.cursor = node.next;
        Some(&node.payload)
    }
}

pub struct IterRev<'a, T> {
    list: &'a OrderedList<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = &list.nodes[self.cursor?.0];
        self.cursor = node.prev;
        Some(&node.payload)
    }
}

#[cfg(test)]
mod tests;
