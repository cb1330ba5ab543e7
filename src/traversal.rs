//! Depth-first walks over a subtree of [`Node`]s.
//!
//! Everything here works on a borrowed `Option<&Node<T>>` root and keeps no state between calls,
//! so the walks can be used (and tested) without a [`Tree`][crate::Tree]. Each walk keeps its own
//! explicit stack instead of recursing: an unbalanced tree built from sorted input is a chain as
//! deep as it is long, and that must not exhaust the call stack.
//!
//! Every visit function calls `visit` exactly once per node in the subtree.

use std::iter::FusedIterator;

use crate::Node;

/// Visits nodes left subtree first, then the node, then the right subtree. For a BST this is
/// ascending order.
pub fn in_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            return;
        };
        visit(node);
        current = node.right();
    }
}

/// Visits nodes right subtree first, then the node, then the left subtree. For a BST this is
/// descending order.
pub fn in_order_reverse<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.right();
        }
        let Some(node) = stack.pop() else {
            return;
        };
        visit(node);
        current = node.left();
    }
}

/// Visits each node before either of its subtrees, left subtree before right.
pub fn pre_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(node);
        // Pushed right first so the left subtree is popped (and finished) first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

/// Visits both subtrees of a node, left then right, before the node itself.
pub fn post_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    // The flag marks nodes whose children have already been pushed.
    let mut stack: Vec<_> = root.map(|node| (node, false)).into_iter().collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            visit(node);
            continue;
        }
        stack.push((node, true));
        stack.extend(node.right().map(|right| (right, false)));
        stack.extend(node.left().map(|left| (left, false)));
    }
}

/// The number of edges on the longest path from `root` down to a leaf. Both an empty subtree and
/// a lone node have a height of 0.
pub fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut tallest = 0;
    let mut stack: Vec<_> = root.map(|node| (node, 0)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(node.left().map(|left| (left, depth + 1)));
        stack.extend(node.right().map(|right| (right, depth + 1)));
    }

    tallest
}

/// Lays the subtree out as a complete binary tree in a `Vec`. The root goes at index 0 and the
/// children of the node at index `i` go at `2i + 1` (left) and `2i + 2` (right). A subtree of
/// height `h` needs `2^(h + 1) - 1` slots; slots with no node behind them are `None`.
///
/// # Diagram
///
/// ```text
///       50
///      /  \          [Some(50), Some(20), Some(70), None, Some(30), None, None]
///    20    70
///      \
///       30
/// ```
///
/// ## Panics
///
/// When `2^(h + 1) - 1` does not fit in a `usize`, or when the allocator refuses that many slots.
/// A degenerate chain of a few dozen nodes already needs terabytes. The slots are reserved before
/// any is written, so a refused allocation is a panic rather than an out-of-memory abort; an
/// operating system that overcommits memory can still grant the reservation and abort later.
pub fn to_array<'a, T>(root: Option<&'a Node<T>>) -> Vec<Option<&'a T>> {
    let Some(root) = root else {
        return Vec::new();
    };

    let levels = height(Some(root)) + 1;
    let capacity = u32::try_from(levels)
        .ok()
        .and_then(|levels| 1usize.checked_shl(levels))
        .map(|slots| slots - 1)
        .expect("Array capacity for this height overflows usize");

    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        panic!(
            "Cannot allocate {} array slots for a subtree of height {}",
            capacity,
            levels - 1
        );
    }
    slots.resize(capacity, None);

    let mut stack = vec![(root, 0)];
    while let Some((node, index)) = stack.pop() {
        slots[index] = Some(node.value());
        stack.extend(node.left().map(|left| (left, 2 * index + 1)));
        stack.extend(node.right().map(|right| (right, 2 * index + 2)));
    }

    slots
}

/// A lazy, ascending iterator over the values of a subtree. Created by
/// [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// `len` must be the number of nodes under `root`.
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
