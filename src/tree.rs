//! An unbalanced, mutable BST with exclusively owned links. Every node owns its two subtrees and
//! the [`Tree`] owns the root; parents are only ever tracked for the duration of a single call.
//!
//! # Examples
//!
//! ```
//! use binary_tree::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1)?;
//! assert!(tree.contains(&1));
//!
//! // Every value is stored at most once.
//! assert_eq!(tree.insert(1), Err(Error::DuplicateValue));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(Error::NodeNotFound));
//! assert!(tree.is_empty());
//! # Ok::<(), Error>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::Link;
use crate::traversal::{self, Iter};
use crate::{Error, Node, Result, Shape};

/// A Binary Search Tree without any rebalancing. Inserting sorted input produces a chain whose
/// height is one less than its length; that is accepted rather than corrected.
///
/// Values are unique: inserting a value equal to one already stored fails with
/// [`Error::DuplicateValue`] and leaves the tree untouched.
pub struct Tree<T> {
    root: Link<T>,
    /// Maintained on every insert and delete rather than recomputed.
    count: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Rebuilds the tree by inserting a pre-order walk of the values. A BST built from its own
/// pre-order sequence has exactly the same shape.
impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        self.visit_pre_order(|node| tree.attach(Node::new(node.value.clone())));
        tree
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every node from the tree.
    ///
    /// Nodes are detached from their parent before being dropped so that releasing a deep chain
    /// never recurses.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            log::debug!("clearing tree of {} nodes", self.count);
        }

        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.count = 0;
    }

    /// A lazy iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 3, 1] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.count)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Calls `visit` on every node in ascending order of value.
    pub fn visit_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::in_order(self.root(), visit)
    }

    /// Calls `visit` on every node in descending order of value.
    pub fn visit_in_order_reverse<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::in_order_reverse(self.root(), visit)
    }

    /// Calls `visit` on every node, each node before its subtrees.
    pub fn visit_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::pre_order(self.root(), visit)
    }

    /// Calls `visit` on every node, each node after its subtrees.
    pub fn visit_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::post_order(self.root(), visit)
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.count_shapes(|shape| shape == Shape::NoChildren)
    }

    /// The number of nodes with exactly one child.
    pub fn single_child_count(&self) -> usize {
        self.count_shapes(|shape| matches!(shape, Shape::LeftOnly | Shape::RightOnly))
    }

    /// The number of nodes with two children.
    pub fn full_node_count(&self) -> usize {
        self.count_shapes(|shape| shape == Shape::Both)
    }

    fn count_shapes(&self, mut counted: impl FnMut(Shape) -> bool) -> usize {
        let mut tally = 0;
        self.visit_pre_order(|node| {
            if counted(node.shape()) {
                tally += 1;
            }
        });
        tally
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree and a tree
    /// holding a single node both have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted input degenerates into a chain.
    /// for value in 1..=4 {
    ///     tree.insert(value).unwrap();
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        traversal::height(self.root())
    }

    /// The tree laid out as a complete binary tree: the root at index 0 and the children of index
    /// `i` at `2i + 1` and `2i + 2`. An empty tree gives an empty `Vec`; otherwise there are
    /// `2^(height + 1) - 1` slots and the ones with no node are `None`.
    ///
    /// See [`traversal::to_array`] for when this panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 3, 4] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// assert_eq!(
    ///     tree.to_array(),
    ///     [Some(&2), None, Some(&3), None, None, None, Some(&4)]
    /// );
    /// ```
    pub fn to_array(&self) -> Vec<Option<&T>> {
        traversal::to_array(self.root())
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Finds the node holding `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.get(&1).map(|node| *node.value()), Some(1));
    /// assert!(tree.get(&42).is_none());
    /// ```
    pub fn get(&self, value: &T) -> Option<&Node<T>> {
        self.get_with_parent(value).map(|(node, _)| node)
    }

    /// Finds the node holding `value` along with the node visited just before it. The parent is
    /// `None` when the match is the root.
    pub fn get_with_parent(&self, value: &T) -> Option<(&Node<T>, Option<&Node<T>>)> {
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some((node, parent)),
                Ordering::Greater => node.right(),
            };
            parent = Some(node);
        }

        None
    }

    /// Whether a node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// The values on the way from the root down to the node holding `value`, both ends included.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for value in [50, 20, 70, 30] {
    ///     tree.insert(value)?;
    /// }
    ///
    /// assert_eq!(tree.path_to(&30)?, [&50, &20, &30]);
    /// assert_eq!(tree.path_to(&40), Err(Error::NodeNotFound));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn path_to(&self, value: &T) -> Result<Vec<&T>> {
        let mut path = Vec::new();
        let mut current = self.root();
        while let Some(node) = current {
            path.push(&node.value);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(path),
                Ordering::Greater => node.right(),
            };
        }

        Err(Error::NodeNotFound)
    }

    /// Inserts `value` as a new leaf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateValue`] if the tree already holds an equal value. The tree is
    /// unchanged in that case.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.insert_node(Node::new(value))
    }

    /// Inserts a node built by the caller as a new leaf. Nodes held by callers never have
    /// children, so the node is always attached whole.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateValue`] if the tree already holds a value equal to the node's.
    /// The tree is unchanged in that case.
    pub fn insert_node(&mut self, node: Node<T>) -> Result<()> {
        if self.contains(&node.value) {
            return Err(Error::DuplicateValue);
        }

        self.attach(node);
        log::trace!("inserted node; tree now holds {} nodes", self.count);
        Ok(())
    }

    /// Walks down from the root, going left when `node` is smaller and right otherwise, and
    /// stores `node` in the first empty link. The caller must have ruled out duplicates; debug
    /// builds check that `node` is strictly ordered against every node it passes, the one it ends
    /// up attached under included.
    fn attach(&mut self, node: Node<T>) {
        debug_assert!(node.is_leaf(), "Only detached nodes can be attached");

        let mut slot = &mut self.root;
        while let Some(current) = slot {
            slot = if node.value < current.value {
                &mut current.left
            } else {
                debug_assert!(
                    node.value > current.value,
                    "Attached values must differ from every ancestor"
                );
                &mut current.right
            };
        }
        *slot = Some(Box::new(node));
        self.count += 1;
    }

    /// Deletes the node holding `value` and returns the value.
    ///
    /// The node's position is filled according to its shape: a leaf simply goes away, a node
    /// with one child is replaced by that child, and a node with two children is replaced by its
    /// in-order predecessor (the largest value in its left subtree).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if no node holds `value`. The tree is unchanged in that
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value)?;
    /// }
    ///
    /// // 2 has two children so its predecessor, 1, takes its place.
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(1));
    /// assert_eq!(tree.len(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T> {
        let slot = Self::find_slot(&mut self.root, value).ok_or(Error::NodeNotFound)?;
        let Some(mut target) = slot.take() else {
            unreachable!("`find_slot` only returns occupied links");
        };

        let shape = target.shape();
        *slot = match shape {
            Shape::NoChildren => None,
            Shape::LeftOnly => target.left.take(),
            Shape::RightOnly => target.right.take(),
            Shape::Both => Some(Self::splice_predecessor(&mut target)),
        };
        self.count -= 1;
        log::trace!(
            "deleted node with shape {:?}; tree now holds {} nodes",
            shape,
            self.count
        );

        debug_assert!(target.is_leaf());
        Ok(target.value)
    }

    /// Finds the link (the root, or a child link of the parent) that holds the node with
    /// `value`.
    fn find_slot<'a>(mut slot: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>> {
        loop {
            let ordering = value.cmp(&slot.as_deref()?.value);
            // `slot` is moved into the tuple so the `Equal` arm can hand it back.
            slot = match (ordering, slot) {
                (Ordering::Equal, slot) => return Some(slot),
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, None) => return None,
            };
        }
    }

    /// Takes both subtrees of `target` (which must have two children) and returns its in-order
    /// predecessor, re-linked to stand in `target`'s place.
    ///
    /// # Diagram
    ///
    /// When the predecessor is `target`'s left child it keeps its own left subtree:
    ///
    /// ```text
    ///      target            pred
    ///      /    \           /    \
    ///    pred    r   ->   pl      r
    ///    /
    ///  pl
    /// ```
    ///
    /// Otherwise it is the rightmost node below the left child. Its parent `p` adopts its left
    /// subtree and it adopts both of `target`'s subtrees:
    ///
    /// ```text
    ///      target             pred
    ///      /    \            /    \
    ///     l      r    ->    l      r
    ///      \                 \
    ///       p                 p
    ///        \                 \
    ///        pred              pl
    ///        /
    ///      pl
    /// ```
    fn splice_predecessor(target: &mut Node<T>) -> Box<Node<T>> {
        let (Some(mut left), right) = (target.left.take(), target.right.take()) else {
            unreachable!("Predecessor splice needs a left subtree");
        };

        let mut predecessor = match Self::take_max_descendant(&mut left) {
            Some(mut predecessor) => {
                predecessor.left = Some(left);
                predecessor
            }
            // `left` has no right child so it is the predecessor itself.
            None => left,
        };
        predecessor.right = right;
        predecessor
    }

    /// Detaches the largest node strictly below `parent` (the rightmost node of its right
    /// subtree), giving that node's left subtree to its parent. Returns `None` when `parent` has
    /// no right child.
    fn take_max_descendant(mut parent: &mut Node<T>) -> Option<Box<Node<T>>> {
        while parent.right.as_ref().is_some_and(|right| right.right.is_some()) {
            parent = parent.right.as_deref_mut()?;
        }

        let mut max = parent.right.take()?;
        parent.right = max.left.take();
        Some(max)
    }
}
