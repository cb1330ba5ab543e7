//! The linked element of a [`Tree`][crate::Tree].

use std::fmt;

use crate::Error;

/// An owned, possibly empty, child subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which children a [`Node`] has. This is derived from the node's links every time it is asked
/// for, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No children at all - a leaf.
    NoChildren,
    /// Only a left child.
    LeftOnly,
    /// Only a right child.
    RightOnly,
    /// Both a left and a right child.
    Both,
}

/// A `Node` stores a value and exclusively owns its two (possibly empty) subtrees. There is no
/// parent link; a parent is only ever tracked transiently while walking down from the root.
///
/// A `Node` built by a caller never has children - the only way to get a `Node` with children is
/// to borrow one from a [`Tree`][crate::Tree].
///
/// # Examples
///
/// ```
/// use binary_tree::{Node, Shape};
///
/// let node = Node::new(7);
///
/// assert_eq!(node.value(), &7);
/// assert_eq!(node.shape(), Shape::NoChildren);
/// assert!(node.left().is_none() && node.right().is_none());
/// ```
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new, childless `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Classifies this node by which of its child links are occupied.
    pub fn shape(&self) -> Shape {
        match (&self.left, &self.right) {
            (None, None) => Shape::NoChildren,
            (Some(_), None) => Shape::LeftOnly,
            (None, Some(_)) => Shape::RightOnly,
            (Some(_), Some(_)) => Shape::Both,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.shape() == Shape::NoChildren
    }
}

/// Builds a node from a value that may be absent. An absent value is rejected with
/// [`Error::InvalidValue`].
///
/// # Examples
///
/// ```
/// use binary_tree::{Error, Node};
///
/// assert_eq!(Node::<i32>::try_from(Some(3)).map(|n| *n.value()), Ok(3));
/// assert_eq!(Node::<i32>::try_from(None).err(), Some(Error::InvalidValue));
/// ```
impl<T> TryFrom<Option<T>> for Node<T> {
    type Error = Error;

    fn try_from(value: Option<T>) -> Result<Self, Self::Error> {
        value.map(Self::new).ok_or(Error::InvalidValue)
    }
}

// Only the node itself is shown; printing whole subtrees recursively could overflow the stack on a
// degenerate tree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("shape", &self.shape())
            .finish()
    }
}
