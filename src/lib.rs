//! This crate exposes a plain, unbalanced Binary Search Tree (BST) with
//! exclusively owned links, along with the walks and queries that make
//! sense over one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the number of
//! edges on the longest path from the root `Node` to a leaf `Node`. This
//! tree never rebalances, so inserting sorted values produces a chain with
//! a height of `N - 1`. Visiting the left subtree, then the subtree root,
//! then the right subtree yields the values in sorted order.
//!
//! # Examples
//!
//! ```
//! use binary_tree::{Error, Shape, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [50, 70, 20, 60, 10, 30, 15] {
//!     tree.insert(value)?;
//! }
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 15, 20, 30, 50, 60, 70]);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.get(&20).map(|node| node.shape()), Some(Shape::Both));
//!
//! // 20 has two children so its in-order predecessor, 15, takes its place.
//! tree.delete(&20)?;
//! let left = tree.root().and_then(|root| root.left()).map(|node| *node.value());
//! assert_eq!(left, Some(15));
//! # Ok::<(), Error>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod traversal;
mod tree;

pub use error::{Error, Result};
pub use node::{Node, Shape};
pub use traversal::Iter;
pub use tree::Tree;
