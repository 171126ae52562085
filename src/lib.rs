//! This crate exposes a plain, unbalanced Binary Search Tree (BST) supporting insertion,
//! minimum lookup, removal, and in-order iteration.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and sometimes has child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a key strictly less
//!    than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a key greater than
//!    **or equal to** its own key. Duplicate keys are kept and always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Operations take `O(height)` time where `height` is the longest path from the root `Node` to a
//! leaf `Node`. This tree does no rebalancing so its height depends on insertion order: keys
//! inserted in sorted order produce a tree shaped like a linked list. Sorted iteration visits the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Removal
//!
//! Removing a key depends on how many children the matching `Node` has:
//!
//! * A leaf is simply unlinked from its parent.
//! * A `Node` with one child is replaced by that child.
//! * A `Node` with two children keeps its place in the tree and takes the key of its in-order
//!   successor (the smallest key in its right subtree). The successor never has a left child so
//!   it is unlinked using one of the two cases above.
//!
//! # Examples
//!
//! ```
//! use bintree::{Error, NodeKind, Tree};
//!
//! let mut tree: Tree<i32> = [100, 20, 50, 300, 150, 10].into_iter().collect();
//! assert_eq!(tree.root().map(|n| n.kind()), Some(NodeKind::Internal));
//!
//! assert_eq!(tree.remove(&20), Ok(20));
//! assert_eq!(tree.remove(&20), Err(Error::KeyNotFound));
//! assert!(tree.iter().copied().eq([10, 50, 100, 150, 300]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod tree;

pub use error::{Error, Result};
pub use iter::Iter;
pub use node::{minimum, Node, NodeKind};
pub use tree::Tree;
