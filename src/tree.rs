//! A mutable, unbalanced BST. Nodes are uniquely owned by their parent's child slot (or by the
//! `Tree` for the root) and no node stores a pointer to its parent. Operations that need the
//! parent instead carry the parent's slot down with them as they descend.
//!
//! # Examples
//!
//! ```
//! use bintree::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.minimum().is_none());
//!
//! for key in [100, 20, 50, 300, 150, 10] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.in_order(), [&10, &20, &50, &100, &150, &300]);
//! assert_eq!(tree.minimum().map(|n| *n.key()), Some(10));
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&100), Ok(100));
//! assert_eq!(tree.root().map(|n| *n.key()), Some(150));
//!
//! // Removing a missing key leaves the tree alone.
//! assert_eq!(tree.remove(&9999), Err(Error::KeyNotFound));
//! assert_eq!(tree.len(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};
use crate::iter::Iter;
use crate::node::{Link, Node, NodeKind};

/// An unbalanced Binary Search Tree of keys.
///
/// Keys smaller than a node go to its left subtree. Everything else, including keys equal to the
/// node's, goes to its right subtree. The shape of the tree therefore depends entirely on the
/// order keys were inserted in.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    /// Rebuilds the tree by inserting keys parent-first, which reproduces the exact same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.key.clone());
            stack.extend(node.right());
            stack.extend(node.left());
        }
        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns the node holding the smallest key, or `None` for an empty tree.
    /// See [`minimum`][crate::minimum] to query an arbitrary subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.minimum().is_none());
    ///
    /// tree.extend([100, 20, 50, 300, 150, 10]);
    /// assert_eq!(tree.minimum().map(|n| *n.key()), tree.iter().next().copied());
    /// ```
    pub fn minimum(&self) -> Option<&Node<K>> {
        crate::minimum(self.root())
    }

    /// Returns a lazy iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Collects the keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        // Released with an explicit stack so degenerate trees don't recurse once per level.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `key` as a new leaf and returns that leaf. Keys equal to a node's key are placed
    /// in its right subtree, so inserting a duplicate always adds a new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let root = tree.insert(100);
    /// assert!(root.is_leaf());
    ///
    /// tree.insert(100);
    /// assert_eq!(tree.root().and_then(|n| n.right()).map(|n| *n.key()), Some(100));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> &Node<K> {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        log::debug!("inserting leaf at depth {}", depth);
        self.len += 1;
        slot.insert(Box::new(Node::new(key)))
    }

    /// Whether any node holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Removes the first node found holding `key` and returns the removed key. If no node holds
    /// `key` the tree is left untouched and [`Error::KeyNotFound`] is returned.
    ///
    /// When the matched node has two children, it stays in place and takes the key of its
    /// in-order successor, which is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Error, Tree};
    ///
    /// let mut tree: Tree<i32> = [100, 20, 300].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&20), Ok(20));
    /// assert_eq!(tree.remove(&20), Err(Error::KeyNotFound));
    /// assert_eq!(tree.in_order(), [&100, &300]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<K> {
        match Self::remove_from(&mut self.root, key) {
            Some(removed) => {
                self.len -= 1;
                Ok(removed)
            }
            None => {
                log::trace!("remove: key not found in {} nodes", self.len);
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Searches the subtree in `slot` for `key`. The slot belongs to the parent of the node being
    /// examined so a match can be unlinked from it directly.
    fn remove_from(slot: &mut Link<K>, key: &K) -> Option<K> {
        let node = slot.as_mut()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::remove_from(&mut node.left, key),
            Ordering::Equal => unlink(slot),
            Ordering::Greater => Self::remove_from(&mut node.right, key),
        }
    }
}

/// Detaches the node in `slot` and returns its key, or `None` if the slot is empty.
fn unlink<K>(slot: &mut Link<K>) -> Option<K> {
    let node = slot.as_mut()?;
    match node.kind() {
        NodeKind::Internal => {
            // The successor never has a left child so this can't come back here.
            let successor = unlink_minimum(&mut node.right)?;
            log::debug!("unlinked internal node by promoting its in-order successor");
            Some(mem::replace(&mut node.key, successor))
        }
        kind @ (NodeKind::Leaf | NodeKind::SingleChild) => {
            let mut node = slot.take()?;
            *slot = node.left.take().or_else(|| node.right.take());
            log::debug!("unlinked {:?} node", kind);
            Some(node.key)
        }
    }
}

/// Detaches the leftmost node of the subtree in `slot` and returns its key.
fn unlink_minimum<K>(slot: &mut Link<K>) -> Option<K> {
    match slot {
        Some(node) if node.left.is_some() => unlink_minimum(&mut node.left),
        _ => unlink(slot),
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
