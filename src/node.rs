//! The `Node` a [`Tree`][crate::Tree] is built from and read-only queries over subtrees.

/// A child slot. Either the root of a [`Tree`][crate::Tree] or one of a `Node`'s two children.
/// Each `Node` is uniquely owned by exactly one slot.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds a key and up to two children. Every key in the left subtree is strictly less
/// than `key` and every key in the right subtree is greater than or equal to it.
///
/// `Node`s are only handed out as shared references into a [`Tree`][crate::Tree] so they can be
/// inspected but never relinked from outside the tree.
#[derive(Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

/// How many children a [`Node`] has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// No children.
    Leaf,
    /// Exactly one child, on either side.
    SingleChild,
    /// Both children.
    Internal,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Classifies this node by how many children it has.
    pub fn kind(&self) -> NodeKind {
        match (&self.left, &self.right) {
            (None, None) => NodeKind::Leaf,
            (Some(_), Some(_)) => NodeKind::Internal,
            _ => NodeKind::SingleChild,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Leaf
    }

    /// Returns the child of a [`SingleChild`][NodeKind::SingleChild] node. Leaves and internal
    /// nodes return `None`.
    pub fn only_child(&self) -> Option<&Self> {
        match (self.left(), self.right()) {
            (Some(child), None) | (None, Some(child)) => Some(child),
            _ => None,
        }
    }

    /// Returns the node holding the smallest key in the subtree rooted at `self` by following
    /// left children until there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = [100, 20, 300, 10].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.minimum().key(), &10);
    /// assert_eq!(root.right().unwrap().minimum().key(), &300);
    /// ```
    pub fn minimum(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }
}

/// Returns the node with the smallest key in `subtree`, or `None` if the subtree is empty.
///
/// This is [`Node::minimum`] lifted over a possibly empty subtree so it can be called directly on
/// the result of [`Tree::root`][crate::Tree::root], [`Node::left`] or [`Node::right`].
///
/// # Examples
///
/// ```
/// use bintree::{minimum, Tree};
///
/// let mut tree = Tree::new();
/// assert!(minimum(tree.root()).is_none());
///
/// tree.extend([100, 20, 50]);
/// assert_eq!(minimum(tree.root()).map(|n| *n.key()), Some(20));
/// ```
pub fn minimum<K>(subtree: Option<&Node<K>>) -> Option<&Node<K>> {
    subtree.map(Node::minimum)
}
