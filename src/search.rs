//! An unbalanced Binary Search Tree. Values go left when they are strictly smaller than a
//! node's value and right otherwise, so equal values pile up to the right of each other and
//! come back out of an in-order traversal in the order they were inserted.
//!
//! # Examples
//!
//! ```
//! use bintree::search::Tree;
//!
//! let mut tree = Tree::with_root(10);
//! for x in [5, 15, 3, 7, 12, 17] {
//!     tree.insert(x);
//! }
//!
//! let sorted: Vec<_> = tree.inorder().copied().collect();
//! assert_eq!(sorted, [3, 5, 7, 10, 12, 15, 17]);
//!
//! // Traversal doesn't consume or modify anything.
//! assert_eq!(tree.inorder().count(), 7);
//!
//! // Duplicates are kept.
//! tree.insert(10);
//! assert_eq!(tree.inorder().filter(|x| **x == 10).count(), 2);
//! ```

use std::fmt;

use log::trace;

use crate::iter::InOrder;
use crate::node::Node;

/// A Binary Search Tree supporting insertion and in-order traversal. It performs no
/// balancing: inserting sorted values produces a tree as deep as it is long.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` whose root holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::search::Tree;
    ///
    /// let tree = Tree::with_root("only");
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&"only"]);
    /// ```
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
            len: 1,
        }
    }

    /// Inserts `value` into the tree. Values smaller than a node's value are placed in its left
    /// subtree, everything else (including equal values) in its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::search::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&5, &5]);
    /// // The second 5 is the root's right child.
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut node = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(Node::new(value)));
                self.len = 1;
                trace!("inserted value at depth 1 (1 values)");
                return;
            }
        };

        let mut depth = 2;
        loop {
            let goes_left = value < node.value;
            let child = if goes_left {
                &mut node.left
            } else {
                &mut node.right
            };
            if let Some(next) = child {
                node = next;
                depth += 1;
                continue;
            }

            let linked = child.insert(Box::new(Node::new(value)));
            debug_assert!(
                if goes_left {
                    linked.value < node.value
                } else {
                    linked.value >= node.value
                },
                "new node linked on the wrong side of its parent"
            );
            break;
        }

        self.len += 1;
        trace!("inserted value at depth {} ({} values)", depth, self.len);
    }

    /// Returns a lazy iterator visiting every value in non-decreasing order. Equal values are
    /// visited in the order they were inserted.
    ///
    /// The iterator borrows the tree, so it can be created any number of times and always
    /// yields the same sequence until the next insertion.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// The root node, if the tree isn't empty. Nodes are only handed out by shared reference so
    /// the ordering can't be broken.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// depth of 0.
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }
}
