//! A plain binary tree. Unlike the [search tree][crate::search::Tree] nothing is kept in order:
//! the caller decides where every value goes by attaching children to nodes directly.
//!
//! # Examples
//!
//! ```
//! use bintree::binary::BinaryTree;
//!
//! //       A
//! //     /   \
//! //    B     C
//! //   / \   /
//! //  D   E F
//! let mut tree = BinaryTree::new('A');
//! let b = tree.root_mut().set_left('B');
//! b.set_left('D');
//! b.set_right('E');
//! tree.root_mut().set_right('C').set_left('F');
//!
//! assert_eq!(tree.inorder().collect::<String>(), "DBEAFC");
//! ```

use std::fmt;

use crate::iter::InOrder;
use crate::node::Node;

/// A binary tree that always has a root. Its shape is whatever the caller builds through
/// [`Node::set_left`] and [`Node::set_right`].
pub struct BinaryTree<T> {
    root: Node<T>,
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a tree with a single root node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            root: Node::new(value),
        }
    }

    /// The root node.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// The root node, for attaching children or replacing its value.
    pub fn root_mut(&mut self) -> &mut Node<T> {
        &mut self.root
    }

    /// Visits every value: left subtree, then the node, then the right subtree.
    pub fn inorder(&self) -> InOrder<'_, T> {
        self.root.inorder()
    }

    /// How many nodes are in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.inorder().count()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
