//! The `Node` shared by every tree in this crate.
//!
//! A `Node` stores a value and exclusively owns up to two children. Nothing in here knows
//! about ordering: the [search tree][crate::search::Tree] only hands out shared references to
//! its nodes so its ordering can't be broken from the outside, while the
//! [plain binary tree][crate::binary::BinaryTree] lets callers shape it however they want.

use std::fmt;

use log::debug;

use crate::iter::InOrder;

/// A single tree element holding a value and up to two owned children.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Drop for Node<T> {
    // Iterative so long chains don't overflow the stack.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // One level only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
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

    /// The left child, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Mutable access to the stored value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Mutable access to the left child, if there is one.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, if there is one.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Attaches a new leaf holding `value` as the left child and returns it. Any subtree that
    /// was already on the left is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::binary::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(1);
    /// tree.root_mut().set_left(2).set_left(4);
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&4, &2, &1]);
    /// ```
    pub fn set_left(&mut self, value: T) -> &mut Self {
        if self.left.is_some() {
            debug!("replacing an existing left subtree");
        }
        self.left.insert(Box::new(Self::new(value)))
    }

    /// Attaches a new leaf holding `value` as the right child and returns it. Any subtree that
    /// was already on the right is dropped.
    pub fn set_right(&mut self, value: T) -> &mut Self {
        if self.right.is_some() {
            debug!("replacing an existing right subtree");
        }
        self.right.insert(Box::new(Self::new(value)))
    }

    /// Visits the subtree rooted at this node in order: left subtree, this node, right subtree.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(Some(self))
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// depth of 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.left().map(|child| (child, level + 1)));
            stack.extend(node.right().map(|child| (child, level + 1)));
        }

        deepest
    }
}
