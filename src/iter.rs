//! In-order iteration over a subtree.

use std::iter::FusedIterator;

use crate::node::Node;

/// A lazy in-order iterator over the values of a subtree: the left subtree, then the subtree
/// root, then the right subtree.
///
/// Pending ancestors are kept on an explicit stack rather than the call stack so degenerate
/// (linked-list shaped) trees of any depth can be walked. The stack never holds more than
/// `depth` nodes.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

/// Manual implementation of `Clone` so we don't require `T: Clone` just to clone references.
impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants so the smallest one ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}
