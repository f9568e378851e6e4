//! This crate exposes a couple of binary trees mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is built out of `Node`s. A `Node` stores a value and owns at most two
//! children, a left one and a right one, which are `Node`s themselves. A `Node` without
//! children is called a "leaf node". [`binary::BinaryTree`] is exactly that and nothing more:
//! the caller decides where each value lives.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree (BST) adds an ordering invariant. For every `Node` in [`search::Tree`]:
//!
//! 1. all the `Node`s in its left subtree have a value less than its own value.
//! 2. all the `Node`s in its right subtree have a value greater than or equal to its own value.
//!
//! > Equal values always go right, so duplicates are kept next to each other in the order
//! > they were inserted.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree (an "in-order"
//! traversal, see [`InOrder`]) therefore produces the values in sorted order. Nothing here is
//! self-balancing, so inserting already sorted values produces a "degenerate" tree shaped like
//! a linked list. Traversal and dropping never recurse, so even those trees are fine to walk.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
pub mod iter;
pub mod node;
pub mod search;

#[cfg(test)]
mod test;

pub use iter::InOrder;
pub use node::Node;
