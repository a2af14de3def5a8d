//! This crate exposes a plain, unbalanced Binary Search Tree along with tools for looking at how
//! insertion order shapes it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the number of nodes on the
//! longest path from the root `Node` to a leaf `Node`). The [`tree::OrderedTree`] here
//! never rebalances, so its height depends entirely on insertion order: random order
//! gives an expected height of `O(lg N)`, ascending order gives a chain of height `N`.
//!
//! ## Modules
//!
//! - [`tree`]: the tree itself.
//! - [`render`]: text drawings of a tree's shape.
//! - [`sequence`]: key orders that produce known shapes.
//! - [`harness`]: timing searches in short versus degenerate trees.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod harness;
pub mod render;
pub mod sequence;
pub mod tree;

pub use tree::OrderedTree;
