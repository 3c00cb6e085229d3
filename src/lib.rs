//! This crate is a playground for unbalanced Binary Search Trees (BSTs): a tree engine plus an
//! interactive session that manages several named trees of one element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! When duplicates are admitted the first invariant relaxes to "less than or equal": an equal
//! value always descends to the left.
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances, so inserting
//! sorted input yields a tree whose height equals its size minus one. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## Layout
//!
//! - [`tree`] is the engine. It does no I/O and returns plain data from every query.
//! - [`session`] parses commands, keeps the named trees and histories, and renders replies.
//! - [`config`] loads [`config::Settings`] from defaults, a file and the environment.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod element;
pub mod error;
pub mod session;
pub mod tree;

pub use error::{Error, Result};
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
