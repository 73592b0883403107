//! This crate exposes an unbalanced Binary Search Tree (BST) of unique elements along with a
//! handful of structural operations on it, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Since equal elements can be neither less nor greater, a tree never holds
//! two equal elements: inserting one that is already present does nothing.
//!
//! Searching takes `O(height)`. This tree never rebalances itself, so its
//! height is decided by insertion order alone. Inserting sorted elements
//! builds a tree shaped like a linked list with height `N - 1`.
//!
//! ## Structural operations
//!
//! Beyond the core operations, a [`Tree`] can be counted, checked for
//! fullness, compared against another tree's shape and elements, copied,
//! mirrored, rotated at a node, and walked level by level. See the
//! [`derived`] module.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{Rotation, Tree};
//!
//! let mut tree: Tree<_> = [33, 20, 30, 40, 50, 41, 31, 21, 11].into_iter().collect();
//!
//! assert_eq!(tree.node_count(), 9);
//! assert!(!tree.is_full().unwrap());
//!
//! let mirror = tree.mirror().unwrap();
//! assert!(tree.is_mirror(&mirror));
//!
//! let rotation = tree.rotate_right(&20);
//! assert_eq!(rotation, Rotation::Rotated);
//! assert_eq!(
//!     tree.rotation_report(rotation),
//!     "in-order: 11 20 21 30 31 33 40 41 50\n"
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod derived;
pub mod equality;
mod error;
mod node;
mod tree;

pub use derived::Rotation;
pub use equality::ElementEquality;
pub use error::{Error, Result};
pub use tree::Tree;
