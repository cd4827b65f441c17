//! This crate exposes a Red-Black Tree holding an ordered set of integer keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively using
//! the notion of a `Node`. A `Node` stores a key and will sometimes have child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! Searching takes `O(height)`, so the trick is keeping the height small.
//!
//! ## Red-Black Tree
//!
//! A Red-Black Tree colors every `Node` red or black and keeps three more
//! invariants:
//!
//! 1. The root is black.
//! 2. A red `Node` never has a red child.
//! 3. Every path from a `Node` down to a missing child passes through the same
//!    number of black `Node`s.
//!
//! Together these bound the height to `2 * lg(N + 1)`. Insertion may break
//! them locally; a short sequence of recolorings and rotations (the "fix-up")
//! restores them.
//!
//! # Examples
//!
//! ```
//! use rbt::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(20));
//! assert!(!tree.contains(25));
//! assert_eq!(tree.to_infix_string(), " R10 B20 R30 ");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod invariants;
mod node;
pub mod red_black;
mod traversal;
mod util;

#[cfg(test)]
mod test;

pub use invariants::InvariantError;
pub use node::{Color, Key};
pub use red_black::Tree;
pub use traversal::{Iter, Order};
