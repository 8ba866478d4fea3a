//! Generic ordered-tree containers built on Binary Search Trees (BSTs).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, remove, and query stored values in sorted order. BSTs are
//! typically defined recursively using the notion of a `Node`. A `Node`
//! stores the inserted value and will sometimes have child `Node`s. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Variants
//!
//! Two implementations of the same contract are provided:
//!
//! - [`plain::Tree`] keeps no balance information. Every operation is
//!   `O(height)`, and the height can degrade to `N` for unlucky (e.g. sorted)
//!   insertion orders.
//! - [`avl::Tree`] caches subtree heights and rotates after every structural
//!   change, keeping the height `O(lg N)` for every insertion order.
//!
//! Both require only `T: Ord`. The `Ord` implementation is assumed to be a
//! total, deterministic order (as its contract demands); an inconsistent
//! `Ord` produces an unspecified, though still memory-safe, tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod plain;
pub mod print;


/// The error returned by min/max queries on a tree with no elements.
///
/// Returned instead of a sentinel value so that callers can distinguish
/// "the tree is empty" from "this value is in the tree".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tree has no elements")]
pub struct EmptyTree;
