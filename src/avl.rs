//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! The external contract matches [`crate::plain::Tree`]; in addition, every
//! node caches the height of its subtree and the tree rotates after each
//! insert and remove, so the height stays within `~1.44 * lg N` for every
//! insertion order.
//!
//! Restructuring is performed top-down without parent pointers: each
//! recursive call takes its child link by value and returns the (possibly
//! new) subtree root, which the caller reattaches.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // A strictly ascending insertion order would degrade an unbalanced BST
//! // into a list. Here the tree rotates as it grows.
//! for value in 0..100 {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.height() <= 10);
//! assert_eq!(tree.min(), Ok(&0));
//! assert_eq!(tree.max(), Ok(&99));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::EmptyTree;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// A height-balanced Binary Search Tree storing a set of `T`s.
///
/// Duplicate and remove-miss policies are the same as the unbalanced
/// variant's: inserting an equal value and removing an absent one are no-ops
/// reported through the `bool` return value.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
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
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree, read from the root's cached height.
    /// An empty tree has height 0, a single node has height 1.
    pub fn height(&self) -> usize {
        Self::link_height(&self.root)
    }

    /// Returns a lazy in-order iterator over the stored values, in ascending
    /// order. The iterator borrows the tree; any number of independent
    /// iterators may be taken. The height cache has no effect on iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    fn link_height(link: &Link<T>) -> usize {
        link.as_deref().map_or(0, |n| n.height)
    }

    /// The difference in height between the right and left subtrees. See
    /// [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(node: &Node<T>) -> isize {
        let right_height = Self::link_height(&node.right);
        let left_height = Self::link_height(&node.left);
        right_height as isize - left_height as isize
    }

    /// Adjusts the cached height of `node` to be the max of its children's
    /// heights + 1.
    fn fix_height(node: &mut Node<T>) {
        let left_height = Self::link_height(&node.left);
        let right_height = Self::link_height(&node.right);
        node.height = left_height.max(right_height) + 1;
    }

    /// Rotates the left child up to become the subtree root. Used when the
    /// left subtree is too tall, so there must be a left child. The left
    /// child's right subtree moves over to become the demoted node's left
    /// subtree:
    ///
    /// ```text
    ///      old_root            new_root
    ///       /     \             /    \
    ///   new_root   z  ->       x   old_root
    ///    /   \                       /  \
    ///   x     y                     y    z
    /// ```
    fn rotate_right(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = old_root.left.take().expect("Rotate right => left child");
        old_root.left = new_root.right.take();
        Self::fix_height(&mut old_root);
        new_root.right = Some(old_root);
        Self::fix_height(&mut new_root);
        new_root
    }

    /// Mirror of [`Self::rotate_right`]: the right child becomes the subtree
    /// root and its left subtree moves under the demoted node.
    fn rotate_left(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = old_root.right.take().expect("Rotate left => right child");
        old_root.right = new_root.left.take();
        Self::fix_height(&mut old_root);
        new_root.left = Some(old_root);
        Self::fix_height(&mut new_root);
        new_root
    }

    /// Recomputes `node`'s height and restores the AVL invariant at this
    /// level, returning the new subtree root.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for
    /// terminology. With the balance factor defined as right minus left, a
    /// factor of -2 means left-heavy: rotate right, first rotating the left
    /// child left if it leans the other way (the left-right case). +2 is the
    /// mirror image.
    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        Self::fix_height(&mut node);
        let node = match Self::balance_factor(&node) {
            -2 => {
                let left = node.left.take().expect("Left-heavy => left child");
                let left = if Self::balance_factor(&left) > 0 {
                    Self::rotate_left(left)
                } else {
                    left
                };
                node.left = Some(left);
                Self::rotate_right(node)
            }
            2 => {
                let right = node.right.take().expect("Right-heavy => right child");
                let right = if Self::balance_factor(&right) < 0 {
                    Self::rotate_right(right)
                } else {
                    right
                };
                node.right = Some(right);
                Self::rotate_left(node)
            }
            _ => node,
        };

        // In debug builds, assert that we've restored/maintained the AVL
        // invariant at this node.
        if cfg!(debug_assertions) {
            let left_height = Self::link_height(&node.left);
            let right_height = Self::link_height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.max(right_height) - left_height.min(right_height) <= 1);
        }
        node
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the given value into the tree, rebalancing as needed. Returns
    /// `true` if the value was added and `false` if an equal value was
    /// already present (in which case the tree is unchanged).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Self::insert_node(self.root.take(), value, &mut inserted);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the given value from the tree, rebalancing as needed. Returns
    /// `true` if the value was present. Removing an absent value is a no-op
    /// returning `false`, no matter how often it is repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = Self::remove_node(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether the given value is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => link = node.right.as_deref(),
            }
        }
        false
    }

    /// The smallest value in the tree, or [`EmptyTree`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.min().is_err());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T, EmptyTree> {
        let mut node = self.root.as_deref().ok_or(EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest value in the tree, or [`EmptyTree`] if there is none.
    pub fn max(&self) -> Result<&T, EmptyTree> {
        let mut node = self.root.as_deref().ok_or(EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    fn insert_node(link: Link<T>, value: T, inserted: &mut bool) -> Link<T> {
        match link {
            None => {
                *inserted = true;
                Some(Box::new(Node::new(value)))
            }
            Some(mut node) => {
                match value.cmp(&node.value) {
                    Ordering::Less => {
                        node.left = Self::insert_node(node.left.take(), value, inserted);
                    }
                    Ordering::Equal => return Some(node),
                    Ordering::Greater => {
                        node.right = Self::insert_node(node.right.take(), value, inserted);
                    }
                }
                Some(Self::rebalance(node))
            }
        }
    }

    fn remove_node(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_node(node.left.take(), value, removed);
            }
            Ordering::Greater => {
                node.right = Self::remove_node(node.right.take(), value, removed);
            }
            Ordering::Equal => {
                *removed = true;
                return match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    // A lone child of an AVL node is a leaf, so splicing it
                    // in cannot unbalance this level.
                    (Some(child), None) | (None, Some(child)) => Some(child),

                    // With two children we promote this node's in-order
                    // successor: the leftmost node of the right subtree.
                    // Detaching it may shrink the right subtree, so the
                    // promoted node is rebalanced like any other ancestor.
                    (left, Some(right)) => {
                        let (mut successor, right) = Self::detach_min(right);
                        successor.left = left;
                        successor.right = right;
                        Some(Self::rebalance(successor))
                    }
                };
            }
        }
        // Unlike insert, removal can shorten a subtree enough to unbalance
        // every ancestor, so each level on the way back up is rebalanced.
        Some(Self::rebalance(node))
    }

    /// Detaches the smallest node of the subtree, returning it along with the
    /// remainder of the subtree, rebalanced along the descent path.
    fn detach_min(mut node: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(Self::rebalance(node)))
            }
        }
    }
}

/// A lazy in-order iterator over a [`Tree`], yielding values in ascending
/// order. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
