//! An unbalanced Binary Search Tree storing a set of ordered values.
//!
//! Every operation runs in `O(height)`. No rebalancing is performed, so the
//! height is only `O(lg N)` for well-shuffled insertion orders; a sorted
//! insertion order degrades the tree into a linked list with `O(N)`
//! operations. That is a documented limitation of this variant, not a bug.
//! Use [`crate::avl::Tree`] when the insertion order cannot be trusted.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::plain::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.min().is_err());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&3));
//!
//! // Inserting a value that is already present is a no-op.
//! assert!(!tree.insert(2));
//!
//! // Removing reports whether the value was present.
//! assert!(tree.remove(&2));
//! assert!(!tree.remove(&2));
//!
//! let values: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(values, [1, 3]);
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
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced Binary Search Tree storing a set of `T`s.
///
/// Duplicate policy: a value equal to one already stored is rejected and the
/// tree is left untouched. Remove-miss policy: removing an absent value is a
/// no-op; both report through their `bool` return value.
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

impl<T> Drop for Tree<T> {
    // The height of this variant is unbounded, so the default recursive drop
    // of the `Box` chain could overflow the stack on degenerate trees.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
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

    /// The number of levels in the tree. An empty tree has height 0, a
    /// single node has height 1.
    pub fn height(&self) -> usize {
        fn node_height<T>(link: &Link<T>) -> usize {
            link.as_deref()
                .map_or(0, |n| node_height(&n.left).max(node_height(&n.right)) + 1)
        }
        node_height(&self.root)
    }

    /// Returns a lazy in-order iterator over the stored values, in ascending
    /// order. The iterator borrows the tree; any number of independent
    /// iterators may be taken.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the given value into the tree. Returns `true` if the value was
    /// added and `false` if an equal value was already present (in which case
    /// the tree is unchanged).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::plain::Tree;
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

    /// Removes the given value from the tree. Returns `true` if the value was
    /// present. Removing an absent value is a no-op returning `false`, no
    /// matter how often it is repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::plain::Tree;
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
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::plain::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
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
                    Ordering::Equal => {}
                    Ordering::Greater => {
                        node.right = Self::insert_node(node.right.take(), value, inserted);
                    }
                }
                Some(node)
            }
        }
    }

    fn remove_node(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_node(node.left.take(), value, removed);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_node(node.right.take(), value, removed);
                Some(node)
            }
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),

                    // With two children we promote this node's in-order
                    // successor: the leftmost node of the right subtree. The
                    // successor has no left child, so detaching it reduces to
                    // the simpler cases.
                    (left, Some(right)) => {
                        let (mut successor, right) = Self::detach_min(right);
                        successor.left = left;
                        successor.right = right;
                        Some(successor)
                    }
                }
            }
        }
    }

    /// Detaches the smallest node of the subtree, returning it along with the
    /// remainder of the subtree.
    fn detach_min(mut node: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
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

    /// Pushes `node` and its chain of left children. The next value to yield
    /// is then the top of the stack.
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
