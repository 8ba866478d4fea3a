//! Rendering helpers that consume a tree's in-order iteration.
//!
//! The output sink is an external collaborator: anything implementing
//! [`io::Write`] works, and I/O failures propagate to the caller.

use std::fmt;
use std::io::{self, Write};

/// Writes each value of an in-order sequence to `out`, one per line, in the
/// order the sequence yields them.
///
/// # Examples
///
/// ```
/// use ordered_tree::plain::Tree;
/// use ordered_tree::print::write_in_order;
///
/// let mut tree = Tree::new();
/// for value in [2, 1, 3] {
///     tree.insert(value);
/// }
///
/// let mut out = Vec::new();
/// write_in_order(&tree, &mut out).unwrap();
/// assert_eq!(out, b"1\n2\n3\n");
/// ```
pub fn write_in_order<I, W>(values: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: fmt::Display,
    W: Write,
{
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
