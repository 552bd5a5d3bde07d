//! Invariant violations reported by the `validate` methods of each tree.

use std::error;
use std::fmt;
use std::result;

/// An enum representing the first broken invariant found while validating a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An element is not strictly between the bounds imposed by its ancestors.
    Unordered,
    /// The heights of the two subtrees of an avl node differ by more than one.
    Unbalanced { balance: i32 },
    /// The height stored in an avl node does not match the height of its subtree.
    StaleHeight { stored: i32, actual: i32 },
    /// The root of a red black tree is red.
    RedRoot,
    /// A red node in a red black tree has a red child.
    RedViolation,
    /// Two paths from the same red black node pass through a different number of black nodes.
    BlackHeightMismatch { left: usize, right: usize },
    /// A child in a red black tree does not point back to its parent.
    BrokenParentLink,
    /// A 2-3-4 node holds a number of keys outside of `1..=3`.
    KeyCount { keys: usize },
    /// An internal 2-3-4 node does not have exactly one more child than keys.
    ChildCount { keys: usize, children: usize },
    /// The leaves of a 2-3-4 tree are not all at the same depth.
    UnevenLeaves { expected: usize, actual: usize },
    /// The number of elements in the tree differs from the tracked length.
    LengthMismatch { tracked: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unordered => write!(f, "elements are not in search tree order"),
            Error::Unbalanced { balance } => write!(f, "balance factor {} is out of range", balance),
            Error::StaleHeight { stored, actual } => {
                write!(f, "stored height {} does not match actual height {}", stored, actual)
            },
            Error::RedRoot => write!(f, "root is red"),
            Error::RedViolation => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch { left, right } => {
                write!(f, "black heights differ: left is {}, right is {}", left, right)
            },
            Error::BrokenParentLink => write!(f, "child does not point back to its parent"),
            Error::KeyCount { keys } => write!(f, "node holds {} keys", keys),
            Error::ChildCount { keys, children } => {
                write!(f, "node holds {} keys but {} children", keys, children)
            },
            Error::UnevenLeaves { expected, actual } => {
                write!(f, "leaf found at depth {}, expected depth {}", actual, expected)
            },
            Error::LengthMismatch { tracked, actual } => {
                write!(f, "tracked length {} does not match {} elements", tracked, actual)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
