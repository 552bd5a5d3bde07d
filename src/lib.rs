//! Self-balancing search trees behind a common ordered set interface.
//!
//! Four engines are provided: an [`AvlTree`], a [`RedBlackTree`], a [`SplayTree`] and a
//! [`Tree234`]. Each one stores unique elements, supports insertion, lookup and removal through
//! the [`OrderedSet`] trait, and reports its height. Every engine also exposes a `validate` method
//! that checks its structural invariants and a `render` method that prints its elements in order
//! together with engine-specific balance information.

mod ordered_set;
pub mod arena;
pub mod avl_tree;
pub mod error;
pub mod red_black_tree;
pub mod splay_tree;
pub mod tree234;

pub use crate::avl_tree::AvlTree;
pub use crate::error::{Error, Result};
pub use crate::ordered_set::OrderedSet;
pub use crate::red_black_tree::{Color, RedBlackStatus, RedBlackTree};
pub use crate::splay_tree::SplayTree;
pub use crate::tree234::{NodeCounts, NodeKind, Tree234};
