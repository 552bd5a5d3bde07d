//! Multiway search tree whose nodes hold one to three keys and whose leaves all sit at the same
//! depth.

mod node;
mod set;
mod tree;

pub use self::node::NodeKind;
pub use self::set::{NodeCounts, Tree234};
