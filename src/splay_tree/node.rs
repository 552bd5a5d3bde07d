use crate::splay_tree::tree;
use std::mem;

/// The side of a node that a child hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

pub struct Node<T> {
    pub element: T,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(element: T) -> Self {
        Node {
            element,
            left: None,
            right: None,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut tree::Tree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Lifts the child on `side` into this position. The old root becomes the child's child on the
    /// opposite side and adopts the child's inner subtree.
    pub fn rotate_up(&mut self, side: Side) {
        let mut child = self.child_mut(side).take().expect("Expected child node to be `Some`.");
        let inner = match side {
            Side::Left => child.right.take(),
            Side::Right => child.left.take(),
        };
        *self.child_mut(side) = inner;
        mem::swap(&mut *child, self);
        match side {
            Side::Left => self.right = Some(child),
            Side::Right => self.left = Some(child),
        }
    }
}
