use crate::arena::NodeId;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

/// A struct representing an internal node of a red black tree. Links are handles into the arena
/// that owns every node of the tree.
pub struct Node<T> {
    pub element: T,
    pub color: Color,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(element: T, parent: Option<NodeId>) -> Self {
        Node {
            element,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }
}
