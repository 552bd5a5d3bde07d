use crate::avl_tree::tree;
use std::cmp;
use std::mem;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub element: T,
    pub height: i32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(element: T) -> Self {
        Node {
            element,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }

    /// Lifts the right child into this position, keeping both stored heights current.
    pub fn rotate_left(&mut self) {
        let mut child = self.right.take().expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        child.update();
        self.left = Some(child);
        self.update();
    }

    /// Lifts the left child into this position, keeping both stored heights current.
    pub fn rotate_right(&mut self) {
        let mut child = self.left.take().expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        child.update();
        self.right = Some(child);
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_rotate_updates_heights() {
        let mut node = Node::new(1);
        let mut right = Node::new(2);
        right.right = Some(Box::new(Node::new(3)));
        right.update();
        node.right = Some(Box::new(right));
        node.update();
        assert_eq!(node.height, 2);
        assert_eq!(node.balance(), -2);

        node.rotate_left();
        assert_eq!(node.element, 2);
        assert_eq!(node.height, 1);
        assert_eq!(node.balance(), 0);
        assert_eq!(node.left.as_ref().map(|child| child.height), Some(0));

        node.rotate_right();
        assert_eq!(node.element, 1);
        assert_eq!(node.height, 2);
        assert_eq!(node.balance(), -2);
    }
}
