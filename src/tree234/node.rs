use log::trace;
use std::fmt;
use std::mem;

/// The largest number of keys a 2-3-4 node can hold.
pub const MAX_KEYS: usize = 3;

/// The kind of a 2-3-4 node, named after its number of children.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Two,
    Three,
    Four,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Two => "two",
            NodeKind::Three => "three",
            NodeKind::Four => "four",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A struct representing a node of a 2-3-4 tree. A leaf has no children and an internal node has
/// exactly one more child than keys.
pub struct Node<T> {
    pub keys: Vec<T>,
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        let mut keys = Vec::with_capacity(MAX_KEYS);
        keys.push(key);
        Node {
            keys,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.len() == MAX_KEYS
    }

    pub fn kind(&self) -> NodeKind {
        match self.keys.len() {
            1 => NodeKind::Two,
            2 => NodeKind::Three,
            3 => NodeKind::Four,
            len => unreachable!("2-3-4 node holds {} keys", len),
        }
    }

    // precondition: the node is full
    pub fn split(&mut self) -> (T, Node<T>) {
        debug_assert!(self.is_full());
        let mut keys = self.keys.split_off(1);
        let middle = keys.remove(0);
        let children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(2)
        };
        (middle, Node { keys, children })
    }

    /// Splits the full child at `index`, moving its middle key into this node.
    pub fn split_child(&mut self, index: usize) {
        let (middle, right) = self.children[index].split();
        self.keys.insert(index, middle);
        self.children.insert(index + 1, right);
    }

    /// Grows the child at `index` so that it holds at least two keys, either by rotating a key
    /// through this node from a sibling or by merging it with a sibling. Returns the index of the
    /// child that now covers the same key range.
    pub fn top_up(&mut self, index: usize) -> usize {
        if index > 0 && self.children[index - 1].keys.len() > 1 {
            trace!("2-3-4: borrowing from left sibling of child {}", index);
            self.borrow_from_left(index);
            index
        } else if index + 1 < self.children.len() && self.children[index + 1].keys.len() > 1 {
            trace!("2-3-4: borrowing from right sibling of child {}", index);
            self.borrow_from_right(index);
            index
        } else if index > 0 {
            trace!("2-3-4: merging child {} into its left sibling", index);
            self.merge_children(index - 1);
            index - 1
        } else {
            trace!("2-3-4: merging child {} with its right sibling", index);
            self.merge_children(index);
            index
        }
    }

    fn borrow_from_left(&mut self, index: usize) {
        let (key, child) = {
            let left = &mut self.children[index - 1];
            let key = left.keys.pop().expect("Expected a key in the left sibling.");
            (key, left.children.pop())
        };
        let separator = mem::replace(&mut self.keys[index - 1], key);

        let node = &mut self.children[index];
        node.keys.insert(0, separator);
        if let Some(child) = child {
            node.children.insert(0, child);
        }
    }

    fn borrow_from_right(&mut self, index: usize) {
        let (key, child) = {
            let right = &mut self.children[index + 1];
            let key = right.keys.remove(0);
            let child = if right.is_leaf() {
                None
            } else {
                Some(right.children.remove(0))
            };
            (key, child)
        };
        let separator = mem::replace(&mut self.keys[index], key);

        let node = &mut self.children[index];
        node.keys.push(separator);
        if let Some(child) = child {
            node.children.push(child);
        }
    }

    // Merges the children at `index` and `index + 1` together with the key between them.
    fn merge_children(&mut self, index: usize) {
        let right = self.children.remove(index + 1);
        let separator = self.keys.remove(index);

        let left = &mut self.children[index];
        left.keys.push(separator);
        left.keys.extend(right.keys);
        left.children.extend(right.children);
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeKind};

    fn leaf(keys: Vec<u32>) -> Node<u32> {
        Node { keys, children: Vec::new() }
    }

    #[test]
    fn test_kind() {
        assert_eq!(leaf(vec![1]).kind(), NodeKind::Two);
        assert_eq!(leaf(vec![1, 2]).kind(), NodeKind::Three);
        assert_eq!(leaf(vec![1, 2, 3]).kind(), NodeKind::Four);
        assert_eq!(NodeKind::Three.to_string(), "three");
    }

    #[test]
    fn test_split_child() {
        let mut node = Node {
            keys: vec![10],
            children: vec![leaf(vec![1, 2, 3]), leaf(vec![11])],
        };
        node.split_child(0);
        assert_eq!(node.keys, vec![2, 10]);
        assert_eq!(node.children[0].keys, vec![1]);
        assert_eq!(node.children[1].keys, vec![3]);
        assert_eq!(node.children[2].keys, vec![11]);
    }

    #[test]
    fn test_split_internal() {
        let mut node = Node {
            keys: vec![2, 4, 6],
            children: vec![leaf(vec![1]), leaf(vec![3]), leaf(vec![5]), leaf(vec![7])],
        };
        let (middle, right) = node.split();
        assert_eq!(middle, 4);
        assert_eq!(node.keys, vec![2]);
        assert_eq!(node.children.len(), 2);
        assert_eq!(right.keys, vec![6]);
        assert_eq!(right.children[0].keys, vec![5]);
        assert_eq!(right.children[1].keys, vec![7]);
    }

    #[test]
    fn test_top_up_borrow_left() {
        let mut node = Node {
            keys: vec![5],
            children: vec![leaf(vec![1, 2]), leaf(vec![7])],
        };
        assert_eq!(node.top_up(1), 1);
        assert_eq!(node.keys, vec![2]);
        assert_eq!(node.children[0].keys, vec![1]);
        assert_eq!(node.children[1].keys, vec![5, 7]);
    }

    #[test]
    fn test_top_up_borrow_right() {
        let mut node = Node {
            keys: vec![5],
            children: vec![leaf(vec![1]), leaf(vec![7, 8])],
        };
        assert_eq!(node.top_up(0), 0);
        assert_eq!(node.keys, vec![7]);
        assert_eq!(node.children[0].keys, vec![1, 5]);
        assert_eq!(node.children[1].keys, vec![8]);
    }

    #[test]
    fn test_top_up_merge() {
        let mut node = Node {
            keys: vec![5, 9],
            children: vec![leaf(vec![1]), leaf(vec![7]), leaf(vec![11])],
        };
        assert_eq!(node.top_up(1), 0);
        assert_eq!(node.keys, vec![9]);
        assert_eq!(node.children[0].keys, vec![1, 5, 7]);
        assert_eq!(node.children[1].keys, vec![11]);
    }

    #[test]
    fn test_top_up_merge_leftmost() {
        let mut node = Node {
            keys: vec![5],
            children: vec![leaf(vec![1]), leaf(vec![7])],
        };
        assert_eq!(node.top_up(0), 0);
        assert!(node.keys.is_empty());
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].keys, vec![1, 5, 7]);
    }
}
