use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Node};
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

/// The node graph of a red black tree: an arena that owns the nodes and the handle of the root.
pub struct Tree<T> {
    pub nodes: Arena<Node<T>>,
    pub root: Option<NodeId>,
}

impl<T> Tree<T> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            nodes: Arena::new(chunk_size),
            root: None,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn color(&self, id: Option<NodeId>) -> Color {
        match id {
            Some(id) => self.nodes[id].color,
            None => Color::Black,
        }
    }

    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.nodes[id].color = color;
        }
    }

    // Points the link that referred to `old` from `parent` (or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    fn rotate_left(&mut self, id: NodeId) {
        let child = self.nodes[id].right.expect("Expected right child node to be `Some`.");
        let inner = self.nodes[child].left;
        self.nodes[id].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }

        let parent = self.nodes[id].parent;
        self.nodes[child].parent = parent;
        self.replace_child(parent, id, Some(child));

        self.nodes[child].left = Some(id);
        self.nodes[id].parent = Some(child);
    }

    fn rotate_right(&mut self, id: NodeId) {
        let child = self.nodes[id].left.expect("Expected left child node to be `Some`.");
        let inner = self.nodes[child].right;
        self.nodes[id].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }

        let parent = self.nodes[id].parent;
        self.nodes[child].parent = parent;
        self.replace_child(parent, id, Some(child));

        self.nodes[child].right = Some(id);
        self.nodes[id].parent = Some(child);
    }

    fn min_node(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn max_node(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.min_node(root)].element)
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.max_node(root)].element)
    }

    fn fix_insert(&mut self, mut id: NodeId) {
        while let Some(mut parent) = self.nodes[id].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            // a red parent is never the root, so the grandparent exists
            let grandparent = match self.nodes[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            if self.nodes[grandparent].left == Some(parent) {
                let uncle = self.nodes[grandparent].right;
                if self.color(uncle) == Color::Red {
                    trace!("red black: recoloring around red uncle");
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    id = grandparent;
                    continue;
                }

                if self.nodes[parent].right == Some(id) {
                    trace!("red black: rotating inner grandchild left");
                    self.rotate_left(parent);
                    parent = id;
                }
                trace!("red black: rotating grandparent right");
                self.set_color(Some(parent), Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                self.rotate_right(grandparent);
            } else {
                let uncle = self.nodes[grandparent].left;
                if self.color(uncle) == Color::Red {
                    trace!("red black: recoloring around red uncle");
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    id = grandparent;
                    continue;
                }

                if self.nodes[parent].left == Some(id) {
                    trace!("red black: rotating inner grandchild right");
                    self.rotate_right(parent);
                    parent = id;
                }
                trace!("red black: rotating grandparent left");
                self.set_color(Some(parent), Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                self.rotate_left(grandparent);
            }
            break;
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    // `parent` tracks the parent of `id` since the replacement position may be empty.
    fn fix_remove(&mut self, mut id: Option<NodeId>, mut parent: Option<NodeId>) {
        while id != self.root && self.color(id) == Color::Black {
            let curr_parent = match parent {
                Some(parent) => parent,
                None => break,
            };

            if self.nodes[curr_parent].left == id {
                let mut sibling = self.nodes[curr_parent]
                    .right
                    .expect("Expected sibling of a doubly black node to be `Some`.");

                if self.nodes[sibling].color == Color::Red {
                    trace!("red black: rotating red sibling left");
                    self.nodes[sibling].color = Color::Black;
                    self.nodes[curr_parent].color = Color::Red;
                    self.rotate_left(curr_parent);
                    sibling = self.nodes[curr_parent]
                        .right
                        .expect("Expected sibling of a doubly black node to be `Some`.");
                }

                let near = self.nodes[sibling].left;
                let far = self.nodes[sibling].right;
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    trace!("red black: recoloring sibling and moving up");
                    self.nodes[sibling].color = Color::Red;
                    id = Some(curr_parent);
                    parent = self.nodes[curr_parent].parent;
                    continue;
                }

                if self.color(far) == Color::Black {
                    trace!("red black: rotating sibling with red near child right");
                    self.set_color(near, Color::Black);
                    self.nodes[sibling].color = Color::Red;
                    self.rotate_right(sibling);
                    sibling = self.nodes[curr_parent]
                        .right
                        .expect("Expected sibling of a doubly black node to be `Some`.");
                }

                trace!("red black: rotating parent left to absorb the extra black");
                self.nodes[sibling].color = self.nodes[curr_parent].color;
                self.nodes[curr_parent].color = Color::Black;
                let far = self.nodes[sibling].right;
                self.set_color(far, Color::Black);
                self.rotate_left(curr_parent);
            } else {
                let mut sibling = self.nodes[curr_parent]
                    .left
                    .expect("Expected sibling of a doubly black node to be `Some`.");

                if self.nodes[sibling].color == Color::Red {
                    trace!("red black: rotating red sibling right");
                    self.nodes[sibling].color = Color::Black;
                    self.nodes[curr_parent].color = Color::Red;
                    self.rotate_right(curr_parent);
                    sibling = self.nodes[curr_parent]
                        .left
                        .expect("Expected sibling of a doubly black node to be `Some`.");
                }

                let near = self.nodes[sibling].right;
                let far = self.nodes[sibling].left;
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    trace!("red black: recoloring sibling and moving up");
                    self.nodes[sibling].color = Color::Red;
                    id = Some(curr_parent);
                    parent = self.nodes[curr_parent].parent;
                    continue;
                }

                if self.color(far) == Color::Black {
                    trace!("red black: rotating sibling with red near child left");
                    self.set_color(near, Color::Black);
                    self.nodes[sibling].color = Color::Red;
                    self.rotate_left(sibling);
                    sibling = self.nodes[curr_parent]
                        .left
                        .expect("Expected sibling of a doubly black node to be `Some`.");
                }

                trace!("red black: rotating parent right to absorb the extra black");
                self.nodes[sibling].color = self.nodes[curr_parent].color;
                self.nodes[curr_parent].color = Color::Black;
                let far = self.nodes[sibling].left;
                self.set_color(far, Color::Black);
                self.rotate_right(curr_parent);
            }

            id = self.root;
            break;
        }

        self.set_color(id, Color::Black);
    }

    pub fn find_node(&self, element: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match element.cmp(&self.nodes[id].element) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Inserts `element` and returns `true` if it was not already in the tree.
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let mut parent = None;
        let mut is_left = false;
        let mut curr = self.root;
        while let Some(id) = curr {
            parent = Some(id);
            curr = match element.cmp(&self.nodes[id].element) {
                Ordering::Less => {
                    is_left = true;
                    self.nodes[id].left
                },
                Ordering::Greater => {
                    is_left = false;
                    self.nodes[id].right
                },
                Ordering::Equal => return false,
            };
        }

        let id = self.nodes.allocate(Node::new(element, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) if is_left => self.nodes[parent].left = Some(id),
            Some(parent) => self.nodes[parent].right = Some(id),
        }

        self.fix_insert(id);
        true
    }

    pub fn remove(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let target = self.find_node(element)?;

        // the node physically unlinked has at most one child
        let removed = match (self.nodes[target].left, self.nodes[target].right) {
            (Some(_), Some(right)) => self.min_node(right),
            _ => target,
        };
        let child = self.nodes[removed].left.or(self.nodes[removed].right);
        let parent = self.nodes[removed].parent;

        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        self.replace_child(parent, removed, child);

        let Node { element: removed_element, color, .. } = self.nodes.free(removed);
        let ret = if removed == target {
            removed_element
        } else {
            mem::replace(&mut self.nodes[target].element, removed_element)
        };

        if color == Color::Black {
            self.fix_remove(child, parent);
        }
        Some(ret)
    }

    pub fn height(&self, id: Option<NodeId>) -> i32 {
        match id {
            Some(id) => {
                let node = &self.nodes[id];
                cmp::max(self.height(node.left), self.height(node.right)) + 1
            },
            None => -1,
        }
    }

    /// Returns the largest number of black nodes on a path from `id` down to an empty position.
    pub fn black_height(&self, id: Option<NodeId>) -> usize {
        match id {
            Some(id) => {
                let node = &self.nodes[id];
                let is_black = (node.color == Color::Black) as usize;
                is_black + cmp::max(self.black_height(node.left), self.black_height(node.right))
            },
            None => 0,
        }
    }

    pub fn count_colors(&self, id: Option<NodeId>, red: &mut usize, black: &mut usize) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            match node.color {
                Color::Red => *red += 1,
                Color::Black => *black += 1,
            }
            self.count_colors(node.left, red, black);
            self.count_colors(node.right, red, black);
        }
    }

    pub fn colors<'a>(&'a self, id: Option<NodeId>, out: &mut Vec<(&'a T, Color)>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            self.colors(node.left, out);
            out.push((&node.element, node.color));
            self.colors(node.right, out);
        }
    }

    /// Checks ordering, parent links and both color invariants below `id`, returning the number
    /// of nodes and the black height.
    pub fn validate(
        &self,
        id: Option<NodeId>,
        parent: Option<NodeId>,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> Result<(usize, usize)>
    where
        T: Ord,
    {
        let id = match id {
            Some(id) => id,
            None => return Ok((0, 0)),
        };
        let node = &self.nodes[id];

        if node.parent != parent {
            return Err(Error::BrokenParentLink);
        }
        if lower.map_or(false, |lower| node.element <= *lower)
            || upper.map_or(false, |upper| node.element >= *upper)
        {
            return Err(Error::Unordered);
        }
        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return Err(Error::RedViolation);
        }

        let (left_len, left) = self.validate(node.left, Some(id), lower, Some(&node.element))?;
        let (right_len, right) = self.validate(node.right, Some(id), Some(&node.element), upper)?;
        if left != right {
            return Err(Error::BlackHeightMismatch { left, right });
        }

        let is_black = (node.color == Color::Black) as usize;
        Ok((left_len + right_len + 1, left + is_black))
    }
}
