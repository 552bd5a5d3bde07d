use crate::error::{Error, Result};
use crate::splay_tree::node::{Node, Side};
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Recursive zig-zig/zig-zag splay. The grandchild subtree that `element` belongs to is splayed
// first, then at most two rotations lift its root to the top of `tree`. An inner rotation is
// skipped when that subtree is empty.
fn splay<T>(tree: &mut Tree<T>, element: &T)
where
    T: Ord,
{
    let node = match tree {
        Some(node) => node,
        None => return,
    };

    match element.cmp(&node.element) {
        Ordering::Equal => {},
        Ordering::Less => {
            let child = match node.left {
                Some(ref mut child) => child,
                None => return,
            };
            match element.cmp(&child.element) {
                Ordering::Less => {
                    trace!("splay: zig-zig right");
                    splay(&mut child.left, element);
                    node.rotate_up(Side::Left);
                },
                Ordering::Greater => {
                    splay(&mut child.right, element);
                    if child.right.is_some() {
                        trace!("splay: zig-zag right");
                        child.rotate_up(Side::Right);
                    }
                },
                Ordering::Equal => {},
            }
            if node.left.is_some() {
                node.rotate_up(Side::Left);
            }
        },
        Ordering::Greater => {
            let child = match node.right {
                Some(ref mut child) => child,
                None => return,
            };
            match element.cmp(&child.element) {
                Ordering::Less => {
                    splay(&mut child.left, element);
                    if child.left.is_some() {
                        trace!("splay: zig-zag left");
                        child.rotate_up(Side::Left);
                    }
                },
                Ordering::Greater => {
                    trace!("splay: zig-zig left");
                    splay(&mut child.right, element);
                    node.rotate_up(Side::Right);
                },
                Ordering::Equal => {},
            }
            if node.right.is_some() {
                node.rotate_up(Side::Right);
            }
        },
    }
}

/// Splays `element` to the root and returns `true` if it is in the tree.
pub fn contains<T>(tree: &mut Tree<T>, element: &T) -> bool
where
    T: Ord,
{
    splay(tree, element);
    tree.as_ref().map_or(false, |node| node.element == *element)
}

/// Inserts `element` and returns `true` if it was not already in the tree. The inserted element
/// ends up at the root either way.
pub fn insert<T>(tree: &mut Tree<T>, element: T) -> bool
where
    T: Ord,
{
    let mut new_node = Node::new(element);
    splay(tree, &new_node.element);
    match tree {
        Some(ref mut node) => {
            match new_node.element.cmp(&node.element) {
                Ordering::Less => {
                    new_node.left = node.left.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.right = Some(Box::new(new_node));
                    true
                },
                Ordering::Greater => {
                    new_node.right = node.right.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.left = Some(Box::new(new_node));
                    true
                },
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            true
        },
    }
}

pub fn remove<T>(tree: &mut Tree<T>, element: &T) -> Option<T>
where
    T: Ord,
{
    splay(tree, element);
    match tree {
        Some(ref node) if node.element == *element => {},
        _ => return None,
    }

    let unboxed_node = *tree.take().expect("Expected non-empty tree.");
    let Node { left, right, element: removed } = unboxed_node;
    // every element on the left is smaller, so splaying it brings its maximum to the top
    *tree = left;
    splay(tree, element);
    match tree {
        Some(ref mut node) => node.right = right,
        None => *tree = right,
    }
    Some(removed)
}

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
        None => -1,
    }
}

/// Pushes every element in order paired with the height of its subtree and returns the height
/// of `tree`.
pub fn heights<'a, T>(tree: &'a Tree<T>, out: &mut Vec<(&'a T, i32)>) -> i32 {
    match tree {
        Some(ref node) => {
            let left = heights(&node.left, out);
            let index = out.len();
            out.push((&node.element, 0));
            let right = heights(&node.right, out);
            let ret = cmp::max(left, right) + 1;
            out[index].1 = ret;
            ret
        },
        None => -1,
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.element
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.element
    })
}

/// Checks the search order below `tree`, returning the number of nodes.
pub fn validate<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Result<usize>
where
    T: Ord,
{
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    if lower.map_or(false, |lower| node.element <= *lower)
        || upper.map_or(false, |upper| node.element >= *upper)
    {
        return Err(Error::Unordered);
    }

    let left_len = validate(&node.left, lower, Some(&node.element))?;
    let right_len = validate(&node.right, Some(&node.element), upper)?;
    Ok(left_len + right_len + 1)
}
