use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

// Restores the height and balance of the root of `tree` after one of its subtrees changed height
// by at most one. A zero balance on the heavy child only happens during removal and takes the
// single rotation.
fn rebalance<T>(tree: &mut Tree<T>) {
    let node = match tree {
        Some(node) => node,
        None => return,
    };

    node.update();
    let (balance, height) = (node.balance(), node.height);
    if balance > 1 {
        let left = node.left.as_mut().expect("Expected left child of a left heavy node.");
        if left.balance() < 0 {
            trace!("avl: left-right case at height {}", height);
            left.rotate_left();
        } else {
            trace!("avl: left-left case at height {}", height);
        }
        node.rotate_right();
    } else if balance < -1 {
        let right = node.right.as_mut().expect("Expected right child of a right heavy node.");
        if right.balance() > 0 {
            trace!("avl: right-left case at height {}", height);
            right.rotate_right();
        } else {
            trace!("avl: right-right case at height {}", height);
        }
        node.rotate_left();
    }
}

// Unlinks the smallest element of `tree`, rebalancing every ancestor on the way back up.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<T> {
    let node = tree.as_mut()?;
    if node.left.is_some() {
        let ret = remove_min(&mut node.left);
        rebalance(tree);
        return ret;
    }

    let Node { element, right, .. } = *tree.take()?;
    *tree = right;
    Some(element)
}

/// Inserts `element` and returns `true` if it was not already in the tree.
pub fn insert<T>(tree: &mut Tree<T>, element: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match element.cmp(&node.element) {
            Ordering::Less => insert(&mut node.left, element),
            Ordering::Greater => insert(&mut node.right, element),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(element)));
            return true;
        },
    };

    if inserted {
        rebalance(tree);
    }
    inserted
}

/// Removes `element` from the tree and returns it. A node with two children takes the element of
/// its in-order successor instead of being unlinked.
pub fn remove<T>(tree: &mut Tree<T>, element: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => match element.cmp(&node.element) {
            Ordering::Less => remove(&mut node.left, element),
            Ordering::Greater => remove(&mut node.right, element),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                let successor =
                    remove_min(&mut node.right).expect("Expected right subtree to be `Some`.");
                Some(mem::replace(&mut node.element, successor))
            },
            Ordering::Equal => {
                let child = node.left.take().or_else(|| node.right.take());
                mem::replace(tree, child).map(|removed| removed.element)
            },
        },
        None => None,
    };

    if ret.is_some() {
        rebalance(tree);
    }
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, element: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match element.cmp(&node.element) {
        Ordering::Less => get(&node.left, element),
        Ordering::Greater => get(&node.right, element),
        Ordering::Equal => Some(&**node),
    })
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

pub fn balance_factors<'a, T>(tree: &'a Tree<T>, out: &mut Vec<(&'a T, i32)>) {
    if let Some(ref node) = tree {
        balance_factors(&node.left, out);
        out.push((&node.element, node.balance()));
        balance_factors(&node.right, out);
    }
}

/// Checks ordering, balance and stored heights, returning the number of nodes.
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

    let actual = height(&node.left).max(height(&node.right)) + 1;
    if node.height != actual {
        return Err(Error::StaleHeight { stored: node.height, actual });
    }
    let balance = node.balance();
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { balance });
    }

    Ok(left_len + right_len + 1)
}
