use crate::error::{Error, Result};
use crate::tree234::node::{Node, NodeKind};
use crate::tree234::set::NodeCounts;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Node<T>>;

pub fn contains<T>(tree: &Tree<T>, element: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree.as_ref();
    while let Some(node) = curr {
        match node.keys.binary_search(element) {
            Ok(_) => return true,
            Err(index) => curr = node.children.get(index),
        }
    }
    false
}

fn insert_non_full<T>(node: &mut Node<T>, element: T)
where
    T: Ord,
{
    let mut index = match node.keys.binary_search(&element) {
        Ok(_) => return,
        Err(index) => index,
    };

    if node.is_leaf() {
        node.keys.insert(index, element);
        return;
    }

    if node.children[index].is_full() {
        trace!("2-3-4: splitting full child {}", index);
        node.split_child(index);
        match element.cmp(&node.keys[index]) {
            Ordering::Less => {},
            Ordering::Greater => index += 1,
            Ordering::Equal => return,
        }
    }

    insert_non_full(&mut node.children[index], element);
}

/// Inserts `element` and returns `true` if it was not already in the tree. A tree that already
/// holds the element is left untouched.
pub fn insert<T>(tree: &mut Tree<T>, element: T) -> bool
where
    T: Ord,
{
    if contains(tree, &element) {
        return false;
    }

    match tree {
        Some(ref mut root) => {
            if root.is_full() {
                trace!("2-3-4: splitting full root");
                let (middle, right) = root.split();
                let left = mem::replace(root, Node::new(middle));
                root.children = vec![left, right];
            }
            insert_non_full(root, element);
        },
        None => *tree = Some(Node::new(element)),
    }
    true
}

// precondition: `node` is a leaf or holds at least two keys
fn remove_max<T>(node: &mut Node<T>) -> T {
    if node.is_leaf() {
        return node.keys.pop().expect("Expected a key in the leaf.");
    }

    let mut last = node.children.len() - 1;
    if node.children[last].keys.len() < 2 {
        last = node.top_up(last);
    }
    remove_max(&mut node.children[last])
}

fn remove_from<T>(node: &mut Node<T>, element: &T) -> Option<T>
where
    T: Ord,
{
    match node.keys.binary_search(element) {
        Ok(index) => {
            if node.is_leaf() {
                return Some(node.keys.remove(index));
            }
            if node.children[index].keys.len() < 2 {
                // the key may move into the child, so search this node again
                node.top_up(index);
                return remove_from(node, element);
            }
            trace!("2-3-4: replacing internal key with its predecessor");
            let predecessor = remove_max(&mut node.children[index]);
            Some(mem::replace(&mut node.keys[index], predecessor))
        },
        Err(index) => {
            if node.is_leaf() {
                return None;
            }
            if node.children[index].keys.len() < 2 {
                node.top_up(index);
                return remove_from(node, element);
            }
            remove_from(&mut node.children[index], element)
        },
    }
}

pub fn remove<T>(tree: &mut Tree<T>, element: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut root) => remove_from(root, element),
        None => return None,
    };

    let is_empty = match tree {
        Some(ref root) => root.keys.is_empty(),
        None => false,
    };
    if is_empty {
        trace!("2-3-4: collapsing empty root");
        *tree = tree.take().and_then(|mut root| root.children.pop());
    }
    ret
}

pub fn height<T>(tree: &Tree<T>) -> i32 {
    let mut curr = match tree {
        Some(ref root) => root,
        None => return -1,
    };
    let mut ret = 0;
    while let Some(child) = curr.children.first() {
        curr = child;
        ret += 1;
    }
    ret
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_ref()?;
    while let Some(child) = curr.children.first() {
        curr = child;
    }
    curr.keys.first()
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_ref()?;
    while let Some(child) = curr.children.last() {
        curr = child;
    }
    curr.keys.last()
}

pub fn count_nodes<T>(node: &Node<T>, counts: &mut NodeCounts) {
    match node.kind() {
        NodeKind::Two => counts.two += 1,
        NodeKind::Three => counts.three += 1,
        NodeKind::Four => counts.four += 1,
    }
    for child in &node.children {
        count_nodes(child, counts);
    }
}

pub fn kinds<'a, T>(node: &'a Node<T>, out: &mut Vec<(&'a T, NodeKind)>) {
    let kind = node.kind();
    for (index, key) in node.keys.iter().enumerate() {
        if let Some(child) = node.children.get(index) {
            kinds(child, out);
        }
        out.push((key, kind));
    }
    if let Some(child) = node.children.get(node.keys.len()) {
        kinds(child, out);
    }
}

/// Checks key counts, child counts, ordering and leaf depth below `node`, returning the number of
/// keys.
pub fn validate<T>(
    node: &Node<T>,
    lower: Option<&T>,
    upper: Option<&T>,
    depth: usize,
    leaf_depth: &mut Option<usize>,
) -> Result<usize>
where
    T: Ord,
{
    let keys = node.keys.len();
    if keys == 0 || keys > 3 {
        return Err(Error::KeyCount { keys });
    }
    if node.keys.windows(2).any(|pair| pair[0] >= pair[1])
        || lower.map_or(false, |lower| node.keys[0] <= *lower)
        || upper.map_or(false, |upper| node.keys[keys - 1] >= *upper)
    {
        return Err(Error::Unordered);
    }

    if node.is_leaf() {
        return match *leaf_depth {
            Some(expected) if expected != depth => Err(Error::UnevenLeaves { expected, actual: depth }),
            Some(_) => Ok(keys),
            None => {
                *leaf_depth = Some(depth);
                Ok(keys)
            },
        };
    }

    if node.children.len() != keys + 1 {
        return Err(Error::ChildCount { keys, children: node.children.len() });
    }

    let mut ret = keys;
    for (index, child) in node.children.iter().enumerate() {
        let child_lower = if index == 0 { lower } else { Some(&node.keys[index - 1]) };
        let child_upper = if index == keys { upper } else { Some(&node.keys[index]) };
        ret += validate(child, child_lower, child_upper, depth + 1, leaf_depth)?;
    }
    Ok(ret)
}
