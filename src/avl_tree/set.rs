use crate::avl_tree::tree;
use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use std::fmt::{Display, Write};

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion performs at
/// most one single or double rotation; a removal may rotate at every ancestor of the removed node.
///
/// # Examples
/// ```
/// use balance_trees::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in &[10, 5, 15, 3, 7, 12, 20] {
///     tree.insert(*key);
/// }
///
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.render(), "(3,0)(5,0)(7,0)(10,0)(12,0)(15,0)(20,0)");
///
/// tree.delete(&5);
/// assert!(!tree.find(&5));
/// assert_eq!(tree.height(), 2);
/// ```
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Inserts an element into the tree. Does nothing if the element is already present.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) {
        if tree::insert(&mut self.tree, item) {
            self.len += 1;
        }
    }

    /// Checks if an element exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.find(&0));
    /// assert!(tree.find(&1));
    /// ```
    pub fn find(&self, item: &T) -> bool {
        tree::get(&self.tree, item).is_some()
    }

    /// Removes an element from the tree. Does nothing if the element is absent.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    /// assert!(!tree.find(&1));
    /// ```
    pub fn delete(&mut self, item: &T) {
        if tree::remove(&mut self.tree, item).is_some() {
            self.len -= 1;
        }
    }

    /// Returns the height of the tree, or `-1` if it is empty.
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the height stored in the node holding `item`, or `None` if the item is absent.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.node_height(&1), Some(1));
    /// assert_eq!(tree.node_height(&2), Some(0));
    /// assert_eq!(tree.node_height(&3), None);
    /// ```
    pub fn node_height(&self, item: &T) -> Option<i32> {
        tree::get(&self.tree, item).map(|node| node.height)
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all elements.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns every element in ascending order paired with the balance factor of its node, the
    /// height of its left subtree minus the height of its right subtree.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.balance_factors(), vec![(&1, 0), (&2, 1)]);
    /// ```
    pub fn balance_factors(&self) -> Vec<(&T, i32)> {
        let mut ret = Vec::with_capacity(self.len);
        tree::balance_factors(&self.tree, &mut ret);
        ret
    }

    /// Renders the tree in ascending order as a concatenation of `(element,balance)` pairs.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        let mut ret = String::new();
        for (element, balance) in self.balance_factors() {
            let _ = write!(ret, "({},{})", element, balance);
        }
        ret
    }

    /// Checks the search order, the balance of every node, the stored heights and the tracked
    /// length.
    pub fn validate(&self) -> Result<()> {
        let actual = tree::validate(&self.tree, None, None)?;
        if actual != self.len {
            return Err(Error::LengthMismatch { tracked: self.len, actual });
        }
        Ok(())
    }
}

impl<T> OrderedSet<T> for AvlTree<T>
where
    T: Ord,
{
    fn insert(&mut self, item: T) {
        AvlTree::insert(self, item);
    }

    fn find(&mut self, item: &T) -> bool {
        AvlTree::find(self, item)
    }

    fn delete(&mut self, item: &T) {
        AvlTree::delete(self, item);
    }

    fn height(&self) -> i32 {
        AvlTree::height(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
