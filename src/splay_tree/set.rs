use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use crate::splay_tree::tree;
use std::fmt::{Display, Write};

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed elements are quick to access again. Every insertion, lookup and removal "splays" the
/// accessed element, or the last element on its search path if it is absent, to the root of the
/// tree. Because lookups restructure the tree, `find` requires mutable access.
///
/// # Examples
/// ```
/// use balance_trees::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// assert_eq!(tree.root(), Some(&20));
///
/// assert!(tree.find(&10));
/// assert_eq!(tree.root(), Some(&10));
///
/// assert!(!tree.find(&30));
/// assert_eq!(tree.root(), Some(&20));
/// ```
pub struct SplayTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplayTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SplayTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::SplayTree;
    ///
    /// let tree: SplayTree<u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree { tree: None, len: 0 }
    }

    /// Inserts an element into the tree and splays it to the root. Does not add a second copy if
    /// the element is already present.
    pub fn insert(&mut self, item: T) {
        if tree::insert(&mut self.tree, item) {
            self.len += 1;
        }
    }

    /// Checks if an element exists in the tree, splaying it (or the last element on its search
    /// path) to the root.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert!(!tree.find(&2));
    /// assert!(tree.find(&1));
    /// assert_eq!(tree.root(), Some(&1));
    /// ```
    pub fn find(&mut self, item: &T) -> bool {
        tree::contains(&mut self.tree, item)
    }

    /// Removes an element from the tree. If the element is absent the tree is still splayed
    /// around it.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.delete(&2);
    /// assert_eq!(tree.root(), Some(&1));
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

    /// Returns the element at the root of the tree, or `None` if it is empty.
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.element)
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

    /// Returns the minimum element of the tree without splaying. Returns `None` if the tree is
    /// empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum element of the tree without splaying. Returns `None` if the tree is
    /// empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns every element in ascending order paired with the current height of the subtree
    /// rooted at its node.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.heights(), vec![(&1, 0), (&2, 1)]);
    /// ```
    pub fn heights(&self) -> Vec<(&T, i32)> {
        let mut ret = Vec::with_capacity(self.len);
        tree::heights(&self.tree, &mut ret);
        ret
    }

    /// Renders the tree in ascending order as a concatenation of `(element,height)` pairs.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        let mut ret = String::new();
        for (element, height) in self.heights() {
            let _ = write!(ret, "({},{})", element, height);
        }
        ret
    }

    /// Checks the search order and the tracked length.
    pub fn validate(&self) -> Result<()> {
        let actual = tree::validate(&self.tree, None, None)?;
        if actual != self.len {
            return Err(Error::LengthMismatch { tracked: self.len, actual });
        }
        Ok(())
    }
}

impl<T> OrderedSet<T> for SplayTree<T>
where
    T: Ord,
{
    fn insert(&mut self, item: T) {
        SplayTree::insert(self, item);
    }

    fn find(&mut self, item: &T) -> bool {
        SplayTree::find(self, item)
    }

    fn delete(&mut self, item: &T) {
        SplayTree::delete(self, item);
    }

    fn height(&self) -> i32 {
        SplayTree::height(self)
    }

    fn len(&self) -> usize {
        SplayTree::len(self)
    }
}

impl<T> Default for SplayTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
