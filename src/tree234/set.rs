use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use crate::tree234::node::NodeKind;
use crate::tree234::tree;
use std::fmt::{self, Display, Write};

/// The number of two, three and four nodes in a 2-3-4 tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NodeCounts {
    pub two: usize,
    pub three: usize,
    pub four: usize,
}

impl fmt::Display for NodeCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "two = {} three = {} four = {}", self.two, self.three, self.four)
    }
}

/// An ordered set implemented using a 2-3-4 tree.
///
/// A 2-3-4 tree is a multiway search tree where every node holds one to three ordered keys and
/// every internal node has one more child than it has keys. All leaves are at the same depth.
/// Insertions split full nodes on the way down so the leaf that receives the new key always has
/// room, and removals grow every node they descend into to at least two keys by borrowing from or
/// merging with a sibling.
///
/// # Examples
/// ```
/// use balance_trees::Tree234;
///
/// let mut tree = Tree234::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
/// assert_eq!(tree.height(), 0);
///
/// tree.insert(5);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.render(), "(5, three) (10, three) (20, two) (30, two) ");
/// assert_eq!(tree.status().to_string(), "two = 2 three = 1 four = 0");
/// ```
pub struct Tree234<T> {
    tree: tree::Tree<T>,
    len: usize,
    counts: NodeCounts,
}

impl<T> Tree234<T>
where
    T: Ord,
{
    /// Constructs a new, empty `Tree234<T>`.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::Tree234;
    ///
    /// let tree: Tree234<u32> = Tree234::new();
    /// ```
    pub fn new() -> Self {
        Tree234 {
            tree: None,
            len: 0,
            counts: NodeCounts::default(),
        }
    }

    fn update_counts(&mut self) {
        let mut counts = NodeCounts::default();
        if let Some(ref root) = self.tree {
            tree::count_nodes(root, &mut counts);
        }
        self.counts = counts;
    }

    /// Inserts an element into the tree. Does nothing if the element is already present.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::Tree234;
    ///
    /// let mut tree = Tree234::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) {
        if tree::insert(&mut self.tree, item) {
            self.len += 1;
            self.update_counts();
        }
    }

    /// Checks if an element exists in the tree.
    pub fn find(&self, item: &T) -> bool {
        tree::contains(&self.tree, item)
    }

    /// Removes an element from the tree. Does nothing if the element is absent.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::Tree234;
    ///
    /// let mut tree = Tree234::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn delete(&mut self, item: &T) {
        if tree::remove(&mut self.tree, item).is_some() {
            self.len -= 1;
            self.update_counts();
        }
    }

    /// Returns the number of edges from the root to any leaf, or `-1` if the tree is empty.
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
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
        self.counts = NodeCounts::default();
    }

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the number of two, three and four nodes in the tree.
    pub fn status(&self) -> NodeCounts {
        self.counts
    }

    /// Returns every element in ascending order paired with the kind of node holding it.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::{NodeKind, Tree234};
    ///
    /// let mut tree = Tree234::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.kinds(), vec![(&1, NodeKind::Three), (&2, NodeKind::Three)]);
    /// ```
    pub fn kinds(&self) -> Vec<(&T, NodeKind)> {
        let mut ret = Vec::with_capacity(self.len);
        if let Some(ref root) = self.tree {
            tree::kinds(root, &mut ret);
        }
        ret
    }

    /// Renders the tree in ascending order as `(element, kind) ` entries, where kind is `two`,
    /// `three` or `four`.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        let mut ret = String::new();
        for (element, kind) in self.kinds() {
            let _ = write!(ret, "({}, {}) ", element, kind);
        }
        ret
    }

    /// Checks the key and child counts of every node, the search order, the depth of every leaf,
    /// the cached node counts and the tracked length.
    pub fn validate(&self) -> Result<()> {
        let actual = match self.tree {
            Some(ref root) => tree::validate(root, None, None, 0, &mut None)?,
            None => 0,
        };
        if actual != self.len {
            return Err(Error::LengthMismatch { tracked: self.len, actual });
        }
        debug_assert_eq!(self.counts, {
            let mut counts = NodeCounts::default();
            if let Some(ref root) = self.tree {
                tree::count_nodes(root, &mut counts);
            }
            counts
        });
        Ok(())
    }
}

impl<T> OrderedSet<T> for Tree234<T>
where
    T: Ord,
{
    fn insert(&mut self, item: T) {
        Tree234::insert(self, item);
    }

    fn find(&mut self, item: &T) -> bool {
        Tree234::find(self, item)
    }

    fn delete(&mut self, item: &T) {
        Tree234::delete(self, item);
    }

    fn height(&self) -> i32 {
        Tree234::height(self)
    }

    fn len(&self) -> usize {
        Tree234::len(self)
    }
}

impl<T> Default for Tree234<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeCounts, Tree234};

    fn from_keys(keys: &[u32]) -> Tree234<u32> {
        let mut tree = Tree234::new();
        for key in keys {
            tree.insert(*key);
            assert_eq!(tree.validate(), Ok(()));
        }
        tree
    }

    fn counts(two: usize, three: usize, four: usize) -> NodeCounts {
        NodeCounts { two, three, four }
    }

    #[test]
    fn test_empty() {
        let mut tree: Tree234<u32> = Tree234::new();
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.render(), "");
        assert_eq!(tree.status(), NodeCounts::default());
        assert!(!tree.find(&1));
        tree.delete(&1);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_root_split() {
        let mut tree = from_keys(&[10, 20, 30]);
        assert_eq!(tree.status(), counts(0, 0, 1));
        assert_eq!(tree.height(), 0);

        tree.insert(5);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.status(), counts(2, 1, 0));
    }

    #[test]
    fn test_insert_duplicate_keeps_full_root() {
        let mut tree = from_keys(&[10, 20, 30]);
        tree.insert(20);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.status(), counts(0, 0, 1));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_insert_duplicate_of_promoted_key() {
        let mut tree = from_keys(&[10, 20, 30, 40, 50, 60]);
        let before = tree.render();
        for key in &[10, 20, 30, 40, 50, 60] {
            tree.insert(*key);
        }
        assert_eq!(tree.render(), before);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_scenario() {
        let mut tree = from_keys(&[10, 20, 30, 5, 15, 25, 35]);
        assert_eq!(
            tree.render(),
            "(5, four) (10, four) (15, four) (20, two) (25, four) (30, four) (35, four) ",
        );
        assert_eq!(tree.status(), counts(1, 0, 2));
        assert!(tree.find(&15));
        assert!(!tree.find(&40));
        assert_eq!(tree.height(), 1);

        tree.delete(&15);
        assert_eq!(tree.validate(), Ok(()));
        assert!(!tree.find(&15));
        assert_eq!(tree.status(), counts(1, 1, 1));

        for key in &[40, 45, 50, 55] {
            tree.insert(*key);
            assert_eq!(tree.validate(), Ok(()));
        }
        assert_eq!(tree.height(), 2);
        assert_eq!(
            tree.render(),
            "(5, three) (10, three) (20, two) (25, two) (30, two) (35, two) (40, two) \
             (45, four) (50, four) (55, four) ",
        );

        for key in &[10, 20, 30] {
            tree.delete(key);
            assert_eq!(tree.validate(), Ok(()));
        }
        assert_eq!(
            tree.render(),
            "(5, two) (25, three) (35, two) (40, three) (45, four) (50, four) (55, four) ",
        );
        assert_eq!(tree.status(), counts(2, 1, 1));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_delete_internal_uses_predecessor() {
        let mut tree = from_keys(&[10, 20, 30, 5, 15, 25, 35]);
        tree.delete(&20);
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(
            tree.render(),
            "(5, three) (10, three) (15, two) (25, four) (30, four) (35, four) ",
        );
    }

    #[test]
    fn test_delete_absent() {
        let mut tree = from_keys(&[10, 20, 30, 5]);
        let before = tree.render();
        tree.delete(&7);
        assert_eq!(tree.render(), before);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_delete_all_shrinks() {
        let keys = (0..100).collect::<Vec<u32>>();
        let mut tree = from_keys(&keys);
        assert!(tree.height() > 1);
        for key in keys.iter().step_by(3).chain(keys.iter()) {
            tree.delete(key);
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.status(), NodeCounts::default());
    }

    #[test]
    fn test_min_max() {
        let tree = from_keys(&[10, 20, 30, 5, 15, 25, 35]);
        assert_eq!(tree.min(), Some(&5));
        assert_eq!(tree.max(), Some(&35));
    }
}
