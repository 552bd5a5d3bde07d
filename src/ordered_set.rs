//! The operations shared by every balanced tree in this crate.

/// An ordered set of unique elements backed by a self-balancing search tree.
///
/// Every operation is total: inserting an element that is already present and deleting an element
/// that is absent are both no-ops. `find` takes `&mut self` because a splay tree restructures
/// itself on every lookup.
///
/// # Examples
///
/// ```
/// use balance_trees::{AvlTree, OrderedSet, RedBlackTree, SplayTree, Tree234};
///
/// fn fill<S: OrderedSet<u32>>(set: &mut S) {
///     for key in &[10, 5, 15, 3, 7] {
///         set.insert(*key);
///     }
///     set.delete(&5);
/// }
///
/// let mut avl = AvlTree::new();
/// let mut red_black = RedBlackTree::new();
/// let mut splay = SplayTree::new();
/// let mut tree = Tree234::new();
///
/// fill(&mut avl);
/// fill(&mut red_black);
/// fill(&mut splay);
/// fill(&mut tree);
///
/// assert!(avl.find(&7) && red_black.find(&7) && splay.find(&7) && tree.find(&7));
/// assert!(!avl.find(&5) && !red_black.find(&5) && !splay.find(&5) && !tree.find(&5));
/// assert_eq!(avl.len(), 4);
/// ```
pub trait OrderedSet<T>
where
    T: Ord,
{
    /// Inserts an element into the set. Does nothing if an equal element is already present.
    fn insert(&mut self, item: T);

    /// Returns `true` if an element equal to `item` is in the set.
    fn find(&mut self, item: &T) -> bool;

    /// Removes the element equal to `item`. Does nothing if no such element exists.
    fn delete(&mut self, item: &T);

    /// Returns the height of the tree: `-1` when empty, `0` for a single node.
    fn height(&self) -> i32;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
