use crate::arena::DEFAULT_CHUNK_SIZE;
use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::Tree;
use std::fmt::{self, Display, Write};

/// Node statistics of a red black tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RedBlackStatus {
    pub red: usize,
    pub black: usize,
    pub black_height: usize,
}

impl fmt::Display for RedBlackStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "R = {} B = {} BH = {}", self.red, self.black, self.black_height)
    }
}

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a binary search tree where every node is colored red or black. The root is
/// black, a red node never has a red child, and every path from a node down to an empty position
/// passes through the same number of black nodes. Nodes live in an arena and keep a handle to
/// their parent, which the insertion and removal fixups use to climb the tree.
///
/// # Examples
/// ```
/// use balance_trees::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for key in &[10, 20, 30, 15, 25, 5, 1, 7] {
///     tree.insert(*key);
/// }
///
/// assert_eq!(tree.render(), "(1,R)(5,B)(7,R)(10,R)(15,B)(20,B)(25,R)(30,B)");
/// assert_eq!(tree.status().to_string(), "R = 4 B = 4 BH = 2");
///
/// tree.delete(&15);
/// assert!(!tree.find(&15));
/// ```
pub struct RedBlackTree<T> {
    tree: Tree<T>,
    black_height: usize,
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackTree<T>` whose node arena grows by `chunk_size` nodes at
    /// a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackTree {
            tree: Tree::new(chunk_size),
            black_height: 0,
        }
    }

    fn update_black_height(&mut self) {
        self.black_height = self.tree.black_height(self.tree.root);
    }

    /// Inserts an element into the tree. Does nothing if the element is already present.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) {
        if self.tree.insert(item) {
            self.update_black_height();
        }
    }

    /// Checks if an element exists in the tree.
    pub fn find(&self, item: &T) -> bool {
        self.tree.find_node(item).is_some()
    }

    /// Removes an element from the tree. Does nothing if the element is absent.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, item: &T) {
        if self.tree.remove(item).is_some() {
            self.update_black_height();
        }
    }

    /// Returns the height of the tree, or `-1` if it is empty.
    pub fn height(&self) -> i32 {
        self.tree.height(self.tree.root)
    }

    /// Returns the number of black nodes on a path from the root to an empty position.
    pub fn black_height(&self) -> usize {
        self.black_height
    }

    /// Returns the color of the root, or `None` if the tree is empty.
    pub fn root_color(&self) -> Option<Color> {
        self.tree.root.map(|root| self.tree.nodes[root].color)
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.tree.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all elements.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.black_height = 0;
    }

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the number of red nodes, black nodes and the black height of the tree.
    ///
    /// # Examples
    /// ```
    /// use balance_trees::{RedBlackStatus, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.status(), RedBlackStatus { red: 2, black: 1, black_height: 1 });
    /// ```
    pub fn status(&self) -> RedBlackStatus {
        let mut red = 0;
        let mut black = 0;
        self.tree.count_colors(self.tree.root, &mut red, &mut black);
        RedBlackStatus {
            red,
            black,
            black_height: self.black_height,
        }
    }

    /// Returns every element in ascending order paired with the color of its node.
    pub fn colors(&self) -> Vec<(&T, Color)> {
        let mut ret = Vec::with_capacity(self.len());
        self.tree.colors(self.tree.root, &mut ret);
        ret
    }

    /// Renders the tree in ascending order as a concatenation of `(element,R)` and `(element,B)`
    /// pairs.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        let mut ret = String::new();
        for (element, color) in self.colors() {
            let _ = write!(ret, "({},{})", element, color.letter());
        }
        ret
    }

    /// Checks the search order, the parent links, the color invariants, the cached black height
    /// and the tracked length.
    pub fn validate(&self) -> Result<()> {
        if self.root_color() == Some(Color::Red) {
            return Err(Error::RedRoot);
        }
        let (actual, black_height) = self.tree.validate(self.tree.root, None, None, None)?;
        if actual != self.len() {
            return Err(Error::LengthMismatch { tracked: self.len(), actual });
        }
        if black_height != self.black_height {
            return Err(Error::BlackHeightMismatch {
                left: self.black_height,
                right: black_height,
            });
        }
        Ok(())
    }
}

impl<T> OrderedSet<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn insert(&mut self, item: T) {
        RedBlackTree::insert(self, item);
    }

    fn find(&mut self, item: &T) -> bool {
        RedBlackTree::find(self, item)
    }

    fn delete(&mut self, item: &T) {
        RedBlackTree::delete(self, item);
    }

    fn height(&self) -> i32 {
        RedBlackTree::height(self)
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }
}

impl<T> Default for RedBlackTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
