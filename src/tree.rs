//! The public [`Tree`] type and its core operations.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for x in [33, 20, 30, 40, 50, 41, 31, 21, 11] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.to_string(), "in-order: 11 20 21 30 31 33 40 41 50\n");
//! assert_eq!(tree.find_min().unwrap(), &11);
//! assert_eq!(tree.find_max().unwrap(), &50);
//!
//! tree.remove(&33);
//! assert!(!tree.contains(&33));
//!
//! tree.make_empty();
//! assert!(tree.find_min().unwrap_err().is_underflow());
//! ```

use std::fmt;
use std::io;

use crate::equality::ElementEquality;
use crate::error::{Error, Result};
use crate::node::{self, Link, Node};

/// An unbalanced Binary Search Tree holding unique, ordered elements.
///
/// No rebalancing ever happens, so the height depends entirely on insertion order: inserting
/// already sorted elements produces a tree shaped like a linked list.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) equality: ElementEquality,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("equality", &self.equality)
            .finish()
    }
}

/// `"Empty tree"` for an empty tree, otherwise `"in-order: "` followed by the elements in
/// ascending order separated by single spaces and a trailing newline.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty tree");
        }

        f.write_str("in-order:")?;
        for element in self.in_order() {
            write!(f, " {}", element)?;
        }
        f.write_str("\n")
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` using [`ElementEquality::Identity`].
    pub fn new() -> Self {
        Self::with_equality(ElementEquality::default())
    }

    /// Generates a new, empty `Tree` whose [`equals`][Self::equals] and
    /// [`is_mirror`][Self::is_mirror] compare elements with `equality`.
    pub fn with_equality(equality: ElementEquality) -> Self {
        Self {
            root: None,
            equality,
        }
    }

    /// The element comparison policy of this tree.
    pub fn equality(&self) -> ElementEquality {
        self.equality
    }

    /// Changes the element comparison policy of this tree.
    pub fn set_equality(&mut self, equality: ElementEquality) {
        self.equality = equality;
    }

    /// Inserts `x` into the tree. Inserting an element that compares equal to one already in
    /// the tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, x: T)
    where
        T: Ord,
    {
        self.root = node::insert(self.root.take(), x);
    }

    /// Removes the element equal to `x` from the tree. Nothing happens if it isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&2);
    /// tree.remove(&42);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &3]);
    /// ```
    pub fn remove(&mut self, x: &T)
    where
        T: Ord,
    {
        self.root = node::remove(self.root.take(), x);
    }

    /// Returns whether an element equal to `x` is in the tree.
    pub fn contains(&self, x: &T) -> bool
    where
        T: Ord,
    {
        node::contains(self.root.as_deref(), x)
    }

    /// Returns the smallest element, or [`Error::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T> {
        self.root_node().map(|root| &*root.min().element)
    }

    /// Returns the largest element, or [`Error::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        self.root_node().map(|root| &*root.max().element)
    }

    /// Returns whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    pub fn make_empty(&mut self) {
        log::debug!("emptying tree");
        self.release();
    }

    /// Returns every element in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.collect_in_order(&mut out);
        }
        out
    }

    /// Writes the elements to `out` in ascending order, one per line, or `"Empty tree"` if there
    /// are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut out = Vec::new();
    /// Tree::<i32>::new().print_tree(&mut out).unwrap();
    /// assert_eq!(out, b"Empty tree\n");
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.print_tree(&mut out).unwrap();
    /// assert_eq!(out, b"1\n2\n3\n");
    /// ```
    pub fn print_tree<W>(&self, mut out: W) -> Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        if self.is_empty() {
            writeln!(out, "Empty tree")?;
        }
        for element in self.in_order() {
            writeln!(out, "{}", element)?;
        }
        Ok(())
    }

    /// The root node, or [`Error::Underflow`] for operations that need one.
    pub(crate) fn root_node(&self) -> Result<&Node<T>> {
        self.root.as_deref().ok_or(Error::Underflow)
    }

    /// Drops every node iteratively so list-shaped trees can't overflow the stack.
    fn release(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
