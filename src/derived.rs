//! Structural operations built on the same node shape as the core ones: counting, shape and
//! value comparisons, copying, mirroring, single rotations, and level-order traversal.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::rc::Rc;

use crate::equality::ElementEquality;
use crate::error::Result;
use crate::node::{Link, Node};
use crate::tree::Tree;

/// The outcome of [`Tree::rotate_right`] or [`Tree::rotate_left`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// The target node was found and rotated.
    Rotated,
    /// The target node was found but has no child on the side that would move up. For example,
    /// a leaf can't be rotated in either direction.
    NoPivot,
    /// The restricted search didn't reach the target, so nothing changed.
    NotFound,
}

impl Rotation {
    /// Whether the tree was restructured.
    pub fn is_rotated(self) -> bool {
        self == Self::Rotated
    }
}

/// Which child moves up during a rotation.
#[derive(Clone, Copy, Debug)]
enum Direction {
    /// The left child moves up.
    Right,
    /// The right child moves up.
    Left,
}

impl<T> Tree<T> {
    /// Returns how many elements are in the tree.
    pub fn node_count(&self) -> usize {
        fn count<T>(link: &Link<T>) -> usize {
            match link.as_deref() {
                None => 0,
                Some(n) => 1 + count(&n.left) + count(&n.right),
            }
        }
        count(&self.root)
    }

    /// Returns the number of edges on the longest path from the root down to a leaf. A single
    /// node has height 0 and an empty tree has height -1.
    pub fn height(&self) -> isize {
        fn height<T>(link: &Link<T>) -> isize {
            match link.as_deref() {
                None => -1,
                Some(n) => 1 + height(&n.left).max(height(&n.right)),
            }
        }
        height(&self.root)
    }

    /// Returns whether every node has either zero or two children.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`][crate::Error::Underflow] if the tree is empty.
    pub fn is_full(&self) -> Result<bool> {
        fn full<T>(node: &Node<T>) -> bool {
            match (node.left.as_deref(), node.right.as_deref()) {
                (None, None) => true,
                (Some(left), Some(right)) => full(left) && full(right),
                _ => false,
            }
        }
        self.root_node().map(full)
    }

    /// Returns whether `other` has the same shape as this tree, ignoring the elements.
    pub fn compare_structure(&self, other: &Self) -> bool {
        fn same_shape<T>(a: &Link<T>, b: &Link<T>) -> bool {
            match (a.as_deref(), b.as_deref()) {
                (None, None) => true,
                (Some(a), Some(b)) => same_shape(&a.left, &b.left) && same_shape(&a.right, &b.right),
                _ => false,
            }
        }
        same_shape(&self.root, &other.root)
    }

    /// Returns whether `other` has the same shape as this tree and every pair of corresponding
    /// elements matches under this tree's [`ElementEquality`].
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let copy = tree.copy().unwrap();
    ///
    /// assert!(tree.equals(&copy));
    /// assert!(Tree::<i32>::new().equals(&Tree::new()));
    /// ```
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        fn equals<T: PartialEq>(eq: ElementEquality, a: &Link<T>, b: &Link<T>) -> bool {
            match (a.as_deref(), b.as_deref()) {
                (None, None) => true,
                (Some(a), Some(b)) => {
                    eq.matches(&a.element, &b.element)
                        && equals(eq, &a.left, &b.left)
                        && equals(eq, &a.right, &b.right)
                }
                _ => false,
            }
        }
        equals(self.equality, &self.root, &other.root)
    }

    /// Returns whether `other` is the left-right reflection of this tree: at every level this
    /// tree's left subtree mirrors `other`'s right subtree and vice versa, with elements matching
    /// under this tree's [`ElementEquality`].
    pub fn is_mirror(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        fn is_mirror<T: PartialEq>(eq: ElementEquality, a: &Link<T>, b: &Link<T>) -> bool {
            match (a.as_deref(), b.as_deref()) {
                (None, None) => true,
                (Some(a), Some(b)) => {
                    eq.matches(&a.element, &b.element)
                        && is_mirror(eq, &a.left, &b.right)
                        && is_mirror(eq, &a.right, &b.left)
                }
                _ => false,
            }
        }
        is_mirror(self.equality, &self.root, &other.root)
    }

    /// Returns a new tree with new nodes in the same shape, sharing this tree's elements.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`][crate::Error::Underflow] if the tree is empty, rather than an empty
    /// copy.
    pub fn copy(&self) -> Result<Self> {
        fn copy<T>(node: &Node<T>) -> Box<Node<T>> {
            Node::with_children(
                Rc::clone(&node.element),
                node.left.as_deref().map(copy),
                node.right.as_deref().map(copy),
            )
        }
        let root = self.root_node()?;
        Ok(self.with_root(copy(root)))
    }

    /// Returns a new tree that is the left-right reflection of this one, sharing this tree's
    /// elements. The result is ordered descending from left to right.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`][crate::Error::Underflow] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mirror = tree.mirror().unwrap();
    ///
    /// assert_eq!(mirror.in_order(), vec![&3, &2, &1]);
    /// assert!(tree.is_mirror(&mirror));
    /// ```
    pub fn mirror(&self) -> Result<Self> {
        fn mirror<T>(node: &Node<T>) -> Box<Node<T>> {
            Node::with_children(
                Rc::clone(&node.element),
                node.right.as_deref().map(mirror),
                node.left.as_deref().map(mirror),
            )
        }
        let root = self.root_node()?;
        Ok(self.with_root(mirror(root)))
    }

    /// Rotates the node holding `x` to the right, moving its left child up into its place.
    ///
    /// The node is located with a one-level lookahead walk: the root is checked directly, and
    /// from then on each step compares `x` against the child on the side `x` falls on before
    /// moving down to it. A missing child on that side ends the search with
    /// [`Rotation::NotFound`].
    ///
    /// ```text
    ///       x               l
    ///      / \             / \
    ///     l   c  rotate-> a   x
    ///    / \                 / \
    ///   a   b               b   c
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{Rotation, Tree};
    ///
    /// let mut tree: Tree<_> = [33, 20, 40, 11, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.rotate_right(&20), Rotation::Rotated);
    /// assert_eq!(tree.levels().unwrap(), vec![vec![&33], vec![&11, &40], vec![&20], vec![&30]]);
    ///
    /// assert_eq!(tree.rotate_right(&99), Rotation::NotFound);
    /// assert_eq!(tree.rotate_right(&40), Rotation::NoPivot);
    /// ```
    pub fn rotate_right(&mut self, x: &T) -> Rotation
    where
        T: Ord,
    {
        self.rotate(x, Direction::Right)
    }

    /// Rotates the node holding `x` to the left, moving its right child up into its place. The
    /// node is located the same way as in [`rotate_right`][Self::rotate_right].
    pub fn rotate_left(&mut self, x: &T) -> Rotation
    where
        T: Ord,
    {
        self.rotate(x, Direction::Left)
    }

    /// The text reported after a rotation: the tree's in-order form if it was
    /// [`Rotated`][Rotation::Rotated], otherwise a fixed message.
    pub fn rotation_report(&self, rotation: Rotation) -> String
    where
        T: fmt::Display,
    {
        match rotation {
            Rotation::Rotated => self.to_string(),
            Rotation::NoPivot => "no rotation can be done".to_string(),
            Rotation::NotFound => "there is no rotation".to_string(),
        }
    }

    /// Returns the elements grouped by depth, shallowest first, each level ordered left to right.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`][crate::Error::Underflow] if the tree is empty.
    pub fn levels(&self) -> Result<Vec<Vec<&T>>> {
        let mut levels = Vec::new();
        let mut queue = VecDeque::from([self.root_node()?]);

        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                level.push(&*node.element);
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
            levels.push(level);
        }

        Ok(levels)
    }

    /// Writes the tree to `out` level by level, each element followed by a space and each level
    /// followed by a newline.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`][crate::Error::Underflow] if the tree is empty, or
    /// [`Error::Io`][crate::Error::Io] if writing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.print_levels(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"2 \n1 3 \n");
    /// ```
    pub fn print_levels<W>(&self, mut out: W) -> Result<()>
    where
        T: fmt::Display,
        W: io::Write,
    {
        for level in self.levels()? {
            for element in level {
                write!(out, "{} ", element)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// A tree with this tree's policy rooted at `root`.
    fn with_root(&self, root: Box<Node<T>>) -> Self {
        let mut tree = Self::with_equality(self.equality);
        tree.root = Some(root);
        tree
    }

    fn rotate(&mut self, x: &T, direction: Direction) -> Rotation
    where
        T: Ord,
    {
        let at_root = self.root.as_deref().map_or(false, |root| *x == *root.element);
        let rotation = if at_root {
            rotate_link(&mut self.root, direction)
        } else if let Some(root) = self.root.as_deref_mut() {
            find_and_rotate(root, x, direction)
        } else {
            Rotation::NotFound
        };
        log::debug!("{:?} rotation: {:?}", direction, rotation);
        rotation
    }
}

/// Walks down from `node`, checking the child on `x`'s side for a match before descending into
/// it, and rotates that child in place once found.
fn find_and_rotate<T>(node: &mut Node<T>, x: &T, direction: Direction) -> Rotation
where
    T: Ord,
{
    let child = match x.cmp(&node.element) {
        Ordering::Less => &mut node.left,
        Ordering::Greater => &mut node.right,
        // Callers only descend past nodes that didn't match.
        Ordering::Equal => return Rotation::NotFound,
    };

    let found = match child.as_deref() {
        None => return Rotation::NotFound,
        Some(c) => *x == *c.element,
    };
    if found {
        return rotate_link(child, direction);
    }

    match child.as_deref_mut() {
        Some(c) => find_and_rotate(c, x, direction),
        None => Rotation::NotFound,
    }
}

/// Performs a single rotation on the subtree owned by `link`, replacing it with the new subtree
/// root. The subtree is left untouched if the child that would move up is missing.
fn rotate_link<T>(link: &mut Link<T>, direction: Direction) -> Rotation {
    let Some(mut node) = link.take() else {
        return Rotation::NotFound;
    };

    let pivot = match direction {
        Direction::Right => node.left.take(),
        Direction::Left => node.right.take(),
    };
    let Some(mut pivot) = pivot else {
        *link = Some(node);
        return Rotation::NoPivot;
    };

    match direction {
        Direction::Right => {
            node.left = pivot.right.take();
            pivot.right = Some(node);
        }
        Direction::Left => {
            node.right = pivot.left.take();
            pivot.left = Some(node);
        }
    }
    *link = Some(pivot);
    Rotation::Rotated
}
