//! The owned node graph behind a [`Tree`][crate::Tree].
//!
//! Every routine that can change the shape of a subtree takes the subtree's [`Link`] by value
//! and returns the (possibly new) link that should take its place. A parent re-attaches the
//! result as its child, so inserting into or removing from an empty position is observable at
//! every level of the recursion.

use std::cmp::Ordering;
use std::rc::Rc;

/// An optional, exclusively owned subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node. It owns both of its children and has no pointer back to its parent.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: Rc<T>,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf holding `element`.
    pub(crate) fn leaf(element: Rc<T>) -> Box<Self> {
        Self::with_children(element, None, None)
    }

    pub(crate) fn with_children(element: Rc<T>, left: Link<T>, right: Link<T>) -> Box<Self> {
        Box::new(Self {
            element,
            left,
            right,
        })
    }

    /// The leftmost node of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Appends the elements of this subtree to `out` in ascending order.
    pub(crate) fn collect_in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left.as_deref() {
            left.collect_in_order(out);
        }
        out.push(&self.element);
        if let Some(right) = self.right.as_deref() {
            right.collect_in_order(out);
        }
    }
}

/// Inserts `element` into the subtree rooted at `link`, returning the new subtree root. An
/// element comparing equal to one already present is dropped.
pub(crate) fn insert<T>(link: Link<T>, element: T) -> Link<T>
where
    T: Ord,
{
    match link {
        None => Some(Node::leaf(Rc::new(element))),
        Some(mut node) => {
            match element.cmp(&node.element) {
                Ordering::Less => node.left = insert(node.left.take(), element),
                Ordering::Greater => node.right = insert(node.right.take(), element),
                Ordering::Equal => log::trace!("ignoring duplicate element"),
            }
            Some(node)
        }
    }
}

/// Removes the element equal to `x` from the subtree rooted at `link`, returning the new subtree
/// root. The subtree is returned unchanged if `x` isn't present.
///
/// A node with two children is not unlinked itself: it takes the element of its in-order
/// successor (the minimum of its right subtree) and that successor, which has no left child, is
/// removed from the right subtree instead.
pub(crate) fn remove<T>(link: Link<T>, x: &T) -> Link<T>
where
    T: Ord,
{
    let Some(mut node) = link else {
        log::trace!("element to remove not found");
        return None;
    };

    match x.cmp(&node.element) {
        Ordering::Less => {
            node.left = remove(node.left.take(), x);
            Some(node)
        }
        Ordering::Greater => {
            node.right = remove(node.right.take(), x);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let successor = Rc::clone(&right.min().element);
                node.right = remove(Some(right), &*successor);
                node.left = Some(left);
                node.element = successor;
                Some(node)
            }
            (left, right) => left.or(right),
        },
    }
}

/// Whether the subtree rooted at `link` holds an element equal to `x`.
pub(crate) fn contains<T>(link: Option<&Node<T>>, x: &T) -> bool
where
    T: Ord,
{
    let mut current = link;
    while let Some(node) = current {
        current = match x.cmp(&node.element) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Equal => return true,
            Ordering::Greater => node.right.as_deref(),
        };
    }
    false
}
