//! How [`equals`][crate::Tree::equals] and [`is_mirror`][crate::Tree::is_mirror] decide whether
//! two corresponding elements match.
//!
//! Nodes store their elements behind an [`Rc`], and [`copy`][crate::Tree::copy] and
//! [`mirror`][crate::Tree::mirror] share those `Rc`s with the source tree. Under the default
//! [`ElementEquality::Identity`] policy two elements only match when they are the *same*
//! allocation, so a tree equals its copy but not an independently built tree holding equal
//! values. Switch to [`ElementEquality::Value`] to compare with [`PartialEq`] instead.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{ElementEquality, Tree};
//!
//! let a: Tree<i32> = [2, 1, 3].into_iter().collect();
//! let b: Tree<i32> = [2, 1, 3].into_iter().collect();
//!
//! // Same values, different allocations.
//! assert!(!a.equals(&b));
//!
//! let mut a = a;
//! a.set_equality(ElementEquality::Value);
//! assert!(a.equals(&b));
//! ```

use std::rc::Rc;

/// The element comparison strategy used by structural equality checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementEquality {
    /// Elements match only if they are the same shared allocation.
    #[default]
    Identity,
    /// Elements match if they compare equal with [`PartialEq`].
    Value,
}

impl ElementEquality {
    /// Returns whether `a` and `b` match under this policy.
    pub(crate) fn matches<T>(self, a: &Rc<T>, b: &Rc<T>) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Identity => Rc::ptr_eq(a, b),
            Self::Value => a == b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_requires_same_allocation() {
        let a = Rc::new(5);
        let b = Rc::new(5);

        assert!(ElementEquality::Identity.matches(&a, &Rc::clone(&a)));
        assert!(!ElementEquality::Identity.matches(&a, &b));
    }

    #[test]
    fn value_compares_contents() {
        let a = Rc::new("x".to_string());
        let b = Rc::new("x".to_string());
        let c = Rc::new("y".to_string());

        assert!(ElementEquality::Value.matches(&a, &b));
        assert!(!ElementEquality::Value.matches(&a, &c));
    }

    #[test]
    fn identity_is_the_default() {
        assert_eq!(ElementEquality::default(), ElementEquality::Identity);
    }
}
