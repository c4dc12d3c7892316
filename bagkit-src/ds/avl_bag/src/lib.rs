//! A multiset on top of an AVL tree.
//!
//! Equal insertions bump a counter on the existing node instead of adding
//! a node, so the tree holds one node per distinct element.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    }};
}

mod check;
mod node;
mod traverse;

use std::{borrow::Borrow, fmt};

pub use check::InvariantError;
pub use traverse::{Entries, InOrder, Order, PostOrder, PreOrder};

use node::{Link, Step};

pub struct AvlBag<T> {
    root: Link<T>,
    len: usize,
}

impl<T> AvlBag<T> {
    pub fn new() -> Self { Self { root: None, len: 0 } }

    /// The number of distinct elements.
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// The number of insertions, i.e. the sum of all multiplicities.
    pub fn total(&self) -> usize { self.entries().map(|(_, k)| k).sum() }

    /// The height of the tree, `-1` if empty and `0` for a single node.
    pub fn height(&self) -> isize { node::levels(&self.root) as isize - 1 }

    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root, self.len)
    }
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root, self.len)
    }
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.root, self.len)
    }
    pub fn iter(&self) -> InOrder<'_, T> { self.inorder() }
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(&self.root, self.len)
    }

    /// Calls `visit` once per distinct element, in the given order.
    pub fn traverse(&self, order: Order, visit: impl FnMut(&T)) {
        match order {
            Order::Pre => self.preorder().for_each(visit),
            Order::In => self.inorder().for_each(visit),
            Order::Post => self.postorder().for_each(visit),
        }
    }
}

impl<T: Ord> AvlBag<T> {
    pub fn insert(&mut self, elt: T) { self.insert_n(elt, 1) }

    /// Inserts `n` copies of `elt` at once. Does nothing if `n == 0`.
    pub fn insert_n(&mut self, elt: T, n: usize) {
        if n == 0 {
            return;
        }
        if let Step::Created(_) = node::insert(&mut self.root, elt, n) {
            self.len += 1;
        }
    }

    pub fn contains<Q>(&self, elt: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(&self.root, elt).is_some()
    }

    /// The multiplicity of `elt`, zero if absent.
    pub fn amount<Q>(&self, elt: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(&self.root, elt).map_or(0, |node| node.amount)
    }

    /// Checks ordering, balance, cached heights, multiplicities, and the
    /// distinct-element count. Reports the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        check::check(&self.root, self.len)
    }
}

impl<T: Ord + Clone> AvlBag<T> {
    // Shapes may differ from `source`; only the contents are reproduced.
    fn replay(&mut self, source: &Self) {
        let mut nodes = source.preorder();
        while let Some(node) = nodes.next_node() {
            self.insert_n(node.val.clone(), node.amount);
        }
    }
}

impl<T> Default for AvlBag<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Ord + Clone> Clone for AvlBag<T> {
    fn clone(&self) -> Self {
        let mut res = Self::new();
        res.replay(self);
        res
    }
    fn clone_from(&mut self, source: &Self) {
        *self = Self::new();
        self.replay(source);
    }
}

impl<T: PartialEq> PartialEq for AvlBag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.entries().eq(other.entries())
    }
}

impl<T: Eq> Eq for AvlBag<T> {}

impl<T: Ord> Extend<T> for AvlBag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.insert(elt));
    }
}

impl<T: Ord> FromIterator<T> for AvlBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlBag<T> {
    fn from(arr: [T; N]) -> Self { arr.into_iter().collect() }
}

impl<'a, T> IntoIterator for &'a AvlBag<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;
    fn into_iter(self) -> InOrder<'a, T> { self.inorder() }
}

impl<T: fmt::Debug> fmt::Debug for AvlBag<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.entries()).finish()
    }
}
