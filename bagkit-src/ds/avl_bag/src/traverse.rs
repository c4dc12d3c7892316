use std::iter::FusedIterator;

use crate::node::{Link, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left, then right.
    Pre,
    /// Left, node, right. Ascending.
    In,
    /// Left, right, then node.
    Post,
}

pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

pub struct PostOrder<'a, T> {
    // (node, children already pushed)
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

/// Distinct elements in ascending order, each with its multiplicity.
pub struct Entries<'a, T>(InOrder<'a, T>);

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self { stack: root.as_deref().into_iter().collect(), remaining: len }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(node)
    }
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut res = Self { stack: vec![], remaining: len };
        res.push_left_spine(root);
        res
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(node)
    }
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let stack = root.as_deref().map(|node| (node, false)).into_iter();
        Self { stack: stack.collect(), remaining: len }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(node);
            }
            self.stack.push((node, true));
            let unexpanded = |child: &'a Node<T>| (child, false);
            self.stack.extend(node.right.as_deref().map(unexpanded));
            self.stack.extend(node.left.as_deref().map(unexpanded));
        }
    }
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self(InOrder::new(root, len))
    }
}

macro_rules! impl_traversal {
    ( $($iter:ident)* ) => { $(
        impl<'a, T> Iterator for $iter<'a, T> {
            type Item = &'a T;
            fn next(&mut self) -> Option<&'a T> {
                self.next_node().map(|node| &node.val)
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.remaining, Some(self.remaining))
            }
        }
        impl<T> ExactSizeIterator for $iter<'_, T> {}
        impl<T> FusedIterator for $iter<'_, T> {}
    )* };
}

impl_traversal! { PreOrder InOrder PostOrder }

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a T, usize);
    fn next(&mut self) -> Option<(&'a T, usize)> {
        self.0.next_node().map(|node| (&node.val, node.amount))
    }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
impl<T> FusedIterator for Entries<'_, T> {}
