use thiserror::Error;

use crate::node::Link;

/// The first broken invariant found by [`AvlBag::check_invariants`].
///
/// Positions are in-order indices among the distinct elements.
///
/// [`AvlBag::check_invariants`]: crate::AvlBag::check_invariants
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("in-order sequence is not strictly increasing at position {pos}")]
    Unordered { pos: usize },
    #[error("node at position {pos} has skew {skew}")]
    Unbalanced { pos: usize, skew: isize },
    #[error("node at position {pos} caches height {cached}, actual {actual}")]
    StaleHeight { pos: usize, cached: isize, actual: isize },
    #[error("node at position {pos} has multiplicity zero")]
    ZeroAmount { pos: usize },
    #[error("{recorded} distinct elements recorded, {reachable} reachable")]
    CountMismatch { recorded: usize, reachable: usize },
}

struct Checker<'a, T> {
    pos: usize,
    prev: Option<&'a T>,
}

impl<'a, T: Ord> Checker<'a, T> {
    // returns the recomputed level count of the subtree
    fn walk(&mut self, link: &'a Link<T>) -> Result<u8, InvariantError> {
        let Some(node) = link else { return Ok(0) };

        let left = self.walk(&node.left)?;
        let pos = self.pos;
        if self.prev.is_some_and(|prev| prev >= &node.val) {
            return Err(InvariantError::Unordered { pos });
        }
        if node.amount == 0 {
            return Err(InvariantError::ZeroAmount { pos });
        }
        self.prev = Some(&node.val);
        self.pos += 1;
        let right = self.walk(&node.right)?;

        let skew = left as isize - right as isize;
        if !(-1..=1).contains(&skew) {
            return Err(InvariantError::Unbalanced { pos, skew });
        }
        let actual = 1 + left.max(right);
        if node.levels != actual {
            return Err(InvariantError::StaleHeight {
                pos,
                cached: node.levels as isize - 1,
                actual: actual as isize - 1,
            });
        }
        Ok(actual)
    }
}

pub(crate) fn check<T: Ord>(
    root: &Link<T>,
    len: usize,
) -> Result<(), InvariantError> {
    let mut checker = Checker { pos: 0, prev: None };
    checker.walk(root)?;
    if checker.pos != len {
        return Err(InvariantError::CountMismatch {
            recorded: len,
            reachable: checker.pos,
        });
    }
    Ok(())
}
