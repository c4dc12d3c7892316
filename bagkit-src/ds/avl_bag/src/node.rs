use std::{borrow::Borrow, cmp::Ordering};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) val: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) amount: usize,
    /// Number of nodes on the longest downward path; a leaf has 1.
    pub(crate) levels: u8,
}

/// What a recursive insertion did to the subtree it was called on.
pub(crate) enum Step {
    /// An equal value was already there; only its amount changed.
    Bumped,
    /// A node was created somewhere below. Carries the direction taken at
    /// the root of this subtree, `Equal` if that root is the new node.
    Created(Ordering),
}

#[derive(Clone, Copy, Debug)]
enum Case {
    Left,
    RightLeft,
    Right,
    LeftRight,
}

impl<T> Node<T> {
    fn new(val: T, amount: usize) -> Box<Self> {
        Box::new(Self { val, left: None, right: None, amount, levels: 1 })
    }

    fn recache(&mut self) {
        self.levels = 1 + levels(&self.left).max(levels(&self.right));
    }

    fn skew(&self) -> isize {
        levels(&self.left) as isize - levels(&self.right) as isize
    }
}

pub(crate) fn levels<T>(link: &Link<T>) -> u8 {
    link.as_ref().map_or(0, |node| node.levels)
}

pub(crate) fn find<'a, T, Q>(
    mut link: &'a Link<T>,
    elt: &Q,
) -> Option<&'a Node<T>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    while let Some(node) = link {
        link = match elt.cmp(node.val.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(node),
        };
    }
    None
}

//     root          pivot
//     /  \          /  \
//  pivot  c  ==>   a   root
//   / \                / \
//  a   b              b   c
fn rotate_right<T>(root: &mut Box<Node<T>>) {
    let Some(mut pivot) = root.left.take() else {
        unreachable!("right rotation without a left child");
    };
    root.left = pivot.right.take();
    root.recache();
    std::mem::swap(root, &mut pivot);
    root.right = Some(pivot);
    root.recache();
}

fn rotate_left<T>(root: &mut Box<Node<T>>) {
    let Some(mut pivot) = root.right.take() else {
        unreachable!("left rotation without a right child");
    };
    root.right = pivot.left.take();
    root.recache();
    std::mem::swap(root, &mut pivot);
    root.left = Some(pivot);
    root.recache();
}

fn classify(skew: isize, child_dir: Ordering) -> Option<Case> {
    if skew <= -2 {
        match child_dir {
            Ordering::Greater => Some(Case::Left),
            Ordering::Less => Some(Case::RightLeft),
            Ordering::Equal => None,
        }
    } else if skew >= 2 {
        match child_dir {
            Ordering::Less => Some(Case::Right),
            Ordering::Greater => Some(Case::LeftRight),
            Ordering::Equal => None,
        }
    } else {
        None
    }
}

fn rebalance<T>(node: &mut Box<Node<T>>, case: Case) {
    match case {
        Case::Left => rotate_left(node),
        Case::Right => rotate_right(node),
        Case::RightLeft => {
            match node.right.as_mut() {
                Some(right) => rotate_right(right),
                None => unreachable!(),
            }
            rotate_left(node);
        }
        Case::LeftRight => {
            match node.left.as_mut() {
                Some(left) => rotate_left(left),
                None => unreachable!(),
            }
            rotate_right(node);
        }
    }
    trace!("{case:?} rotation, subtree height now {}", node.levels - 1);
}

/// Inserts `amount` copies of `elt` below `link`.
///
/// At most one rotation happens per call, at the deepest unbalanced
/// ancestor. It restores the height that subtree had before the insertion,
/// so nothing above it needs checking.
pub(crate) fn insert<T: Ord>(
    link: &mut Link<T>,
    elt: T,
    amount: usize,
) -> Step {
    let mut corrected = false;
    insert_rec(link, elt, amount, &mut corrected)
}

fn insert_rec<T: Ord>(
    link: &mut Link<T>,
    elt: T,
    amount: usize,
    corrected: &mut bool,
) -> Step {
    let node = match link {
        Some(node) => node,
        None => {
            *link = Some(Node::new(elt, amount));
            return Step::Created(Ordering::Equal);
        }
    };

    let dir = elt.cmp(&node.val);
    let below = match dir {
        Ordering::Less => insert_rec(&mut node.left, elt, amount, corrected),
        Ordering::Greater => {
            insert_rec(&mut node.right, elt, amount, corrected)
        }
        Ordering::Equal => {
            node.amount += amount;
            return Step::Bumped;
        }
    };
    let Step::Created(child_dir) = below else {
        return Step::Bumped;
    };

    node.recache();
    if !*corrected {
        if let Some(case) = classify(node.skew(), child_dir) {
            rebalance(node, case);
            *corrected = true;
        }
    }
    Step::Created(dir)
}
