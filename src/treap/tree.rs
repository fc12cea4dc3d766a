//! Ownership-passing primitives over raw treap subtrees.
//!
//! Every function here consumes the trees it restructures and hands back the result, so a node
//! is moved between trees but never copied or dropped.

use crate::treap::node::Node;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// Returns the number of nodes in `tree`. An absent tree has a size of 0.
pub fn size<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(ref node) => node.size,
        None => 0,
    }
}

/// Returns the height of `tree`. An absent tree has a depth of 0.
pub fn depth<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(ref node) => node.depth,
        None => 0,
    }
}

/// Splits `tree` into the nodes with keys less than or equal to `key` and the nodes with keys
/// strictly greater than `key`.
///
/// # Examples
///
/// ```
/// use treap_layout::treap::tree::{self, Tree};
/// use treap_layout::treap::Node;
///
/// let mut t: Tree<u32, ()> = None;
/// t = tree::insert(t, Node::new(1, (), 0.25));
/// t = tree::insert(t, Node::new(3, (), 0.75));
///
/// let (left, right) = tree::split(t, &1);
/// assert_eq!(tree::size(&left), 1);
/// assert_eq!(tree::size(&right), 1);
/// ```
pub fn split<T: Ord, U>(tree: Tree<T, U>, key: &T) -> (Tree<T, U>, Tree<T, U>) {
    match tree {
        Some(mut node) => {
            if node.key <= *key {
                let (left, right) = split(node.right.take(), key);
                node.right = left;
                node.update();
                (Some(node), right)
            } else {
                let (left, right) = split(node.left.take(), key);
                node.left = right;
                node.update();
                (left, Some(node))
            }
        },
        None => (None, None),
    }
}

/// Merges two trees into one. Every key in `l_tree` must be less than or equal to every key in
/// `r_tree`; this is only checked in debug builds.
///
/// When both roots have the same priority, the root of `r_tree` becomes the new root.
///
/// # Panics
///
/// Panics in debug builds if the keys of the two trees overlap.
pub fn merge<T: Ord, U>(l_tree: Tree<T, U>, r_tree: Tree<T, U>) -> Tree<T, U> {
    debug_assert!(
        is_ordered_pair(&l_tree, &r_tree),
        "merge requires every key on the left to be at most every key on the right"
    );
    join(l_tree, r_tree)
}

fn join<T, U>(l_tree: Tree<T, U>, r_tree: Tree<T, U>) -> Tree<T, U> {
    match (l_tree, r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                l_node.right = join(l_node.right.take(), Some(r_node));
                l_node.update();
                Some(l_node)
            } else {
                r_node.left = join(Some(l_node), r_node.left.take());
                r_node.update();
                Some(r_node)
            }
        },
        (new_tree, None) | (None, new_tree) => new_tree,
    }
}

/// Inserts `new_node` into `tree` after every node with an equal key. Its final position is
/// decided by its priority.
pub fn insert<T: Ord, U>(tree: Tree<T, U>, new_node: Node<T, U>) -> Tree<T, U> {
    let (left, right) = split(tree, &new_node.key);
    let left = join(left, Some(Box::new(new_node)));
    join(left, right)
}

/// Returns the smallest key in `tree`, or `None` if the tree is empty.
pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

/// Returns the largest key in `tree`, or `None` if the tree is empty.
pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

fn is_ordered_pair<T: Ord, U>(l_tree: &Tree<T, U>, r_tree: &Tree<T, U>) -> bool {
    match (max(l_tree), min(r_tree)) {
        (Some(l_max), Some(r_min)) => l_max <= r_min,
        _ => true,
    }
}
