use crate::treap::tree::{self, Tree};
use std::cmp;

/// A struct representing an internal node of a treap.
///
/// Fields are only writable from inside the `treap` module; everything outside reads them
/// through the accessors below.
pub struct Node<T, U> {
    pub(crate) key: T,
    pub(crate) value: U,
    pub(crate) priority: f64,
    pub(crate) size: usize,
    pub(crate) depth: usize,
    pub(crate) left: Tree<T, U>,
    pub(crate) right: Tree<T, U>,
}

impl<T, U> Node<T, U> {
    /// Constructs a detached leaf with the given priority.
    pub fn new(key: T, value: U, priority: f64) -> Self {
        Node {
            key,
            value,
            priority,
            size: 1,
            depth: 1,
            left: None,
            right: None,
        }
    }

    // must be called after every change to `left` or `right`
    pub(crate) fn update(&mut self) {
        let Node {
            ref mut size,
            ref mut depth,
            ref left,
            ref right,
            ..
        } = self;
        *size = tree::size(left) + tree::size(right) + 1;
        *depth = cmp::max(tree::depth(left), tree::depth(right)) + 1;
    }

    /// Returns the key that orders this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Returns the payload stored with the key.
    pub fn value(&self) -> &U {
        &self.value
    }

    /// Returns the heap priority drawn when the node was created. It never changes.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Returns the root of the left subtree, whose keys are all less than or equal to this key.
    pub fn left(&self) -> Option<&Node<T, U>> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the root of the right subtree, whose keys are all greater than or equal to this
    /// key.
    pub fn right(&self) -> Option<&Node<T, U>> {
        self.right.as_ref().map(|node| &**node)
    }

    /// Returns the number of nodes in the subtree rooted at this node, including itself.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the height of the subtree rooted at this node. A leaf has a depth of 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the in-order rank of this node within its own subtree.
    pub fn rank(&self) -> usize {
        tree::size(&self.left)
    }
}
