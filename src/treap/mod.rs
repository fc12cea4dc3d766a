//! Probabilistic binary search tree where each node also maintains the heap invariant.
//!
//! Every node caches the size and the depth of its subtree. Both are recomputed on the way back
//! up from each split and merge, so reading them never walks the tree.

mod map;
mod node;
pub mod tree;

pub use self::map::{Treap, TreapIntoIter, TreapIter};
pub use self::node::Node;
