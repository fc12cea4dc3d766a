use crate::treap::node::Node;
use crate::treap::tree::{self, Tree};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::iter::FromIterator;

/// An ordered multimap implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a key, a value, and a priority. Keys in the left subtree of a node are less than
/// or equal to its key and keys in its right subtree are greater than or equal to it. The
/// priority of a node is greater than or equal to the priorities of its children. Priorities are
/// drawn uniformly from `[0, 1)` by the treap's own random number generator, so the expected
/// height of the tree is proportional to the logarithm of the number of keys.
///
/// Inserting a key that is already present adds another node rather than replacing the old
/// one. Every node caches the size and depth of its subtree so a layout pass can read them in
/// constant time.
///
/// # Examples
///
/// ```
/// use treap_layout::treap::Treap;
///
/// let mut t = Treap::new();
/// t.insert(20, ());
/// t.insert(2, ());
/// t.insert(2, ());
///
/// assert_eq!(t.size(), 3);
/// assert!(t.depth() >= 2);
/// assert_eq!(t.iter().map(|(key, _)| *key).collect::<Vec<u32>>(), vec![2, 2, 20]);
/// ```
pub struct Treap<T, U, R = XorShiftRng> {
    tree: Tree<T, U>,
    rng: R,
}

impl<T, U> Treap<T, U>
where
    T: Ord,
{
    /// Constructs a new, empty `Treap<T, U>` backed by an unseeded xorshift generator. Two
    /// treaps built this way draw the same sequence of priorities.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let t: Treap<u32, u32> = Treap::new();
    /// ```
    pub fn new() -> Self {
        Treap {
            tree: None,
            rng: XorShiftRng::new_unseeded(),
        }
    }

    /// Constructs a new, empty `Treap<T, U>` whose priorities come from a xorshift generator
    /// seeded with `seed`. The seed must not be all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let t: Treap<u32, ()> = Treap::with_seed([69, 69, 69, 69]);
    /// assert!(t.is_empty());
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Treap {
            tree: None,
            rng: XorShiftRng::from_seed(seed),
        }
    }
}

impl<T, U, R> Treap<T, U, R>
where
    T: Ord,
    R: Rng,
{
    /// Constructs a new, empty treap that draws priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate rand;
    /// use treap_layout::treap::Treap;
    ///
    /// let t: Treap<u32, u32, _> = Treap::with_rng(rand::thread_rng());
    /// assert_eq!(t.size(), 0);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Treap { tree: None, rng }
    }

    /// Inserts a key-value pair into the treap. Keys equal to `key` are kept, and the new pair
    /// is placed after them in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 'a');
    /// t.insert(1, 'b');
    /// assert_eq!(t.size(), 2);
    /// assert_eq!(t.iter().collect::<Vec<_>>(), vec![(&1, &'a'), (&1, &'b')]);
    /// ```
    pub fn insert(&mut self, key: T, value: U) {
        let new_node = Node::new(key, value, self.rng.gen::<f64>());
        self.tree = tree::insert(self.tree.take(), new_node);
    }

    /// Splits the treap in two. The treap keeps every pair whose key is less than or equal to
    /// `key`, and the rest is returned as a detached tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::{tree, Treap};
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// t.insert(2, 2);
    /// t.insert(3, 3);
    ///
    /// let right = t.split_off(&2);
    /// assert_eq!(t.size(), 2);
    /// assert_eq!(tree::size(&right), 1);
    /// ```
    pub fn split_off(&mut self, key: &T) -> Tree<T, U> {
        let (left, right) = tree::split(self.tree.take(), key);
        self.tree = left;
        right
    }

    /// Merges `other` into the treap. Every key in `other` must be greater than or equal to every
    /// key in the treap.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the keys overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// t.insert(3, 3);
    ///
    /// let right = t.split_off(&1);
    /// t.append(right);
    /// assert_eq!(t.iter().map(|(key, _)| *key).collect::<Vec<u32>>(), vec![1, 3]);
    /// ```
    pub fn append(&mut self, other: Tree<T, U>) {
        self.tree = tree::merge(self.tree.take(), other);
    }
}

impl<T, U, R> Treap<T, U, R> {
    /// Returns the number of pairs in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// assert_eq!(t.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns the height of the treap. An empty treap has a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// assert_eq!(t.depth(), 0);
    /// t.insert(1, 1);
    /// assert_eq!(t.depth(), 1);
    /// ```
    pub fn depth(&self) -> usize {
        tree::depth(&self.tree)
    }

    /// Returns `true` if the treap is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the root of the treap for read-only traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(5, ());
    /// let root = t.root().unwrap();
    /// assert_eq!(root.key(), &5);
    /// assert_eq!(root.size(), 1);
    /// ```
    pub fn root(&self) -> Option<&Node<T, U>> {
        self.tree.as_ref().map(|node| &**node)
    }

    /// Clears the treap, removing all pairs. The random number generator is kept.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns an iterator over the treap. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_layout::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(3, 4);
    /// t.insert(1, 2);
    ///
    /// let mut iterator = t.iter();
    /// assert_eq!(iterator.next(), Some((&1, &2)));
    /// assert_eq!(iterator.next(), Some((&3, &4)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapIter<'_, T, U> {
        TreapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, U> Default for Treap<T, U>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, R> Extend<(T, U)> for Treap<T, U, R>
where
    T: Ord,
    R: Rng,
{
    fn extend<I: IntoIterator<Item = (T, U)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for Treap<T, U>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = (T, U)>>(iter: I) -> Self {
        let mut treap = Treap::new();
        treap.extend(iter);
        treap
    }
}

impl<T, U, R> IntoIterator for Treap<T, U, R> {
    type IntoIter = TreapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U, R> IntoIterator for &'a Treap<T, U, R>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = TreapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `Treap<T, U>`.
///
/// This iterator traverses the elements of the treap in-order and yields owned entries.
pub struct TreapIntoIter<T, U> {
    current: Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for TreapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                key, value, right, ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

/// An iterator for `Treap<T, U>`.
///
/// This iterator traverses the elements of the treap in-order and yields immutable references.
pub struct TreapIter<'a, T, U> {
    current: &'a Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for TreapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key,
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Treap;
    use crate::treap::{tree, Node};
    use rand::{Rng, SeedableRng, XorShiftRng};

    fn priorities(node: Option<&Node<u32, ()>>, out: &mut Vec<u64>) {
        if let Some(node) = node {
            priorities(node.left(), out);
            out.push(node.priority().to_bits());
            priorities(node.right(), out);
        }
    }

    #[test]
    fn test_size_empty() {
        let treap: Treap<u32, u32> = Treap::new();
        assert_eq!(treap.size(), 0);
        assert_eq!(treap.depth(), 0);
        assert!(treap.root().is_none());
    }

    #[test]
    fn test_is_empty() {
        let treap: Treap<u32, u32> = Treap::new();
        assert!(treap.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut treap = Treap::new();
        treap.insert(1, 1);
        assert_eq!(treap.size(), 1);
        assert_eq!(treap.depth(), 1);
        assert_eq!(treap.root().map(|node| *node.key()), Some(1));
    }

    #[test]
    fn test_insert_duplicates() {
        let mut treap = Treap::new();
        for key in &[20, 2, 10, 15, 7, 2] {
            treap.insert(*key, ());
        }
        assert_eq!(treap.size(), 6);
        assert_eq!(
            treap.iter().map(|(key, _)| *key).collect::<Vec<u32>>(),
            vec![2, 2, 7, 10, 15, 20],
        );
    }

    #[test]
    fn test_same_seed_same_shape() {
        let mut n = Treap::with_seed([3, 1, 4, 1]);
        let mut m = Treap::with_seed([3, 1, 4, 1]);
        for key in 0..64 {
            n.insert(key, ());
            m.insert(key, ());
        }
        assert_eq!(n.depth(), m.depth());
        assert_eq!(
            n.root().map(|node| node.priority().to_bits()),
            m.root().map(|node| node.priority().to_bits()),
        );
    }

    #[test]
    fn test_one_priority_per_insert() {
        let seed = [5, 8, 13, 21];
        let mut treap = Treap::with_seed(seed);
        let mut rng: XorShiftRng = SeedableRng::from_seed(seed);
        let mut expected = Vec::new();
        for key in 0..50 {
            treap.insert(key, ());
            expected.push(rng.gen::<f64>().to_bits());
        }

        let mut actual = Vec::new();
        priorities(treap.root(), &mut actual);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_with_rng() {
        let rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut treap = Treap::with_rng(rng);
        treap.insert(1, 1);
        treap.insert(0, 0);
        assert_eq!(treap.size(), 2);
        assert_eq!(treap.depth(), 2);
    }

    #[test]
    fn test_clear() {
        let mut treap = Treap::new();
        treap.insert(1, 1);
        treap.insert(2, 2);
        treap.clear();
        assert!(treap.is_empty());
        assert_eq!(treap.size(), 0);
    }

    #[test]
    fn test_split_off_append() {
        let mut treap = Treap::new();
        treap.insert(1, 1);
        treap.insert(3, 3);
        treap.insert(3, 4);
        treap.insert(5, 5);

        let right = treap.split_off(&3);
        assert_eq!(treap.size(), 3);
        assert_eq!(tree::size(&right), 1);
        assert_eq!(treap.iter().map(|(key, _)| *key).collect::<Vec<u32>>(), vec![1, 3, 3]);

        treap.append(right);
        assert_eq!(treap.size(), 4);
        assert_eq!(
            treap.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &1), (&3, &3), (&3, &4), (&5, &5)],
        );
    }

    #[test]
    fn test_extend_from_iter() {
        let mut treap = vec![(2, 'b'), (1, 'a')].into_iter().collect::<Treap<u32, char>>();
        treap.extend(vec![(3, 'c')]);
        assert_eq!(treap.size(), 3);
        assert_eq!(
            treap.iter().collect::<Vec<(&u32, &char)>>(),
            vec![(&1, &'a'), (&2, &'b'), (&3, &'c')],
        );
    }

    #[test]
    fn test_into_iter() {
        let mut treap = Treap::new();
        treap.insert(5, 6);
        treap.insert(1, 2);
        treap.insert(3, 4);

        assert_eq!(treap.into_iter().collect::<Vec<(u32, u32)>>(), vec![(1, 2), (3, 4), (5, 6)]);
    }

    #[test]
    fn test_iter() {
        let mut treap = Treap::new();
        treap.insert(1, 2);
        treap.insert(5, 6);
        treap.insert(3, 4);

        assert_eq!(
            (&treap).into_iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }
}
