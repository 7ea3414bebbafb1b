//! In-order traversal by following parent links, without any auxiliary stack.
//!
//! Both [`Cursor`] and [`Iter`] borrow the tree, so the tree can't be changed while one is alive.

use std::iter::FusedIterator;

use crate::memory::{NodeId, Resource};

use super::node::{PairNode, Side, TreeNode};
use super::RbTree;


/// A position in a tree: either a node, or the past-the-end position (the sentinel).
///
/// Two cursors are equal when they point at the same node of the same tree.
pub struct Cursor<'a, N: TreeNode, R: Resource<N>> {
    tree: &'a RbTree<N, R>,
    node: NodeId,
}

impl<'a, N: TreeNode, R: Resource<N>> Cursor<'a, N, R> {
    pub(super) fn new(tree: &'a RbTree<N, R>, node: NodeId) -> Self {
        Self { tree, node }
    }

    pub fn is_end(&self) -> bool {
        self.node.is_nil()
    }

    /// The node under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&'a N> {
        match self.node.is_nil() {
            true => None,
            false => Some(self.tree.resource.get(self.node)),
        }
    }

    pub fn key(&self) -> Option<&'a N::Key> {
        self.get().map(TreeNode::key)
    }

    /// Moves to the next larger key. At the largest key this moves to the end, and at the end it stays
    /// there.
    pub fn move_next(&mut self) {
        if !self.node.is_nil() {
            self.node = self.tree.step(self.node, Side::Right);
        }
    }

    /// Moves to the next smaller key. From the end this moves to the largest key, and at the smallest
    /// key it moves to the end.
    pub fn move_prev(&mut self) {
        self.node = match self.node.is_nil() {
            true => self.tree.extreme(self.tree.root, Side::Right),
            false => self.tree.step(self.node, Side::Left),
        };
    }
}

impl<'a, K, V, R: Resource<PairNode<K, V>>> Cursor<'a, PairNode<K, V>, R> {
    pub fn value(&self) -> Option<&'a V> {
        self.get().map(PairNode::value)
    }

    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        self.get().map(PairNode::pair)
    }
}

impl<N: TreeNode, R: Resource<N>> Clone for Cursor<'_, N, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: TreeNode, R: Resource<N>> Copy for Cursor<'_, N, R> {}

impl<N: TreeNode, R: Resource<N>> PartialEq for Cursor<'_, N, R> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<N: TreeNode, R: Resource<N>> Eq for Cursor<'_, N, R> {}

impl<N: TreeNode, R: Resource<N>> std::fmt::Debug for Cursor<'_, N, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").field("node", &self.node).finish()
    }
}


/// An iterator over the nodes of a tree, in increasing key order.
pub struct Iter<'a, N: TreeNode, R: Resource<N>> {
    tree: &'a RbTree<N, R>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, N: TreeNode, R: Resource<N>> Iter<'a, N, R> {
    pub(super) fn new(tree: &'a RbTree<N, R>) -> Self {
        Self {
            tree,
            front: tree.extreme(tree.root, Side::Left),
            back: tree.extreme(tree.root, Side::Right),
            remaining: tree.len(),
        }
    }
}

impl<'a, N: TreeNode, R: Resource<N>> Iterator for Iter<'a, N, R> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let node = self.front;
        self.front = self.tree.step(node, Side::Right);
        self.remaining -= 1;
        Some(self.tree.resource.get(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: TreeNode, R: Resource<N>> DoubleEndedIterator for Iter<'_, N, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let node = self.back;
        self.back = self.tree.step(node, Side::Left);
        self.remaining -= 1;
        Some(self.tree.resource.get(node))
    }
}

impl<N: TreeNode, R: Resource<N>> ExactSizeIterator for Iter<'_, N, R> {}

impl<N: TreeNode, R: Resource<N>> FusedIterator for Iter<'_, N, R> {}

impl<N: TreeNode, R: Resource<N>> Clone for Iter<'_, N, R> {
    fn clone(&self) -> Self {
        Self { tree: self.tree, front: self.front, back: self.back, remaining: self.remaining }
    }
}


#[cfg(test)]
mod tests {
    use crate::memory::SystemResource;
    use crate::non_concurrent::rbtree::{KeyNode, PairNode, RbTree, TreeNode};

    type Set = RbTree<KeyNode<i32>, SystemResource<KeyNode<i32>>>;

    fn set_of(keys: &[i32]) -> Set {
        let mut tree = Set::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree_begins_at_end() {
        let tree = Set::new();
        assert!(tree.begin() == tree.end());
        assert!(tree.begin().is_end());
        assert!(tree.iter().next().is_none());
        assert_eq!(tree.iter().len(), 0);
    }

    #[test]
    fn cursor_walks_forwards_and_backwards() {
        let tree = set_of(&[3, 1, 4, 5, 9, 2, 6]);

        let mut cursor = tree.begin();
        let mut forwards = vec![];
        while cursor != tree.end() {
            forwards.push(*cursor.key().unwrap());
            cursor.move_next();
        }
        assert_eq!(forwards, [1, 2, 3, 4, 5, 6, 9]);

        // stepping past the end is a no-op
        cursor.move_next();
        assert!(cursor.is_end());

        let mut backwards = vec![];
        loop {
            cursor.move_prev();
            match cursor.key() {
                Some(&key) => backwards.push(key),
                None => break,
            }
        }
        assert_eq!(backwards, [9, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn cursors_compare_by_node() {
        let tree = set_of(&[1, 2]);
        let other = set_of(&[1, 2]);

        let mut a = tree.begin();
        let b = tree.begin();
        assert_eq!(a, b);
        a.move_next();
        assert_ne!(a, b);
        assert_eq!(*a.key().unwrap(), 2);

        // same key, different tree
        assert_ne!(tree.begin(), other.begin());
    }

    #[test]
    fn double_ended_iteration_meets_in_the_middle() {
        let tree = set_of(&[10, 20, 30, 40, 50]);
        let mut iter = tree.iter().map(|n| *n.key());

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(10));
        assert_eq!(iter.next_back(), Some(50));
        assert_eq!(iter.next_back(), Some(40));
        assert_eq!(iter.next(), Some(20));
        assert_eq!(iter.next(), Some(30));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let reversed: Vec<_> = tree.iter().rev().map(|n| *n.key()).collect();
        assert_eq!(reversed, [50, 40, 30, 20, 10]);
    }

    #[test]
    fn map_cursor_yields_pairs() {
        let mut tree = RbTree::<PairNode<char, u8>, SystemResource<_>>::new();
        tree.insert('b', 2).unwrap();
        tree.insert('a', 1).unwrap();

        let mut cursor = tree.begin();
        assert_eq!(cursor.key_value(), Some((&'a', &1)));
        cursor.move_next();
        assert_eq!(cursor.value(), Some(&2));
        cursor.move_next();
        assert_eq!(cursor.key_value(), None);
    }
}
