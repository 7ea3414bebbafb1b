use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use crate::config::TreeConfig;
use crate::memory::{MonotonicResource, Resource, ResourceError};

use super::rbtree::{self, Cursor, KeyNode, RbTree, TreeNode};


/// An ordered set backed by a red-black tree, with its nodes allocated from `R`.
///
/// ```
/// use pmr_collections::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// for key in [10, 20, 30] {
///     set.insert(key).unwrap();
/// }
/// assert!(set.erase(&20));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [10, 30]);
/// ```
pub struct OrderedSet<K, R: Resource<KeyNode<K>> = MonotonicResource<KeyNode<K>>> {
    tree: RbTree<KeyNode<K>, R>,
}

impl<K: Ord> OrderedSet<K> {
    /// An empty set allocating from its own [`MonotonicResource`].
    pub fn new() -> Self {
        Self::new_in(MonotonicResource::new())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self::with_config_in(MonotonicResource::new(), config)
    }
}

impl<K: Ord, R: Resource<KeyNode<K>> + Default> Default for OrderedSet<K, R> {
    fn default() -> Self {
        Self::new_in(R::default())
    }
}

impl<K: Ord, R: Resource<KeyNode<K>>> OrderedSet<K, R> {
    pub fn new_in(resource: R) -> Self {
        Self { tree: RbTree::new_in(resource) }
    }

    pub fn with_config_in(resource: R, config: TreeConfig) -> Self {
        Self { tree: RbTree::with_config_in(resource, config) }
    }

    /// Adds `key`. Returns `Ok(false)` if it was already present.
    ///
    /// The node is allocated before the key is looked up, so a resource that has run out of room
    /// returns `Err` even when `key` is already present.
    pub fn insert(&mut self, key: K) -> Result<bool, ResourceError> {
        self.tree.insert(key)
    }

    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }
}

impl<K, R: Resource<KeyNode<K>>> OrderedSet<K, R> {
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    pub fn begin(&self) -> Cursor<'_, KeyNode<K>, R> {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor<'_, KeyNode<K>, R> {
        self.tree.end()
    }

    pub fn iter(&self) -> Iter<'_, K, R> {
        Iter { inner: self.tree.iter() }
    }
}

impl<K: fmt::Debug, R: Resource<KeyNode<K>>> fmt::Debug for OrderedSet<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, R: Resource<KeyNode<K>>> IntoIterator for &'a OrderedSet<K, R> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// An iterator over the keys of an [`OrderedSet`], smallest first.
pub struct Iter<'a, K, R: Resource<KeyNode<K>>> {
    inner: rbtree::Iter<'a, KeyNode<K>, R>,
}

impl<'a, K, R: Resource<KeyNode<K>>> Iterator for Iter<'a, K, R> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(TreeNode::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, R: Resource<KeyNode<K>>> DoubleEndedIterator for Iter<'_, K, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(TreeNode::key)
    }
}

impl<K, R: Resource<KeyNode<K>>> ExactSizeIterator for Iter<'_, K, R> {}

impl<K, R: Resource<KeyNode<K>>> FusedIterator for Iter<'_, K, R> {}
