use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::config::TreeConfig;
use crate::error::ElementNotFound;
use crate::memory::{MonotonicResource, Resource, ResourceError};

use super::rbtree::{self, Cursor, PairNode, RbTree};


/// An ordered map backed by a red-black tree, with its nodes allocated from `R`.
///
/// Two things work differently from [`std::collections::BTreeMap`]:
/// - [`insert`](OrderedMap::insert) never overwrites. Inserting a key that's already present keeps the
///   old value. To replace a value, [`erase`](OrderedMap::erase) the key first or go through
///   [`get_mut`](OrderedMap::get_mut).
/// - Indexing a missing key is an error ([`ElementNotFound`]), it never inserts a default value.
///
/// ```
/// use pmr_collections::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("a", 1).unwrap();
/// map.insert("a", 2).unwrap();
///
/// assert_eq!(map.get("a"), Ok(&1));
/// assert_eq!(map.len(), 1);
/// ```
pub struct OrderedMap<K, V, R: Resource<PairNode<K, V>> = MonotonicResource<PairNode<K, V>>> {
    tree: RbTree<PairNode<K, V>, R>,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// An empty map allocating from its own [`MonotonicResource`].
    pub fn new() -> Self {
        Self::new_in(MonotonicResource::new())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self::with_config_in(MonotonicResource::new(), config)
    }
}

impl<K: Ord, V, R: Resource<PairNode<K, V>> + Default> Default for OrderedMap<K, V, R> {
    fn default() -> Self {
        Self::new_in(R::default())
    }
}

impl<K: Ord, V, R: Resource<PairNode<K, V>>> OrderedMap<K, V, R> {
    pub fn new_in(resource: R) -> Self {
        Self { tree: RbTree::new_in(resource) }
    }

    pub fn with_config_in(resource: R, config: TreeConfig) -> Self {
        Self { tree: RbTree::with_config_in(resource, config) }
    }

    /// Inserts `value` under `key`, unless `key` is already present.
    ///
    /// Returns `Ok(true)` if the entry was added, and `Ok(false)` if the key was already there (the
    /// stored value is left alone, and `value` is dropped).
    ///
    /// The node is allocated before the key is looked up, so a resource that has run out of room
    /// returns `Err` even when `key` is already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, ResourceError> {
        self.tree.insert(key, value)
    }

    /// Removes `key` and its value. Returns `false` if `key` wasn't present.
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

    pub fn get<Q>(&self, key: &Q) -> Result<&V, ElementNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.search(key).map(PairNode::value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, ElementNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.search_value_mut(key)
    }
}

impl<K, V, R: Resource<PairNode<K, V>>> OrderedMap<K, V, R> {
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    pub fn begin(&self) -> Cursor<'_, PairNode<K, V>, R> {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor<'_, PairNode<K, V>, R> {
        self.tree.end()
    }

    /// Iterates over the entries in increasing key order.
    pub fn iter(&self) -> Iter<'_, K, V, R> {
        Iter { inner: self.tree.iter() }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.iter().map(|(_, value)| value)
    }
}

/// Panics with [`ElementNotFound`] if `key` isn't present.
impl<K, V, R, Q> Index<&Q> for OrderedMap<K, V, R>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    R: Resource<PairNode<K, V>>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Panics with [`ElementNotFound`] if `key` isn't present. Never inserts.
impl<K, V, R, Q> IndexMut<&Q> for OrderedMap<K, V, R>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    R: Resource<PairNode<K, V>>,
{
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.get_mut(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, R: Resource<PairNode<K, V>>> fmt::Debug for OrderedMap<K, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, R: Resource<PairNode<K, V>>> IntoIterator for &'a OrderedMap<K, V, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// An iterator over the entries of an [`OrderedMap`].
pub struct Iter<'a, K, V, R: Resource<PairNode<K, V>>> {
    inner: rbtree::Iter<'a, PairNode<K, V>, R>,
}

impl<'a, K, V, R: Resource<PairNode<K, V>>> Iterator for Iter<'a, K, V, R> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(PairNode::pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, R: Resource<PairNode<K, V>>> DoubleEndedIterator for Iter<'_, K, V, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(PairNode::pair)
    }
}

impl<K, V, R: Resource<PairNode<K, V>>> ExactSizeIterator for Iter<'_, K, V, R> {}

impl<K, V, R: Resource<PairNode<K, V>>> FusedIterator for Iter<'_, K, V, R> {}
