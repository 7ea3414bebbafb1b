//! A red-black tree whose nodes live in a pluggable [`Resource`].
//!
//! The tree uses a sentinel: a single black node standing in for every missing child (and for the
//! root's parent). Its links all point back to itself, so "no child" is just `id == NodeId::NIL` and
//! the rebalancing code never has to special case a missing node.
//!
//! Invariants that hold after every public method returns:
//! 1. In-order traversal visits keys in strictly increasing order.
//! 2. The root and the sentinel are black.
//! 3. A red node never has a red child.
//! 4. Every path from a node down to the sentinel crosses the same number of black nodes.
//! 5. `len()` is the number of real nodes reachable from the root.
//!
//! [`verify`](RbTree::verify) checks all of them.

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::config::TreeConfig;
use crate::error::ElementNotFound;
use crate::memory::{NodeId, Resource, ResourceError};

use super::worklist::Worklist;

mod check;
mod iter;
mod node;

pub use check::Violation;
pub use iter::{Cursor, Iter};
pub use node::{Color, KeyNode, Link, PairNode, TreeNode};

use node::Side;


pub struct RbTree<N: TreeNode, R: Resource<N>> {
    root: NodeId,
    /// The sentinel's links. Only its parent is ever written to, temporarily, while erasing.
    nil: Link,
    len: usize,
    resource: R,
    config: TreeConfig,
    _phantom: PhantomData<N>,
}

impl<N: TreeNode, R: Resource<N> + Default> RbTree<N, R> {
    pub fn new() -> Self {
        Self::new_in(R::default())
    }
}

impl<N: TreeNode, R: Resource<N> + Default> Default for RbTree<N, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: TreeNode, R: Resource<N>> RbTree<N, R> {
    /// Creates an empty tree that allocates its nodes from `resource`.
    pub fn new_in(resource: R) -> Self {
        Self::with_config_in(resource, TreeConfig::default())
    }

    pub fn with_config_in(resource: R, config: TreeConfig) -> Self {
        Self {
            root: NodeId::NIL,
            nil: Link::sentinel(),
            len: 0,
            resource,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Whether a node with a key equal to `key` is in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        N::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.find(key).is_nil()
    }

    /// Returns the node whose key is equal to `key`.
    pub fn search<Q>(&self, key: &Q) -> Result<&N, ElementNotFound>
    where
        N::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find(key) {
            id if id.is_nil() => Err(ElementNotFound),
            id => Ok(self.resource.get(id)),
        }
    }

    /// Removes the node whose key is equal to `key`, handing it back to the resource.
    ///
    /// Returns `false` (and does nothing) if there is no such node.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        N::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let z = self.find(key);
        if z.is_nil() {
            return false
        }

        self.unlink(z);
        self.resource.deallocate(z);
        self.len -= 1;
        true
    }

    /// Deallocates every node, leaving an empty tree.
    ///
    /// Walks the tree with an explicit work list, so this never recurses no matter how the tree is
    /// shaped.
    pub fn clear(&mut self) {
        if self.root.is_nil() {
            return
        }

        debug!("Tearing down tree with {} nodes", self.len);

        let mut stack = Worklist::from_config(&self.config);
        stack.push(self.root);

        while let Some(node) = stack.pop() {
            // NOTE: read the children out *before* the node is handed back
            let [left, right] = self.link(node).children;
            if !left.is_nil() {
                stack.push(left);
            }
            if !right.is_nil() {
                stack.push(right);
            }
            self.resource.deallocate(node);
        }

        self.root = NodeId::NIL;
        self.len = 0;
    }

    /// A cursor at the smallest key, or [`end`](RbTree::end) if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, N, R> {
        Cursor::new(self, self.extreme(self.root, Side::Left))
    }

    /// The past-the-end cursor (the sentinel).
    pub fn end(&self) -> Cursor<'_, N, R> {
        Cursor::new(self, NodeId::NIL)
    }

    /// Iterates over the nodes in increasing key order.
    pub fn iter(&self) -> Iter<'_, N, R> {
        Iter::new(self)
    }
}

impl<K: Ord, R: Resource<KeyNode<K>>> RbTree<KeyNode<K>, R> {
    /// Inserts `key`.
    ///
    /// Returns `Ok(false)` if an equal key was already present, in which case the tree is unchanged.
    pub fn insert(&mut self, key: K) -> Result<bool, ResourceError> {
        self.insert_node(KeyNode::new(key))
    }
}

impl<K: Ord, V, R: Resource<PairNode<K, V>>> RbTree<PairNode<K, V>, R> {
    /// Inserts `key` mapped to `value`.
    ///
    /// Returns `Ok(false)` if an equal key was already present. The existing value is **not**
    /// replaced, and `value` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, ResourceError> {
        self.insert_node(PairNode::new(key, value))
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn search_value_mut<Q>(&mut self, key: &Q) -> Result<&mut V, ElementNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find(key) {
            id if id.is_nil() => Err(ElementNotFound),
            id => Ok(self.resource.get_mut(id).value_mut()),
        }
    }
}

// Link accessors. The sentinel isn't stored in the resource, so every access goes through these.
impl<N: TreeNode, R: Resource<N>> RbTree<N, R> {
    #[inline]
    fn link(&self, id: NodeId) -> &Link {
        match id.is_nil() {
            true => &self.nil,
            false => self.resource.get(id).link(),
        }
    }

    #[inline]
    fn link_mut(&mut self, id: NodeId) -> &mut Link {
        match id.is_nil() {
            true => &mut self.nil,
            false => self.resource.get_mut(id).link_mut(),
        }
    }

    #[inline]
    fn color(&self, id: NodeId) -> Color {
        self.link(id).color
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(!id.is_nil() || color == Color::Black, "the sentinel must stay black");
        self.link_mut(id).color = color;
    }

    #[inline]
    fn parent(&self, id: NodeId) -> NodeId {
        self.link(id).parent
    }

    #[inline]
    fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.link_mut(id).parent = parent;
    }

    #[inline]
    fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.link(id).child(side)
    }

    #[inline]
    fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        debug_assert!(!id.is_nil(), "the sentinel's children are fixed");
        self.link_mut(id).children[side as usize] = child;
    }

    /// Which side of its parent `id` hangs off. `id`'s parent must be a real node.
    #[inline]
    fn side_of(&self, id: NodeId) -> Side {
        match self.child(self.parent(id), Side::Left) == id {
            true => Side::Left,
            false => Side::Right,
        }
    }

    /// Follows `side` links from `id` as far as they go. Returns `id` itself if it's the sentinel.
    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        if id.is_nil() {
            return id
        }
        loop {
            let next = self.child(id, side);
            if next.is_nil() {
                return id
            }
            id = next;
        }
    }

    /// The in-order neighbour of `id` in direction `side` (`Right` is the successor), or the sentinel.
    fn step(&self, mut id: NodeId, side: Side) -> NodeId {
        let child = self.child(id, side);
        if !child.is_nil() {
            return self.extreme(child, side.opposite())
        }
        let mut parent = self.parent(id);
        while !parent.is_nil() && id == self.child(parent, side) {
            id = parent;
            parent = self.parent(parent);
        }
        parent
    }

    fn find<Q>(&self, key: &Q) -> NodeId
    where
        N::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while !current.is_nil() {
            let current_key: &Q = self.resource.get(current).key().borrow();
            current = match key.cmp(current_key) {
                Ordering::Less => self.child(current, Side::Left),
                Ordering::Greater => self.child(current, Side::Right),
                Ordering::Equal => return current,
            };
        }
        NodeId::NIL
    }
}

// Structural changes and rebalancing
impl<N: TreeNode, R: Resource<N>> RbTree<N, R> {
    fn insert_node(&mut self, node: N) -> Result<bool, ResourceError>
    where
        N::Key: Ord,
    {
        // Nothing is linked until the resource has actually given us the node, so a failed
        // allocation leaves the tree exactly as it was.
        let z = self.resource.allocate(node).inspect_err(|e| {
            warn!("Couldn't allocate a tree node: {e}");
        })?;

        let mut parent = NodeId::NIL;
        let mut side = Side::Left;
        let mut current = self.root;
        while !current.is_nil() {
            parent = current;
            side = match self.resource.get(z).key().cmp(self.resource.get(current).key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    trace!("Key already present, discarding node {z:?}");
                    self.resource.deallocate(z);
                    return Ok(false)
                }
            };
            current = self.child(current, side);
        }

        *self.link_mut(z) = Link::detached();
        self.set_parent(z, parent);
        if parent.is_nil() {
            self.root = z;
        } else {
            self.set_child(parent, side, z);
        }

        self.len += 1;
        self.insert_fixup(z);
        Ok(true)
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.color(self.parent(z)) == Color::Red {
            let parent = self.parent(z);
            // the parent is red, so it isn't the root, so the grandparent is a real node
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue
            }

            if z == self.child(parent, side.opposite()) {
                // inner grandchild, rotate it to the outside first
                z = parent;
                self.rotate(z, side);
            }

            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Rotates the subtree at `x` towards `side`: `x`'s child on the opposite side takes its place, and
    /// `x` becomes that child's `side` child. In-order key sequence is unchanged.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let other = side.opposite();
        let y = self.child(x, other);
        debug_assert!(!y.is_nil(), "rotating {x:?} without a child to rotate up");

        let inner = self.child(y, side);
        self.set_child(x, other, inner);
        if !inner.is_nil() {
            self.set_parent(inner, x);
        }

        let parent = self.parent(x);
        self.set_parent(y, parent);
        if parent.is_nil() {
            self.root = y;
        } else {
            let x_side = self.side_of(x);
            self.set_child(parent, x_side, y);
        }

        self.set_child(y, side, x);
        self.set_parent(x, y);
    }

    /// Puts the subtree rooted at `v` where the subtree rooted at `u` was. `v` may be the sentinel,
    /// in which case the sentinel's parent is (temporarily) set.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        if parent.is_nil() {
            self.root = v;
        } else {
            let side = self.side_of(u);
            self.set_child(parent, side, v);
        }
        self.set_parent(v, parent);
    }

    /// Detaches `z` from the tree and rebalances. `z` itself is left for the caller to deallocate.
    fn unlink(&mut self, z: NodeId) {
        let left = self.child(z, Side::Left);
        let right = self.child(z, Side::Right);

        // `x` is whatever moves into the position of the node that is structurally removed
        let x;
        let removed_color;

        if left.is_nil() {
            removed_color = self.color(z);
            x = right;
            self.transplant(z, right);
        } else if right.is_nil() {
            removed_color = self.color(z);
            x = left;
            self.transplant(z, left);
        } else {
            // two children: the successor takes `z`'s place
            let y = self.extreme(right, Side::Left);
            removed_color = self.color(y);
            x = self.child(y, Side::Right);

            if self.parent(y) == z {
                self.set_parent(x, y);
            } else {
                self.transplant(y, x);
                self.set_child(y, Side::Right, right);
                self.set_parent(right, y);
            }

            self.transplant(z, y);
            self.set_child(y, Side::Left, left);
            self.set_parent(left, y);
            let z_color = self.color(z);
            self.set_color(y, z_color);
        }

        if removed_color == Color::Black {
            self.erase_fixup(x);
        }

        // the sentinel's parent may have been borrowed above
        self.nil.parent = NodeId::NIL;
    }

    fn erase_fixup(&mut self, mut x: NodeId) {
        while x != self.root && self.color(x) == Color::Black {
            let parent = self.parent(x);
            // NOTE: `x` may be the sentinel, but its sibling is then a real node (it has to carry the
            //       black height `x` lost), so comparing against the left child is unambiguous
            let side = match self.child(parent, Side::Left) == x {
                true => Side::Left,
                false => Side::Right,
            };
            let other = side.opposite();
            let mut w = self.child(parent, other);

            if self.color(w) == Color::Red {
                self.set_color(w, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                w = self.child(parent, other);
            }

            let near = self.child(w, side);
            let far = self.child(w, other);

            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                // push the extra black up
                self.set_color(w, Color::Red);
                x = parent;
                continue
            }

            if self.color(far) == Color::Black {
                self.set_color(near, Color::Black);
                self.set_color(w, Color::Red);
                self.rotate(w, other);
                w = self.child(parent, other);
            }

            let parent_color = self.color(parent);
            self.set_color(w, parent_color);
            self.set_color(parent, Color::Black);
            let far = self.child(w, other);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            x = self.root;
        }

        self.set_color(x, Color::Black);
    }
}

impl<N: TreeNode, R: Resource<N>> Drop for RbTree<N, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, N: TreeNode, R: Resource<N>> IntoIterator for &'a RbTree<N, R> {
    type Item = &'a N;
    type IntoIter = Iter<'a, N, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::memory::counting::CountingResource;
    use crate::memory::{MonotonicResource, SystemResource};

    type HeapSet<K> = RbTree<KeyNode<K>, SystemResource<KeyNode<K>>>;

    fn keys<K: Clone, R: Resource<KeyNode<K>>>(tree: &RbTree<KeyNode<K>, R>) -> Vec<K> {
        tree.iter().map(|node| node.key().clone()).collect()
    }

    #[test]
    fn three_keys_rebalance_around_the_middle() {
        let mut tree = HeapSet::new();
        for key in [10, 20, 30] {
            assert_eq!(tree.insert(key), Ok(true));
        }
        tree.verify().unwrap();

        let root = tree.root;
        assert_eq!(*tree.resource.get(root).key(), 20);
        assert_eq!(tree.color(root), Color::Black);
        assert_eq!(tree.search(&20).map(|node| node.link().color()), Ok(Color::Black));

        let left = tree.child(root, Side::Left);
        let right = tree.child(root, Side::Right);
        assert_eq!(*tree.resource.get(left).key(), 10);
        assert_eq!(*tree.resource.get(right).key(), 30);
        assert_eq!(tree.color(left), Color::Red);
        assert_eq!(tree.color(right), Color::Red);

        assert_eq!(keys(&tree), [10, 20, 30]);

        assert!(tree.erase(&20));
        assert_eq!(tree.len(), 2);
        assert_eq!(keys(&tree), [10, 30]);
        assert!(!tree.erase(&20));
        tree.verify().unwrap();
    }

    #[test]
    fn duplicate_insert_keeps_the_original() {
        let mut tree = RbTree::<PairNode<&str, i32>, SystemResource<_>>::new();
        assert_eq!(tree.insert("a", 1), Ok(true));
        let original = tree.find("a");

        assert_eq!(tree.insert("a", 2), Ok(false));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.search("a").map(PairNode::value), Ok(&1));
        assert_eq!(tree.find("a"), original);
    }

    #[test]
    fn absent_erase_changes_nothing() {
        let mut tree = HeapSet::new();
        assert!(!tree.erase(&1));
        assert_eq!(tree.len(), 0);

        for key in [5, 3, 8] {
            tree.insert(key).unwrap();
        }
        assert!(!tree.erase(&4));
        assert_eq!(tree.len(), 3);
        assert_eq!(keys(&tree), [3, 5, 8]);
    }

    #[test]
    fn search_reports_missing_keys() {
        let mut tree = HeapSet::new();
        tree.insert(String::from("present")).unwrap();
        assert_eq!(tree.search("present").map(|n| n.key().as_str()), Ok("present"));
        assert_eq!(tree.search("absent").err(), Some(ElementNotFound));
        assert!(tree.contains("present"));
        assert!(!tree.contains("absent"));
    }

    #[test]
    fn search_value_mut_writes_through() {
        let mut tree = RbTree::<PairNode<u32, Vec<u32>>, MonotonicResource<_>>::new();
        tree.insert(1, vec![]).unwrap();
        tree.search_value_mut(&1).unwrap().push(42);
        assert_eq!(tree.search(&1).unwrap().value(), &[42]);
        assert_eq!(tree.search_value_mut(&2).err(), Some(ElementNotFound));
    }

    #[test]
    fn sequential_insert_stress() {
        crate::logging::initialize_logging();

        let mut tree = HeapSet::new();
        let count = 2000;
        for i in 0..count {
            tree.insert(i).unwrap();
        }
        assert_eq!(tree.len(), count as usize);
        tree.verify().unwrap();

        for (expected, node) in tree.iter().enumerate() {
            assert_eq!(*node.key(), expected as i32);
        }
    }

    #[test]
    fn delete_every_other_key() {
        let mut tree = HeapSet::new();
        for i in 0..20 {
            tree.insert(i).unwrap();
        }
        for i in (0..20).step_by(2) {
            assert!(tree.erase(&i));
            tree.verify().unwrap();
        }
        assert_eq!(tree.len(), 10);
        assert_eq!(keys(&tree), (1..20).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn clrs_13_4_3() {
        let mut tree = HeapSet::new();
        for key in [41, 38, 31, 12, 19, 8] {
            tree.insert(key).unwrap();
            tree.verify().unwrap();
        }
        for key in [8, 12, 19, 31, 38, 41] {
            assert!(tree.erase(&key));
            tree.verify().unwrap();
        }
        assert!(tree.is_empty());
        assert!(tree.root.is_nil());
    }

    #[test]
    fn delete_root_scenarios() {
        let mut tree = HeapSet::new();

        // root only
        tree.insert(10).unwrap();
        assert!(tree.erase(&10));
        assert!(tree.root.is_nil());

        // root + left
        tree.insert(10).unwrap();
        tree.insert(5).unwrap();
        assert!(tree.erase(&10));
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&5));
        assert!(tree.erase(&5));

        // root + right
        tree.insert(10).unwrap();
        tree.insert(15).unwrap();
        assert!(tree.erase(&10));
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&15));
        tree.verify().unwrap();
    }

    #[test]
    fn sentinel_links_point_to_itself_after_erase() {
        let mut tree = HeapSet::new();
        for i in 0..64 {
            tree.insert(i).unwrap();
        }
        for i in (0..64).rev().step_by(3) {
            tree.erase(&i);
            assert!(tree.nil.parent.is_nil());
            assert_eq!(tree.nil.children, [NodeId::NIL; 2]);
            assert_eq!(tree.nil.color, Color::Black);
        }
    }

    #[test]
    fn failed_allocation_leaves_tree_unchanged() {
        let mut tree = RbTree::<KeyNode<i32>, _>::new_in(MonotonicResource::bounded(3));
        for key in [2, 1, 3] {
            tree.insert(key).unwrap();
        }

        assert_eq!(tree.insert(4), Err(ResourceError::Exhausted { capacity: 3 }));
        assert_eq!(tree.len(), 3);
        assert_eq!(keys(&tree), [1, 2, 3]);
        tree.verify().unwrap();
    }

    #[test]
    fn every_allocation_is_given_back() {
        let mut tree = RbTree::<KeyNode<u64>, _>::new_in(CountingResource::new(SystemResource::new()));
        for i in 0..500u64 {
            // scatter the keys a bit
            tree.insert(i.wrapping_mul(0x9e37_79b9) % 1000).unwrap();
        }
        // duplicates allocate too, and give the node straight back
        tree.insert(0).unwrap();

        let mut present = keys(&tree);
        present.reverse();
        for key in present {
            assert!(tree.erase(&key));
        }

        assert!(tree.is_empty());
        assert!(tree.begin() == tree.end());
        assert_eq!(tree.resource().outstanding(), 0);
    }

    #[test]
    fn drop_deallocates_everything() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut tree = RbTree::<PairNode<i32, Rc<()>>, SystemResource<_>>::new();
            for i in 0..100 {
                tree.insert(i, Rc::clone(&tracker)).unwrap();
            }
            assert_eq!(Rc::strong_count(&tracker), 101);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn clear_leaves_a_reusable_tree() {
        let mut tree = RbTree::<KeyNode<i32>, _>::with_config_in(
            CountingResource::new(SystemResource::new()),
            TreeConfig::new().with_initial_capacity(1).with_growth_factor(1.5),
        );
        assert_eq!(tree.config().initial_capacity(), 1);
        assert_eq!(tree.config().growth_factor(), 1.5);
        for i in 0..1000 {
            tree.insert(i).unwrap();
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.resource().outstanding(), 0);

        tree.insert(7).unwrap();
        assert_eq!(keys(&tree), [7]);
    }

    #[test]
    fn large_teardown_doesnt_recurse() {
        crate::logging::initialize_logging();

        let mut tree = RbTree::<KeyNode<u32>, MonotonicResource<_>>::new();
        for i in 0..200_000 {
            tree.insert(i).unwrap();
        }
        drop(tree);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u16),
        Erase(u16),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..256u16).prop_map(Op::Insert),
            (0..256u16).prop_map(Op::Erase),
        ]
    }

    proptest! {
        #[test]
        fn matches_btreeset(ops in proptest::collection::vec(op(), 0..400)) {
            let mut tree = RbTree::<KeyNode<u16>, _>::new_in(CountingResource::new(SystemResource::new()));
            let mut model = BTreeSet::new();

            for op in ops {
                match op {
                    Op::Insert(key) => prop_assert_eq!(tree.insert(key), Ok(model.insert(key))),
                    Op::Erase(key) => prop_assert_eq!(tree.erase(&key), model.remove(&key)),
                }
                prop_assert_eq!(tree.verify(), Ok(()));
                prop_assert_eq!(tree.len(), model.len());
            }

            prop_assert!(tree.iter().map(|n| *n.key()).eq(model.iter().copied()));
            prop_assert_eq!(tree.resource().outstanding(), model.len());
        }
    }
}
