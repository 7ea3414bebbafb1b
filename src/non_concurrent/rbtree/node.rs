use crate::memory::NodeId;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node. Mirror-image cases in the rebalancing code are written once, in terms of
/// a `Side` and its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The structural part of a node: its color and the (non-owning) links to its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) children: [NodeId; 2],
}

impl Link {
    /// A freshly allocated node: red, with no parent or children.
    pub(crate) const fn detached() -> Self {
        Self { color: Color::Red, parent: NodeId::NIL, children: [NodeId::NIL; 2] }
    }

    /// The sentinel: black, and linked only to itself.
    pub(crate) const fn sentinel() -> Self {
        Self { color: Color::Black, parent: NodeId::NIL, children: [NodeId::NIL; 2] }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> NodeId {
        self.children[side as usize]
    }
}

mod private {
    pub trait Sealed {}
}

/// The node shapes a tree can be built from: [`KeyNode`] for sets and [`PairNode`] for maps.
pub trait TreeNode: private::Sealed {
    type Key;

    fn key(&self) -> &Self::Key;

    fn link(&self) -> &Link;

    #[doc(hidden)]
    fn link_mut(&mut self) -> &mut Link;
}


/// A node holding just a key.
#[derive(Debug)]
pub struct KeyNode<K> {
    key: K,
    link: Link,
}

impl<K> KeyNode<K> {
    pub(crate) fn new(key: K) -> Self {
        Self { key, link: Link::detached() }
    }
}

impl<K> private::Sealed for KeyNode<K> {}

impl<K> TreeNode for KeyNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}


/// A node holding a key and its value.
#[derive(Debug)]
pub struct PairNode<K, V> {
    key: K,
    value: V,
    link: Link,
}

impl<K, V> PairNode<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value, link: Link::detached() }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// The key can't be changed in place (that could break the tree's ordering), but the value can.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> private::Sealed for PairNode<K, V> {}

impl<K, V> TreeNode for PairNode<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}
