//! Memory resources that tree nodes are allocated from.
//!
//! A resource owns the storage for every node of one tree, and hands out [`NodeId`]s as stable
//! handles to them. The tree itself never touches node memory except through the [`Resource`] trait,
//! so swapping the allocation strategy is just a matter of swapping the type parameter.
//!
//! The tree is generic over `R: Resource<N>`, so passing something that can't allocate the right
//! node shape is rejected when compiling, not when running:
//!
//! ```compile_fail
//! use pmr_collections::OrderedSet;
//!
//! struct NotAResource;
//!
//! let set: OrderedSet<i32, NotAResource> = OrderedSet::new_in(NotAResource);
//! ```

use std::fmt;

mod monotonic;
mod system;

#[cfg(test)]
pub(crate) mod counting;

pub use monotonic::MonotonicResource;
pub use system::SystemResource;


/// A handle to a node living inside a [`Resource`].
///
/// `NodeId::NIL` is reserved for the tree's sentinel and is never returned from [`Resource::allocate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The sentinel handle.
    pub const NIL: NodeId = NodeId(usize::MAX);

    /// Wraps a slot index. `index` must not be `usize::MAX`.
    pub const fn new(index: usize) -> Self {
        assert!(index != usize::MAX, "`usize::MAX` is reserved for the sentinel");
        NodeId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn is_nil(self) -> bool {
        self.0 == usize::MAX
    }
}


/// The reason a [`Resource`] refused to allocate a node.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// The underlying allocator couldn't grow the storage.
    OutOfMemory,
    /// The resource was created with a fixed number of slots, and they've all been handed out.
    Exhausted { capacity: usize },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::OutOfMemory => f.write_str("out of memory while allocating a tree node"),
            ResourceError::Exhausted { capacity } => write!(f, "memory resource exhausted (capacity of {capacity} nodes)"),
        }
    }
}

impl std::error::Error for ResourceError {}


/// Allocation capability for nodes of type `N`.
///
/// Implementations decide what `deallocate` means: [`SystemResource`] frees (and drops) the node
/// and reuses its slot, while [`MonotonicResource`] drops the node but never hands its slot out again.
///
/// Deallocating the same id twice, or an id this resource never handed out, is a bug in the caller.
/// Implementations should panic (or at least `debug_assert!`) when they notice it.
pub trait Resource<N> {
    /// Moves `node` into storage owned by the resource, returning a handle to it.
    fn allocate(&mut self, node: N) -> Result<NodeId, ResourceError>;

    /// Releases a node previously returned by [`allocate`](Resource::allocate).
    fn deallocate(&mut self, id: NodeId);

    fn get(&self, id: NodeId) -> &N;

    fn get_mut(&mut self, id: NodeId) -> &mut N;
}
