use slab::Slab;

use super::{NodeId, Resource, ResourceError};


/// A heap resource backed by a [`Slab`].
///
/// `deallocate` drops the node and frees its slot straight away, and freed slots get reused by later
/// allocations. Deallocating an id that isn't currently allocated panics.
pub struct SystemResource<N> {
    slab: Slab<N>,
}

impl<N> SystemResource<N> {
    pub fn new() -> Self {
        Self { slab: Slab::new() }
    }

    /// Preallocates room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slab: Slab::with_capacity(capacity) }
    }

    /// The number of nodes currently allocated.
    pub fn live(&self) -> usize {
        self.slab.len()
    }
}

impl<N> Default for SystemResource<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Resource<N> for SystemResource<N> {
    fn allocate(&mut self, node: N) -> Result<NodeId, ResourceError> {
        let index = self.slab.insert(node);
        Ok(NodeId::new(index))
    }

    fn deallocate(&mut self, id: NodeId) {
        match self.slab.try_remove(id.index()) {
            Some(node) => drop(node),
            None => panic!("deallocated node {id:?}, which isn't allocated"),
        }
    }

    fn get(&self, id: NodeId) -> &N {
        &self.slab[id.index()]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        &mut self.slab[id.index()]
    }
}
