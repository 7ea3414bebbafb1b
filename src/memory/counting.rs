//! A resource wrapper for tests that keeps track of how many nodes were allocated and deallocated.

use super::{NodeId, Resource, ResourceError};


#[derive(Default)]
pub(crate) struct CountingResource<R> {
    inner: R,
    pub(crate) allocations: usize,
    pub(crate) deallocations: usize,
}

impl<R> CountingResource<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, allocations: 0, deallocations: 0 }
    }

    /// Nodes allocated through this wrapper that haven't been given back yet.
    pub(crate) fn outstanding(&self) -> usize {
        self.allocations - self.deallocations
    }
}

impl<N, R: Resource<N>> Resource<N> for CountingResource<R> {
    fn allocate(&mut self, node: N) -> Result<NodeId, ResourceError> {
        let id = self.inner.allocate(node)?;
        self.allocations += 1;
        Ok(id)
    }

    fn deallocate(&mut self, id: NodeId) {
        self.deallocations += 1;
        self.inner.deallocate(id)
    }

    fn get(&self, id: NodeId) -> &N {
        self.inner.get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        self.inner.get_mut(id)
    }
}
