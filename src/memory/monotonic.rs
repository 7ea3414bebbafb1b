use super::{NodeId, Resource, ResourceError};


/// A bump (arena) resource.
///
/// Every allocation takes the next slot, and slots are never reused. `deallocate` drops the node
/// straight away but keeps its (now empty) slot, so ids stay unique for the arena's whole lifetime.
/// The slots themselves are freed together with the resource.
///
/// This makes allocation very cheap, at the cost of memory growing with the total number of inserts
/// rather than the number of live entries.
pub struct MonotonicResource<N> {
    /// `None` once the slot's node has been deallocated.
    slots: Vec<Option<N>>,
    /// Maximum number of slots, if the arena is bounded.
    limit: Option<usize>,
    released: usize,
}

impl<N> MonotonicResource<N> {
    /// An arena that grows as needed.
    pub const fn new() -> Self {
        Self { slots: Vec::new(), limit: None, released: 0 }
    }

    /// An arena that can hand out at most `limit` slots over its whole lifetime.
    pub fn bounded(limit: usize) -> Self {
        Self { slots: Vec::with_capacity(limit), limit: Some(limit), released: 0 }
    }

    /// The number of slots handed out so far (including released ones).
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// The number of slots that were handed out and haven't been released.
    pub fn live(&self) -> usize {
        self.slots.len() - self.released
    }
}

impl<N> Default for MonotonicResource<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Resource<N> for MonotonicResource<N> {
    fn allocate(&mut self, node: N) -> Result<NodeId, ResourceError> {
        if let Some(capacity) = self.limit {
            if self.slots.len() >= capacity {
                return Err(ResourceError::Exhausted { capacity })
            }
        }

        if self.slots.len() == self.slots.capacity() {
            self.slots.try_reserve(1).map_err(|_| ResourceError::OutOfMemory)?;
        }

        let id = NodeId::new(self.slots.len());
        self.slots.push(Some(node));
        Ok(id)
    }

    fn deallocate(&mut self, id: NodeId) {
        let node = self.slots[id.index()].take();
        debug_assert!(node.is_some(), "double deallocation of node {id:?}");
        if node.is_some() {
            self.released += 1;
        }
    }

    fn get(&self, id: NodeId) -> &N {
        match &self.slots[id.index()] {
            Some(node) => node,
            None => panic!("use of released node {id:?}"),
        }
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        match &mut self.slots[id.index()] {
            Some(node) => node,
            None => panic!("use of released node {id:?}"),
        }
    }
}
