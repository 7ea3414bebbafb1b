use crate::config::TreeConfig;


/// A LIFO work list with a configurable growth policy.
///
/// Used to walk a whole tree without recursing, so only `push`, `pop` and `is_empty` matter.
pub struct Worklist<T> {
    items: Vec<T>,
    growth_factor: f64,
}

impl<T> Worklist<T> {
    pub fn new(growth_factor: f64, initial_capacity: usize) -> Self {
        assert!(growth_factor > 1.0, "growth factor must be greater than 1.0 (got {growth_factor})");
        Self {
            items: Vec::with_capacity(initial_capacity),
            growth_factor,
        }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self::new(config.growth_factor(), config.initial_capacity())
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        self.items.push(item);
    }

    /// Removes the most recently pushed item and moves it out.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn grow(&mut self) {
        let old_capacity = self.items.capacity();
        // always make room for at least one more item, even when the factor rounds down
        let new_capacity = ((old_capacity as f64 * self.growth_factor) as usize).max(old_capacity + 1);
        self.items.reserve_exact(new_capacity - self.items.len());
        trace!("Grew work list from {old_capacity} to {} slots", self.items.capacity());
    }
}
