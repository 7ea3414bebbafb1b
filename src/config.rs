//! Tuning knobs for a tree.

/// Settings for the work list used when a tree is cleared or dropped.
///
/// The defaults (growth factor of `1.8`, room for `25` nodes up front) are fine for most trees. Trees
/// that are known to get very large can start with a bigger list to avoid regrowing it during teardown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig {
    pub(crate) growth_factor: f64,
    pub(crate) initial_capacity: usize,
}

impl TreeConfig {
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.8;
    pub const DEFAULT_INITIAL_CAPACITY: usize = 25;

    pub const fn new() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// How much the work list's capacity is multiplied by when it fills up.
    ///
    /// Panics if `factor` isn't greater than `1.0` (a list that can't grow would never make progress).
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        assert!(factor > 1.0, "growth factor must be greater than 1.0 (got {factor})");
        self.growth_factor = factor;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.growth_factor(), 1.8);
        assert_eq!(config.initial_capacity(), 25);
    }

    #[test]
    fn builder() {
        let config = TreeConfig::new().with_growth_factor(2.0).with_initial_capacity(0);
        assert_eq!(config.growth_factor(), 2.0);
        assert_eq!(config.initial_capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "growth factor")]
    fn growth_factor_must_grow() {
        let _ = TreeConfig::new().with_growth_factor(1.0);
    }
}
