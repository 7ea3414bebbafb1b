//! Single-threaded collections.

pub mod map;
pub mod rbtree;
pub mod set;
pub mod worklist;
