#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

// configuration and errors
pub mod config;
pub mod error;

// where nodes live
pub mod memory;

// the trees, and the map and set built on them
pub mod non_concurrent;

#[cfg(test)]
mod logging;

pub use config::TreeConfig;
pub use error::ElementNotFound;
pub use memory::{MonotonicResource, NodeId, Resource, ResourceError, SystemResource};
pub use non_concurrent::map::OrderedMap;
pub use non_concurrent::rbtree::{Cursor, KeyNode, PairNode, RbTree, TreeNode};
pub use non_concurrent::set::OrderedSet;
