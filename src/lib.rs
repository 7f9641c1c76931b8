//! A splay tree map used as a memoization cache, along with an LRU range cache and the timing
//! harness that compares them.

mod entry;
mod error;
pub mod cache;
pub mod fibonacci;
pub mod lru;
pub mod range_sum;
pub mod report;
pub mod splay_tree;

pub use crate::cache::Cache;
pub use crate::error::{Error, Result};
