//! # rangecache
//!
//! LRU cache layer for range-sum queries.
//!
//! ## Architecture
//! - **HashMap**: AHash for fast key lookups (O(1))
//! - **LRU List**: slab-backed doubly-linked list, head is least recently
//!   used, tail is most recently used (O(1) refresh and eviction)
//! - **Invalidation**: a write scans every resident `(left, right)` key and
//!   drops each one whose range contains the written index
//! - **Shared**: [`SharedRangeSumCache`] serializes writes against reads
//!   for multi-threaded callers

#![warn(missing_docs)]

mod cache;
mod config;
mod key;
mod lru;
mod shared;
mod stats;

pub use cache::RangeSumCache;
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use key::RangeKey;
pub use lru::{Keys, LruCache};
pub use rangesum::{Error, Result};
pub use shared::SharedRangeSumCache;
pub use stats::{CacheStats, StatsSnapshot};
