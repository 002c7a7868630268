//! Cache configuration options

use rangesum::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of cached ranges
pub const DEFAULT_CAPACITY: usize = 1000;

/// Configuration for the range-sum cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached ranges
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Set the maximum number of cached ranges
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject settings the cache cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
