//! Cache key for an inclusive index range

use serde::{Deserialize, Serialize};

/// Inclusive `[left, right]` range used as the cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeKey {
    /// First index
    pub left: usize,
    /// Last index
    pub right: usize,
}

impl RangeKey {
    /// Create a key for `[left, right]`
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// True if a write at `index` changes the sum over this range
    pub fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }
}

impl From<(usize, usize)> for RangeKey {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}
