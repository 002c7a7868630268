//! RangeSumCache: LRU-memoized range sums with write invalidation
//!
//! A cache instance belongs to one array. Every write must go through
//! [`RangeSumCache::update`] (or be followed by [`RangeSumCache::invalidate`])
//! or cached sums go stale.

use rangesum::{check_range, RangeQuery, Result};
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::key::RangeKey;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cached range-sum strategy
pub struct RangeSumCache {
    /// Memoized sums keyed by `(left, right)`
    lru: LruCache<RangeKey, i64>,

    /// Cache statistics
    stats: CacheStats,
}

impl RangeSumCache {
    /// Create a cache holding at most `capacity` ranges
    ///
    /// # Returns
    /// * `Result<RangeSumCache>` - `InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Create a cache from a [`CacheConfig`]
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            lru: LruCache::try_new(config.capacity)?,
            stats: CacheStats::new(),
        })
    }

    /// Sum of `array[left..=right]`, served from the cache when possible
    ///
    /// # Arguments
    /// * `array` - The array this cache belongs to
    /// * `left` - First index (inclusive)
    /// * `right` - Last index (inclusive)
    ///
    /// # Returns
    /// * `Result<i64>` - The range sum
    pub fn range_sum(&mut self, array: &[i64], left: usize, right: usize) -> Result<i64> {
        check_range(array.len(), left, right)?;
        let key = RangeKey::new(left, right);

        if let Some(&sum) = self.lru.get(&key) {
            self.stats.record_hit();
            return Ok(sum);
        }

        // Cache miss - recompute and remember
        self.stats.record_miss();
        let sum = rangesum::range_sum(array, left, right)?;

        self.stats.record_insert();
        if let Some((evicted, _)) = self.lru.put(key, sum) {
            self.stats.record_eviction();
            trace!(left = evicted.left, right = evicted.right, "evicted range");
        }

        Ok(sum)
    }

    /// Write `array[index] = value` and drop every cached range containing `index`
    ///
    /// # Returns
    /// * `Result<usize>` - Number of cached ranges invalidated. On error
    ///   neither the array nor the cache is changed.
    pub fn update(&mut self, array: &mut [i64], index: usize, value: i64) -> Result<usize> {
        rangesum::update(array, index, value)?;
        Ok(self.invalidate(index))
    }

    /// Drop every cached range containing `index`
    ///
    /// Scans all resident keys; cost is linear in the cache size.
    pub fn invalidate(&mut self, index: usize) -> usize {
        let stale: Vec<RangeKey> = self
            .lru
            .keys()
            .filter(|key| key.contains(index))
            .copied()
            .collect();

        for key in &stale {
            self.lru.remove(key);
        }

        if !stale.is_empty() {
            self.stats.record_invalidations(stale.len() as u64);
            debug!(index, invalidated = stale.len(), "invalidated cached ranges");
        }

        stale.len()
    }

    /// Cached sum for `[left, right]`, without touching recency
    pub fn cached(&self, left: usize, right: usize) -> Option<i64> {
        self.lru.peek(&RangeKey::new(left, right)).copied()
    }

    /// Resident keys from least to most recently used
    pub fn keys(&self) -> Vec<RangeKey> {
        self.lru.keys().copied().collect()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current number of cached ranges
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.lru.capacity()
    }

    /// Drop all cached ranges and reset statistics
    pub fn clear(&mut self) {
        self.lru.clear();
        self.stats.reset();
    }
}

impl RangeQuery for RangeSumCache {
    fn name(&self) -> &'static str {
        "lru-cache"
    }

    fn range_sum(&mut self, array: &[i64], left: usize, right: usize) -> Result<i64> {
        RangeSumCache::range_sum(self, array, left, right)
    }

    fn update(&mut self, array: &mut [i64], index: usize, value: i64) -> Result<()> {
        RangeSumCache::update(self, array, index, value).map(|_| ())
    }
}
