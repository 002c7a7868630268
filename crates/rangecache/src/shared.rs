//! Thread-safe wrapper owning both the array and its cache
//!
//! Lock order is always cache, then array. Writes hold the cache lock across
//! the array write and the invalidation scan, so a reader can never observe
//! a sum cached before a write that has already returned.

use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use rangesum::Result;

use crate::cache::RangeSumCache;
use crate::config::CacheConfig;
use crate::stats::StatsSnapshot;

/// Shared handle to an array and its range-sum cache
#[derive(Clone)]
pub struct SharedRangeSumCache {
    cache: Arc<Mutex<RangeSumCache>>,
    array: Arc<RwLock<Vec<i64>>>,
}

impl SharedRangeSumCache {
    /// Take ownership of `array` and cache up to `capacity` ranges over it
    pub fn new(array: Vec<i64>, capacity: usize) -> Result<Self> {
        Self::with_config(array, CacheConfig::new(capacity))
    }

    /// Same as [`SharedRangeSumCache::new`] with a full config
    pub fn with_config(array: Vec<i64>, config: CacheConfig) -> Result<Self> {
        Ok(Self {
            cache: Arc::new(Mutex::new(RangeSumCache::with_config(config)?)),
            array: Arc::new(RwLock::new(array)),
        })
    }

    /// Sum of `array[left..=right]`
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64> {
        let mut cache = self.cache.lock();
        let array = self.array.read();
        cache.range_sum(&array, left, right)
    }

    /// Write `array[index] = value` and invalidate overlapping ranges
    pub fn update(&self, index: usize, value: i64) -> Result<usize> {
        let mut cache = self.cache.lock();
        let mut array = self.array.write();
        cache.update(&mut array, index, value)
    }

    /// Copy of the current array
    pub fn snapshot(&self) -> Vec<i64> {
        self.array.read().clone()
    }

    /// Array length
    pub fn len(&self) -> usize {
        self.array.read().len()
    }

    /// Check if the array is empty
    pub fn is_empty(&self) -> bool {
        self.array.read().is_empty()
    }

    /// Number of cached ranges
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Current cache statistics
    pub fn stats(&self) -> StatsSnapshot {
        self.cache.lock().stats().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let shared = SharedRangeSumCache::new(vec![1, 2, 3, 4, 5], 8).unwrap();

        assert_eq!(shared.range_sum(1, 3).unwrap(), 9);
        assert_eq!(shared.range_sum(1, 3).unwrap(), 9);
        assert_eq!(shared.update(2, 100).unwrap(), 1);
        assert_eq!(shared.range_sum(1, 3).unwrap(), 106);

        let stats = shared.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(shared.snapshot(), vec![1, 2, 100, 4, 5]);
    }

    #[test]
    fn test_shared_concurrent_writes_never_stale() {
        let n = 32;
        let shared = SharedRangeSumCache::new(vec![1; n], 64).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..500 {
                        let left = (i * 7 + t) % n;
                        let right = left + (i % (n - left));
                        shared.range_sum(left, right).unwrap();
                        if i % 5 == 0 {
                            shared.update((i + t) % n, (i as i64) + 1).unwrap();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every range still cached must agree with the final array
        let array = shared.snapshot();
        let cache = shared.cache.lock();
        for key in cache.keys() {
            let expected: i64 = array[key.left..=key.right].iter().sum();
            assert_eq!(cache.cached(key.left, key.right), Some(expected));
        }
        assert!(cache.len() <= 64);
    }
}
