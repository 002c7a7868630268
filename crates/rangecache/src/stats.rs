//! Cache statistics tracking
//!
//! Counters are plain integers: the cache is only mutated through
//! `&mut self`, and the shared wrapper keeps it behind a lock.

use serde::{Deserialize, Serialize};

/// Hit, miss and removal counters for one cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    inserts: u64,
    invalidations: u64,
}

/// Point-in-time copy of [`CacheStats`] with the derived hit ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to recompute
    pub misses: u64,
    /// Entries dropped for capacity
    pub evictions: u64,
    /// Entries added after a miss
    pub inserts: u64,
    /// Entries dropped because a write overlapped their range
    pub invalidations: u64,
    /// hits / (hits + misses)
    pub hit_ratio: f64,
}

impl CacheStats {
    /// Zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_invalidations(&mut self, count: u64) {
        self.invalidations += count;
    }

    /// Lookups served from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that recomputed the sum
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Capacity evictions
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Sums stored after a miss
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Ranges dropped by writes
    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }

    /// Fraction of lookups that hit, 0.0 before any lookup
    pub fn hit_ratio(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Copy the counters for reporting
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            inserts: self.inserts,
            invalidations: self.invalidations,
            hit_ratio: self.hit_ratio(),
        }
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
