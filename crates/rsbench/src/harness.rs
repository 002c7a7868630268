//! Timing harness: runs each strategy over its own copy of the array

use anyhow::Result;
use chrono::Utc;
use rangecache::{CacheConfig, RangeSumCache, StatsSnapshot};
use rangesum::{process_queries, Direct, Query, RangeQuery};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::workload::Workload;

/// Outcome of one strategy over the full query stream
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Strategy label
    pub name: &'static str,
    /// Wall-clock time for the whole stream
    pub elapsed: Duration,
    /// One sum per range query, in order
    pub sums: Vec<i64>,
}

/// Run `queries` once with `strategy` against a private copy of `array`
pub fn run<S: RangeQuery>(strategy: &mut S, array: &[i64], queries: &[Query]) -> Result<RunResult> {
    let mut working = array.to_vec();

    let start = Instant::now();
    let sums = process_queries(strategy, &mut working, queries)?;
    let elapsed = start.elapsed();

    info!(strategy = strategy.name(), elapsed_ms = elapsed.as_millis() as u64, "run finished");

    Ok(RunResult {
        name: strategy.name(),
        elapsed,
        sums,
    })
}

/// `uncached / cached`, or `None` when the cached run took no measurable time
pub fn speedup(uncached: Duration, cached: Duration) -> Option<f64> {
    if cached.is_zero() {
        None
    } else {
        Some(uncached.as_secs_f64() / cached.as_secs_f64())
    }
}

/// Benchmark summary
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// RFC 3339 start time
    pub started_at: String,
    /// Array length
    pub size: usize,
    /// Range queries in the stream
    pub range_queries: usize,
    /// Update queries in the stream
    pub update_queries: usize,
    /// Cache configuration used for the cached run
    pub cache_config: CacheConfig,
    /// Uncached wall-clock seconds
    pub uncached_secs: f64,
    /// Cached wall-clock seconds
    pub cached_secs: f64,
    /// Uncached / cached; `None` means unbounded
    pub speedup: Option<f64>,
    /// Whether both runs produced identical sums, if checked
    pub verified: Option<bool>,
    /// First range query whose sums differed, if any
    pub mismatch_at: Option<usize>,
    /// Cache counters after the cached run
    pub cache: StatsSnapshot,
}

/// Run both strategies over `workload` and summarize
///
/// With `verify`, the per-query sums of both runs are compared and the
/// outcome is recorded in the report; a mismatch is not an error here.
pub fn compare(workload: &Workload, config: CacheConfig, verify: bool) -> Result<Report> {
    let started_at = Utc::now().to_rfc3339();

    info!("Running without cache");
    let uncached = run(&mut Direct, &workload.array, &workload.queries)?;

    info!(capacity = config.capacity, "Running with LRU cache");
    let mut cache = RangeSumCache::with_config(config.clone())?;
    let cached = run(&mut cache, &workload.array, &workload.queries)?;

    let mismatch_at = if verify {
        first_mismatch(&uncached.sums, &cached.sums)
    } else {
        None
    };
    if let Some(pos) = mismatch_at {
        warn!(
            "{} and {} disagree at range query #{}",
            uncached.name, cached.name, pos
        );
    }
    let verified = verify.then_some(mismatch_at.is_none());

    Ok(Report {
        started_at,
        size: workload.array.len(),
        range_queries: workload.range_count(),
        update_queries: workload.update_count(),
        cache_config: config,
        uncached_secs: uncached.elapsed.as_secs_f64(),
        cached_secs: cached.elapsed.as_secs_f64(),
        speedup: speedup(uncached.elapsed, cached.elapsed),
        verified,
        mismatch_at,
        cache: cache.stats().snapshot(),
    })
}

fn first_mismatch(a: &[i64], b: &[i64]) -> Option<usize> {
    if a.len() != b.len() {
        return Some(a.len().min(b.len()));
    }
    a.iter().zip(b).position(|(x, y)| x != y)
}
