//! Query workload generation
//!
//! A workload is an initial array plus a stream of range and update
//! queries. Range queries are skewed toward a small pool of hot ranges.

use anyhow::{ensure, Context, Result};
use rand::Rng;
use rangesum::Query;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Workload shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Array length
    pub size: usize,
    /// Number of queries to generate
    pub queries: usize,
    /// Number of distinct hot ranges
    pub hot_pool: usize,
    /// Probability that a range query picks a hot range
    pub p_hot: f64,
    /// Probability that a query is an update
    pub p_update: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            size: 100_000,
            queries: 50_000,
            hot_pool: 30,
            p_hot: 0.95,
            p_update: 0.03,
        }
    }
}

impl WorkloadConfig {
    /// Reject shapes the generator cannot produce
    pub fn validate(&self) -> Result<()> {
        ensure!(self.size >= 1, "array size must be at least 1");
        ensure!(
            (0.0..=1.0).contains(&self.p_hot),
            "p_hot must be in [0, 1], got {}",
            self.p_hot
        );
        ensure!(
            (0.0..=1.0).contains(&self.p_update),
            "p_update must be in [0, 1], got {}",
            self.p_update
        );
        ensure!(
            self.hot_pool >= 1 || self.p_hot == 0.0,
            "hot_pool must be at least 1 when p_hot > 0"
        );
        Ok(())
    }
}

/// Serialized workload, replayable across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Initial array contents
    pub array: Vec<i64>,
    /// Query stream
    pub queries: Vec<Query>,
}

impl Workload {
    /// Generate a fresh workload
    pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            array: make_array(config.size, rng),
            queries: make_queries(config, rng),
        })
    }

    /// Load a workload written by [`Workload::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open workload: {:?}", path))?;
        let workload: Workload = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse workload: {:?}", path))?;
        Ok(workload)
    }

    /// Write the workload as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file =
            File::create(path).with_context(|| format!("Failed to create workload: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).context("Failed to write workload")?;
        writer.flush().context("Failed to flush workload")?;
        Ok(())
    }

    /// Number of range queries
    pub fn range_count(&self) -> usize {
        self.queries
            .iter()
            .filter(|q| matches!(q, Query::Range { .. }))
            .count()
    }

    /// Number of update queries
    pub fn update_count(&self) -> usize {
        self.queries.len() - self.range_count()
    }
}

/// `size` values drawn uniformly from `1..=100`
pub fn make_array<R: Rng>(size: usize, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(1..=100)).collect()
}

/// Hot ranges start in the first half of the array and end in the second
pub fn make_hot_pool<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<(usize, usize)> {
    let n = config.size;
    (0..config.hot_pool)
        .map(|_| (rng.gen_range(0..=n / 2), rng.gen_range(n / 2..n)))
        .collect()
}

/// Generate the query stream
///
/// Each query is an update with probability `p_update`. Otherwise it is a
/// range query: a hot range with probability `p_hot`, else a uniform
/// `left` and a `right` in `[left, size)`.
pub fn make_queries<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Query> {
    let n = config.size;
    let hot = make_hot_pool(config, rng);

    (0..config.queries)
        .map(|_| {
            if rng.gen_bool(config.p_update) {
                Query::Update {
                    index: rng.gen_range(0..n),
                    value: rng.gen_range(1..=100),
                }
            } else if !hot.is_empty() && rng.gen_bool(config.p_hot) {
                let (left, right) = hot[rng.gen_range(0..hot.len())];
                Query::Range { left, right }
            } else {
                let left = rng.gen_range(0..n);
                let right = rng.gen_range(left..n);
                Query::Range { left, right }
            }
        })
        .collect()
}
