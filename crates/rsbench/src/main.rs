//! Range-sum benchmark: uncached recomputation vs. LRU-cached sums

mod harness;
mod report;
mod workload;

use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rangecache::{CacheConfig, DEFAULT_CAPACITY};
use std::path::PathBuf;
use tracing::info;

use crate::workload::{Workload, WorkloadConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Array length
    #[arg(short = 'n', long, default_value_t = 100_000)]
    size: usize,

    /// Number of queries
    #[arg(short, long, default_value_t = 50_000)]
    queries: usize,

    /// Number of distinct hot ranges
    #[arg(long, default_value_t = 30)]
    hot_pool: usize,

    /// Probability a range query hits the hot pool
    #[arg(long, default_value_t = 0.95)]
    p_hot: f64,

    /// Probability a query is an update
    #[arg(long, default_value_t = 0.03)]
    p_update: f64,

    /// Cache capacity (number of ranges)
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// RNG seed for a reproducible workload
    #[arg(short, long)]
    seed: Option<u64>,

    /// Replay a workload saved with --dump instead of generating one
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Save the workload as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Cross-check cached sums against the uncached run
    #[arg(long)]
    verify: bool,

    /// Print the report as JSON instead of the console summary
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn workload_config(&self) -> WorkloadConfig {
        WorkloadConfig {
            size: self.size,
            queries: self.queries,
            hot_pool: self.hot_pool,
            p_hot: self.p_hot,
            p_update: self.p_update,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting rsbench v{}", env!("CARGO_PKG_VERSION"));

    let workload = match &args.replay {
        Some(path) => {
            info!("Replaying workload from {:?}", path);
            Workload::load(path)?
        }
        None => {
            let config = args.workload_config();
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            info!(
                size = config.size,
                queries = config.queries,
                hot_pool = config.hot_pool,
                p_hot = config.p_hot,
                p_update = config.p_update,
                "Generating workload"
            );
            Workload::generate(&config, &mut rng)?
        }
    };

    if let Some(path) = &args.dump {
        workload.save(path)?;
        info!("Workload saved to {:?}", path);
    }

    let report = harness::compare(&workload, CacheConfig::new(args.capacity), args.verify)?;

    if args.json {
        println!("{}", report::to_json(&report)?);
    } else {
        report::print_console(&report);
    }

    if let Some(path) = &args.output {
        report::write_json(path, &report)?;
        info!("Report written to {:?}", path);
    }

    if let Some(pos) = report.mismatch_at {
        bail!("cached and uncached sums disagree at range query #{}", pos);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["rsbench"]);

        assert_eq!(args.workload_config(), WorkloadConfig::default());
        assert_eq!(args.capacity, 1000);
        assert!(args.seed.is_none());
        assert!(!args.verify);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "rsbench", "-n", "64", "-q", "10", "--p-update", "0.5", "-c", "8", "--seed", "3",
            "--verify",
        ]);

        let config = args.workload_config();
        assert_eq!(config.size, 64);
        assert_eq!(config.queries, 10);
        assert_eq!(config.p_update, 0.5);
        assert_eq!(args.capacity, 8);
        assert_eq!(args.seed, Some(3));
        assert!(args.verify);
    }
}
