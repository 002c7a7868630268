//! Console and JSON reporting

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::harness::Report;

/// Format the speedup ratio, `inf` when the cached run was instantaneous
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(ratio) => format!("{:.2}", ratio),
        None => "inf".to_string(),
    }
}

/// Print the human-readable summary
pub fn print_console(report: &Report) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║          Range-Sum Benchmark Results                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("\n📊 WORKLOAD:");
    println!("   Array Size:      {}", report.size);
    println!("   Range Queries:   {}", report.range_queries);
    println!("   Update Queries:  {}", report.update_queries);
    println!("   Cache Capacity:  {} ranges", report.cache_config.capacity);
    println!("\n⏱  TIMING:");
    println!("   No cache : {:8.3} s", report.uncached_secs);
    println!(
        "   LRU cache: {:8.3} s  (speedup x{})",
        report.cached_secs,
        format_speedup(report.speedup)
    );
    println!("\n💾 CACHE:");
    println!("   Hits:            {}", report.cache.hits);
    println!("   Misses:          {}", report.cache.misses);
    println!("   Hit Rate:        {:.1}%", report.cache.hit_ratio * 100.0);
    println!("   Evictions:       {}", report.cache.evictions);
    println!("   Invalidations:   {}", report.cache.invalidations);
    match (report.verified, report.mismatch_at) {
        (Some(true), _) => println!("\n✅ Results cross-checked: identical"),
        (Some(false), Some(pos)) => {
            println!("\n❌ Results cross-checked: MISMATCH at range query #{}", pos)
        }
        (Some(false), None) => println!("\n❌ Results cross-checked: MISMATCH"),
        (None, _) => {}
    }
    println!();
}

/// Pretty-printed JSON form of the report
pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Write the JSON report to `path`
pub fn write_json<P: AsRef<Path>>(path: P, report: &Report) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json(report)?)
        .with_context(|| format!("Failed to write report: {:?}", path))
}
