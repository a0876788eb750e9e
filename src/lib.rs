//! Aggregates the log files of one benchmark run of a distributed consensus
//! client into a single flat report of latency statistics per operation
//! category plus average throughput.
//!
//! The pipeline is linear: open each expected log, extract one numeric field
//! per line into a sample series, summarize each series (mean and fixed
//! percentiles), and assemble the `<statistic>_<Category>` / `avg_tput`
//! mapping for JSON emission.

pub mod args;
pub mod config;
pub mod error;
pub mod extract;
pub mod io_utils;
pub mod logging;
pub mod model;
pub mod report;
pub mod stats;

use rayon::prelude::*;
use tracing::warn;

pub use crate::args::Args;
pub use crate::config::Manifest;
pub use crate::error::MetricsError;
pub use crate::report::MetricsReport;

use crate::model::{Category, SampleSeries};
use crate::stats::SeriesSummary;

/// Runs the whole aggregation for one results directory. Fails fast: any
/// missing file, unreadable file, malformed line (under the abort policy) or
/// empty series aborts the run before anything is emitted.
pub fn collect_metrics(manifest: &Manifest) -> Result<MetricsReport, MetricsError> {
    let tput = extract::extract_series(
        &manifest.throughput_log,
        manifest.throughput_field,
        manifest.policy,
    )?;
    warn_skipped(&manifest.throughput_log, &tput);
    let avg_tput = stats::mean_of("tput", &tput.values)?;

    // Each latency log is independent, so extraction fans out across files.
    let extracted: Vec<(Category, SampleSeries)> = manifest
        .latency_logs
        .par_iter()
        .map(|spec| {
            let series =
                extract::extract_series(&spec.path, manifest.latency_field, manifest.policy)?;
            Ok((spec.category, series))
        })
        .collect::<Result<_, MetricsError>>()?;

    let mut summaries: Vec<(Category, SeriesSummary)> = Vec::with_capacity(extracted.len());
    for (spec, (category, series)) in manifest.latency_logs.iter().zip(extracted) {
        warn_skipped(&spec.path, &series);
        let summary = stats::summarize(&category.label(), &series.values)?;
        summaries.push((category, summary));
    }

    Ok(report::assemble(&summaries, avg_tput))
}

fn warn_skipped(path: &std::path::Path, series: &SampleSeries) {
    if series.skipped > 0 {
        warn!(
            "skipped {} malformed line(s) in {}",
            series.skipped,
            path.display()
        );
    }
}
