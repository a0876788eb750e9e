use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;

use client_metrics_rs::{collect_metrics, io_utils, logging, Args, Manifest, MetricsError};

fn main() -> Result<()> {
    logging::init_logging();

    let args = Args::parse();
    if !args.results_dir.exists() {
        return Err(anyhow!(
            "results directory not found: {}",
            args.results_dir.display()
        ));
    }

    let manifest = Manifest::from_args(&args);
    info!(
        "aggregating {} latency log(s) under {}",
        manifest.latency_logs.len(),
        manifest.dir.display()
    );

    let report = match collect_metrics(&manifest) {
        Ok(report) => report,
        Err(err) => {
            if let MetricsError::MissingFile { .. } = &err {
                list_present_logs(&manifest);
            }
            return Err(err.into());
        }
    };

    // The report is the only thing ever written to stdout, and only on a
    // fully successful run.
    println!("{}", report.to_json_line()?);
    Ok(())
}

fn list_present_logs(manifest: &Manifest) {
    let found = io_utils::scan_log_files(&manifest.dir);
    match found.is_empty() {
        true => info!("no .txt log files present under {}", manifest.dir.display()),
        false => {
            let names: Vec<String> = found.iter().map(|p| p.display().to_string()).collect();
            info!("log files present: {}", names.join(", "));
        }
    }
}
