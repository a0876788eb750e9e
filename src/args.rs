use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicyArg {
    /// Fail the whole run on the first malformed line
    Abort,
    /// Drop malformed lines and report the per-file skip count on stderr
    Skip,
}

#[derive(Parser, Debug)]
#[command(about = "Aggregate consensus-client benchmark logs into latency and throughput statistics")]
pub struct Args {
    /// Results directory containing lattput.txt and the latency logs
    #[arg(short = 'd', long = "results-dir", env = "RESULTS_DIR")]
    pub results_dir: PathBuf,

    /// Number of per-leader shard files per category; 0 reads the single latency.txt
    #[arg(short = 's', long = "shards", default_value_t = 0)]
    pub shards: usize,

    /// How to treat lines that fail to parse
    #[arg(long = "malformed", value_enum, default_value_t = MalformedPolicyArg::Abort)]
    pub malformed: MalformedPolicyArg,

    /// 0-based whitespace-token index of the latency value in latency log lines
    #[arg(long = "latency-field", default_value_t = crate::config::LATENCY_FIELD)]
    pub latency_field: usize,

    /// 0-based whitespace-token index of the throughput value in lattput.txt lines
    #[arg(long = "tput-field", default_value_t = crate::config::THROUGHPUT_FIELD)]
    pub tput_field: usize,
}
