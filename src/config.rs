use std::path::{Path, PathBuf};

use crate::args::{Args, MalformedPolicyArg};
use crate::model::{Category, OpKind};

/// Default token indices for the log line layouts written by the client:
/// latency lines are `time_ns latency commit_latency`, throughput lines are
/// `time_ns avg_lat tput count total_ors avg_commit_lat`.
pub const LATENCY_FIELD: usize = 1;
pub const THROUGHPUT_FIELD: usize = 2;

pub const THROUGHPUT_LOG: &str = "lattput.txt";
pub const SINGLE_LATENCY_LOG: &str = "latency.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    Abort,
    Skip,
}

/// One expected latency log and the category its samples belong to.
#[derive(Debug, Clone)]
pub struct LatencySpec {
    pub path: PathBuf,
    pub category: Category,
}

/// Fixed manifest of one run: which files to read, where each value sits on
/// a line, and what to do with lines that do not parse. Fully determined
/// before any file is opened.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub dir: PathBuf,
    pub throughput_log: PathBuf,
    pub throughput_field: usize,
    pub latency_field: usize,
    pub latency_logs: Vec<LatencySpec>,
    pub policy: MalformedPolicy,
}

impl Manifest {
    pub fn from_args(args: &Args) -> Self {
        let policy = match args.malformed {
            MalformedPolicyArg::Abort => MalformedPolicy::Abort,
            MalformedPolicyArg::Skip => MalformedPolicy::Skip,
        };
        Manifest {
            dir: args.results_dir.clone(),
            throughput_log: args.results_dir.join(THROUGHPUT_LOG),
            throughput_field: args.tput_field,
            latency_field: args.latency_field,
            latency_logs: latency_fan_out(&args.results_dir, args.shards),
            policy,
        }
    }

    /// Category list in report order.
    pub fn categories(&self) -> Vec<Category> {
        self.latency_logs.iter().map(|s| s.category).collect()
    }
}

/// Expands the shard count into the concrete per-category file list. One
/// loop over (kind, shard) instead of a hand-written block per shard.
fn latency_fan_out(dir: &Path, shards: usize) -> Vec<LatencySpec> {
    if shards == 0 {
        return vec![LatencySpec {
            path: dir.join(SINGLE_LATENCY_LOG),
            category: Category::base(OpKind::Read),
        }];
    }

    let mut specs = Vec::with_capacity(shards * 2);
    for kind in [OpKind::Read, OpKind::Write] {
        for shard in 0..shards {
            specs.push(LatencySpec {
                path: dir.join(format!("latFile{}-{}.txt", kind.name(), shard)),
                category: Category::sharded(kind, shard),
            });
        }
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsharded_manifest_reads_single_latency_log() {
        let specs = latency_fan_out(Path::new("/res"), 0);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].path, Path::new("/res/latency.txt"));
        assert_eq!(specs[0].category.label(), "Read");
    }

    #[test]
    fn sharded_manifest_fans_out_per_kind_and_shard() {
        let specs = latency_fan_out(Path::new("/res"), 5);
        assert_eq!(specs.len(), 10);

        let names: Vec<String> = specs
            .iter()
            .map(|s| s.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names[0], "latFileRead-0.txt");
        assert_eq!(names[4], "latFileRead-4.txt");
        assert_eq!(names[5], "latFileWrite-0.txt");
        assert_eq!(names[9], "latFileWrite-4.txt");

        assert_eq!(specs[0].category.label(), "Read0");
        assert_eq!(specs[9].category.label(), "Write4");
    }
}
