use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while aggregating one results directory.
/// All variants are fatal to the run.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("missing log file: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("cannot read log file {}: {}", .path.display(), .source)]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed line {}:{}: {}", .path.display(), .line, .reason)]
    MalformedLine {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        reason: String,
    },

    #[error("no samples for {category}, statistics are undefined")]
    EmptySeries { category: String },
}
