use std::io::BufRead;
use std::path::Path;

use crate::config::MalformedPolicy;
use crate::error::MetricsError;
use crate::io_utils::open_log;
use crate::model::SampleSeries;

/// Reads one log file into a sample series, taking the `field`-th
/// whitespace-delimited token of every line as the sample value.
///
/// Under `MalformedPolicy::Abort` the first bad line fails the run, naming
/// the file and 1-based line number. Under `MalformedPolicy::Skip` bad lines
/// are dropped and counted; the caller surfaces the count on stderr.
pub fn extract_series(
    path: &Path,
    field: usize,
    policy: MalformedPolicy,
) -> Result<SampleSeries, MetricsError> {
    let reader = open_log(path)?;
    let mut series = SampleSeries::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MetricsError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        match parse_field(&line, field) {
            Ok(value) => series.values.push(value),
            Err(reason) => match policy {
                MalformedPolicy::Abort => {
                    return Err(MetricsError::MalformedLine {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        reason,
                    })
                }
                MalformedPolicy::Skip => series.skipped += 1,
            },
        }
    }

    Ok(series)
}

fn parse_field(line: &str, field: usize) -> Result<f64, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let token = tokens.get(field).ok_or_else(|| {
        format!(
            "expected at least {} fields, found {}",
            field + 1,
            tokens.len()
        )
    })?;
    let value: f64 = token
        .parse()
        .map_err(|_| format!("field {} is not numeric: '{}'", field + 1, token))?;
    // A nan or inf sample would poison every downstream statistic.
    if !value.is_finite() {
        return Err(format!("field {} is not finite: '{}'", field + 1, token));
    }
    Ok(value)
}
