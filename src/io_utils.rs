use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::MetricsError;

/// Opens one expected log file. A nonexistent file is a distinct failure
/// from one that exists but cannot be read.
pub fn open_log(path: &Path) -> Result<BufReader<File>, MetricsError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Err(MetricsError::MissingFile {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(MetricsError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Lists the .txt log files actually present under the results directory.
/// Only used to enrich the diagnostic when an expected file is missing.
pub fn scan_log_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension() == Some(OsStr::new("txt")) {
            found.push(entry.path().to_path_buf());
        }
    }
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn open_log_distinguishes_missing_from_present() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("lattput.txt");
        fs::write(&present, "1 2 3\n").unwrap();

        assert!(open_log(&present).is_ok());
        match open_log(&dir.path().join("nope.txt")) {
            Err(MetricsError::MissingFile { path }) => {
                assert!(path.ends_with("nope.txt"));
            }
            other => panic!("expected MissingFile, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn scan_finds_only_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("latency.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let found = scan_log_files(dir.path());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("latency.txt"));
    }
}
