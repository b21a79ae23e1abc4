//! Persistent dedup log.
//!
//! One record per downloaded item, `<file name>\t<byte length>\n`, appended
//! in download order and never rewritten. The file is opened on every query
//! and append, so a log that does not exist yet is simply empty.
//!
//! There is no file lock: a run owns the log for its whole duration and all
//! access goes through the one [`DedupLog`] held by the fetch coordinator.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Field separator within a record.
const SEPARATOR: char = '\t';

/// Append-only record of downloaded file names.
#[derive(Debug)]
pub struct DedupLog {
    path: PathBuf,
}

impl DedupLog {
    /// Create a handle for the log at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `file_name` has a record in the log.
    pub fn contains(&self, file_name: &str) -> Result<bool> {
        let file = match File::open(&self.path).map_err(Error::from) {
            Ok(file) => file,
            Err(e) if e.is_not_found() => return Ok(false),
            Err(e) => return Err(e),
        };

        for line in BufReader::new(file).split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            if record_name(&line) == file_name {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Append a record without checking for an existing one.
    ///
    /// Callers check [`contains`](Self::contains) first.
    pub fn append(&self, file_name: &str, length: u64) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}{}{}", file_name, SEPARATOR, length)?;

        tracing::debug!("Logging {}\t{}", file_name, length);
        Ok(())
    }

    /// Append a record unless one exists. Returns whether it was appended.
    pub fn append_if_absent(&self, file_name: &str, length: u64) -> Result<bool> {
        if self.contains(file_name)? {
            return Ok(false);
        }
        self.append(file_name, length)?;
        Ok(true)
    }
}

/// The file name field of a log line.
fn record_name(line: &str) -> &str {
    line.trim().split(SEPARATOR).next().unwrap_or("")
}
