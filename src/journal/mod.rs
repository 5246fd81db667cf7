//! Journal Module
//!
//! On-disk side of the logger: daily log files plus count-based retention.
//!
//! ## Responsibilities
//! - Resolve the current day's file from the local clock
//! - Append record batches as text lines
//! - Bound the number of retained files after every write
//!
//! ## File Layout
//! ```text
//! {log_dir}/
//!   ├── action_logs_2024-02-27.txt
//!   ├── action_logs_2024-02-28.txt
//!   └── action_logs_2024-02-29.txt   ← today, append target
//! ```
//!
//! A flush cycle is lossy: a failed write is reported and the batch is
//! dropped, never retried.

mod naming;
mod retention;
mod writer;

pub use naming::{file_name_for, parse_file_date, FILE_EXTENSION, FILE_PREFIX};
pub use retention::PruneStats;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::record::{LineSchema, LogRecord};

/// Owns one log directory: appends batches and prunes old files
#[derive(Debug, Clone)]
pub struct Journal {
    /// Directory holding the daily files
    dir: PathBuf,

    /// Column set written per line
    schema: LineSchema,

    /// Retention bound enforced after each write
    max_files: usize,
}

impl Journal {
    pub fn new(dir: impl Into<PathBuf>, schema: LineSchema, max_files: usize) -> Self {
        Self {
            dir: dir.into(),
            schema,
            max_files,
        }
    }

    /// The journal directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for the given date
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(file_name_for(date))
    }

    /// Path of today's file (local clock)
    pub fn current_path(&self) -> PathBuf {
        self.path_for(Local::now().date_naive())
    }

    /// Append a batch to today's file, creating the directory and file as
    /// needed. Records are written in slice order, one line each.
    pub fn append(&self, records: &[LogRecord]) -> Result<()> {
        writer::append_records(&self.current_path(), self.schema, records)
    }

    /// Run one retention pass over the journal directory
    pub fn prune(&self) -> Result<PruneStats> {
        retention::prune(&self.dir, self.max_files)
    }

    /// One full flush cycle: attempt the write, then prune, swallowing
    /// failures. Both inline and background flushing funnel through here so
    /// the two modes cannot drift apart on disk.
    pub fn flush_cycle(&self, records: &[LogRecord]) {
        if records.is_empty() {
            return;
        }

        if let Err(e) = self.append(records) {
            tracing::error!(
                count = records.len(),
                error = %e,
                "failed to write log batch; records dropped"
            );
        }

        if let Err(e) = self.prune() {
            tracing::warn!(error = %e, "retention pass failed");
        }
    }
}
