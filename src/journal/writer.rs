//! Append-mode line writer
//!
//! Opens the day's file once per batch, writes every record as one line, and
//! flushes before returning. Low write frequency makes open-per-batch cheap
//! and keeps no file handle alive between flushes.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::{LineSchema, LogRecord};

/// Append a batch of records to `path`, one line per record, in slice order
pub(super) fn append_records(
    path: &Path,
    schema: LineSchema,
    records: &[LogRecord],
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writer.write_all(record.format_line(schema).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
