//! Log Buffer Module
//!
//! In-memory staging area for records between flushes.
//!
//! ## Responsibilities
//! - Hold appended records in insertion order
//! - Track the configured flush threshold
//! - Hand the whole batch to a flush cycle atomically (drain)
//!
//! The buffer itself is not synchronized; the owning recorder wraps it in a
//! mutex and checks the threshold after each append.

use crate::record::LogRecord;

/// Ordered, append-only record buffer with a flush threshold
#[derive(Debug)]
pub struct LogBuffer {
    records: Vec<LogRecord>,
    capacity: usize,
}

impl LogBuffer {
    /// Create an empty buffer with the given flush threshold
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one record, returning the new buffered count so the caller can
    /// decide whether a flush is due
    pub fn append(&mut self, record: LogRecord) -> usize {
        self.records.push(record);
        self.records.len()
    }

    /// True once the buffered count has reached the flush threshold
    pub fn is_at_capacity(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Remove and return all buffered records in insertion order
    pub fn drain(&mut self) -> Vec<LogRecord> {
        std::mem::replace(&mut self.records, Vec::with_capacity(self.capacity))
    }

    /// Number of buffered records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configured flush threshold
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
