//! Background flush worker
//!
//! Moves journal I/O off the event path: drained batches go over a bounded
//! channel to one dedicated thread, which runs the same flush cycle as
//! inline mode. A full queue drops the batch with a warning instead of
//! blocking the caller.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender, TrySendError};

use crate::error::Result;
use crate::journal::Journal;
use crate::record::LogRecord;

/// Handle to the flush thread
pub(crate) struct FlushWorker {
    /// `None` once shutdown has begun
    tx: Option<Sender<Vec<LogRecord>>>,
    handle: Option<JoinHandle<()>>,
}

impl FlushWorker {
    /// Spawn the worker thread with a queue of the given depth
    pub fn spawn(journal: Journal, queue_capacity: usize) -> Result<Self> {
        let (tx, rx) = bounded::<Vec<LogRecord>>(queue_capacity);

        let handle = thread::Builder::new()
            .name("actionlog-flush".to_string())
            .spawn(move || {
                // recv() keeps draining queued batches until every sender is
                // gone, so shutdown never abandons submitted work
                while let Ok(batch) = rx.recv() {
                    journal.flush_cycle(&batch);
                }
            })?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    /// Queue a batch for writing; never blocks
    pub fn submit(&self, batch: Vec<LogRecord>) {
        let Some(tx) = &self.tx else {
            return;
        };

        match tx.try_send(batch) {
            Ok(()) => {}
            Err(TrySendError::Full(batch)) => {
                tracing::warn!(count = batch.len(), "flush queue full; batch dropped");
            }
            Err(TrySendError::Disconnected(batch)) => {
                tracing::warn!(count = batch.len(), "flush worker stopped; batch dropped");
            }
        }
    }

    /// Stop the worker after it has drained the queue
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        // Dropping the sender disconnects the channel; recv() returns Err
        // once the queue is empty and the thread exits
        drop(self.tx.take());

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("flush worker panicked during shutdown");
            }
        }
    }
}

impl Drop for FlushWorker {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}
