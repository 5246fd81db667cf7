//! Recorder Module
//!
//! The coordinating component that ties everything together.
//!
//! ## Responsibilities
//! - Turn incoming [`GameEvent`]s into [`LogRecord`]s, applying the event
//!   policy (virtual inventories, click kinds, the entity allow-list)
//! - Buffer records and trigger a flush at the configured threshold
//! - Route flushes inline or through the background worker
//! - Run the startup retention pass and the shutdown flush

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::buffer::LogBuffer;
use crate::config::{Config, FlushMode};
use crate::error::Result;
use crate::events::GameEvent;
use crate::journal::Journal;
use crate::record::{EventKind, LogRecord};
use crate::worker::FlushWorker;

/// Actor name recorded when no entity caused a death
const ENVIRONMENT_ACTOR: &str = "Environment";

/// The action logger
///
/// An owned, injected component: construct as many independent instances as
/// needed, each against its own directory. All methods take `&self`; the
/// buffer is mutex-guarded, so a host that delivers events from several
/// threads stays sound.
pub struct ActionLogger {
    /// Logger configuration
    config: Config,

    /// Directory holding the daily log files
    log_dir: PathBuf,

    /// In-memory staging buffer (drained whole on flush)
    buffer: Mutex<LogBuffer>,

    /// On-disk side: daily files + retention
    journal: Journal,

    /// Present only in background flush mode
    worker: Option<FlushWorker>,
}

impl ActionLogger {
    /// Subdirectory of `data_dir` holding the log files
    const LOG_DIR_NAME: &'static str = "ActionLogs";

    /// Open a logger with the given config
    ///
    /// On startup:
    /// 1. Create the data and log directories
    /// 2. Run one retention pass over whatever is already there
    /// 3. Spawn the flush worker when background mode is configured
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        fs::create_dir_all(&config.data_dir)?;
        let log_dir = config.data_dir.join(Self::LOG_DIR_NAME);
        fs::create_dir_all(&log_dir)?;

        let journal = Journal::new(&log_dir, config.schema, config.max_log_files);

        // Startup retention pass over files left by earlier runs
        match journal.prune() {
            Ok(stats) if stats.deleted > 0 => {
                tracing::info!(deleted = stats.deleted, "startup retention pass");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "startup retention pass failed"),
        }

        let worker = match config.flush_mode {
            FlushMode::Inline => None,
            FlushMode::Background { queue_capacity } => {
                Some(FlushWorker::spawn(journal.clone(), queue_capacity)?)
            }
        };

        tracing::info!(
            version = crate::VERSION,
            dir = %log_dir.display(),
            capacity = config.buffer_capacity,
            "action logger ready"
        );

        Ok(Self {
            buffer: Mutex::new(LogBuffer::new(config.buffer_capacity)),
            config,
            log_dir,
            journal,
            worker,
        })
    }

    /// Open with a data directory path (convenience method)
    ///
    /// Uses the default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Record one game event
    ///
    /// Events the policy filters out are dropped silently. When the append
    /// fills the buffer, the batch is flushed before this method returns
    /// (inline mode) or queued for the worker (background mode). Flush
    /// failures are logged and swallowed; recording never fails the caller.
    pub fn record(&self, event: GameEvent) {
        let Some(record) = self.to_record(event) else {
            return;
        };

        // Drain inside the lock so a racing append cannot land between the
        // threshold check and the drain
        let batch = {
            let mut buffer = self.buffer.lock();
            buffer.append(record);
            if buffer.is_at_capacity() {
                Some(buffer.drain())
            } else {
                None
            }
        };

        if let Some(batch) = batch {
            self.dispatch(batch);
        }
    }

    /// Flush all buffered records now, regardless of the threshold
    pub fn flush(&self) {
        let batch = self.buffer.lock().drain();
        if !batch.is_empty() {
            self.dispatch(batch);
        }
    }

    /// Flush remaining records and stop the worker
    ///
    /// Dropping an un-closed logger performs the same shutdown.
    pub fn close(mut self) {
        self.shutdown();
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the log directory path (where the daily files are written)
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Get the number of currently buffered records
    pub fn buffered_count(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Apply the event policy and build the record, or `None` to drop
    fn to_record(&self, event: GameEvent) -> Option<LogRecord> {
        match event {
            GameEvent::BlockBreak {
                player,
                block,
                world,
                position,
            } => Some(LogRecord::new(player, EventKind::Break, block, 1, world, position)),

            GameEvent::BlockPlace {
                player,
                block,
                world,
                position,
            } => Some(LogRecord::new(player, EventKind::Place, block, 1, world, position)),

            GameEvent::ContainerOpen {
                player,
                container,
                world,
                position,
            } => {
                // Virtual inventories have no world location
                let position = position?;
                Some(LogRecord::new(
                    player,
                    EventKind::Open,
                    container,
                    1,
                    world,
                    position,
                ))
            }

            GameEvent::ContainerTake {
                player,
                container,
                item,
                click,
                world,
                position,
            } => {
                let position = position?;
                if !click.takes_items() {
                    return None;
                }
                let item = item?;
                if item.is_empty() {
                    return None;
                }
                Some(LogRecord::new(
                    player,
                    EventKind::Take { container },
                    item.label(),
                    item.amount,
                    world,
                    position,
                ))
            }

            GameEvent::EntityKill {
                player,
                entity,
                world,
                position,
            } => {
                if !self.config.tracked_entities.contains(&entity) {
                    tracing::debug!(entity = %entity, "untracked entity kill, skipped");
                    return None;
                }
                Some(LogRecord::new(player, EventKind::Kill, entity, 1, world, position))
            }

            GameEvent::PlayerDeath {
                player,
                killer,
                world,
                position,
            } => {
                let actor = killer.unwrap_or_else(|| ENVIRONMENT_ACTOR.to_string());
                tracing::info!(
                    victim = %player,
                    killer = %actor,
                    x = position.x,
                    y = position.y,
                    z = position.z,
                    "player death"
                );
                Some(LogRecord::new(actor, EventKind::Death, player, 1, world, position))
            }

            GameEvent::PlayerQuit {
                player,
                world,
                position,
            } => Some(LogRecord::new(
                player,
                EventKind::Quit,
                "PLAYER",
                1,
                world,
                position,
            )),
        }
    }

    /// Send a drained batch down the configured flush path
    fn dispatch(&self, batch: Vec<LogRecord>) {
        match &self.worker {
            Some(worker) => worker.submit(batch),
            None => self.journal.flush_cycle(&batch),
        }
    }

    /// Flush what remains and stop the worker; safe to call more than once
    fn shutdown(&mut self) {
        let batch = self.buffer.lock().drain();
        if !batch.is_empty() {
            self.dispatch(batch);
        }

        if let Some(worker) = self.worker.take() {
            worker.shutdown();
        }
    }
}

impl Drop for ActionLogger {
    fn drop(&mut self) {
        self.shutdown();
    }
}
