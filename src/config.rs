//! Configuration for actionlog
//!
//! Centralized configuration with sensible defaults.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ActionLogError, Result};
use crate::record::LineSchema;

/// Entity kinds tracked by default when no allow-list is configured.
pub const DEFAULT_TRACKED_ENTITIES: [&str; 8] = [
    "VILLAGER", "WOLF", "CAT", "PARROT", "BEE", "AXOLOTL", "HORSE", "FROG",
];

/// Main configuration for an ActionLogger instance
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files.
    /// Internal structure:
    ///   {data_dir}/
    ///     └── ActionLogs/
    ///           ├── action_logs_2024-01-01.txt
    ///           └── action_logs_2024-01-02.txt
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Number of buffered records that triggers a flush.
    /// A capacity of 1 degenerates to write-through (every record flushed
    /// as soon as it is appended).
    pub buffer_capacity: usize,

    // -------------------------------------------------------------------------
    // Retention Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of daily log files kept on disk after a prune pass
    pub max_log_files: usize,

    // -------------------------------------------------------------------------
    // Journal Configuration
    // -------------------------------------------------------------------------
    /// Column set written for each record line
    pub schema: LineSchema,

    /// Whether flushes run on the caller's thread or a background worker
    pub flush_mode: FlushMode,

    // -------------------------------------------------------------------------
    // Event Policy
    // -------------------------------------------------------------------------
    /// Entity kinds whose kills are recorded; kills of any other kind are
    /// dropped at the recorder
    pub tracked_entities: HashSet<String>,
}

/// Flush execution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushMode {
    /// Write and prune on the caller's thread (original behavior, default)
    Inline,

    /// Hand drained batches to a dedicated worker over a bounded queue;
    /// a full queue drops the batch rather than blocking the caller
    Background { queue_capacity: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./actionlog_data"),
            buffer_capacity: 500,
            max_log_files: 15,
            schema: LineSchema::Current,
            flush_mode: FlushMode::Inline,
            tracked_entities: DEFAULT_TRACKED_ENTITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load a config from a TOML file
    ///
    /// Every field is optional; missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)
            .map_err(|e| ActionLogError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that would make a logger misbehave at runtime
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity == 0 {
            return Err(ActionLogError::Config(
                "buffer_capacity must be at least 1".to_string(),
            ));
        }
        if let FlushMode::Background { queue_capacity } = self.flush_mode {
            if queue_capacity == 0 {
                return Err(ActionLogError::Config(
                    "background queue_capacity must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the flush threshold (buffered record count)
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.buffer_capacity = capacity;
        self
    }

    /// Set the maximum number of retained log files
    pub fn max_log_files(mut self, count: usize) -> Self {
        self.config.max_log_files = count;
        self
    }

    /// Set the line schema
    pub fn schema(mut self, schema: LineSchema) -> Self {
        self.config.schema = schema;
        self
    }

    /// Set the flush mode
    pub fn flush_mode(mut self, mode: FlushMode) -> Self {
        self.config.flush_mode = mode;
        self
    }

    /// Replace the tracked-entity allow-list
    pub fn tracked_entities<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tracked_entities = kinds.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
