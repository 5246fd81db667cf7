//! Error types for actionlog
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ActionLogError
pub type Result<T> = std::result::Result<T, ActionLogError>;

/// Unified error type for actionlog operations
#[derive(Debug, Error)]
pub enum ActionLogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Journal Errors
    // -------------------------------------------------------------------------
    #[error("Journal write failed: {0}")]
    Journal(String),

    #[error("Retention pruning failed: {0}")]
    Retention(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
