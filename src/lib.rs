//! # actionlog
//!
//! A buffered game-action audit log with:
//! - One structured text record per observed event
//! - Bounded in-memory buffering with threshold-triggered flushes
//! - Daily log files with count-based retention pruning
//! - Optional background flushing off the event path
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Host Engine                            │
//! │               (event dispatch, one GameEvent per event)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     ActionLogger                             │
//! │          (event policy, flush trigger, lifecycle)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  LogBuffer  │          │ FlushWorker │ (background mode)
//!   │  (bounded)  │          │ (bounded ch)│
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌─────────────┐
//!              │   Journal   │
//!              │ daily files │
//!              │ + retention │
//!              └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod events;
pub mod record;
pub mod buffer;
pub mod journal;
pub mod recorder;

mod worker;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ActionLogError, Result};
pub use config::{Config, FlushMode};
pub use events::{ClickKind, Enchantment, GameEvent, ItemStack, Position};
pub use record::{EventKind, LineSchema, LogRecord};
pub use recorder::ActionLogger;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of actionlog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
