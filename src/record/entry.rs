//! Log record definitions
//!
//! One record describes one observed event, immutable once constructed.

use std::fmt;

use chrono::{DateTime, Local};

use crate::events::Position;
use super::LineSchema;

/// Timestamp format used inside record lines
const LINE_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// The kind of event a record describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Block broken
    Break,

    /// Block placed
    Place,

    /// Container opened
    Open,

    /// Items taken out of a container; the label carries the container kind,
    /// e.g. `TAKE_CHEST`
    Take { container: String },

    /// Tracked entity killed by a player
    Kill,

    /// Player died
    Death,

    /// Player disconnected
    Quit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Break => write!(f, "BREAK"),
            EventKind::Place => write!(f, "PLACE"),
            EventKind::Open => write!(f, "OPEN"),
            EventKind::Take { container } => write!(f, "TAKE_{}", container),
            EventKind::Kill => write!(f, "KILL"),
            EventKind::Death => write!(f, "DEATH"),
            EventKind::Quit => write!(f, "QUIT"),
        }
    }
}

/// A single structured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Local wall-clock time the event was recorded
    pub timestamp: DateTime<Local>,

    /// Who did it (player name, killer name, or `Environment`)
    pub actor: String,

    /// What happened
    pub kind: EventKind,

    /// What it happened to (block/item/container/entity/player name)
    pub subject: String,

    /// How many (1 for everything except container takes)
    pub quantity: u32,

    /// Dimension name the event happened in
    pub world: String,

    /// Block coordinates of the event
    pub position: Position,
}

impl LogRecord {
    /// Build a record stamped with the current local time
    pub fn new(
        actor: impl Into<String>,
        kind: EventKind,
        subject: impl Into<String>,
        quantity: u32,
        world: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            actor: actor.into(),
            kind,
            subject: subject.into(),
            quantity,
            world: world.into(),
            position,
        }
    }

    /// Serialize to one line (no trailing newline) in the given schema's
    /// column order
    pub fn format_line(&self, schema: LineSchema) -> String {
        let timestamp = self.timestamp.format(LINE_TIMESTAMP_FORMAT);
        match schema {
            LineSchema::Current => format!(
                "{},{},{},{},{},{},{}",
                timestamp,
                self.actor,
                self.kind,
                self.subject,
                self.position.x,
                self.position.y,
                self.position.z,
            ),
            LineSchema::LegacyFull => format!(
                "{},{},{},{},{},{},{},{},{}",
                self.world,
                timestamp,
                self.actor,
                self.kind,
                self.subject,
                self.quantity,
                self.position.x,
                self.position.y,
                self.position.z,
            ),
        }
    }
}
