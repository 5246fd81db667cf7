//! Line schema selection
//!
//! The column set recorded per line changed across revisions of the format;
//! both remain writable so existing tooling can keep parsing old directories.

use serde::Deserialize;

/// Which columns a record line carries, and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSchema {
    /// `timestamp,actor,event,subject,x,y,z` — the current format (default)
    Current,

    /// `world,timestamp,actor,event,subject,quantity,x,y,z` — the original
    /// full column set, kept for compatibility with old log directories
    LegacyFull,
}

impl LineSchema {
    /// Number of comma-separated columns per line
    pub fn column_count(self) -> usize {
        match self {
            LineSchema::Current => 7,
            LineSchema::LegacyFull => 9,
        }
    }
}

impl Default for LineSchema {
    fn default() -> Self {
        LineSchema::Current
    }
}
