//! Log Record Module
//!
//! Defines the structured record written for each observed event and its
//! on-disk line encoding.
//!
//! ## Line Format
//! One record per line, comma-separated, `\n` terminated. Two column sets
//! exist (see [`LineSchema`]):
//! ```text
//! current:     2024/03/01 14:02:11,Alice,BREAK,STONE,1,2,3
//! legacy_full: world,2024/03/01 14:02:11,Alice,BREAK,STONE,1,1,2,3
//! ```
//! Fields are not escaped; a subject label containing commas (enchanted
//! items) cannot be split back naively.

mod entry;
mod schema;

pub use entry::{EventKind, LogRecord};
pub use schema::LineSchema;
