//! Log file naming
//!
//! Fixed naming pattern: `action_logs_<yyyy-mm-dd>.txt`. Retention only ever
//! touches files whose names round-trip through [`parse_file_date`].

use chrono::NaiveDate;

/// Prefix of every log file name
pub const FILE_PREFIX: &str = "action_logs_";

/// Extension of every log file name (dot included)
pub const FILE_EXTENSION: &str = ".txt";

/// Date format embedded in file names
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// File name for the given date: `action_logs_2024-02-29.txt`
pub fn file_name_for(date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        FILE_PREFIX,
        date.format(FILE_DATE_FORMAT),
        FILE_EXTENSION
    )
}

/// Parse the date out of a log file name
///
/// `"action_logs_2024-02-29.txt"` → `Some(2024-02-29)`; anything that is not
/// prefix + valid date + extension → `None`.
pub fn parse_file_date(name: &str) -> Option<NaiveDate> {
    let middle = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_EXTENSION)?;
    NaiveDate::parse_from_str(middle, FILE_DATE_FORMAT).ok()
}
