//! Retention pruning
//!
//! Bounds the number of on-disk log files: oldest-by-modification-time files
//! are deleted until at most `max_files` remain. Deletion is best-effort per
//! file; a file that cannot be removed is skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;

use super::naming;

/// Outcome of one prune pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Files matching the log naming pattern before the pass
    pub matched: usize,

    /// Files successfully deleted
    pub deleted: usize,

    /// Files that matched and were due for deletion but could not be removed
    pub failed: usize,
}

/// One candidate for deletion: mtime, file name, full path
struct Candidate {
    modified: SystemTime,
    name: String,
    path: PathBuf,
}

/// Run one retention pass over `dir`
///
/// Only file names matching `action_logs_<yyyy-mm-dd>.txt` are considered;
/// everything else in the directory is left alone. Candidates are ordered
/// ascending by (modification time, name) — the name tie-break keeps runs
/// with equal mtimes deterministic — and the oldest `matched - max_files`
/// are deleted.
pub(super) fn prune(dir: &Path, max_files: usize) -> Result<PruneStats> {
    let mut stats = PruneStats::default();

    // Nothing has been written yet
    if !dir.exists() {
        return Ok(stats);
    }

    let mut candidates: Vec<Candidate> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        if naming::parse_file_date(&name).is_none() {
            continue;
        }

        // A file we cannot stat is a file we do not delete
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "cannot stat log file, skipping");
                continue;
            }
        };

        candidates.push(Candidate {
            modified,
            name,
            path,
        });
    }

    stats.matched = candidates.len();
    if stats.matched <= max_files {
        return Ok(stats);
    }

    candidates.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.name.cmp(&b.name)));

    let excess = stats.matched - max_files;
    for candidate in candidates.into_iter().take(excess) {
        match fs::remove_file(&candidate.path) {
            Ok(()) => {
                stats.deleted += 1;
                tracing::debug!(file = %candidate.name, "pruned old log file");
            }
            Err(e) => {
                stats.failed += 1;
                tracing::warn!(file = %candidate.name, error = %e, "failed to delete old log file");
            }
        }
    }

    Ok(stats)
}
