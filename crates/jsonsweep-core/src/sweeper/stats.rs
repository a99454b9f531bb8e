/// Sweep completion statistics — lightweight counters returned when
/// the walk finishes, since the sweep is synchronous and needs no
/// progress channel.
use std::time::Duration;

/// Running totals for a single sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepStats {
    /// Matches removed from disk.
    pub files_deleted: u64,
    /// Regular files visited, matching or not.
    pub files_seen: u64,
    /// Directories visited, the root included.
    pub dirs_seen: u64,
    /// Unreadable entries skipped during traversal.
    pub walk_errors: u64,
    /// Wall-clock time for the whole walk.
    pub duration: Duration,
}
