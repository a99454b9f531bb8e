/// Sweeper module — serial top-down deletion walk.
///
/// Walks the tree rooted at a given directory in pre-order and deletes
/// every regular file whose base name ends with the configured suffix,
/// one at a time, as it is encountered. The walk is strictly
/// sequential with no suspension points: once started it runs to the
/// end of the tree or to the first failed deletion.
///
/// The filesystem is mutated in place with no locking or transactional
/// guarantee. A concurrent external process adding or removing files
/// during the walk sees a best-effort snapshot, not a point-in-time view.
pub mod stats;

pub use stats::SweepStats;

use crate::error::SweepError;

use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Whether `name` ends with `suffix`.
///
/// A plain, case-sensitive suffix comparison on the base name — no
/// globbing, no case-folding, no path components.
fn matches_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}

/// Sweep the tree rooted at `root`, deleting every regular file whose
/// base name ends with `suffix`.
///
/// `on_delete` is invoked with the full path of each match immediately
/// before its removal is attempted, so frontends can report the file
/// even when the removal then fails.
///
/// Sibling order within a directory is unspecified. Unreadable
/// entries are logged and skipped; a failed deletion halts the walk
/// with [`SweepError::Delete`]. Returns completion counters on success.
pub fn sweep<F>(root: &Path, suffix: &str, mut on_delete: F) -> Result<SweepStats, SweepError>
where
    F: FnMut(&Path),
{
    if !root.is_dir() {
        return Err(SweepError::InvalidRoot(root.to_path_buf()));
    }

    info!(
        "Starting sweep of {} for '{suffix}' files",
        root.display()
    );
    let start = Instant::now();
    let mut stats = SweepStats::default();

    // Serial traversal — the walk is single-threaded by contract, so
    // the rayon pool jwalk would normally spin up is never created.
    // Sorting is left off: sibling order is unspecified.
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically access-denied on a directory read. Only a
                // failed deletion is fatal; the walk moves on.
                stats.walk_errors += 1;
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            stats.dirs_seen += 1;
            continue;
        }
        if !file_type.is_file() {
            // Symlinks, sockets, devices: never deleted.
            continue;
        }
        stats.files_seen += 1;

        let name = entry.file_name().to_string_lossy();
        if !matches_suffix(&name, suffix) {
            continue;
        }

        let path = entry.path();
        on_delete(&path);
        fs::remove_file(&path).map_err(|source| SweepError::Delete {
            path: path.clone(),
            source,
        })?;
        stats.files_deleted += 1;
    }

    stats.duration = start.elapsed();
    debug!(
        "Sweep complete: {} deleted, {} files and {} dirs seen, {} walk errors in {:?}",
        stats.files_deleted, stats.files_seen, stats.dirs_seen, stats.walk_errors, stats.duration
    );
    Ok(stats)
}
