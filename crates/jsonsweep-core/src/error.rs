/// Typed failures for the sweeper engine.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::sweeper::sweep`].
///
/// Deletion is a one-shot, irreversible, user-confirmed action, so
/// there is no retry logic anywhere; callers decide whether to halt
/// or re-run.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The supplied root does not resolve to an existing directory.
    /// Nothing was deleted.
    #[error("not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// A matched file could not be removed (permission denied, vanished
    /// between listing and deletion, I/O error). The walk stops here;
    /// matches already deleted stay deleted.
    #[error("failed to delete {path}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
